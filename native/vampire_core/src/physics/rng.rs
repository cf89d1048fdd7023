//! Path: native/vampire_core/src/physics/rng.rs
//! Summary: セッション専用のシード付き乱数（ChaCha8）とスポーン用ヘルパー

use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// セッションごとに 1 つ持つ決定論的 RNG
#[derive(Clone, Debug)]
pub struct SessionRng(ChaCha8Rng);

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// [0, 2π) の一様な角度
    pub fn angle(&mut self) -> f32 {
        self.0.gen_range(0.0..std::f32::consts::TAU)
    }

    /// [lo, hi] の一様乱数
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        self.0.gen_range(lo..=hi)
    }

    /// ワールド矩形を `inset` だけ内側に縮めた領域内のランダムな点
    pub fn point_in(&mut self, inset: f32) -> (f32, f32) {
        (
            self.range(inset, WORLD_WIDTH - inset),
            self.range(inset, WORLD_HEIGHT - inset),
        )
    }
}
