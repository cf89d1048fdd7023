//! Path: native/vampire_core/src/world/frame_event.rs
//! Summary: tick 内で発生したゲームイベント（描画・音響側が毎 tick drain する）

use super::{Form, Phase};
use serde::Serialize;

/// プレイヤーが受けたダメージの発生源
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DamageSource {
    Sunlight,
    Starvation,
    Hunter,
}

/// tick 内で発生したゲームイベント
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum FrameEvent {
    HumanFed      { score_gain: u32 },
    HunterSlain   { score_gain: u32 },
    PlayerDamaged { source: DamageSource, amount: f32 },
    FormChanged   { form: Form },
    PhaseChanged  { phase: Phase },
    PlayerDied    { survival_seconds: u64, score: u32 },
}
