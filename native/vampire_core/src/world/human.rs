//! Path: native/vampire_core/src/world/human.rs
//! Summary: 吸血対象の人間（ランダムウォーク + 壁反射）

use crate::constants::{HUMAN_RADIUS, HUMAN_SPEED, HUMAN_TURN_INTERVAL};
use crate::physics::body::Body;
use crate::physics::rng::SessionRng;
use std::f32::consts::PI;

/// 人間 1 体
#[derive(Clone, Debug, PartialEq)]
pub struct Human {
    pub body:        Body,
    pub speed:       f32,
    /// 進行方向（ラジアン）
    pub direction:   f32,
    /// 方向転換までのカウンタ（HUMAN_TURN_INTERVAL を超えたら再抽選）
    pub turn_timer:  u32,
}

impl Human {
    pub fn new(x: f32, y: f32, direction: f32) -> Self {
        Self {
            body: Body::new(x, y, HUMAN_RADIUS),
            speed: HUMAN_SPEED,
            direction,
            turn_timer: 0,
        }
    }

    pub fn spawn(rng: &mut SessionRng, x: f32, y: f32) -> Self {
        Self::new(x, y, rng.angle())
    }

    pub fn update(&mut self, rng: &mut SessionRng) {
        self.turn_timer += 1;
        if self.turn_timer > HUMAN_TURN_INTERVAL {
            self.direction = rng.angle();
            self.turn_timer = 0;
        }

        self.body.x += self.direction.cos() * self.speed;
        self.body.y += self.direction.sin() * self.speed;

        // 軸ごとに独立して反射してからクランプ
        if self.body.outside_x() {
            self.direction = PI - self.direction;
        }
        if self.body.outside_y() {
            self.direction = -self.direction;
        }
        self.body.clamp_to_world();
    }
}
