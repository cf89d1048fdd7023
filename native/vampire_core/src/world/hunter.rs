//! Path: native/vampire_core/src/world/hunter.rs
//! Summary: ハンター（巡回 / 追跡の状態機械・昼の日光回避・HP）

use super::Phase;
use crate::constants::{
    HUNTER_MAX_HEALTH, HUNTER_PATROL_INSET, HUNTER_PATROL_INTERVAL, HUNTER_RADIUS,
    HUNTER_SAFE_X, HUNTER_SUN_RETREAT_X,
};
use crate::entity_params::PhaseParams;
use crate::physics::body::Body;
use crate::physics::rng::SessionRng;
use serde::Serialize;

/// ハンターの行動モード
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum HunterMode {
    #[default]
    Patrolling,
    Pursuing,
}

/// ハンター 1 体
#[derive(Clone, Debug, PartialEq)]
pub struct Hunter {
    pub body:          Body,
    pub mode:          HunterMode,
    pub patrol_target: (f32, f32),
    /// 巡回中のみ進むカウンタ。HUNTER_PATROL_INTERVAL で目標を再抽選
    pub patrol_timer:  u32,
    pub health:        f32,
}

impl Hunter {
    /// 巡回目標は自分の位置から始まる
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body:          Body::new(x, y, HUNTER_RADIUS),
            mode:          HunterMode::Patrolling,
            patrol_target: (x, y),
            patrol_timer:  0,
            health:        HUNTER_MAX_HEALTH,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn health_ratio(&self) -> f32 {
        (self.health / HUNTER_MAX_HEALTH).clamp(0.0, 1.0)
    }

    /// 索敵・目標選択・移動を 1 tick 分進める。プレイヤー座標は値で受け取る
    pub fn update(&mut self, player_x: f32, player_y: f32, phase: Phase, rng: &mut SessionRng) {
        let params = PhaseParams::get(phase);

        let (mut tx, mut ty) = if self.body.distance_to(player_x, player_y) < params.hunter_detection {
            self.mode = HunterMode::Pursuing;
            (player_x, player_y)
        } else {
            self.mode = HunterMode::Patrolling;
            self.patrol_timer += 1;
            if self.patrol_timer >= HUNTER_PATROL_INTERVAL {
                self.patrol_timer = 0;
                self.patrol_target = rng.point_in(HUNTER_PATROL_INSET);
            }
            self.patrol_target
        };

        // 昼は追跡・巡回より日光からの退避を優先する
        if phase == Phase::Day && self.body.x < HUNTER_SUN_RETREAT_X {
            tx = HUNTER_SAFE_X;
            ty = self.body.y;
        }

        self.body.step_toward(tx, ty, params.hunter_speed);
        self.body.clamp_to_world();
    }

    /// 接触ダメージを受ける。これで倒れたら true
    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.health -= amount;
        self.is_dead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pursues_player_within_detection() {
        let mut rng = SessionRng::new(1);
        let mut h = Hunter::new(800.0, 350.0);
        h.update(650.0, 350.0, Phase::Day, &mut rng);
        assert_eq!(h.mode, HunterMode::Pursuing);
        assert!((h.body.x - 797.2).abs() < 1e-3);
    }

    #[test]
    fn night_detection_is_wider() {
        let mut rng = SessionRng::new(1);
        let mut day = Hunter::new(900.0, 350.0);
        day.update(600.0, 350.0, Phase::Day, &mut rng);
        assert_eq!(day.mode, HunterMode::Patrolling);

        let mut night = Hunter::new(900.0, 350.0);
        night.update(600.0, 350.0, Phase::Night, &mut rng);
        assert_eq!(night.mode, HunterMode::Pursuing);
        assert!((night.body.x - 896.5).abs() < 1e-3);
    }

    #[test]
    fn patrol_target_repicked_every_interval() {
        let mut rng = SessionRng::new(9);
        let mut h = Hunter::new(900.0, 600.0);
        let start = h.patrol_target;
        for _ in 0..HUNTER_PATROL_INTERVAL - 1 {
            h.update(10.0, 10.0, Phase::Night, &mut rng);
            assert_eq!(h.patrol_target, start);
        }
        h.update(10.0, 10.0, Phase::Night, &mut rng);
        assert_ne!(h.patrol_target, start);
        assert_eq!(h.patrol_timer, 0);
        let (px, py) = h.patrol_target;
        assert!(px >= HUNTER_PATROL_INSET && px <= 1000.0 - HUNTER_PATROL_INSET);
        assert!(py >= HUNTER_PATROL_INSET && py <= 700.0 - HUNTER_PATROL_INSET);
    }

    #[test]
    fn retreats_from_sunlight_even_when_pursuing() {
        let mut rng = SessionRng::new(1);
        let mut h = Hunter::new(300.0, 200.0);
        // プレイヤーは左側（さらに日光の奥）
        h.update(250.0, 200.0, Phase::Day, &mut rng);
        assert_eq!(h.mode, HunterMode::Pursuing);
        assert!((h.body.x - 302.8).abs() < 1e-3);
        assert!((h.body.y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn no_retreat_at_night() {
        let mut rng = SessionRng::new(1);
        let mut h = Hunter::new(300.0, 200.0);
        h.update(250.0, 200.0, Phase::Night, &mut rng);
        assert!((h.body.x - 296.5).abs() < 1e-3);
    }

    #[test]
    fn dies_when_health_runs_out() {
        let mut h = Hunter::new(0.0, 0.0);
        assert!(!h.take_damage(29.5));
        assert!(h.take_damage(0.5));
        assert_eq!(h.health_ratio(), 0.0);
    }
}
