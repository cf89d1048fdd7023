//! ランダム入力列に対する不変条件（資源の範囲・境界内・ハンターの索敵）

use proptest::prelude::*;
use vampire_core::constants::{
    PLAYER_MAX_BLOOD, PLAYER_MAX_ENERGY, PLAYER_MAX_HEALTH, WORLD_HEIGHT, WORLD_WIDTH,
};
use vampire_core::entity_params::PhaseParams;
use vampire_core::{GameSession, HunterMode, MoveIntent, TickInput};

fn tick_input() -> impl Strategy<Value = TickInput> {
    (any::<[bool; 4]>(), any::<bool>(), any::<bool>()).prop_map(|(dirs, bat_form, feed)| TickInput {
        movement: MoveIntent { up: dirs[0], down: dirs[1], left: dirs[2], right: dirs[3] },
        bat_form,
        feed,
        start: false,
    })
}

fn inside(x: f32, y: f32, r: f32) -> bool {
    x >= r && x <= WORLD_WIDTH - r && y >= r && y <= WORLD_HEIGHT - r
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn resources_stay_clamped(seed in any::<u64>(), inputs in prop::collection::vec(tick_input(), 1..400)) {
        let mut w = GameSession::new(seed);
        w.start();
        for input in &inputs {
            w.step(input);
            let p = &w.player;
            prop_assert!(p.health >= 0.0 && p.health <= PLAYER_MAX_HEALTH);
            prop_assert!(p.blood >= 0.0 && p.blood <= PLAYER_MAX_BLOOD);
            prop_assert!(p.energy >= 0.0 && p.energy <= PLAYER_MAX_ENERGY);
        }
    }

    #[test]
    fn entities_stay_in_world(seed in any::<u64>(), inputs in prop::collection::vec(tick_input(), 1..400)) {
        let mut w = GameSession::new(seed);
        w.start();
        for input in &inputs {
            w.step(input);
            prop_assert!(inside(w.player.x(), w.player.y(), w.player.body.radius));
            for h in &w.humans {
                prop_assert!(inside(h.body.x, h.body.y, h.body.radius));
            }
            for h in &w.hunters {
                prop_assert!(inside(h.body.x, h.body.y, h.body.radius));
            }
        }
    }

    #[test]
    fn pursuit_only_within_detection(seed in any::<u64>(), inputs in prop::collection::vec(tick_input(), 1..200)) {
        let mut w = GameSession::new(seed);
        w.start();
        for input in &inputs {
            if w.is_dead() {
                break;
            }
            // 更新直前の位置で索敵するので、更新前の状態を控えておく
            let before: Vec<_> = w.hunters.iter().map(|h| (h.body.x, h.body.y)).collect();
            let detection = PhaseParams::get(w.clock.phase).hunter_detection;
            let count = w.hunters.len();
            w.step(input);
            if w.hunters.len() != count || w.is_dead() {
                continue;
            }
            let (px, py) = (w.player.x(), w.player.y());
            for (h, (hx, hy)) in w.hunters.iter().zip(before) {
                let (dx, dy) = (hx - px, hy - py);
                let d = (dx * dx + dy * dy).sqrt();
                match h.mode {
                    HunterMode::Pursuing => prop_assert!(d < detection),
                    HunterMode::Patrolling => prop_assert!(d >= detection),
                }
            }
        }
    }
}
