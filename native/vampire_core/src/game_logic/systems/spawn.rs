//! Path: native/vampire_core/src/game_logic/systems/spawn.rs
//! Summary: 人間・ハンターをランダム位置にスポーン（開始時・フェーズ切り替え・吸血の補充）

use crate::constants::{HUMAN_SPAWN_MARGIN, HUNTER_SPAWN_MARGIN};
use crate::world::{GameSession, Human, Hunter};

/// 人間を `count` 体、末尾に追加
pub(crate) fn spawn_humans(w: &mut GameSession, count: usize) {
    for _ in 0..count {
        let (x, y) = w.rng.point_in(HUMAN_SPAWN_MARGIN);
        let human = Human::spawn(&mut w.rng, x, y);
        w.humans.push(human);
    }
}

/// ハンターを `count` 体、末尾に追加（速度・索敵範囲は毎 tick フェーズから決まる）
pub(crate) fn spawn_hunters(w: &mut GameSession, count: usize) {
    for _ in 0..count {
        let (x, y) = w.rng.point_in(HUNTER_SPAWN_MARGIN);
        w.hunters.push(Hunter::new(x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};

    #[test]
    fn spawns_inside_margin() {
        let mut w = GameSession::new(5);
        w.humans.clear();
        w.hunters.clear();
        spawn_humans(&mut w, 50);
        spawn_hunters(&mut w, 50);
        assert_eq!(w.humans.len(), 50);
        assert_eq!(w.hunters.len(), 50);
        for h in &w.humans {
            assert!(h.body.x >= 50.0 && h.body.x <= WORLD_WIDTH - 50.0);
            assert!(h.body.y >= 50.0 && h.body.y <= WORLD_HEIGHT - 50.0);
        }
        assert!(w.hunters.iter().all(|h| (h.health - 30.0).abs() < 1e-4));
    }
}
