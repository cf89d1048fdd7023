//! Path: native/vampire_core/src/game_logic/systems/feeding.rs
//! Summary: 吸血（範囲内の最初の人間から吸い、補充スポーン・スコア加算）

use super::spawn::spawn_humans;
use crate::constants::{FEED_BLOOD_AMOUNT, FEED_RANGE, SCORE_FEED};
use crate::world::{FrameEvent, GameSession};

/// 範囲内の最初の 1 体から吸血する。範囲内に誰もいなければ false
pub(crate) fn try_feed(w: &mut GameSession) -> bool {
    let (px, py) = (w.player.x(), w.player.y());
    let Some(idx) = w.humans
        .iter()
        .position(|h| h.body.distance_to(px, py) < FEED_RANGE)
    else {
        return false;
    };

    w.player.feed(FEED_BLOOD_AMOUNT);
    w.humans.remove(idx);
    spawn_humans(w, 1);
    w.score += SCORE_FEED;
    w.frame_events.push(FrameEvent::HumanFed { score_gain: SCORE_FEED });
    log::debug!("fed: blood={:.1} health={:.1} score={}", w.player.blood, w.player.health, w.score);
    true
}
