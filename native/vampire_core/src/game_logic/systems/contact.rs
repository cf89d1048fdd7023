//! Path: native/vampire_core/src/game_logic/systems/contact.rs
//! Summary: プレイヤー vs ハンターの接触ダメージ交換・撃破・スコア

use crate::constants::{
    BAT_CONTACT_DAMAGE, HUMAN_CONTACT_DAMAGE, HUNTER_CONTACT_DAMAGE, SCORE_HUNTER_KILL,
};
use crate::world::{DamageSource, Form, FrameEvent, GameSession};

/// 接触中のハンターとダメージを交換する。各ハンターは 1 tick に 1 回だけ判定される
///
/// 倒れたハンターは走査後にまとめて取り除く。プレイヤーが倒れた時点で走査を打ち切る。
pub(crate) fn resolve_hunter_contacts(w: &mut GameSession) {
    let dealt = match w.player.form {
        Form::Bat => BAT_CONTACT_DAMAGE,
        Form::Human => HUMAN_CONTACT_DAMAGE,
    };

    let mut slain = 0u32;
    for hunter in w.hunters.iter_mut() {
        if !hunter.body.overlaps(&w.player.body) {
            continue;
        }
        if hunter.take_damage(dealt) {
            slain += 1;
        }
        let taken = w.player.take_damage(HUNTER_CONTACT_DAMAGE);
        w.frame_events.push(FrameEvent::PlayerDamaged { source: DamageSource::Hunter, amount: taken });
        if w.player.is_dead() {
            break;
        }
    }

    if slain == 0 {
        return;
    }
    w.hunters.retain(|h| !h.is_dead());
    for _ in 0..slain {
        w.score += SCORE_HUNTER_KILL;
        w.frame_events.push(FrameEvent::HunterSlain { score_gain: SCORE_HUNTER_KILL });
    }
    log::debug!("hunters slain: {} (remaining={}, score={})", slain, w.hunters.len(), w.score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Hunter;

    fn session_with_hunters(offsets: &[f32]) -> GameSession {
        let mut w = GameSession::new(1);
        let (px, py) = (w.player.x(), w.player.y());
        w.hunters = offsets.iter().map(|&dx| Hunter::new(px + dx, py)).collect();
        w
    }

    #[test]
    fn human_form_contact_exchanges_half_damage() {
        let mut w = session_with_hunters(&[1.0]);
        resolve_hunter_contacts(&mut w);
        assert_eq!(w.hunters.len(), 1);
        assert!((w.hunters[0].health - 29.5).abs() < 1e-4);
        assert!((w.player.health - 99.5).abs() < 1e-4);
        assert_eq!(w.score, 0);
    }

    #[test]
    fn bat_form_hits_harder() {
        let mut w = session_with_hunters(&[1.0]);
        w.player.try_bat_form();
        resolve_hunter_contacts(&mut w);
        assert!((w.hunters[0].health - 28.0).abs() < 1e-4);
        assert!((w.player.health - 99.5).abs() < 1e-4);
    }

    #[test]
    fn each_colliding_hunter_hits_once() {
        let mut w = session_with_hunters(&[1.0, -1.0, 100.0]);
        resolve_hunter_contacts(&mut w);
        assert!((w.player.health - 99.0).abs() < 1e-4);
        assert!((w.hunters[2].health - 30.0).abs() < 1e-4);
    }

    #[test]
    fn slain_hunter_removed_and_scored_once() {
        let mut w = session_with_hunters(&[1.0, 2.0]);
        w.hunters[0].health = 1.0;
        w.player.try_bat_form();
        resolve_hunter_contacts(&mut w);
        assert_eq!(w.hunters.len(), 1);
        assert_eq!(w.score, SCORE_HUNTER_KILL);
        assert!((w.hunters[0].health - 28.0).abs() < 1e-4);
        let slain = w.frame_events
            .iter()
            .filter(|e| matches!(e, FrameEvent::HunterSlain { .. }))
            .count();
        assert_eq!(slain, 1);

        resolve_hunter_contacts(&mut w);
        assert_eq!(w.score, SCORE_HUNTER_KILL);
    }

    #[test]
    fn stops_after_player_dies() {
        let mut w = session_with_hunters(&[1.0, 2.0, 3.0]);
        w.player.health = 0.5;
        resolve_hunter_contacts(&mut w);
        assert!(w.player.is_dead());
        assert!((w.hunters[0].health - 29.5).abs() < 1e-4);
        assert!((w.hunters[1].health - 30.0).abs() < 1e-4);
        assert!((w.hunters[2].health - 30.0).abs() < 1e-4);
    }
}
