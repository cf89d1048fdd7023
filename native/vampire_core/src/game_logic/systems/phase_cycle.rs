//! Path: native/vampire_core/src/game_logic/systems/phase_cycle.rs
//! Summary: 昼夜タイマーを進め、切り替え時に人間・ハンターを入れ替える

use super::spawn::{spawn_humans, spawn_hunters};
use crate::entity_params::PhaseParams;
use crate::world::{FrameEvent, GameSession, Phase};

/// フェーズを 1 tick 進める。切り替わった tick にだけ個体数をリセットする
///
/// - 夜へ: 人間は先頭から残すだけ（新規スポーンなし）、ハンターは夜用に総入れ替え
/// - 昼へ: 人間もハンターも総入れ替え
pub(crate) fn advance_phase(w: &mut GameSession) {
    let Some(phase) = w.clock.advance() else {
        return;
    };
    let params = PhaseParams::get(phase);

    match phase {
        Phase::Night => {
            w.humans.truncate(params.human_count);
        }
        Phase::Day => {
            w.humans.clear();
            spawn_humans(w, params.human_count);
        }
    }
    w.hunters.clear();
    spawn_hunters(w, params.hunter_count);

    w.frame_events.push(FrameEvent::PhaseChanged { phase });
    log::info!(
        "phase -> {:?} at {}s (humans={}, hunters={})",
        phase,
        w.clock.survival_seconds(),
        w.humans.len(),
        w.hunters.len()
    );
}
