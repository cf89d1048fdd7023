//! Path: native/vampire_core/src/game_logic/step.rs
//! Summary: 1 tick のシミュレーションステップ（更新順序の固定）
//!
//! 順序: プレイヤー → 人間 → ハンター → 接触・吸血 → 昼夜タイマー。
//! プレイヤーが倒れた tick はその時点で打ち切る。

use super::systems::contact::resolve_hunter_contacts;
use super::systems::feeding::try_feed;
use super::systems::phase_cycle::advance_phase;
use crate::input::TickInput;
use crate::world::{DamageSource, Form, FrameEvent, GameSession, GameState};

pub(crate) fn step_inner(w: &mut GameSession, input: &TickInput) {
    match w.state {
        GameState::Menu | GameState::GameOver => {
            if input.start {
                w.start();
            }
            return;
        }
        GameState::Playing => {}
    }

    // trace にしておき、RUST_LOG=trace のときだけ毎 tick 出力
    log::trace!(
        "step: tick={} phase={:?} health={:.1} blood={:.1}",
        w.clock.total_ticks,
        w.clock.phase,
        w.player.health,
        w.player.blood
    );

    // ── 1. プレイヤー（変身 → 移動・資源） ─────────────────────
    let was_bat = w.player.form == Form::Bat;
    if input.bat_form && w.player.try_bat_form() && !was_bat {
        w.frame_events.push(FrameEvent::FormChanged { form: Form::Bat });
        log::debug!("bat form: energy={:.1} blood={:.1}", w.player.energy, w.player.blood);
    }

    let report = w.player.update(input.movement, w.clock.phase);
    if report.sun_damage > 0.0 {
        w.frame_events.push(FrameEvent::PlayerDamaged {
            source: DamageSource::Sunlight,
            amount: report.sun_damage,
        });
    }
    if report.starvation_damage > 0.0 {
        w.frame_events.push(FrameEvent::PlayerDamaged {
            source: DamageSource::Starvation,
            amount: report.starvation_damage,
        });
    }
    if report.reverted {
        w.frame_events.push(FrameEvent::FormChanged { form: Form::Human });
        log::debug!("bat form expired");
    }
    if check_death(w) {
        return;
    }

    // ── 2. 人間 ──────────────────────────────────────────────
    for human in w.humans.iter_mut() {
        human.update(&mut w.rng);
    }

    // ── 3. ハンター（移動後のプレイヤー位置を値で渡す） ─────────
    let (px, py) = (w.player.x(), w.player.y());
    let phase = w.clock.phase;
    for hunter in w.hunters.iter_mut() {
        hunter.update(px, py, phase, &mut w.rng);
    }

    // ── 4. 接触・吸血 ─────────────────────────────────────────
    resolve_hunter_contacts(w);
    if check_death(w) {
        return;
    }
    if input.feed {
        try_feed(w);
    }

    // ── 5. 昼夜タイマー（入れ替えは次の tick から効く） ────────
    advance_phase(w);
}

/// HP が尽きていればゲームオーバーにする
fn check_death(w: &mut GameSession) -> bool {
    if !w.player.is_dead() {
        return false;
    }
    w.state = GameState::GameOver;
    let survival_seconds = w.clock.survival_seconds();
    w.frame_events.push(FrameEvent::PlayerDied { survival_seconds, score: w.score });
    log::info!("player died: survived={}s score={}", survival_seconds, w.score);
    true
}
