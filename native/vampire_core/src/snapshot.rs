//! Path: native/vampire_core/src/snapshot.rs
//! Summary: GameSession から描画・HUD 用の読み取り専用スナップショットを構築
//!
//! 描画側はセッションへの参照を持ち越さず、毎 tick このコピーだけを受け取る。

use crate::constants::{
    PLAYER_MAX_BLOOD, PLAYER_MAX_ENERGY, PLAYER_MAX_HEALTH, SUNLIGHT_BOUNDARY_X, WORLD_HEIGHT,
};
use crate::world::{Form, GameSession, GameState, HunterMode, Phase};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerView {
    pub x:          f32,
    pub y:          f32,
    pub radius:     f32,
    pub form:       Form,
    pub bat_ticks:  u32,
    pub blood:      f32,
    pub max_blood:  f32,
    pub energy:     f32,
    pub max_energy: f32,
    pub health:     f32,
    pub max_health: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PhaseView {
    pub phase:          Phase,
    pub ticks_in_phase: u32,
    pub total_ticks:    u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HunterView {
    pub x:            f32,
    pub y:            f32,
    pub health:       f32,
    /// ダメージ色分け用（1.0 = 無傷）
    pub health_ratio: f32,
    pub mode:         HunterMode,
}

/// 1 tick 分の描画用データ
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub state:            GameState,
    pub player:           PlayerView,
    pub phase:            PhaseView,
    /// 人間の座標（挿入順）
    pub humans:           Vec<(f32, f32)>,
    pub hunters:          Vec<HunterView>,
    pub score:            u32,
    pub survival_seconds: u64,
    pub dead:             bool,
    /// 昼のみ: 日光ゾーン矩形 (x, y, w, h)
    pub sunlight_zone:    Option<(f32, f32, f32, f32)>,
}

pub fn build_snapshot(w: &GameSession) -> SessionSnapshot {
    let p = &w.player;
    let player = PlayerView {
        x:          p.x(),
        y:          p.y(),
        radius:     p.body.radius,
        form:       p.form,
        bat_ticks:  p.bat_ticks,
        blood:      p.blood,
        max_blood:  PLAYER_MAX_BLOOD,
        energy:     p.energy,
        max_energy: PLAYER_MAX_ENERGY,
        health:     p.health,
        max_health: PLAYER_MAX_HEALTH,
    };

    let hunters = w.hunters
        .iter()
        .map(|h| HunterView {
            x:            h.body.x,
            y:            h.body.y,
            health:       h.health,
            health_ratio: h.health_ratio(),
            mode:         h.mode,
        })
        .collect();

    let sunlight_zone = match w.clock.phase {
        Phase::Day => Some((0.0, 0.0, SUNLIGHT_BOUNDARY_X, WORLD_HEIGHT)),
        Phase::Night => None,
    };

    SessionSnapshot {
        state: w.state,
        player,
        phase: PhaseView {
            phase:          w.clock.phase,
            ticks_in_phase: w.clock.ticks_in_phase,
            total_ticks:    w.clock.total_ticks,
        },
        humans: w.humans.iter().map(|h| (h.body.x, h.body.y)).collect(),
        hunters,
        score: w.score,
        survival_seconds: w.survival_seconds(),
        dead: w.is_dead(),
        sunlight_zone,
    }
}
