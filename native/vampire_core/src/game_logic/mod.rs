//! Path: native/vampire_core/src/game_logic/mod.rs
//! Summary: シミュレーションステップ・各システム・イベント drain

mod events;
mod step;
pub(crate) mod systems;

pub(crate) use events::drain_frame_events;
pub(crate) use step::step_inner;
pub(crate) use systems::spawn::{spawn_humans, spawn_hunters};
