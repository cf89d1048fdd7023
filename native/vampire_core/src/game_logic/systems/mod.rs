//! Path: native/vampire_core/src/game_logic/systems/mod.rs
//! Summary: tick 内の各システム（スポーン・接触・吸血・昼夜）

pub(crate) mod contact;
pub(crate) mod feeding;
pub(crate) mod phase_cycle;
pub(crate) mod spawn;
