//! Path: native/vampire_core/src/world/mod.rs
//! Summary: ワールド型（PlayerState, Human, Hunter, PhaseClock, FrameEvent, GameSession）

mod frame_event;
mod human;
mod hunter;
mod phase;
mod player;
mod session;

pub use frame_event::{DamageSource, FrameEvent};
pub use human::Human;
pub use hunter::{Hunter, HunterMode};
pub use phase::{Phase, PhaseClock};
pub use player::{Form, PlayerState, VitalsReport};
pub use session::{GameSession, GameState};
