//! Path: native/vampire_core/src/lib.rs
//! Summary: ヴァンパイアサバイバルのシミュレーションコア（資源・変身・ハンター AI・昼夜・接触判定）

pub mod constants;
pub mod entity_params;
mod game_logic;
pub mod input;
pub mod physics;
pub mod snapshot;
pub mod world;

pub use input::{MoveIntent, TickInput};
pub use snapshot::SessionSnapshot;
pub use world::{
    DamageSource, Form, FrameEvent, GameSession, GameState, Human, Hunter, HunterMode, Phase,
    PhaseClock, PlayerState,
};
