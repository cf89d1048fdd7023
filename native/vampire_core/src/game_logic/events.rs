//! Path: native/vampire_core/src/game_logic/events.rs
//! Summary: フレームイベントの drain（描画・音響側で毎 tick 取り出す）

use crate::world::{FrameEvent, GameSession};

pub(crate) fn drain_frame_events(w: &mut GameSession) -> Vec<FrameEvent> {
    w.frame_events.drain(..).collect()
}
