//! Path: native/vampire_core/src/world/phase.rs
//! Summary: 昼夜フェーズと tick カウンタ（PhaseClock）

use crate::constants::{PHASE_DURATION_TICKS, TICKS_PER_SECOND};
use serde::Serialize;

/// ワールド全体の時間帯
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Phase {
    #[default]
    Day,
    Night,
}

impl Phase {
    pub fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }
}

/// フェーズ経過 tick と通算 tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseClock {
    pub phase:          Phase,
    pub ticks_in_phase: u32,
    pub duration:       u32,
    pub total_ticks:    u64,
}

impl PhaseClock {
    pub fn new() -> Self {
        Self {
            phase:          Phase::Day,
            ticks_in_phase: 0,
            duration:       PHASE_DURATION_TICKS,
            total_ticks:    0,
        }
    }

    /// 1 tick 進める。フェーズが切り替わった場合は新しいフェーズを返す
    ///
    /// `ticks_in_phase` は `duration` に達した時点で 0 に戻るので、
    /// 呼び出し後に `duration` を超えていることはない。
    pub fn advance(&mut self) -> Option<Phase> {
        self.ticks_in_phase += 1;
        self.total_ticks += 1;
        if self.ticks_in_phase < self.duration {
            return None;
        }
        self.ticks_in_phase = 0;
        self.phase = self.phase.toggled();
        Some(self.phase)
    }

    pub fn survival_seconds(&self) -> u64 {
        self.total_ticks / TICKS_PER_SECOND
    }
}

impl Default for PhaseClock {
    fn default() -> Self {
        Self::new()
    }
}
