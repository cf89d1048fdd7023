//! Path: native/vampire_core/src/entity_params.rs
//! Summary: 昼・夜ごとのハンター/人間パラメータテーブル
//!
//! ハンターの速度と索敵範囲は個体ごとに持たず、毎 tick 現在のフェーズから引く。

use crate::world::Phase;

/// フェーズ別パラメータ
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseParams {
    pub hunter_speed:     f32,
    pub hunter_detection: f32,
    /// フェーズ突入時にスポーンし直すハンター数
    pub hunter_count:     usize,
    /// フェーズ突入時の人間数（夜は新規スポーンせず先頭から残す）
    pub human_count:      usize,
}

static PHASE_TABLE: [PhaseParams; 2] = [
    PhaseParams { hunter_speed: 2.8, hunter_detection: 200.0, hunter_count: 3, human_count: 10 }, // Day
    PhaseParams { hunter_speed: 3.5, hunter_detection: 350.0, hunter_count: 6, human_count: 4 },  // Night
];

impl PhaseParams {
    pub fn get(phase: Phase) -> &'static PhaseParams {
        match phase {
            Phase::Day => &PHASE_TABLE[0],
            Phase::Night => &PHASE_TABLE[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_hunters_are_faster_and_see_further() {
        let day = PhaseParams::get(Phase::Day);
        let night = PhaseParams::get(Phase::Night);
        assert!((day.hunter_speed - 2.8).abs() < 0.001);
        assert!((night.hunter_speed - 3.5).abs() < 0.001);
        assert!((day.hunter_detection - 200.0).abs() < 0.001);
        assert!((night.hunter_detection - 350.0).abs() < 0.001);
    }

    #[test]
    fn population_counts() {
        assert_eq!(PhaseParams::get(Phase::Day).hunter_count, 3);
        assert_eq!(PhaseParams::get(Phase::Night).hunter_count, 6);
        assert_eq!(PhaseParams::get(Phase::Day).human_count, 10);
        assert_eq!(PhaseParams::get(Phase::Night).human_count, 4);
    }
}
