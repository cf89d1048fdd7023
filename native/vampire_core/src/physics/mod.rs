//! Path: native/vampire_core/src/physics/mod.rs
//! Summary: 物理モジュールの再エクスポート（円形ボディ・RNG）

pub mod body;
pub mod rng;
