//! Path: native/vampire_core/src/constants.rs
//! Summary: ワールドサイズ・tick レート・資源/戦闘バランスの定数定義
//!
//! 数値はすべて 1 tick（60 tick/秒）あたりの値。tick レートを変える場合は
//! 減衰量・持続 tick 数・カウントダウン閾値を比例して調整すること。

// World rectangle
pub const WORLD_WIDTH:  f32 = 1000.0;
pub const WORLD_HEIGHT: f32 = 700.0;

pub const TICKS_PER_SECOND: u64 = 60;

/// 日光ゾーン（左半分）の右端。x がこれ未満なら昼に被ダメージ
pub const SUNLIGHT_BOUNDARY_X: f32 = WORLD_WIDTH / 2.0;

// Player
pub const PLAYER_RADIUS:      f32 = 12.0;
pub const PLAYER_SPEED:       f32 = 4.0;
pub const PLAYER_BAT_SPEED:   f32 = 8.0;
pub const PLAYER_MAX_BLOOD:   f32 = 100.0;
pub const PLAYER_MAX_ENERGY:  f32 = 100.0;
pub const PLAYER_MAX_HEALTH:  f32 = 100.0;
pub const PLAYER_START_BLOOD: f32 = 50.0;

/// 血液がこれ未満だと移動速度が半分になる
pub const HUNGRY_SLOW_THRESHOLD: f32 = 20.0;
/// 血液がこれ未満だと飢餓ダメージ
pub const STARVATION_THRESHOLD:  f32 = 30.0;

pub const SUN_DAMAGE_PER_TICK:        f32 = 0.5;
pub const STARVATION_DAMAGE_PER_TICK: f32 = 0.2;
pub const BLOOD_DRAIN_DAY:            f32 = 0.08;
pub const BLOOD_DRAIN_NIGHT:          f32 = 0.03;
pub const ENERGY_REGEN_NIGHT:         f32 = 0.3;

// Bat form
pub const BAT_FORM_ENERGY_COST:  f32 = 20.0;
pub const BAT_FORM_BLOOD_COST:   f32 = 5.0;
pub const BAT_FORM_MIN_BLOOD:    f32 = 10.0;
pub const BAT_FORM_DURATION:     u32 = 300; // 5 秒

// Humans
pub const HUMAN_RADIUS:          f32 = 8.0;
pub const HUMAN_SPEED:           f32 = 1.0;
pub const HUMAN_TURN_INTERVAL:   u32 = 120;
pub const HUMAN_SPAWN_MARGIN:    f32 = 50.0;

// Hunters
pub const HUNTER_RADIUS:          f32 = 10.0;
pub const HUNTER_MAX_HEALTH:      f32 = 30.0;
pub const HUNTER_SPAWN_MARGIN:    f32 = 50.0;
pub const HUNTER_PATROL_INTERVAL: u32 = 60;
pub const HUNTER_PATROL_INSET:    f32 = 100.0;
/// 昼、x がこれより左にいるハンターは日陰側へ退避する
pub const HUNTER_SUN_RETREAT_X:   f32 = SUNLIGHT_BOUNDARY_X - 50.0;
pub const HUNTER_SAFE_X:          f32 = WORLD_WIDTH * 0.7;

// Combat
pub const BAT_CONTACT_DAMAGE:    f32 = 2.0;
pub const HUMAN_CONTACT_DAMAGE:  f32 = 0.5;
pub const HUNTER_CONTACT_DAMAGE: f32 = 0.5;

// Feeding
pub const FEED_RANGE:        f32 = 40.0;
pub const FEED_BLOOD_AMOUNT: f32 = 30.0;
pub const FEED_HEAL_AMOUNT:  f32 = 10.0;

// Scoring
pub const SCORE_FEED:       u32 = 10;
pub const SCORE_HUNTER_KILL: u32 = 50;

/// 昼・夜それぞれの長さ（30 秒）
pub const PHASE_DURATION_TICKS: u32 = 1800;
