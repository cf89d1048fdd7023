//! Path: native/vampire_core/src/world/player.rs
//! Summary: プレイヤー（ヴァンパイア）状態と資源の減衰・回復・変身・吸血

use super::Phase;
use crate::constants::{
    BAT_FORM_BLOOD_COST, BAT_FORM_DURATION, BAT_FORM_ENERGY_COST, BAT_FORM_MIN_BLOOD,
    BLOOD_DRAIN_DAY, BLOOD_DRAIN_NIGHT, ENERGY_REGEN_NIGHT, FEED_HEAL_AMOUNT,
    HUNGRY_SLOW_THRESHOLD, PLAYER_BAT_SPEED, PLAYER_MAX_BLOOD, PLAYER_MAX_ENERGY,
    PLAYER_MAX_HEALTH, PLAYER_RADIUS, PLAYER_SPEED, PLAYER_START_BLOOD,
    STARVATION_DAMAGE_PER_TICK, STARVATION_THRESHOLD, SUNLIGHT_BOUNDARY_X,
    SUN_DAMAGE_PER_TICK, WORLD_HEIGHT, WORLD_WIDTH,
};
use crate::input::MoveIntent;
use crate::physics::body::Body;
use serde::Serialize;

/// ヴァンパイアの形態
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Form {
    /// 通常（地上）形態
    #[default]
    Human,
    /// コウモリ形態。高速・一定 tick で自動解除
    Bat,
}

/// 1 tick の `update` で起きたこと（イベント発行用）
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VitalsReport {
    pub sun_damage:        f32,
    pub starvation_damage: f32,
    /// このtickでコウモリ形態が切れた
    pub reverted:          bool,
}

/// プレイヤー状態
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    pub body:     Body,
    pub form:     Form,
    pub blood:    f32,
    pub energy:   f32,
    pub health:   f32,
    /// コウモリ形態の残り tick（Human のときは 0）
    pub bat_ticks: u32,
}

impl PlayerState {
    /// ワールド中央に生成
    pub fn new() -> Self {
        Self {
            body:      Body::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0, PLAYER_RADIUS),
            form:      Form::Human,
            blood:     PLAYER_START_BLOOD,
            energy:    PLAYER_MAX_ENERGY,
            health:    PLAYER_MAX_HEALTH,
            bat_ticks: 0,
        }
    }

    pub fn x(&self) -> f32 { self.body.x }
    pub fn y(&self) -> f32 { self.body.y }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// 現在の移動速度（コウモリは固定、人型は空腹で半減）
    pub fn speed(&self) -> f32 {
        match self.form {
            Form::Bat => PLAYER_BAT_SPEED,
            Form::Human if self.blood < HUNGRY_SLOW_THRESHOLD => PLAYER_SPEED * 0.5,
            Form::Human => PLAYER_SPEED,
        }
    }

    pub fn in_sunlight(&self, phase: Phase) -> bool {
        match phase {
            Phase::Day => self.body.x < SUNLIGHT_BOUNDARY_X,
            Phase::Night => false,
        }
    }

    /// コウモリに変身する。資源が足りなければ何もせず false
    ///
    /// コウモリ中に再度呼ぶと持続 tick がリセットされ、コストも再び払う。
    pub fn try_bat_form(&mut self) -> bool {
        if self.energy < BAT_FORM_ENERGY_COST || self.blood < BAT_FORM_MIN_BLOOD {
            return false;
        }
        self.form = Form::Bat;
        self.bat_ticks = BAT_FORM_DURATION;
        self.energy -= BAT_FORM_ENERGY_COST;
        self.blood -= BAT_FORM_BLOOD_COST;
        true
    }

    /// 移動・日光・資源の減衰と回復・コウモリ残り tick を 1 tick 分進める
    pub fn update(&mut self, movement: MoveIntent, phase: Phase) -> VitalsReport {
        let mut report = VitalsReport::default();

        let (dx, dy) = movement.offset();
        let speed = self.speed();
        self.body.x += dx * speed;
        self.body.y += dy * speed;
        self.body.clamp_to_world();

        if self.in_sunlight(phase) {
            report.sun_damage = self.take_damage(SUN_DAMAGE_PER_TICK);
        }

        match phase {
            Phase::Day => {
                self.blood -= BLOOD_DRAIN_DAY;
            }
            Phase::Night => {
                self.energy = (self.energy + ENERGY_REGEN_NIGHT).min(PLAYER_MAX_ENERGY);
                self.blood -= BLOOD_DRAIN_NIGHT;
            }
        }

        // 判定はクランプ前の値で行う
        if self.blood < STARVATION_THRESHOLD {
            report.starvation_damage = self.take_damage(STARVATION_DAMAGE_PER_TICK);
        }
        self.blood = self.blood.clamp(0.0, PLAYER_MAX_BLOOD);

        report.reverted = self.tick_bat_form();
        report
    }

    /// コウモリ残り tick を 1 減らし、0 になったら人型に戻す。戻った場合 true
    fn tick_bat_form(&mut self) -> bool {
        match self.form {
            Form::Human => false,
            Form::Bat => {
                self.bat_ticks = self.bat_ticks.saturating_sub(1);
                if self.bat_ticks == 0 {
                    self.form = Form::Human;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// HP を減らし、実際に減った量を返す（0 未満にはならない）
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let before = self.health;
        self.health = (self.health - amount).max(0.0);
        before - self.health
    }

    /// 吸血: 血液と HP を最大値を超えない範囲で回復
    pub fn feed(&mut self, blood_amount: f32) {
        self.blood = (self.blood + blood_amount).min(PLAYER_MAX_BLOOD);
        self.health = (self.health + FEED_HEAL_AMOUNT).min(PLAYER_MAX_HEALTH);
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
