//! Path: native/vampire_core/src/world/session.rs
//! Summary: ゲームセッション（全エンティティ・フェーズ・スコア・RNG を所有する集約）

use super::{FrameEvent, Human, Hunter, PhaseClock, PlayerState};
use crate::entity_params::PhaseParams;
use crate::game_logic;
use crate::input::TickInput;
use crate::physics::rng::SessionRng;
use crate::snapshot::{build_snapshot, SessionSnapshot};
use serde::Serialize;

/// セッションの進行状態
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum GameState {
    /// 開始待ち（メニュー画面）
    #[default]
    Menu,
    Playing,
    /// プレイヤー死亡。リスタート信号まで何も進まない
    GameOver,
}

/// ゲームセッション
///
/// プロセス全体で共有される状態は持たない。テストでは複数セッションを並行に動かせる。
#[derive(Clone, Debug)]
pub struct GameSession {
    pub state:        GameState,
    pub player:       PlayerState,
    /// 挿入順を保つ。夜への切り替えでは先頭から残す
    pub humans:       Vec<Human>,
    pub hunters:      Vec<Hunter>,
    pub clock:        PhaseClock,
    pub score:        u32,
    pub rng:          SessionRng,
    /// この tick で発生したイベント（drain_frame_events で取り出す）
    pub frame_events: Vec<FrameEvent>,
}

impl GameSession {
    /// メニュー状態のセッションを作る。エンティティは初期配置済み
    pub fn new(seed: u64) -> Self {
        let mut session = Self {
            state:        GameState::Menu,
            player:       PlayerState::new(),
            humans:       Vec::new(),
            hunters:      Vec::new(),
            clock:        PhaseClock::new(),
            score:        0,
            rng:          SessionRng::new(seed),
            frame_events: Vec::new(),
        };
        session.reset();
        session
    }

    /// 初期値に戻す（RNG は続きから使う）。状態は変えない
    pub fn reset(&mut self) {
        self.player = PlayerState::new();
        self.clock = PhaseClock::new();
        self.score = 0;
        self.frame_events.clear();

        let params = PhaseParams::get(self.clock.phase);
        self.humans.clear();
        self.hunters.clear();
        game_logic::spawn_humans(self, params.human_count);
        game_logic::spawn_hunters(self, params.hunter_count);
    }

    /// 開始・リスタート。メニューかゲームオーバーのときだけ有効
    pub fn start(&mut self) -> bool {
        match self.state {
            GameState::Menu | GameState::GameOver => {
                self.reset();
                self.state = GameState::Playing;
                log::info!("session started: humans={} hunters={}", self.humans.len(), self.hunters.len());
                true
            }
            GameState::Playing => false,
        }
    }

    /// 1 tick 進めて現在の状態を返す
    pub fn step(&mut self, input: &TickInput) -> GameState {
        game_logic::step_inner(self, input);
        self.state
    }

    /// 1 tick 進めてスナップショットを返す
    pub fn tick(&mut self, input: &TickInput) -> SessionSnapshot {
        self.step(input);
        self.snapshot()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        build_snapshot(self)
    }

    pub fn drain_frame_events(&mut self) -> Vec<FrameEvent> {
        game_logic::drain_frame_events(self)
    }

    pub fn is_dead(&self) -> bool {
        self.state == GameState::GameOver
    }

    pub fn survival_seconds(&self) -> u64 {
        self.clock.survival_seconds()
    }
}
