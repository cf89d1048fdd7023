//! Path: native/vampire_core/src/input.rs
//! Summary: 1 tick 分の入力（移動方向・変身・吸血・開始）

/// 押されている移動方向の集合。同時押しはそれぞれ独立に加算される
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub up:    bool,
    pub down:  bool,
    pub left:  bool,
    pub right: bool,
}

impl MoveIntent {
    /// 単位ベクトルの和（正規化しない。斜め移動は速くなる）
    pub fn offset(&self) -> (f32, f32) {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.up    { dy -= 1.0; }
        if self.down  { dy += 1.0; }
        if self.left  { dx -= 1.0; }
        if self.right { dx += 1.0; }
        (dx, dy)
    }
}

/// 入力デバイス側から毎 tick 渡される意図
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub movement:  MoveIntent,
    pub bat_form:  bool,
    pub feed:      bool,
    /// メニュー / ゲームオーバー画面からの開始・リスタート
    pub start:     bool,
}

impl TickInput {
    pub fn idle() -> Self {
        Self::default()
    }
}
