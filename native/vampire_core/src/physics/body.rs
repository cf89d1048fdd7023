//! Path: native/vampire_core/src/physics/body.rs
//! Summary: 位置・半径・ワールド境界クランプを持つ円形ボディ（全移動エンティティ共通）

use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};

/// 円形ボディ。中心座標 (x, y) と半径
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub x:      f32,
    pub y:      f32,
    pub radius: f32,
}

impl Body {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    pub fn min_x(&self) -> f32 { self.radius }
    pub fn max_x(&self) -> f32 { WORLD_WIDTH - self.radius }
    pub fn min_y(&self) -> f32 { self.radius }
    pub fn max_y(&self) -> f32 { WORLD_HEIGHT - self.radius }

    /// x 方向で境界の外に出ているか
    pub fn outside_x(&self) -> bool {
        self.x < self.min_x() || self.x > self.max_x()
    }

    /// y 方向で境界の外に出ているか
    pub fn outside_y(&self) -> bool {
        self.y < self.min_y() || self.y > self.max_y()
    }

    /// 円全体がワールド矩形に収まるよう中心をクランプする
    pub fn clamp_to_world(&mut self) {
        self.x = self.x.clamp(self.min_x(), self.max_x());
        self.y = self.y.clamp(self.min_y(), self.max_y());
    }

    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        dist_sq(self.x, self.y, x, y).sqrt()
    }

    /// 円同士が重なっているか（接しているだけなら false）
    pub fn overlaps(&self, other: &Body) -> bool {
        let hit_r = self.radius + other.radius;
        dist_sq(self.x, self.y, other.x, other.y) < hit_r * hit_r
    }

    /// (tx, ty) に向かって最大 `speed` だけ直進する
    pub fn step_toward(&mut self, tx: f32, ty: f32, speed: f32) {
        let dx = tx - self.x;
        let dy = ty - self.y;
        let dist = (dx * dx + dy * dy).sqrt().max(0.001);
        self.x += (dx / dist) * speed;
        self.y += (dy / dist) * speed;
    }
}

/// 二乗距離（sqrt を避けて高速化）
#[inline]
pub fn dist_sq(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_whole_circle_inside() {
        let mut b = Body::new(-30.0, WORLD_HEIGHT + 5.0, 12.0);
        b.clamp_to_world();
        assert!((b.x - 12.0).abs() < 0.001);
        assert!((b.y - (WORLD_HEIGHT - 12.0)).abs() < 0.001);
    }

    #[test]
    fn overlap_is_strict() {
        let a = Body::new(0.0, 0.0, 12.0);
        let touching = Body::new(22.0, 0.0, 10.0);
        let inside = Body::new(21.0, 0.0, 10.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn step_toward_moves_by_speed() {
        let mut b = Body::new(100.0, 100.0, 10.0);
        b.step_toward(200.0, 100.0, 3.5);
        assert!((b.x - 103.5).abs() < 0.001);
        assert!((b.y - 100.0).abs() < 0.001);
    }

    #[test]
    fn step_toward_own_position_stays_put() {
        let mut b = Body::new(50.0, 60.0, 10.0);
        b.step_toward(50.0, 60.0, 2.8);
        assert!((b.x - 50.0).abs() < 0.001);
        assert!((b.y - 60.0).abs() < 0.001);
    }
}
