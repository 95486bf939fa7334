//! Axis-aligned collision geometry
//!
//! Everything in the playfield is an axis-aligned rectangle, so collision
//! detection is a strict AABB overlap test and the interesting part is the
//! response: where on the paddle the ball lands decides its outgoing
//! horizontal velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle; y grows downward (canvas convention)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Strict AABB overlap test
    ///
    /// True iff the projections overlap on both axes. Rectangles that
    /// merely touch along an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Outgoing horizontal ball velocity after a paddle hit
///
/// Linear map from how far off-center the ball struck: a dead-center hit
/// returns straight, an edge hit leaves at full `ball_speed` sideways.
/// The offset ratio is bounded by the overlap geometry, so the result
/// stays in the order of `ball_speed`.
#[inline]
pub fn paddle_bounce_dx(ball: &Rect, paddle: &Rect, ball_speed: f32) -> f32 {
    let half_width = paddle.size.x / 2.0;
    ((ball.center_x() - paddle.center_x()) / half_width) * ball_speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_separated_rects_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x = 10 edge exactly
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        // Shares the y = 10 edge exactly
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_contained_rect_collides() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_bounce_dx_center_hit_is_straight() {
        let paddle = Rect::new(100.0, 500.0, 30.0, 6.0);
        let ball = Rect::new(112.0, 495.0, 6.0, 6.0); // centers align at 115
        assert_eq!(paddle_bounce_dx(&ball, &paddle, 2.0), 0.0);
    }

    #[test]
    fn test_bounce_dx_sign_follows_hit_side() {
        let paddle = Rect::new(100.0, 500.0, 30.0, 6.0);
        let left_hit = Rect::new(100.0, 495.0, 6.0, 6.0);
        let right_hit = Rect::new(124.0, 495.0, 6.0, 6.0);
        assert!(paddle_bounce_dx(&left_hit, &paddle, 2.0) < 0.0);
        assert!(paddle_bounce_dx(&right_hit, &paddle, 2.0) > 0.0);
    }

    #[test]
    fn test_bounce_dx_edge_hit_reaches_full_speed() {
        let paddle = Rect::new(0.0, 0.0, 30.0, 6.0);
        // Ball center exactly at the paddle's right edge
        let ball = Rect::new(27.0, -3.0, 6.0, 6.0);
        let dx = paddle_bounce_dx(&ball, &paddle, 2.0);
        assert!((dx - 2.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.1f32..100.0, ah in 0.1f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.1f32..100.0, bh in 0.1f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_rect_never_overlaps_distant_rect(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 0.1f32..100.0, h in 0.1f32..100.0,
            gap in 0.0f32..1000.0,
        ) {
            let a = Rect::new(x, y, w, h);
            let b = Rect::new(x + w + gap, y, w, h);
            prop_assert!(!a.overlaps(&b));
        }
    }
}
