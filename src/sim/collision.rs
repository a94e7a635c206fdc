//! Box overlap tests between the ball and the paddles
//!
//! Both shapes are reduced to axis-aligned boxes. Overlap is strict on every
//! side, so a ball that only touches a paddle edge is not a hit.

use super::state::{Ball, Paddle};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    /// Box spanning `x..x + w`, `y..y + h`
    pub fn from_rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            left: x,
            right: x + w,
            top: y,
            bottom: y + h,
        }
    }

    /// Box enclosing a circle
    pub fn from_circle(cx: f32, cy: f32, radius: f32) -> Self {
        Self {
            left: cx - radius,
            right: cx + radius,
            top: cy - radius,
            bottom: cy + radius,
        }
    }

    /// True when the interiors intersect. Shared edges don't count.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.top < other.bottom
            && self.right > other.left
            && self.bottom > other.top
    }
}

impl Paddle {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.width, self.height)
    }
}

impl Ball {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_circle(self.pos.x, self.pos.y, self.radius)
    }
}

/// Check whether the ball's box overlaps the paddle's box
pub fn collision(ball: &Ball, paddle: &Paddle) -> bool {
    paddle.bounds().overlaps(&ball.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Arena, Side};
    use glam::Vec2;
    use proptest::prelude::*;

    fn paddle_at(x: f32, y: f32) -> Paddle {
        let mut paddle = Paddle::new(Side::Left, &Arena::default());
        paddle.x = x;
        paddle.y = y;
        paddle
    }

    fn ball_at(x: f32, y: f32) -> Ball {
        let mut ball = Ball::new(Vec2::ZERO);
        ball.pos = Vec2::new(x, y);
        ball
    }

    #[test]
    fn test_ball_overlapping_paddle_face() {
        // Paddle spans x 0..10, y 100..200; ball box spans x 5..25
        let paddle = paddle_at(0.0, 100.0);
        let ball = ball_at(15.0, 150.0);
        assert!(collision(&ball, &paddle));
    }

    #[test]
    fn test_touching_edge_is_not_a_hit() {
        // Ball box left edge sits exactly on paddle right edge (x = 10)
        let paddle = paddle_at(0.0, 100.0);
        let ball = ball_at(20.0, 150.0);
        assert!(!collision(&ball, &paddle));

        // Ball box bottom edge sits exactly on paddle top edge (y = 100)
        let ball = ball_at(5.0, 90.0);
        assert!(!collision(&ball, &paddle));
    }

    #[test]
    fn test_ball_past_paddle_end_misses() {
        let paddle = paddle_at(0.0, 100.0);
        let ball = ball_at(5.0, 215.0);
        assert!(!collision(&ball, &paddle));
    }

    #[test]
    fn test_collision_does_not_touch_inputs() {
        let paddle = paddle_at(0.0, 100.0);
        let ball = ball_at(15.0, 150.0);
        let (paddle_before, ball_before) = (paddle.clone(), ball.clone());
        let _ = collision(&ball, &paddle);
        assert_eq!(paddle.y, paddle_before.y);
        assert_eq!(ball.pos, ball_before.pos);
    }

    proptest! {
        #[test]
        fn collision_matches_strict_box_overlap(
            bx in -50.0f32..650.0,
            by in -50.0f32..450.0,
            px in 0.0f32..590.0,
            py in 0.0f32..300.0,
        ) {
            let paddle = paddle_at(px, py);
            let ball = ball_at(bx, by);
            let expected = px < bx + ball.radius
                && py < by + ball.radius
                && px + paddle.width > bx - ball.radius
                && py + paddle.height > by - ball.radius;
            prop_assert_eq!(collision(&ball, &paddle), expected);
        }
    }
}
