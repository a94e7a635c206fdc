//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`]. The loop controller
//! owns one instance and lends it to the tick, the renderer and the input
//! handler in turn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which half of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player one (`w`/`s`)
    Left,
    /// Player two (arrow keys)
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Playing field dimensions, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Side of the arena containing the given x coordinate
    pub fn side_of(&self, x: f32) -> Side {
        if x < self.width / 2.0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks advance the simulation
    Playing,
    /// Ticks are no-ops
    Paused,
    /// A side reached the winning score
    GameOver { winner: Side },
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by a paddle; `speed` is the new ball speed
    PaddleHit { side: Side, speed: f32 },
    /// A side scored; `score` is its new total
    Scored { side: Side, score: u32 },
    /// A side reached the winning score
    Won { side: Side },
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed applied on paddle returns, grows with every hit
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::splat(BALL_START_SPEED),
            radius: BALL_RADIUS,
            speed: BALL_START_SPEED,
        }
    }

    /// Put the ball back in the center after a point.
    ///
    /// Horizontal direction flips, vertical velocity is kept, speed drops
    /// back to the serve speed.
    pub fn reset(&mut self, center: Vec2) {
        self.pos = center;
        self.vel.x = -self.vel.x;
        self.speed = BALL_START_SPEED;
    }
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity per tick, set by the input handler
    pub dy: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, arena: &Arena) -> Self {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => arena.width - PADDLE_WIDTH,
        };
        Self {
            side,
            x,
            y: (arena.height - PADDLE_HEIGHT) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            dy: 0.0,
            score: 0,
        }
    }

    /// Keep the paddle fully inside the arena
    pub fn clamp_to(&mut self, arena: &Arena) {
        if self.y < 0.0 {
            self.y = 0.0;
        }
        if self.y + self.height > arena.height {
            self.y = arena.height - self.height;
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    /// Score that ends the game
    pub win_score: u32,
    pub phase: GamePhase,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
}

impl GameState {
    /// Fresh game with the ball centered and both paddles centered
    pub fn new(arena: Arena, win_score: u32) -> Self {
        Self {
            arena,
            win_score,
            phase: GamePhase::Playing,
            ball: Ball::new(arena.center()),
            left: Paddle::new(Side::Left, &arena),
            right: Paddle::new(Side::Right, &arena),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            GamePhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Reset scores, paddles and ball for a new match.
    ///
    /// The ball keeps its vertical velocity and serves in the direction
    /// opposite to its last travel, same as after a point.
    pub fn reset(&mut self) {
        for side in [Side::Left, Side::Right] {
            let paddle = self.paddle_mut(side);
            paddle.score = 0;
            paddle.dy = 0.0;
        }
        let center_y = (self.arena.height - PADDLE_HEIGHT) / 2.0;
        self.left.y = center_y;
        self.right.y = center_y;
        self.ball.reset(self.arena.center());
        self.phase = GamePhase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(Arena::new(600.0, 400.0), WIN_SCORE);
        assert_eq!(state.ball.pos, Vec2::new(300.0, 200.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(state.left.x, 0.0);
        assert_eq!(state.right.x, 590.0);
        assert_eq!(state.left.y, 150.0);
        assert_eq!(state.right.y, 150.0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_ball_reset_flips_horizontal_direction() {
        let mut ball = Ball::new(Vec2::ZERO);
        ball.pos = Vec2::new(-4.0, 30.0);
        ball.vel = Vec2::new(-6.2, 1.5);
        ball.speed = 7.3;

        ball.reset(Vec2::new(300.0, 200.0));
        assert_eq!(ball.pos, Vec2::new(300.0, 200.0));
        assert_eq!(ball.vel, Vec2::new(6.2, 1.5));
        assert_eq!(ball.speed, BALL_START_SPEED);
    }

    #[test]
    fn test_paddle_clamp() {
        let arena = Arena::new(600.0, 400.0);
        let mut paddle = Paddle::new(Side::Right, &arena);

        paddle.y = -3.0;
        paddle.clamp_to(&arena);
        assert_eq!(paddle.y, 0.0);

        paddle.y = 350.0;
        paddle.clamp_to(&arena);
        assert_eq!(paddle.y, 300.0);
    }

    #[test]
    fn test_reset_clears_scores_and_velocity() {
        let mut state = GameState::new(Arena::default(), WIN_SCORE);
        state.left.score = 4;
        state.right.score = 10;
        state.right.dy = PADDLE_SPEED;
        state.left.y = 0.0;
        state.phase = GamePhase::GameOver { winner: Side::Right };

        state.reset();
        assert_eq!(state.left.score, 0);
        assert_eq!(state.right.score, 0);
        assert_eq!(state.right.dy, 0.0);
        assert_eq!(state.left.y, (state.arena.height - PADDLE_HEIGHT) / 2.0);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
