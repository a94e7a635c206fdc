//! Paddle Duel - two-player keyboard Pong on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring)
//! - `renderer`: Stateless draw pass over a 2D surface
//! - `input`: Keyboard to paddle velocity mapping
//! - `game`: Fixed-rate loop controller (start/pause/restart)
//! - `platform`: Timer abstraction and browser bindings
//! - `settings`: Serializable configuration

pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, LoopState};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Timer rate (50 Hz, 20 ms per tick)
    pub const TICK_RATE_HZ: u32 = 50;

    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Vertical paddle speed per tick while a key is held
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Serve speed, also the per-axis starting velocity
    pub const BALL_START_SPEED: f32 = 5.0;
    /// Added to ball speed on every paddle return (no upper bound)
    pub const PADDLE_HIT_SPEEDUP: f32 = 0.1;
    /// Deflection at the very end of a paddle (45 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// First side to reach this score wins
    pub const WIN_SCORE: u32 = 10;
}
