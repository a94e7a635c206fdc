//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - One tick per timer interval, no wall-clock time
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, collision};
pub use state::{Arena, Ball, GameEvent, GamePhase, GameState, Paddle, Side};
pub use tick::tick;
