//! Keyboard input
//!
//! Maps key identifiers to paddle velocity. Holding a key moves the paddle
//! at a constant speed; releasing either of a paddle's keys stops it.

use crate::consts::PADDLE_SPEED;
use crate::settings::KeyBindings;
use crate::sim::{GameState, Side};

/// Direction a bound key moves its paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    fn velocity(self) -> f32 {
        match self {
            Direction::Up => -PADDLE_SPEED,
            Direction::Down => PADDLE_SPEED,
        }
    }
}

/// Look up which paddle and direction a key controls
pub fn binding(keys: &KeyBindings, key: &str) -> Option<(Side, Direction)> {
    if key == keys.left_up {
        Some((Side::Left, Direction::Up))
    } else if key == keys.left_down {
        Some((Side::Left, Direction::Down))
    } else if key == keys.right_up {
        Some((Side::Right, Direction::Up))
    } else if key == keys.right_down {
        Some((Side::Right, Direction::Down))
    } else {
        None
    }
}

/// Start moving a paddle. Returns false for unbound keys.
pub fn key_down(state: &mut GameState, keys: &KeyBindings, key: &str) -> bool {
    match binding(keys, key) {
        Some((side, direction)) => {
            state.paddle_mut(side).dy = direction.velocity();
            true
        }
        None => false,
    }
}

/// Stop a paddle. Returns false for unbound keys.
pub fn key_up(state: &mut GameState, keys: &KeyBindings, key: &str) -> bool {
    match binding(keys, key) {
        Some((side, _)) => {
            state.paddle_mut(side).dy = 0.0;
            true
        }
        None => false,
    }
}
