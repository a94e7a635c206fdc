//! Game settings and preferences
//!
//! Read as JSON: LocalStorage on the web, a file named by
//! `PADDLE_DUEL_SETTINGS` on native. Missing fields take their defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Arena, Side};

/// Colors used by the renderer (any CSS color string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    pub paddle: String,
    pub ball: String,
    pub separator: String,
    pub text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "pink".into(),
            paddle: "red".into(),
            ball: "black".into(),
            separator: "white".into(),
            text: "white".into(),
        }
    }
}

/// Key identifiers (as reported by `KeyboardEvent.key`) moving each paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "w".into(),
            left_down: "s".into(),
            right_up: "ArrowUp".into(),
            right_down: "ArrowDown".into(),
        }
    }
}

/// Names shown in the win message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub left: String,
    pub right: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            left: "User".into(),
            right: "CPU".into(),
        }
    }
}

impl Labels {
    pub fn for_side(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub arena_width: f32,
    pub arena_height: f32,
    /// Ticks per second
    pub tick_rate_hz: u32,
    /// First side to reach this score wins
    pub win_score: u32,
    pub theme: Theme,
    pub keys: KeyBindings,
    pub labels: Labels,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            tick_rate_hz: TICK_RATE_HZ,
            win_score: WIN_SCORE,
            theme: Theme::default(),
            keys: KeyBindings::default(),
            labels: Labels::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Replace values the game can't run with by their defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        // The arena must fit a paddle and a ball with room to move
        if !(self.arena_width > PADDLE_WIDTH * 2.0 + BALL_RADIUS * 2.0)
            || !(self.arena_height > PADDLE_HEIGHT)
        {
            log::warn!(
                "Arena {}x{} too small, using {}x{}",
                self.arena_width,
                self.arena_height,
                defaults.arena_width,
                defaults.arena_height
            );
            self.arena_width = defaults.arena_width;
            self.arena_height = defaults.arena_height;
        }
        if self.tick_rate_hz == 0 || self.tick_rate_hz > 1000 {
            log::warn!(
                "Tick rate {} Hz out of range, using {} Hz",
                self.tick_rate_hz,
                defaults.tick_rate_hz
            );
            self.tick_rate_hz = defaults.tick_rate_hz;
        }
        if self.win_score == 0 {
            log::warn!("Win score must be positive, using {}", defaults.win_score);
            self.win_score = defaults.win_score;
        }
        self
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Time between ticks (20 ms at 50 Hz)
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.tick_rate_hz.max(1)))
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "paddle_duel_settings";

    /// Environment variable naming a settings file (native only)
    pub const ENV_PATH: &'static str = "PADDLE_DUEL_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `PADDLE_DUEL_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_PATH) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.to_string_lossy());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings in {}: {}", path.to_string_lossy(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Can't read {}: {}", path.to_string_lossy(), e);
                Self::default()
            }
        }
    }
}
