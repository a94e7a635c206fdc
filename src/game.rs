//! Game loop controller
//!
//! Owns the game state, the repeating timer and the draw surface. Each timer
//! callback runs one simulation tick followed by one draw pass.

use crate::input;
use crate::platform::Timer;
use crate::renderer::{self, Surface};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GamePhase, GameState};

/// Where the loop is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No timer scheduled
    Stopped,
    /// Timer scheduled, ticks advance the game
    Running,
    /// Timer scheduled, ticks only redraw
    Paused,
    /// A side won; timer cancelled until restart
    Terminal,
}

/// A running game bound to a timer and a surface
pub struct Game<T: Timer, S: Surface> {
    settings: Settings,
    state: GameState,
    timer: T,
    handle: Option<T::Handle>,
    surface: S,
}

impl<T: Timer, S: Surface> Game<T, S> {
    pub fn new(settings: Settings, timer: T, surface: S) -> Self {
        let settings = settings.validated();
        let state = GameState::new(settings.arena(), settings.win_score);
        Self {
            settings,
            state,
            timer,
            handle: None,
            surface,
        }
    }

    pub fn loop_state(&self) -> LoopState {
        if self.state.winner().is_some() {
            LoopState::Terminal
        } else if self.handle.is_none() {
            LoopState::Stopped
        } else if self.state.is_paused() {
            LoopState::Paused
        } else {
            LoopState::Running
        }
    }

    /// Start or resume the loop. Never schedules a second timer.
    pub fn start(&mut self) {
        match self.loop_state() {
            LoopState::Stopped => {
                let interval = self.settings.tick_interval();
                match self.timer.schedule_repeating(interval) {
                    Some(handle) => {
                        self.handle = Some(handle);
                        self.state.phase = GamePhase::Playing;
                        log::info!("Game started ({} ms per tick)", interval.as_millis());
                    }
                    None => log::error!("Timer refused to schedule, game stays stopped"),
                }
            }
            LoopState::Paused => {
                self.state.phase = GamePhase::Playing;
                log::info!("Game resumed");
            }
            LoopState::Running | LoopState::Terminal => {}
        }
    }

    /// Freeze the simulation; takes effect on the next tick
    pub fn pause(&mut self) {
        if self.loop_state() == LoopState::Running {
            self.state.phase = GamePhase::Paused;
            log::info!("Game paused");
        }
    }

    /// Stop the loop, reset the match and draw the opening frame.
    ///
    /// The loop stays stopped until the next `start`.
    pub fn restart(&mut self) {
        self.stop_timer();
        self.state.reset();
        renderer::render(&self.state, &self.settings.theme, &mut self.surface);
        log::info!("Game restarted");
    }

    /// One timer callback: simulate, then draw
    pub fn tick(&mut self) -> Vec<GameEvent> {
        if self.loop_state() == LoopState::Terminal {
            return Vec::new();
        }

        let events = sim::tick(&mut self.state);

        match self.state.winner() {
            Some(winner) => {
                self.stop_timer();
                renderer::render_game_over(
                    &self.state,
                    winner,
                    &self.settings.theme,
                    &self.settings.labels,
                    &mut self.surface,
                );
            }
            None => renderer::render(&self.state, &self.settings.theme, &mut self.surface),
        }

        events
    }

    /// Draw the current state without advancing it
    pub fn redraw(&mut self) {
        match self.state.winner() {
            Some(winner) => renderer::render_game_over(
                &self.state,
                winner,
                &self.settings.theme,
                &self.settings.labels,
                &mut self.surface,
            ),
            None => renderer::render(&self.state, &self.settings.theme, &mut self.surface),
        }
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        input::key_down(&mut self.state, &self.settings.keys, key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        input::key_up(&mut self.state, &self.settings.keys, key)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn stop_timer(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.timer.cancel(handle);
        }
    }
}
