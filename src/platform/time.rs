//! Repeating timer abstraction
//!
//! The loop controller asks the host to call it back at a fixed interval and
//! cancels that schedule on restart or game over.

use std::time::Duration;

/// A host service that invokes the game tick at a fixed interval
pub trait Timer {
    type Handle;

    /// Begin calling the tick every `interval`. `None` if the host refused.
    fn schedule_repeating(&mut self, interval: Duration) -> Option<Self::Handle>;

    /// Stop a schedule. No tick fires for it after this returns.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Timer driven by hand: the owner calls `Game::tick` while it is active
///
/// Used by tests and the native headless run.
#[derive(Debug, Default)]
pub struct ManualTimer {
    pub(crate) active: Option<(u32, Duration)>,
    pub(crate) next_handle: u32,
    /// Number of schedules created so far
    pub scheduled: u32,
    /// Number of schedules cancelled so far
    pub cancelled: u32,
    /// Refuse every schedule request (simulates a failing host)
    pub refuse: bool,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Interval of the active schedule
    pub fn interval(&self) -> Option<Duration> {
        self.active.map(|(_, interval)| interval)
    }
}

impl Timer for ManualTimer {
    type Handle = u32;

    fn schedule_repeating(&mut self, interval: Duration) -> Option<u32> {
        if self.refuse {
            return None;
        }
        self.next_handle += 1;
        self.scheduled += 1;
        self.active = Some((self.next_handle, interval));
        Some(self.next_handle)
    }

    fn cancel(&mut self, handle: u32) {
        if matches!(self.active, Some((active, _)) if active == handle) {
            self.active = None;
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_and_cancel() {
        let mut timer = ManualTimer::new();
        let handle = timer.schedule_repeating(Duration::from_millis(20)).unwrap();
        assert!(timer.is_active());
        assert_eq!(timer.interval(), Some(Duration::from_millis(20)));

        // Stale handles are ignored
        timer.cancel(handle + 1);
        assert!(timer.is_active());

        timer.cancel(handle);
        assert!(!timer.is_active());
        assert_eq!((timer.scheduled, timer.cancelled), (1, 1));
    }

    #[test]
    fn test_refusing_timer() {
        let mut timer = ManualTimer {
            refuse: true,
            ..Default::default()
        };
        assert!(timer.schedule_repeating(Duration::from_millis(20)).is_none());
        assert!(!timer.is_active());
    }
}
