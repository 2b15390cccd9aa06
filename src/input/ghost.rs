//! Suppression of synthetic mouse events that follow a touch release.
//!
//! Touch browsers replay a tap as mousedown/mousemove/mouseup shortly after
//! the touchend. Without this guard one physical tap would toggle twice.

use crate::constants::GHOST_MS;
use crate::timer::Timestamp;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostGuard {
    window: Duration,
    last_touch_end: Option<Timestamp>,
}

impl Default for GhostGuard {
    fn default() -> Self {
        Self::new(Duration::from_millis(GHOST_MS))
    }
}

impl GhostGuard {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_touch_end: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn set_window(&mut self, window: Duration) {
        self.window = window;
    }

    /// Note a touch release on this column.
    pub fn record(&mut self, at: Timestamp) {
        self.last_touch_end = Some(at);
    }

    /// Whether a pointer event at `at` is inside the suppression window.
    pub fn suppresses(&self, at: Timestamp) -> bool {
        match self.last_touch_end {
            Some(end) => at.saturating_since(end) < self.window,
            None => false,
        }
    }
}
