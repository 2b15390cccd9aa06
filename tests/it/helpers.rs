//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestGridBuilder` - Builder for grids with consecutive day columns
//! - Gesture helpers (`click`, `drag`, `tap`) and touch point synthesis

#![allow(dead_code)]

use slotgrid::input::{TouchEvent, TouchPoint};
use slotgrid::{DayKey, EventResponse, Grid, GridSettings, SelectionRecorder, Slot, Timestamp};

// ============================================================================
// TestGridBuilder
// ============================================================================

/// Builder for test grids.
///
/// # Example
/// ```ignore
/// let (mut grid, recorder) = TestGridBuilder::new()
///     .with_days(3)
///     .with_granularity(30)
///     .build();
/// ```
pub struct TestGridBuilder {
    days: usize,
    settings: GridSettings,
}

impl Default for TestGridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGridBuilder {
    pub fn new() -> Self {
        Self {
            days: 1,
            settings: GridSettings::default(),
        }
    }

    /// Number of consecutive days starting at `day(0)`.
    pub fn with_days(mut self, days: usize) -> Self {
        self.days = days;
        self
    }

    pub fn with_granularity(mut self, minutes: u16) -> Self {
        self.settings.granularity_minutes = minutes;
        self
    }

    pub fn with_settings(mut self, settings: GridSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Build the grid with a recorder already listening.
    pub fn build(self) -> (Grid, SelectionRecorder) {
        let days = (0..self.days).map(day);
        let mut grid = Grid::new(days, self.settings).expect("valid test settings");
        let recorder = SelectionRecorder::new();
        grid.add_listener(Box::new(recorder.clone()));
        (grid, recorder)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Day `n` of the test week; `day(0)` is 2025-03-03.
pub fn day(n: usize) -> DayKey {
    DayKey::from_ymd(2025, 3, 3 + n as u32).expect("valid test date")
}

pub fn t(ms: u64) -> Timestamp {
    Timestamp(ms)
}

pub fn selected(grid: &Grid, key: DayKey) -> Vec<u16> {
    grid.selection(key).map(|s| s.to_vec()).unwrap_or_default()
}

// ============================================================================
// Pointer gestures
// ============================================================================

/// Press on the first slot of `path`, enter the rest, release.
pub fn drag(grid: &mut Grid, key: DayKey, path: &[u16], at: u64) -> EventResponse {
    grid.pointer_down(key, Slot(path[0]), t(at));
    for (i, slot) in path[1..].iter().enumerate() {
        grid.pointer_enter(key, Slot(*slot), t(at + 1 + i as u64));
    }
    grid.pointer_up(t(at + path.len() as u64))
}

pub fn click(grid: &mut Grid, key: DayKey, slot: u16, at: u64) -> EventResponse {
    drag(grid, key, &[slot], at)
}

// ============================================================================
// Touch gestures
// ============================================================================

/// Touch contact centered on `slot` of column `column`.
pub fn point_at(grid: &Grid, id: u64, column: usize, slot: u16) -> TouchPoint {
    let (x, y) = grid.geometry().slot_center(column, Slot(slot));
    TouchPoint::new(id, x, y)
}

pub fn offset(point: TouchPoint, dx: f32, dy: f32) -> TouchPoint {
    TouchPoint::new(point.id.0, point.x + dx, point.y + dy)
}

pub fn touch_start(grid: &mut Grid, point: TouchPoint, at: u64) -> EventResponse {
    grid.touch_start_at(&TouchEvent::single(t(at), point))
}

pub fn touch_move(grid: &mut Grid, point: TouchPoint, at: u64) -> EventResponse {
    grid.touch_move(&TouchEvent::single(t(at), point))
}

pub fn touch_end(grid: &mut Grid, point: TouchPoint, at: u64) -> EventResponse {
    grid.touch_end(&TouchEvent::lifted(t(at), point))
}

/// Quick tap on `slot` of column `column`, lifted after 80ms.
pub fn tap(grid: &mut Grid, column: usize, slot: u16, at: u64) -> EventResponse {
    let p = point_at(grid, 1, column, slot);
    touch_start(grid, p, at);
    touch_end(grid, p, at + 80)
}
