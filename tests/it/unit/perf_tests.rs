//! Dispatch timing counters.

use crate::helpers::*;
use slotgrid::perf::{DispatchStats, ScopedTimer, measure};

#[test]
fn test_grid_counts_dispatches() {
    let (mut grid, _) = TestGridBuilder::new().build();
    drag(&mut grid, day(0), &[1, 2, 3], 0);
    tap(&mut grid, 0, 10, 1000);

    let stats = grid.stats();
    assert_eq!(stats.count("pointer_down"), 1);
    assert_eq!(stats.count("pointer_enter"), 2);
    assert_eq!(stats.count("pointer_up"), 1);
    assert_eq!(stats.count("touch_start"), 1);
    assert_eq!(stats.count("touch_end"), 1);
    assert_eq!(stats.total(), 6);
}

#[test]
fn test_slow_dispatch_counted() {
    let mut stats = DispatchStats::new();
    stats.record("touch_move", 1.0);
    stats.record("touch_move", 40.0);
    assert_eq!(stats.count("touch_move"), 2);
    assert_eq!(stats.slow_count("touch_move"), 1);
    assert_eq!(stats.slow_count("pointer_up"), 0);
}

#[test]
fn test_measure_returns_value() {
    let (value, ms) = measure(|| 6 * 7);
    assert_eq!(value, 42);
    assert!(ms >= 0.0);
}

#[test]
fn test_scoped_timer_name() {
    let timer = ScopedTimer::new("hit_test", 100.0);
    assert_eq!(timer.name(), "hit_test");
    assert!(timer.elapsed_ms() >= 0.0);
}
