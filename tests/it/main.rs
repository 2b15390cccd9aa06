//! Single test binary entry point.
//!
//! Structure:
//! - unit: Single-component tests (settings, hit testing, perf, snapshots)
//! - integration: Gesture workflows driven through the grid

mod helpers;
mod integration;
mod unit;
