//! Unit tests for slotgrid.

mod hit_testing_tests;
mod perf_tests;
mod snapshot_tests;
