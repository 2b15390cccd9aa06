//! Integration tests for slotgrid.
//!
//! These drive complete gestures through `Grid` and check what ends up
//! committed and published.

mod replay_tests;
mod touch_workflow_tests;
