//! Crate-wide constants.
//!
//! Centralizes the gesture thresholds and layout defaults so settings,
//! tests and the input state machines agree on the same numbers.

// ============================================================================
// Block Model
// ============================================================================

/// Default slot length in minutes
pub const DEFAULT_GRANULARITY_MINUTES: u16 = 15;

/// First hour rendered in a column
pub const DEFAULT_START_HOUR: u8 = 0;

/// Hour (exclusive) at which a column ends
pub const DEFAULT_END_HOUR: u8 = 24;

/// Minutes in one hour
pub const MINUTES_PER_HOUR: u16 = 60;

// ============================================================================
// Gesture Timing
// ============================================================================

/// How long a touch must be held still before it becomes a range selection
pub const HOLD_MS: u64 = 300;

/// Distance in pixels a pending touch may travel before it counts as a scroll
pub const MOVE_PX: f32 = 15.0;

/// Window after a touch release during which mouse events are synthetic
pub const GHOST_MS: u64 = 500;

// ============================================================================
// Layout
// ============================================================================

/// Rendered height of one slot in pixels
pub const SLOT_HEIGHT: f32 = 20.0;

/// Rendered width of one day column in pixels
pub const COLUMN_WIDTH: f32 = 200.0;

// ============================================================================
// Logging
// ============================================================================

/// Log level used when neither settings nor `RUST_LOG` say otherwise
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "slotgrid";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
