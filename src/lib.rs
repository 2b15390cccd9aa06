//! Drag-to-select availability grid.
//!
//! Columns of fixed-granularity time slots, one per day, selected by mouse
//! drags or by touch (tap to toggle, hold then drag for a range). The crate
//! interprets input and keeps the committed selections; drawing is left to
//! the host, which reads `render::SlotView`s and applies `EventResponse`s.

pub mod blocks;
pub mod column;
pub mod constants;
pub mod day_key;
pub mod document;
pub mod error;
pub mod grid;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod replay;
pub mod settings;
pub mod settings_watcher;
pub mod slot_set;
pub mod timer;

pub use blocks::{Block, BlockLayout, Slot};
pub use column::{Column, GestureThresholds};
pub use day_key::DayKey;
pub use error::{GridError, Result};
pub use grid::{Grid, SelectionListener, SelectionMap, SelectionRecorder};
pub use input::{EventResponse, SelectMode, TouchEvent, TouchPoint};
pub use settings::GridSettings;
pub use slot_set::SlotSet;
pub use timer::Timestamp;
