//! Pointer and touch input handling for a day column.
//!
//! Raw platform events are turned into range-selection commits here.
//!
//! ## Architecture
//!
//! Each column owns one `InputState`. Pointer drags and touch gestures are
//! variants of the same enum, so at most one session can exist per column.
//! Both input classes funnel into `Session`, which applies the same
//! contiguous-range rule whichever way the current slot was found.
//!
//! ## Modules
//!
//! - `events` - Touch payloads and the response handed back to the host
//! - `range` - Select/deselect mode, slot ranges, the shared session
//! - `state` - Input state machine enum
//! - `pointer` - Press/enter/leave/release handling
//! - `touch` - Scroll vs tap vs hold disambiguation
//! - `ghost` - Suppression of synthetic mouse events after touch

mod events;
mod ghost;
mod pointer;
mod range;
mod state;
mod touch;

pub use events::{EventResponse, TouchEvent, TouchId, TouchPoint};
pub use ghost::GhostGuard;
pub use range::{SelectMode, Session, SlotRange};
pub use state::{InputState, PendingTouch};
