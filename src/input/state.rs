//! Per-column input state machine.
//!
//! One enum holds whatever gesture the column is in, so a column can never
//! have a pointer drag and a touch session at the same time.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging             (pointer press on a slot)
//! Dragging -> Idle             (global release, commits)
//!
//! Idle -> TouchPending         (single contact starts on a slot)
//! TouchPending -> TouchSelecting (hold timer fires within the move threshold)
//! TouchPending -> Idle         (moved past threshold, second contact, tap, cancel)
//! TouchSelecting -> Idle       (touch end commits, touch cancel discards)
//! ```

use super::events::TouchId;
use super::range::{SelectMode, Session, SlotRange};
use crate::blocks::Slot;
use crate::timer::{TimerHandle, Timestamp};

/// A touch waiting to be classified as scroll, tap or hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingTouch {
    /// Contact being tracked; other contacts are ignored
    pub touch: TouchId,
    /// Screen position of the contact at touch start
    pub start: (f32, f32),
    /// Slot the contact started on
    pub anchor: Slot,
    /// Hold promotion timer
    pub timer: TimerHandle,
    pub started_at: Timestamp,
}

impl PendingTouch {
    pub fn distance_from_start(&self, x: f32, y: f32) -> f32 {
        (x - self.start.0).hypot(y - self.start.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress
    #[default]
    Idle,

    /// Pointer range selection
    Dragging { session: Session },

    /// Touch down, not yet scroll, tap or hold
    TouchPending(PendingTouch),

    /// Touch range selection after a hold
    TouchSelecting { touch: TouchId, session: Session },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if any gesture owns the column
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_touch_pending(&self) -> bool {
        matches!(self, Self::TouchPending(_))
    }

    pub fn is_touch_selecting(&self) -> bool {
        matches!(self, Self::TouchSelecting { .. })
    }

    /// The range session, for either input class
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Dragging { session } | Self::TouchSelecting { session, .. } => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match self {
            Self::Dragging { session } | Self::TouchSelecting { session, .. } => Some(session),
            _ => None,
        }
    }

    pub fn mode(&self) -> Option<SelectMode> {
        self.session().map(Session::mode)
    }

    pub fn preview(&self) -> Option<SlotRange> {
        self.session().map(Session::preview)
    }

    /// Contact identity this column is following, if any
    pub fn tracked_touch(&self) -> Option<TouchId> {
        match self {
            Self::TouchPending(pending) => Some(pending.touch),
            Self::TouchSelecting { touch, .. } => Some(*touch),
            _ => None,
        }
    }

    /// Hold timer still armed for this column
    pub fn pending_timer(&self) -> Option<TimerHandle> {
        match self {
            Self::TouchPending(pending) => Some(pending.timer),
            _ => None,
        }
    }

    /// Reset to Idle, returning what was there
    pub fn take(&mut self) -> InputState {
        std::mem::take(self)
    }
}
