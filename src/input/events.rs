//! Input payloads consumed from the platform and the responses handed back.

use crate::timer::Timestamp;
use serde::{Deserialize, Serialize};

/// Platform-assigned identifier of one touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TouchId(pub u64);

/// One contact point in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: TouchId,
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self {
            id: TouchId(id),
            x,
            y,
        }
    }
}

/// A touch start/move/end/cancel as the platform reports it.
///
/// `touches` holds every contact still on the surface; `changed` holds the
/// contacts this event is about (for an end, the lifted ones).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub time: Timestamp,
    #[serde(default)]
    pub touches: Vec<TouchPoint>,
    #[serde(default)]
    pub changed: Vec<TouchPoint>,
}

impl TouchEvent {
    /// A single contact that is down and changed (start or move).
    pub fn single(time: Timestamp, point: TouchPoint) -> Self {
        Self {
            time,
            touches: vec![point],
            changed: vec![point],
        }
    }

    /// A single contact that was lifted or cancelled.
    pub fn lifted(time: Timestamp, point: TouchPoint) -> Self {
        Self {
            time,
            touches: Vec::new(),
            changed: vec![point],
        }
    }

    pub fn is_multi_touch(&self) -> bool {
        self.touches.len() >= 2
    }

    /// Position of `id`, preferring the changed list.
    pub fn find(&self, id: TouchId) -> Option<TouchPoint> {
        self.changed
            .iter()
            .chain(self.touches.iter())
            .find(|p| p.id == id)
            .copied()
    }

    /// Position of `id` only if this event is about it.
    pub fn find_changed(&self, id: TouchId) -> Option<TouchPoint> {
        self.changed.iter().find(|p| p.id == id).copied()
    }

    /// The contact that started this gesture.
    pub fn primary(&self) -> Option<TouchPoint> {
        self.changed.first().or(self.touches.first()).copied()
    }
}

/// What the host should do after dispatching an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress native scrolling for this event
    pub prevent_default: bool,
    /// Suppress the synthetic click that follows a touch release
    pub suppress_click: bool,
    /// The preview or hover state changed and should be redrawn
    pub preview_changed: bool,
    /// The selected set was replaced
    pub committed: bool,
}

impl EventResponse {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn redraw() -> Self {
        Self {
            preview_changed: true,
            ..Self::default()
        }
    }

    pub fn merge(self, other: EventResponse) -> EventResponse {
        EventResponse {
            prevent_default: self.prevent_default || other.prevent_default,
            suppress_click: self.suppress_click || other.suppress_click,
            preview_changed: self.preview_changed || other.preview_changed,
            committed: self.committed || other.committed,
        }
    }
}
