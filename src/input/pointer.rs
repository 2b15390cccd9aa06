//! Pointer (mouse-class) handling: press, enter, leave, global release.
//!
//! A press anchors a session, entering a slot re-derives the preview range,
//! and the document-level release commits it wherever the pointer ended up.

use super::{EventResponse, InputState, Session};
use crate::blocks::Slot;
use crate::column::Column;
use crate::profile_scope;
use crate::timer::{Scheduler, Timestamp};
use tracing::{debug, trace};

impl Column {
    pub fn pointer_down(
        &mut self,
        slot: Slot,
        at: Timestamp,
        timers: &mut dyn Scheduler,
    ) -> EventResponse {
        profile_scope!("pointer_down");

        if self.ghost.suppresses(at) {
            trace!(day = %self.day(), slot = slot.index(), "ghost pointer down ignored");
            return EventResponse::none();
        }
        if !self.layout().contains(slot) {
            return EventResponse::none();
        }
        if self.input.tracked_touch().is_some() {
            trace!(day = %self.day(), slot = slot.index(), "pointer down during touch gesture ignored");
            return EventResponse::none();
        }

        self.ensure_idle(timers);
        let session = Session::begin(slot, self.selected());
        debug!(day = %self.day(), anchor = slot.index(), mode = ?session.mode(), "drag started");
        self.input = InputState::Dragging { session };
        EventResponse::redraw()
    }

    pub fn pointer_enter(&mut self, slot: Slot, at: Timestamp) -> EventResponse {
        if self.ghost.suppresses(at) {
            trace!(day = %self.day(), slot = slot.index(), "ghost pointer enter ignored");
            return EventResponse::none();
        }
        if !self.layout().contains(slot) {
            return EventResponse::none();
        }

        let mut changed = self.hovered != Some(slot);
        self.hovered = Some(slot);

        if let InputState::Dragging { session } = &mut self.input {
            changed |= session.extend_to(slot);
        }

        if changed {
            EventResponse::redraw()
        } else {
            EventResponse::none()
        }
    }

    pub fn pointer_leave(&mut self, at: Timestamp) -> EventResponse {
        if self.ghost.suppresses(at) {
            return EventResponse::none();
        }
        if self.hovered.take().is_some() {
            EventResponse::redraw()
        } else {
            EventResponse::none()
        }
    }

    /// Document-level pointer release. Commits a drag no matter where it ended.
    pub fn pointer_release(&mut self, _at: Timestamp) -> EventResponse {
        let InputState::Dragging { session } = self.input else {
            return EventResponse::none();
        };
        self.input = InputState::Idle;
        self.commit_session(session)
    }
}
