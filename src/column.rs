//! One day's column: committed selection plus the gesture state driving it.
//!
//! The pointer and touch handlers live in `input::pointer` and `input::touch`
//! as further `impl Column` blocks; this file holds the state they share and
//! the commit step both end in.

use crate::blocks::{BlockLayout, Slot};
use crate::constants::{HOLD_MS, MOVE_PX};
use crate::day_key::DayKey;
use crate::document::{Document, Subscription};
use crate::hit_test::HitTest;
use crate::input::{EventResponse, GhostGuard, InputState, Session, SlotRange, TouchId};
use crate::slot_set::SlotSet;
use crate::timer::Scheduler;
use std::time::Duration;
use tracing::{debug, error};

/// Touch classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThresholds {
    /// Hold time before a still touch becomes a range selection
    pub hold: Duration,
    /// Travel that turns a pending touch into a scroll
    pub move_px: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            hold: Duration::from_millis(HOLD_MS),
            move_px: MOVE_PX,
        }
    }
}

/// Collaborators a column needs while handling one event.
pub struct InputCx<'a> {
    pub timers: &'a mut dyn Scheduler,
    pub hit_test: &'a dyn HitTest,
}

pub struct Column {
    day: DayKey,
    layout: BlockLayout,
    selected: SlotSet,
    pub(crate) input: InputState,
    pub(crate) ghost: GhostGuard,
    /// Contact handed back to the page as a scroll, not lifted yet
    pub(crate) released_touch: Option<TouchId>,
    /// Cosmetic only; never affects the selection
    pub(crate) hovered: Option<Slot>,
    pub(crate) thresholds: GestureThresholds,
    _listeners: Subscription,
}

impl Column {
    /// Create a column and acquire its document listeners.
    pub fn mount(
        day: DayKey,
        layout: BlockLayout,
        thresholds: GestureThresholds,
        ghost: GhostGuard,
        document: &Document,
    ) -> Self {
        let listeners = document.subscribe(day);
        debug!(day = %day, slots = layout.slot_count(), "column mounted");

        Self {
            day,
            layout,
            selected: SlotSet::new(layout.slot_count()),
            input: InputState::Idle,
            ghost,
            released_touch: None,
            hovered: None,
            thresholds,
            _listeners: listeners,
        }
    }

    pub fn day(&self) -> DayKey {
        self.day
    }

    pub fn layout(&self) -> &BlockLayout {
        &self.layout
    }

    /// Committed selection. Never reflects an in-progress gesture.
    pub fn selected(&self) -> &SlotSet {
        &self.selected
    }

    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    pub fn hovered(&self) -> Option<Slot> {
        self.hovered
    }

    pub fn thresholds(&self) -> GestureThresholds {
        self.thresholds
    }

    pub fn preview(&self) -> Option<SlotRange> {
        self.input.preview()
    }

    /// Whether a range session is running (text selection should be off).
    pub fn is_selecting(&self) -> bool {
        self.input.session().is_some()
    }

    pub fn set_thresholds(&mut self, thresholds: GestureThresholds, ghost_window: Duration) {
        self.thresholds = thresholds;
        self.ghost.set_window(ghost_window);
    }

    /// Replace the committed selection in one step.
    pub(crate) fn commit(&mut self, next: SlotSet) {
        debug_assert_eq!(next.capacity(), self.selected.capacity());
        self.selected = next;
    }

    /// Apply a finished session and report the commit.
    pub(crate) fn commit_session(&mut self, session: Session) -> EventResponse {
        let changed = self.selected.changes_under(session.mode(), session.preview());
        let next = session.resolve(&self.selected);
        self.commit(next);

        debug!(
            day = %self.day,
            mode = ?session.mode(),
            from = session.preview().start().index(),
            to = session.preview().end().index(),
            changed,
            "selection committed"
        );

        EventResponse {
            preview_changed: true,
            committed: true,
            ..EventResponse::default()
        }
    }

    /// Guard for the one-session-per-column invariant.
    ///
    /// Callers turn away input of the other class first, so reaching this
    /// with a live session means a release or cancel of the same class was
    /// lost.
    pub(crate) fn ensure_idle(&mut self, timers: &mut dyn Scheduler) {
        if self.input.is_idle() {
            return;
        }
        error!(
            day = %self.day,
            state = ?self.input,
            "gesture started while another session is active"
        );
        debug_assert!(
            false,
            "column {} already has an active session: {:?}",
            self.day, self.input
        );
        self.abandon(timers);
    }

    /// Drop any session without touching the selection.
    pub(crate) fn abandon(&mut self, timers: &mut dyn Scheduler) -> bool {
        let previous = self.input.take();
        if let Some(timer) = previous.pending_timer() {
            timers.cancel(timer);
        }
        previous.is_active()
    }

    /// Release everything the column holds before it is dropped.
    pub fn teardown(&mut self, timers: &mut dyn Scheduler) {
        self.abandon(timers);
        let cancelled = timers.cancel_owner(self.day);
        debug!(day = %self.day, cancelled, "column torn down");
    }
}
