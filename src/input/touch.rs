//! Touch handling: telling a scroll, a tap and a hold-to-drag apart.
//!
//! A single contact starts out pending with a hold timer armed. Travelling
//! `move_px` before the timer fires hands the gesture back to the page as a
//! scroll. Lifting early is a tap. Holding still promotes the contact to a
//! range session that behaves exactly like a pointer drag, except the slot
//! under the finger comes from hit testing its coordinates.

use super::events::TouchEvent;
use super::state::PendingTouch;
use super::{EventResponse, InputState, Session};
use crate::blocks::Slot;
use crate::column::{Column, InputCx};
use crate::profile_scope;
use crate::timer::{Scheduler, TimerHandle, Timestamp};
use tracing::{debug, trace};

impl Column {
    /// Touch began on `slot` of this column.
    pub fn touch_start(
        &mut self,
        slot: Slot,
        event: &TouchEvent,
        timers: &mut dyn Scheduler,
    ) -> EventResponse {
        profile_scope!("touch_start");

        if event.is_multi_touch() {
            // A second finger means pinch or two-finger scroll; let the page have it.
            return match self.input {
                InputState::TouchPending(pending) => {
                    self.release_to_page(pending, timers);
                    debug!(day = %self.day(), "second contact, pending touch dropped");
                    EventResponse::none()
                }
                InputState::TouchSelecting { .. } => EventResponse {
                    prevent_default: true,
                    ..EventResponse::default()
                },
                _ => EventResponse::none(),
            };
        }

        let Some(point) = event.primary() else {
            return EventResponse::none();
        };
        if !self.layout().contains(slot) {
            return EventResponse::none();
        }
        if self.input.is_dragging() {
            trace!(day = %self.day(), slot = slot.index(), "touch start during mouse drag ignored");
            return EventResponse::none();
        }

        self.ensure_idle(timers);
        self.released_touch = None;
        let timer = timers.schedule(self.day(), event.time, self.thresholds.hold);
        self.input = InputState::TouchPending(PendingTouch {
            touch: point.id,
            start: (point.x, point.y),
            anchor: slot,
            timer,
            started_at: event.time,
        });
        debug!(day = %self.day(), anchor = slot.index(), touch = point.id.0, "touch pending");

        // Native scrolling stays enabled until the hold promotes
        EventResponse::none()
    }

    pub fn touch_move(&mut self, event: &TouchEvent, cx: &mut InputCx<'_>) -> EventResponse {
        profile_scope!("touch_move");

        match self.input {
            InputState::TouchPending(pending) => {
                if event.is_multi_touch() {
                    self.release_to_page(pending, cx.timers);
                    debug!(day = %self.day(), "second contact, pending touch dropped");
                    return EventResponse::none();
                }

                let Some(point) = event.find(pending.touch) else {
                    return EventResponse::none();
                };
                let distance = pending.distance_from_start(point.x, point.y);
                if distance >= self.thresholds.move_px {
                    self.release_to_page(pending, cx.timers);
                    debug!(day = %self.day(), distance, "touch became a scroll");
                }
                EventResponse::none()
            }
            InputState::TouchSelecting { touch, .. } => {
                let mut response = EventResponse {
                    prevent_default: true,
                    ..EventResponse::default()
                };

                let Some(point) = event.find(touch) else {
                    return response;
                };
                let hit = cx.hit_test.slot_at(point.x, point.y);
                let Some(hit) = hit.filter(|h| h.day == self.day()) else {
                    trace!(day = %self.day(), x = point.x, y = point.y, "touch hit test missed");
                    return response;
                };

                if let Some(session) = self.input.session_mut() {
                    response.preview_changed = session.extend_to(hit.slot);
                }
                response
            }
            _ => EventResponse::none(),
        }
    }

    /// Hold timer fired. Stale or cancelled timers are ignored.
    pub fn hold_elapsed(&mut self, handle: TimerHandle, at: Timestamp) -> EventResponse {
        let InputState::TouchPending(pending) = self.input else {
            trace!(day = %self.day(), "hold timer fired with no pending touch");
            return EventResponse::none();
        };
        if pending.timer != handle {
            trace!(day = %self.day(), "stale hold timer ignored");
            return EventResponse::none();
        }

        let session = Session::begin(pending.anchor, self.selected());
        debug!(
            day = %self.day(),
            anchor = pending.anchor.index(),
            mode = ?session.mode(),
            held_ms = at.saturating_since(pending.started_at).as_millis() as u64,
            "touch promoted to range selection"
        );
        self.input = InputState::TouchSelecting {
            touch: pending.touch,
            session,
        };
        EventResponse::redraw()
    }

    pub fn touch_end(&mut self, event: &TouchEvent, timers: &mut dyn Scheduler) -> EventResponse {
        profile_scope!("touch_end");

        let Some(tracked) = self.input.tracked_touch() else {
            // A contact handed to the page still lifts on this column
            if let Some(released) = self.released_touch {
                if event.find_changed(released).is_some() {
                    self.released_touch = None;
                    self.ghost.record(event.time);
                    trace!(day = %self.day(), "released contact lifted, ghost guard armed");
                }
            }
            return EventResponse::none();
        };
        let Some(point) = event.find_changed(tracked) else {
            trace!(day = %self.day(), "touch end for untracked contact ignored");
            return EventResponse::none();
        };

        let state = self.input.take();
        self.ghost.record(event.time);

        match state {
            InputState::TouchSelecting { session, .. } => EventResponse {
                suppress_click: true,
                prevent_default: true,
                ..self.commit_session(session)
            },
            InputState::TouchPending(pending) => {
                timers.cancel(pending.timer);
                if pending.distance_from_start(point.x, point.y) >= self.thresholds.move_px {
                    return EventResponse::none();
                }
                debug!(day = %self.day(), slot = pending.anchor.index(), "tap");
                // A tap is a session that never left its anchor
                let tap = Session::begin(pending.anchor, self.selected());
                EventResponse {
                    suppress_click: true,
                    ..self.commit_session(tap)
                }
            }
            _ => EventResponse::none(),
        }
    }

    /// Platform cancelled the touch sequence. Discards without committing.
    pub fn touch_cancel(&mut self, event: &TouchEvent, timers: &mut dyn Scheduler) -> EventResponse {
        if self.input.tracked_touch().is_none() {
            if let Some(released) = self.released_touch {
                if event.find_changed(released).is_some() {
                    self.released_touch = None;
                }
            }
            return EventResponse::none();
        }
        let was_selecting = self.input.is_touch_selecting();
        self.abandon(timers);
        debug!(day = %self.day(), "touch cancelled");

        if was_selecting {
            EventResponse::redraw()
        } else {
            EventResponse::none()
        }
    }

    /// Give a pending contact back to the page as a scroll or pinch.
    ///
    /// The contact stays remembered so its eventual lift still arms the
    /// ghost guard.
    fn release_to_page(&mut self, pending: PendingTouch, timers: &mut dyn Scheduler) {
        timers.cancel(pending.timer);
        self.input = InputState::Idle;
        self.released_touch = Some(pending.touch);
    }
}
