//! Deferred callbacks for the touch hold promotion.
//!
//! The grid is single-threaded and driven by timestamped events, so timers
//! are plain entries in a queue that the owner drains with [`TimerQueue::due`].
//! A cancelled handle is gone from the queue and can never be returned again.

use crate::day_key::DayKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Add;
use std::time::Duration;
use tracing::trace;

/// Milliseconds on the host's monotonic event clock.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Time since `earlier`, zero if the clock went backwards.
    pub fn saturating_since(self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        let ms = u64::try_from(rhs.as_millis()).unwrap_or(u64::MAX);
        Timestamp(self.0.saturating_add(ms))
    }
}

/// Cancellation token for one scheduled callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

/// A timer that has come due, handed back to its owning column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTimer {
    pub handle: TimerHandle,
    pub owner: DayKey,
    pub due: Timestamp,
}

/// Schedule/cancel seam used by the input state machines.
pub trait Scheduler {
    /// Arm a one-shot callback for `owner` that fires no earlier than `now + delay`.
    fn schedule(&mut self, owner: DayKey, now: Timestamp, delay: Duration) -> TimerHandle;

    /// Disarm a callback. Cancelling twice, or after it fired, is a no-op.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Disarm everything `owner` still has pending.
    fn cancel_owner(&mut self, owner: DayKey) -> usize;
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    owner: DayKey,
    due: Timestamp,
}

/// Deterministic timer queue.
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    entries: BTreeMap<TimerHandle, Entry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Earliest deadline still armed.
    pub fn next_due(&self) -> Option<Timestamp> {
        self.entries.values().map(|e| e.due).min()
    }

    /// Remove and return every timer due at or before `now`, earliest first.
    pub fn due(&mut self, now: Timestamp) -> Vec<FiredTimer> {
        let ready: Vec<TimerHandle> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.due <= now)
            .map(|(handle, _)| *handle)
            .collect();

        let mut fired: Vec<FiredTimer> = ready
            .into_iter()
            .filter_map(|handle| {
                self.entries.remove(&handle).map(|entry| FiredTimer {
                    handle,
                    owner: entry.owner,
                    due: entry.due,
                })
            })
            .collect();
        fired.sort_by_key(|t| (t.due, t.handle));
        fired
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, owner: DayKey, now: Timestamp, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        let due = now + delay;
        self.entries.insert(handle, Entry { owner, due });
        trace!(day = %owner, due = due.as_millis(), "timer armed");
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.entries.remove(&handle).is_some()
    }

    fn cancel_owner(&mut self, owner: DayKey) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.owner != owner);
        before - self.entries.len()
    }
}
