//! Document-level listener registry.
//!
//! Release, touch-end and touch-cancel must reach a column even when the
//! pointer has left it. Each mounted column holds one [`Subscription`]; the
//! grid fans global events out to whoever is subscribed. Dropping the guard
//! unsubscribes, so every teardown path releases the listener.

use crate::day_key::DayKey;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::trace;

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, DayKey>,
}

/// Shared registry of columns listening for document-wide events.
#[derive(Debug, Clone, Default)]
pub struct Document {
    inner: Arc<Mutex<Registry>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the document listeners for a column.
    pub fn subscribe(&self, day: DayKey) -> Subscription {
        let mut registry = self.inner.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, day);
        trace!(day = %day, id, "document listeners acquired");

        Subscription {
            id,
            day,
            registry: Arc::clone(&self.inner),
        }
    }

    /// Subscribed days in subscription order, without duplicates.
    pub fn subscribers(&self) -> Vec<DayKey> {
        let registry = self.inner.lock();
        let mut days: Vec<DayKey> = Vec::with_capacity(registry.listeners.len());
        for day in registry.listeners.values() {
            if !days.contains(day) {
                days.push(*day);
            }
        }
        days
    }

    pub fn is_subscribed(&self, day: DayKey) -> bool {
        self.inner.lock().listeners.values().any(|d| *d == day)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}

/// Scoped ownership of one column's document listeners.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    day: DayKey,
    registry: Arc<Mutex<Registry>>,
}

impl Subscription {
    pub fn day(&self) -> DayKey {
        self.day
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.registry.lock().listeners.remove(&self.id);
        trace!(day = %self.day, id = self.id, "document listeners released");
    }
}
