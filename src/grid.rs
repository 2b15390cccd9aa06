//! The grid: one column per visible day and the map reported upward.
//!
//! Column-targeted events (press, enter, leave, touch start) are routed by day
//! key. Document-level events (release, touch move/end/cancel) go to every
//! column holding a document subscription; each ignores what is not its own.
//! Every event first fires the hold timers that came due before it, so timer
//! callbacks and input are processed in timestamp order.

use crate::blocks::{BlockLayout, Slot};
use crate::column::{Column, InputCx};
use crate::day_key::DayKey;
use crate::document::Document;
use crate::error::{GridError, Result};
use crate::hit_test::{GridGeometry, HitTest, SlotHit, SlotHitIndex};
use crate::input::{EventResponse, GhostGuard, TouchEvent};
use crate::perf::DispatchStats;
use crate::settings::GridSettings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use crate::slot_set::SlotSet;
use crate::timer::{TimerQueue, Timestamp};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, trace, warn};

/// Day key to ascending slot indices, the shape published upward.
pub type SelectionMap = BTreeMap<DayKey, Vec<u16>>;

/// Receives committed selections.
pub trait SelectionListener {
    /// Fired once per successful commit, never for cancelled gestures.
    fn selection_changed(&mut self, day: DayKey, selected: &SlotSet);

    /// Fired after every commit with the whole grid's selection.
    fn selections_published(&mut self, _map: &SelectionMap) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub day: DayKey,
    pub slots: Vec<u16>,
}

/// Listener that keeps everything it hears; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct SelectionRecorder {
    changes: Arc<Mutex<Vec<SelectionChange>>>,
    latest: Arc<Mutex<Option<SelectionMap>>>,
}

impl SelectionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> Vec<SelectionChange> {
        self.changes.lock().clone()
    }

    pub fn change_count(&self) -> usize {
        self.changes.lock().len()
    }

    pub fn latest(&self) -> Option<SelectionMap> {
        self.latest.lock().clone()
    }
}

impl SelectionListener for SelectionRecorder {
    fn selection_changed(&mut self, day: DayKey, selected: &SlotSet) {
        self.changes.lock().push(SelectionChange {
            day,
            slots: selected.to_vec(),
        });
    }

    fn selections_published(&mut self, map: &SelectionMap) {
        *self.latest.lock() = Some(map.clone());
    }
}

pub struct Grid {
    settings: GridSettings,
    layout: BlockLayout,
    /// Left-to-right column order, ascending by date
    order: Vec<DayKey>,
    columns: BTreeMap<DayKey, Column>,
    document: Document,
    timers: TimerQueue,
    hit_index: SlotHitIndex,
    listeners: Vec<Box<dyn SelectionListener>>,
    stats: DispatchStats,
}

impl Grid {
    /// Mount one column per distinct day.
    pub fn new<I>(days: I, settings: GridSettings) -> Result<Self>
    where
        I: IntoIterator<Item = DayKey>,
    {
        settings.validate()?;
        let layout = settings.block_layout()?;

        let mut grid = Self {
            hit_index: SlotHitIndex::new(settings.geometry()),
            settings,
            layout,
            order: Vec::new(),
            columns: BTreeMap::new(),
            document: Document::new(),
            timers: TimerQueue::new(),
            listeners: Vec::new(),
            stats: DispatchStats::new(),
        };
        for day in days {
            grid.mount(day);
        }
        grid.rebuild_hit_index();
        info!(days = grid.order.len(), slots = layout.slot_count(), "grid ready");
        Ok(grid)
    }

    fn mount(&mut self, day: DayKey) -> bool {
        if self.columns.contains_key(&day) {
            return false;
        }
        let column = Column::mount(
            day,
            self.layout,
            self.settings.thresholds(),
            GhostGuard::new(self.settings.ghost_window()),
            &self.document,
        );
        self.columns.insert(day, column);
        let at = self.order.partition_point(|d| *d < day);
        self.order.insert(at, day);
        true
    }

    fn rebuild_hit_index(&mut self) {
        self.hit_index.rebuild(&self.order, self.layout.slot_count());
    }

    // ------------------------------------------------------------------
    // Days and state
    // ------------------------------------------------------------------

    /// Mount a column for `day`. Returns false if already mounted.
    pub fn add_day(&mut self, day: DayKey) -> bool {
        let added = self.mount(day);
        if added {
            self.rebuild_hit_index();
        }
        added
    }

    /// Tear down a column: timers cancelled, listeners released, selection dropped.
    pub fn remove_day(&mut self, day: DayKey) -> bool {
        let Some(mut column) = self.columns.remove(&day) else {
            return false;
        };
        column.teardown(&mut self.timers);
        drop(column);
        self.order.retain(|d| *d != day);
        self.rebuild_hit_index();
        true
    }

    /// Mounted days, ascending (left to right).
    pub fn days(&self) -> &[DayKey] {
        &self.order
    }

    pub fn column(&self, day: DayKey) -> Option<&Column> {
        self.columns.get(&day)
    }

    pub fn selection(&self, day: DayKey) -> Option<&SlotSet> {
        self.columns.get(&day).map(Column::selected)
    }

    pub fn selection_map(&self) -> SelectionMap {
        self.columns
            .iter()
            .map(|(day, column)| (*day, column.selected().to_vec()))
            .collect()
    }

    pub fn layout(&self) -> &BlockLayout {
        &self.layout
    }

    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn stats(&self) -> &DispatchStats {
        &self.stats
    }

    pub fn add_listener(&mut self, listener: Box<dyn SelectionListener>) {
        self.listeners.push(listener);
    }

    /// Validate an externally supplied slot index against the column layout.
    pub fn slot(&self, index: u16) -> Result<Slot> {
        self.layout.slot(index)
    }

    /// Mounted column for `day`, as an error for callers that need one.
    pub fn require(&self, day: DayKey) -> Result<&Column> {
        self.columns
            .get(&day)
            .ok_or_else(|| GridError::UnknownDay(day.to_string()))
    }

    // ------------------------------------------------------------------
    // Settings and geometry
    // ------------------------------------------------------------------

    /// Apply reloaded settings between gestures.
    ///
    /// Thresholds, the ghost window and geometry take effect immediately.
    /// The slot layout is fixed for the grid's lifetime.
    pub fn apply_settings(&mut self, settings: GridSettings) -> Result<()> {
        settings.validate()?;
        if settings.block_layout()? != self.layout {
            warn!("slot layout changes need a new grid; keeping current layout");
        }

        for column in self.columns.values_mut() {
            column.set_thresholds(settings.thresholds(), settings.ghost_window());
        }
        let geometry = GridGeometry {
            column_width: settings.column_width,
            slot_height: settings.slot_height,
            ..*self.hit_index.geometry()
        };
        self.hit_index
            .set_geometry(geometry, &self.order, self.layout.slot_count());

        self.settings = GridSettings {
            granularity_minutes: self.settings.granularity_minutes,
            start_hour: self.settings.start_hour,
            end_hour: self.settings.end_hour,
            ..settings
        };
        debug!("settings applied");
        Ok(())
    }

    /// Check the settings watcher and apply a changed file.
    ///
    /// Returns true if new settings were applied.
    pub fn check_settings_reload(&mut self, watcher: &mut SettingsWatcher) -> Result<bool> {
        let mut applied = false;
        while let Some(event) = watcher.poll() {
            applied |= self.reload_settings(&event, watcher.path())?;
        }
        Ok(applied)
    }

    /// React to one watcher event for the settings file at `path`.
    pub fn reload_settings(&mut self, event: &SettingsEvent, path: &Path) -> Result<bool> {
        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                info!(path = %path.display(), "settings file changed, reloading");
                let settings = GridSettings::load_from(path)?;
                self.apply_settings(settings)?;
                Ok(true)
            }
            SettingsEvent::Deleted => {
                warn!(path = %path.display(), "settings file deleted, keeping current settings");
                Ok(false)
            }
            SettingsEvent::Error(e) => {
                error!(error = %e, "settings watch error");
                Ok(false)
            }
        }
    }

    pub fn geometry(&self) -> &GridGeometry {
        self.hit_index.geometry()
    }

    pub fn set_geometry(&mut self, geometry: GridGeometry) {
        self.hit_index
            .set_geometry(geometry, &self.order, self.layout.slot_count());
    }

    pub fn set_scroll_top(&mut self, scroll_top: f32) {
        self.hit_index.set_scroll_top(scroll_top);
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<SlotHit> {
        self.hit_index.slot_at(x, y)
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    /// Fire hold timers due at or before `now`.
    pub fn advance(&mut self, now: Timestamp) -> EventResponse {
        let mut response = EventResponse::none();
        for fired in self.timers.due(now) {
            // Owner torn down: the timer is dead
            let Some(column) = self.columns.get_mut(&fired.owner) else {
                trace!(day = %fired.owner, "timer for unmounted column dropped");
                continue;
            };
            response = response.merge(column.hold_elapsed(fired.handle, fired.due));
        }
        response
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    pub fn pointer_down(&mut self, day: DayKey, slot: Slot, at: Timestamp) -> EventResponse {
        self.timed("pointer_down", |grid| {
            let mut response = grid.advance(at);
            let Some(column) = grid.columns.get_mut(&day) else {
                trace!(day = %day, "pointer down on unmounted day");
                return response;
            };
            response = response.merge(column.pointer_down(slot, at, &mut grid.timers));
            response
        })
    }

    pub fn pointer_enter(&mut self, day: DayKey, slot: Slot, at: Timestamp) -> EventResponse {
        self.timed("pointer_enter", |grid| {
            let response = grid.advance(at);
            match grid.columns.get_mut(&day) {
                Some(column) => response.merge(column.pointer_enter(slot, at)),
                None => response,
            }
        })
    }

    pub fn pointer_leave(&mut self, day: DayKey, at: Timestamp) -> EventResponse {
        self.timed("pointer_leave", |grid| {
            let response = grid.advance(at);
            match grid.columns.get_mut(&day) {
                Some(column) => response.merge(column.pointer_leave(at)),
                None => response,
            }
        })
    }

    /// Document-level pointer release.
    pub fn pointer_up(&mut self, at: Timestamp) -> EventResponse {
        self.timed("pointer_up", |grid| {
            let response = grid.advance(at);
            grid.broadcast(response, |column, _| column.pointer_release(at))
        })
    }

    // ------------------------------------------------------------------
    // Touch input
    // ------------------------------------------------------------------

    /// Touch began on a known slot of `day`.
    pub fn touch_start(&mut self, day: DayKey, slot: Slot, event: &TouchEvent) -> EventResponse {
        self.timed("touch_start", |grid| {
            let response = grid.advance(event.time);
            let Some(column) = grid.columns.get_mut(&day) else {
                trace!(day = %day, "touch start on unmounted day");
                return response;
            };
            response.merge(column.touch_start(slot, event, &mut grid.timers))
        })
    }

    /// Touch began somewhere on screen; the slot is found by hit testing.
    pub fn touch_start_at(&mut self, event: &TouchEvent) -> EventResponse {
        let hit = event.primary().and_then(|p| self.hit_test(p.x, p.y));
        match hit {
            Some(hit) => self.touch_start(hit.day, hit.slot, event),
            None => self.advance(event.time),
        }
    }

    /// Document-level touch move.
    pub fn touch_move(&mut self, event: &TouchEvent) -> EventResponse {
        self.timed("touch_move", |grid| {
            let response = grid.advance(event.time);
            grid.broadcast(response, |column, cx| column.touch_move(event, cx))
        })
    }

    /// Document-level touch end.
    pub fn touch_end(&mut self, event: &TouchEvent) -> EventResponse {
        self.timed("touch_end", |grid| {
            let response = grid.advance(event.time);
            grid.broadcast(response, |column, cx| column.touch_end(event, cx.timers))
        })
    }

    /// Document-level touch cancel.
    pub fn touch_cancel(&mut self, event: &TouchEvent) -> EventResponse {
        self.timed("touch_cancel", |grid| {
            let response = grid.advance(event.time);
            grid.broadcast(response, |column, cx| column.touch_cancel(event, cx.timers))
        })
    }

    // ------------------------------------------------------------------
    // Dispatch plumbing
    // ------------------------------------------------------------------

    fn timed<F>(&mut self, kind: &'static str, f: F) -> EventResponse
    where
        F: FnOnce(&mut Self) -> EventResponse,
    {
        let start = Instant::now();
        let response = f(self);
        self.stats
            .record(kind, start.elapsed().as_secs_f64() * 1000.0);
        response
    }

    /// Deliver a document-level event to every subscribed column, then
    /// publish the columns that committed.
    fn broadcast<F>(&mut self, mut response: EventResponse, mut deliver: F) -> EventResponse
    where
        F: FnMut(&mut Column, &mut InputCx<'_>) -> EventResponse,
    {
        let mut committed = Vec::new();

        for day in self.document.subscribers() {
            let Some(column) = self.columns.get_mut(&day) else {
                continue;
            };
            let mut cx = InputCx {
                timers: &mut self.timers,
                hit_test: &self.hit_index,
            };
            let outcome = deliver(column, &mut cx);
            if outcome.committed {
                committed.push(day);
            }
            response = response.merge(outcome);
        }

        for day in committed {
            self.publish(day);
        }
        response
    }

    /// Report one column's commit, then the whole map.
    fn publish(&mut self, day: DayKey) {
        let map = self.selection_map();
        let Some(column) = self.columns.get(&day) else {
            return;
        };
        debug!(day = %day, selected = column.selected().len(), "publishing selection");

        for listener in self.listeners.iter_mut() {
            listener.selection_changed(day, column.selected());
        }
        for listener in self.listeners.iter_mut() {
            listener.selections_published(&map);
        }
    }
}
