//! Range semantics shared by the pointer and touch paths.
//!
//! Both input classes only differ in how they learn which slot is under the
//! contact; from there a session always previews the contiguous interval
//! between its anchor and that slot.

use crate::blocks::Slot;
use crate::slot_set::SlotSet;
use serde::Serialize;

/// Whether a session adds or removes slots. Fixed when the session begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
    Select,
    Deselect,
}

impl SelectMode {
    /// Deselect if the anchor is already selected, otherwise select.
    pub fn for_anchor(selected: &SlotSet, anchor: Slot) -> Self {
        if selected.contains(anchor) {
            SelectMode::Deselect
        } else {
            SelectMode::Select
        }
    }

    /// Whether applying this mode flips a slot with the given membership.
    #[inline]
    pub fn would_change(self, is_selected: bool) -> bool {
        match self {
            SelectMode::Select => !is_selected,
            SelectMode::Deselect => is_selected,
        }
    }
}

/// Inclusive interval of slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRange {
    start: Slot,
    end: Slot,
}

impl SlotRange {
    pub fn single(slot: Slot) -> Self {
        Self {
            start: slot,
            end: slot,
        }
    }

    /// Interval spanning both ends, whichever order they come in.
    pub fn between(a: Slot, b: Slot) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> Slot {
        self.start
    }

    pub fn end(&self) -> Slot {
        self.end
    }

    pub fn len(&self) -> usize {
        usize::from(self.end.index() - self.start.index()) + 1
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.start <= slot && slot <= self.end
    }

    pub fn iter(&self) -> impl Iterator<Item = Slot> {
        (self.start.index()..=self.end.index()).map(Slot)
    }
}

/// An in-progress range selection, pointer or touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    anchor: Slot,
    mode: SelectMode,
    preview: SlotRange,
}

impl Session {
    /// Start at `anchor`; the mode is decided against `selected` as it is now.
    pub fn begin(anchor: Slot, selected: &SlotSet) -> Self {
        Self {
            anchor,
            mode: SelectMode::for_anchor(selected, anchor),
            preview: SlotRange::single(anchor),
        }
    }

    pub fn anchor(&self) -> Slot {
        self.anchor
    }

    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    pub fn preview(&self) -> SlotRange {
        self.preview
    }

    /// Re-derive the preview for the slot now under the contact.
    ///
    /// Returns true if the preview changed.
    pub fn extend_to(&mut self, current: Slot) -> bool {
        let next = SlotRange::between(self.anchor, current);
        let changed = next != self.preview;
        self.preview = next;
        changed
    }

    /// The selected set this session would produce if committed now.
    pub fn resolve(&self, selected: &SlotSet) -> SlotSet {
        selected.applied(self.mode, self.preview)
    }
}
