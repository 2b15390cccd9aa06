//! Read-only view of a column for whoever draws it.
//!
//! Composes the committed selection, the live preview and the hovered slot
//! into one state per slot. Only slots a commit would actually flip show a
//! preview color.

use crate::blocks::Slot;
use crate::column::Column;
use crate::input::SelectMode;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotVisual {
    Idle,
    Selected,
    /// Will be added on commit
    PreviewSelect,
    /// Will be removed on commit
    PreviewDeselect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub slot: Slot,
    pub visual: SlotVisual,
    /// Hover highlight, suppressed while a session runs
    pub hovered: bool,
    pub hour_mark: bool,
    pub label: Option<String>,
}

impl Column {
    pub fn visual(&self, slot: Slot) -> SlotVisual {
        let selected = self.selected().contains(slot);

        if let Some(session) = self.input_state().session() {
            if session.preview().contains(slot) && session.mode().would_change(selected) {
                return match session.mode() {
                    SelectMode::Select => SlotVisual::PreviewSelect,
                    SelectMode::Deselect => SlotVisual::PreviewDeselect,
                };
            }
        }

        if selected {
            SlotVisual::Selected
        } else {
            SlotVisual::Idle
        }
    }

    /// One view per slot, top to bottom.
    pub fn slot_views(&self) -> Vec<SlotView> {
        let selecting = self.is_selecting();

        self.layout()
            .blocks()
            .map(|block| {
                let is_hovered = self.hovered() == Some(block.slot);
                // Hour marks always carry a label; the hovered slot shows minutes too
                let label = if is_hovered {
                    Some(block.label(true))
                } else if block.is_hour_mark() {
                    Some(block.label(false))
                } else {
                    None
                };

                SlotView {
                    slot: block.slot,
                    visual: self.visual(block.slot),
                    hovered: is_hovered && !selecting,
                    hour_mark: block.is_hour_mark(),
                    label,
                }
            })
            .collect()
    }
}
