//! Scripted gesture playback.
//!
//! A script names the mounted days and a list of timestamped steps. Steps are
//! applied in the order written; a step earlier than its predecessor is
//! clamped to the predecessor's time so timers never run backwards.

use crate::blocks::Slot;
use crate::day_key::DayKey;
use crate::error::Result;
use crate::grid::{Grid, SelectionMap, SelectionRecorder};
use crate::input::{EventResponse, TouchEvent, TouchPoint};
use crate::settings::GridSettings;
use crate::timer::Timestamp;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub days: Vec<DayKey>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Milliseconds since the start of the script
    pub at: u64,
    #[serde(flatten)]
    pub event: ScriptEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointerDown { day: DayKey, slot: u16 },
    PointerEnter { day: DayKey, slot: u16 },
    PointerLeave { day: DayKey },
    PointerUp,
    /// Without `day`/`slot` the start is located by hit testing the first contact.
    TouchStart {
        #[serde(default)]
        day: Option<DayKey>,
        #[serde(default)]
        slot: Option<u16>,
        touches: Vec<TouchPoint>,
        #[serde(default)]
        changed: Vec<TouchPoint>,
    },
    TouchMove {
        touches: Vec<TouchPoint>,
        #[serde(default)]
        changed: Vec<TouchPoint>,
    },
    TouchEnd {
        #[serde(default)]
        touches: Vec<TouchPoint>,
        changed: Vec<TouchPoint>,
    },
    TouchCancel {
        #[serde(default)]
        touches: Vec<TouchPoint>,
        #[serde(default)]
        changed: Vec<TouchPoint>,
    },
    /// Let time pass with no input, firing due hold timers.
    Wait,
    Scroll { top: f32 },
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let script: Script = serde_json::from_str(&content)?;
        Ok(script)
    }
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub selections: SelectionMap,
    pub commits: usize,
}

/// Run `script` against a fresh grid and return the final selection map.
pub fn run(script: &Script, settings: GridSettings) -> Result<ReplayReport> {
    let mut grid = Grid::new(script.days.iter().copied(), settings)?;
    let recorder = SelectionRecorder::new();
    grid.add_listener(Box::new(recorder.clone()));

    let mut clock = 0u64;
    for (index, step) in script.steps.iter().enumerate() {
        if step.at < clock {
            warn!(step = index, at = step.at, clock, "step out of order, clamped");
        }
        clock = clock.max(step.at);
        let response = apply(&mut grid, Timestamp(clock), &step.event)?;
        debug!(step = index, at = clock, ?response, "step applied");
    }

    info!(steps = script.steps.len(), commits = recorder.change_count(), "replay finished");
    Ok(ReplayReport {
        selections: grid.selection_map(),
        commits: recorder.change_count(),
    })
}

fn apply(grid: &mut Grid, at: Timestamp, event: &ScriptEvent) -> Result<EventResponse> {
    let touch = |touches: &[TouchPoint], changed: &[TouchPoint]| TouchEvent {
        time: at,
        touches: touches.to_vec(),
        changed: changed.to_vec(),
    };

    let response = match event {
        ScriptEvent::PointerDown { day, slot } => {
            let slot = grid.slot(*slot)?;
            grid.pointer_down(*day, slot, at)
        }
        ScriptEvent::PointerEnter { day, slot } => {
            let slot = grid.slot(*slot)?;
            grid.pointer_enter(*day, slot, at)
        }
        ScriptEvent::PointerLeave { day } => grid.pointer_leave(*day, at),
        ScriptEvent::PointerUp => grid.pointer_up(at),
        ScriptEvent::TouchStart {
            day,
            slot,
            touches,
            changed,
        } => {
            let event = touch(touches, changed);
            match (day, slot) {
                (Some(day), Some(slot)) => {
                    let slot: Slot = grid.slot(*slot)?;
                    grid.touch_start(*day, slot, &event)
                }
                _ => grid.touch_start_at(&event),
            }
        }
        ScriptEvent::TouchMove { touches, changed } => grid.touch_move(&touch(touches, changed)),
        ScriptEvent::TouchEnd { touches, changed } => grid.touch_end(&touch(touches, changed)),
        ScriptEvent::TouchCancel { touches, changed } => {
            grid.touch_cancel(&touch(touches, changed))
        }
        ScriptEvent::Wait => grid.advance(at),
        ScriptEvent::Scroll { top } => {
            grid.set_scroll_top(*top);
            grid.advance(at)
        }
    };
    Ok(response)
}
