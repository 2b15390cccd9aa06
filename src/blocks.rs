//! Block model: maps the hours of a day onto fixed-length time slots.
//!
//! Everything here is derived and side-effect free. A `Slot` is just an index;
//! the `BlockLayout` it came from knows what time of day it stands for.

use crate::constants::{
    DEFAULT_END_HOUR, DEFAULT_GRANULARITY_MINUTES, DEFAULT_START_HOUR, MINUTES_PER_HOUR,
};
use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of one time slot within a column, counted from the first slot of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(pub u16);

impl Slot {
    #[inline]
    pub fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for Slot {
    fn from(index: u16) -> Self {
        Slot(index)
    }
}

/// One slot together with the time of day it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub slot: Slot,
    pub hour: u8,
    pub minute: u8,
}

impl Block {
    /// Hour marks get a divider and an always-visible label.
    pub fn is_hour_mark(&self) -> bool {
        self.minute == 0
    }

    pub fn label(&self, show_minutes: bool) -> String {
        format_time_12h(self.hour, self.minute, show_minutes)
    }
}

/// Shape of a column: which hours it covers and how finely they are cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    granularity_minutes: u16,
    start_hour: u8,
    end_hour: u8,
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self {
            granularity_minutes: DEFAULT_GRANULARITY_MINUTES,
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
        }
    }
}

impl BlockLayout {
    pub fn new(granularity_minutes: u16, start_hour: u8, end_hour: u8) -> Result<Self> {
        if granularity_minutes == 0
            || granularity_minutes > MINUTES_PER_HOUR
            || MINUTES_PER_HOUR % granularity_minutes != 0
        {
            return Err(GridError::InvalidGranularity(granularity_minutes));
        }
        if start_hour >= end_hour || end_hour > 24 {
            return Err(GridError::InvalidHourWindow {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            granularity_minutes,
            start_hour,
            end_hour,
        })
    }

    pub fn granularity_minutes(&self) -> u16 {
        self.granularity_minutes
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    #[inline]
    pub fn slots_per_hour(&self) -> u16 {
        MINUTES_PER_HOUR / self.granularity_minutes
    }

    /// Number of slots `N` in the column.
    #[inline]
    pub fn slot_count(&self) -> u16 {
        u16::from(self.end_hour - self.start_hour) * self.slots_per_hour()
    }

    pub fn contains(&self, slot: Slot) -> bool {
        slot.0 < self.slot_count()
    }

    /// Validate an index coming from outside the crate.
    pub fn slot(&self, index: u16) -> Result<Slot> {
        if index < self.slot_count() {
            Ok(Slot(index))
        } else {
            Err(GridError::SlotOutOfRange {
                index,
                count: self.slot_count(),
            })
        }
    }

    pub fn hour_of(&self, slot: Slot) -> u8 {
        self.start_hour + (slot.0 / self.slots_per_hour()) as u8
    }

    pub fn minute_of(&self, slot: Slot) -> u8 {
        ((slot.0 % self.slots_per_hour()) * self.granularity_minutes) as u8
    }

    pub fn block(&self, slot: Slot) -> Block {
        Block {
            slot,
            hour: self.hour_of(slot),
            minute: self.minute_of(slot),
        }
    }

    /// Every block of the column in ascending order.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        (0..self.slot_count()).map(move |i| self.block(Slot(i)))
    }

    /// 24-hour `HH:MM` start time of a slot.
    pub fn hhmm(&self, slot: Slot) -> String {
        format!("{:02}:{:02}", self.hour_of(slot), self.minute_of(slot))
    }

    /// Parse `HH:MM` into the slot containing that minute.
    pub fn parse_hhmm(&self, time: &str) -> Result<Slot> {
        let invalid = || GridError::InvalidTime(time.to_string());

        let (hour, minute) = time.split_once(':').ok_or_else(invalid)?;
        let hour: u16 = hour.trim().parse().map_err(|_| invalid())?;
        let minute: u16 = minute.trim().parse().map_err(|_| invalid())?;

        if minute >= MINUTES_PER_HOUR
            || hour < u16::from(self.start_hour)
            || hour >= u16::from(self.end_hour)
        {
            return Err(invalid());
        }

        let offset = hour - u16::from(self.start_hour);
        Ok(Slot(
            offset * self.slots_per_hour() + minute / self.granularity_minutes,
        ))
    }

    pub fn format_slots(&self, slots: &[Slot]) -> Vec<String> {
        slots.iter().map(|s| self.hhmm(*s)).collect()
    }
}

/// Blocks for a day window with the given granularity.
///
/// Errors only for a layout that cannot exist (see [`BlockLayout::new`]).
pub fn slots_for(start_hour: u8, end_hour: u8, granularity_minutes: u16) -> Result<Vec<Block>> {
    let layout = BlockLayout::new(granularity_minutes, start_hour, end_hour)?;
    Ok(layout.blocks().collect())
}

/// 12-hour clock label: `"12am"`, `"4pm"`, or with minutes `"4:30pm"`.
pub fn format_time_12h(hour: u8, minute: u8, show_minutes: bool) -> String {
    let period = if hour >= 12 { "pm" } else { "am" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };

    if show_minutes {
        format!("{display_hour}:{minute:02}{period}")
    } else {
        format!("{display_hour}{period}")
    }
}
