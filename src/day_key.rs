//! Calendar-day identity used to key per-column state.

use crate::error::GridError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar date with no time of day or zone attached.
///
/// Serializes as `YYYY-MM-DD`, which is also the form reported to the
/// surrounding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Local calendar day of a zoned timestamp.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self(datetime.date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day before and after, as the default three-column view shows.
    pub fn around(self) -> [DayKey; 3] {
        [
            self.0.pred_opt().map(Self).unwrap_or(self),
            self,
            self.0.succ_opt().map(Self).unwrap_or(self),
        ]
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<NaiveDateTime> for DayKey {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime.date())
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DayKey {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| GridError::InvalidDayKey(s.to_string()))
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
