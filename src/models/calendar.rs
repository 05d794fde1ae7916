//! Working-day window.
//!
//! The hours during which the beauty team works on the wedding day
//! (e.g. 06:00 to 18:00). The scheduler never moves an appointment to fit
//! the window; it only reports appointments that fall outside it.
//!
//! Times are wall-clock times of day, written `HH:MM` in configuration.
//! Checks are anchored to a calendar day: an appointment cascaded onto the
//! next morning still overruns the day it was meant for.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A time-of-day interval [starts_at, finishes_at].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    /// Earliest allowed start.
    #[serde(with = "hhmm")]
    pub starts_at: NaiveTime,
    /// Latest allowed end.
    #[serde(with = "hhmm")]
    pub finishes_at: NaiveTime,
}

impl DayWindow {
    /// Creates a day window.
    pub fn new(starts_at: NaiveTime, finishes_at: NaiveTime) -> Self {
        Self {
            starts_at,
            finishes_at,
        }
    }

    /// Creates a day window from whole hours and minutes.
    ///
    /// Returns `None` for out-of-range values.
    pub fn from_hm(start: (u32, u32), finish: (u32, u32)) -> Option<Self> {
        Some(Self::new(
            NaiveTime::from_hms_opt(start.0, start.1, 0)?,
            NaiveTime::from_hms_opt(finish.0, finish.1, 0)?,
        ))
    }

    /// Rejects windows that do not end after they start.
    pub fn validate(&self) -> Result<()> {
        if self.finishes_at <= self.starts_at {
            return Err(ScheduleError::InvalidDayWindow {
                starts_at: self.starts_at.format("%H:%M").to_string(),
                finishes_at: self.finishes_at.format("%H:%M").to_string(),
            });
        }
        Ok(())
    }

    /// Opening instant on `day`.
    pub fn opens_on(&self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(self.starts_at)
    }

    /// Closing instant on `day`.
    pub fn closes_on(&self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(self.finishes_at)
    }

    /// Whether `start` is before the window opens on `day`.
    pub fn starts_early(&self, day: NaiveDate, start: NaiveDateTime) -> bool {
        start < self.opens_on(day)
    }

    /// Whether `end` is after the window closes on `day`.
    ///
    /// Any end on a later date counts, whatever its time of day.
    pub fn overruns(&self, day: NaiveDate, end: NaiveDateTime) -> bool {
        end > self.closes_on(day)
    }
}

impl Default for DayWindow {
    fn default() -> Self {
        Self::new(
            NaiveTime::from_hms_opt(6, 0, 0).unwrap_or_default(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
        )
    }
}

/// `HH:MM` text representation of a [`NaiveTime`].
mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(d)?;
        NaiveTime::parse_from_str(&text, FORMAT).map_err(de::Error::custom)
    }
}
