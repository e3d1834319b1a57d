use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Width of one slot in minutes.
pub const SLOT_MINUTES: u16 = 15;

/// Minutes value of the terminal `24:00` boundary.
pub const END_OF_DAY_MINUTES: u16 = 24 * 60;

/// Number of slots per day, including the terminal boundary.
pub const SLOT_COUNT: usize = (END_OF_DAY_MINUTES / SLOT_MINUTES) as usize + 1;

/// A wall-clock boundary on the 15-minute grid, `00:00` through `24:00`.
///
/// Ordered by minutes since midnight. No timezone or DST adjustment is
/// ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    minutes: u16,
}

impl TimeSlot {
    pub const MIDNIGHT: TimeSlot = TimeSlot { minutes: 0 };
    pub const END_OF_DAY: TimeSlot = TimeSlot {
        minutes: END_OF_DAY_MINUTES,
    };

    /// Build a slot from hour and minute.
    ///
    /// # Errors
    /// Returns `ValidationError::OffGrid` when the time is past `24:00` or
    /// not a multiple of 15 minutes.
    pub fn new(hour: u16, minute: u16) -> Result<Self, ValidationError> {
        if minute >= 60 {
            return Err(ValidationError::OffGrid(format!("{hour:02}:{minute:02}")));
        }
        Self::from_minutes(hour.saturating_mul(60).saturating_add(minute))
    }

    /// Build a slot from minutes since midnight.
    ///
    /// # Errors
    /// Returns `ValidationError::OffGrid` for values off the 15-minute grid.
    pub fn from_minutes(minutes: u16) -> Result<Self, ValidationError> {
        if minutes > END_OF_DAY_MINUTES || minutes % SLOT_MINUTES != 0 {
            return Err(ValidationError::OffGrid(format!(
                "{:02}:{:02}",
                minutes / 60,
                minutes % 60
            )));
        }
        Ok(Self { minutes })
    }

    /// The slot whose 15-minute range contains `time` (floor).
    pub fn containing(time: NaiveTime) -> Self {
        let minutes = (time.hour() * 60 + time.minute()) as u16;
        Self {
            minutes: minutes - minutes % SLOT_MINUTES,
        }
    }

    /// Minutes since midnight; `24:00` maps to 1440.
    pub fn to_minutes(self) -> u16 {
        self.minutes
    }

    pub fn hour(self) -> u16 {
        self.minutes / 60
    }

    pub fn minute(self) -> u16 {
        self.minutes % 60
    }

    /// True only for the `24:00` boundary.
    pub fn is_terminal(self) -> bool {
        self.minutes == END_OF_DAY_MINUTES
    }

    /// Position of this slot in the day's slot sequence.
    pub fn ordinal(self) -> usize {
        (self.minutes / SLOT_MINUTES) as usize
    }

    /// Following slot, `None` after `24:00`.
    pub fn next(self) -> Option<TimeSlot> {
        if self.is_terminal() {
            None
        } else {
            Some(Self {
                minutes: self.minutes + SLOT_MINUTES,
            })
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = ValidationError;

    /// Parses strict zero-padded `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ValidationError::MalformedTime(s.to_string());
        let (hh, mm) = s.split_once(':').ok_or_else(malformed)?;
        if hh.len() != 2 || mm.len() != 2 {
            return Err(malformed());
        }
        if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let hour: u16 = hh.parse().map_err(|_| malformed())?;
        let minute: u16 = mm.parse().map_err(|_| malformed())?;
        Self::new(hour, minute).map_err(|_| ValidationError::OffGrid(s.to_string()))
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
