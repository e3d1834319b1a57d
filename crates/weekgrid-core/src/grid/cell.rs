use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Day, TimeSlot};
use crate::error::ValidationError;

/// Address of one grid cell, serialized as `"{day}-{HH:MM}"`.
///
/// The key is the only addressing scheme for the store, for selection
/// membership and for persisted/exported data. Ordering is day-major,
/// then by time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId {
    pub day: Day,
    pub slot: TimeSlot,
}

impl CellId {
    pub fn new(day: Day, slot: TimeSlot) -> Self {
        Self { day, slot }
    }

    pub fn day_index(&self) -> usize {
        self.day.index()
    }

    pub fn minutes(&self) -> u16 {
        self.slot.to_minutes()
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.slot)
    }
}

impl FromStr for CellId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, time) = s
            .split_once('-')
            .ok_or_else(|| ValidationError::MalformedCellId(s.to_string()))?;
        Ok(Self {
            day: day.parse()?,
            slot: time.parse()?,
        })
    }
}

impl Serialize for CellId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CellId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
