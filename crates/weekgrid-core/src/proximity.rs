//! Current-time proximity classification for the time column.
//!
//! Presentation only: nothing here reads or writes the schedule store or the
//! selection. The caller decides when to refresh (see [`TickSchedule`]) and
//! passes the wall-clock time in, so everything is testable without timers.

use std::time::Duration;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::grid::{self, Day, TimeSlot, SLOT_MINUTES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProximityLevel {
    /// The upcoming quarter-hour boundary.
    Next,
    /// The slot containing `now`.
    Current,
    /// Within 15 minutes of the current slot.
    Near15,
    /// Within 30 minutes.
    Near30,
    /// Within an hour.
    Far60,
    None,
}

impl ProximityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ProximityLevel::Next => "next",
            ProximityLevel::Current => "current",
            ProximityLevel::Near15 => "near15",
            ProximityLevel::Near30 => "near30",
            ProximityLevel::Far60 => "far60",
            ProximityLevel::None => "none",
        }
    }
}

/// Classify `slot` relative to the wall-clock time `now`.
pub fn classify(now: NaiveTime, slot: TimeSlot) -> ProximityLevel {
    let current = TimeSlot::containing(now).to_minutes();
    let next = current + SLOT_MINUTES;
    let slot_minutes = slot.to_minutes();

    if slot_minutes == next {
        return ProximityLevel::Next;
    }
    match slot_minutes.abs_diff(current) {
        0 => ProximityLevel::Current,
        d if d <= 15 => ProximityLevel::Near15,
        d if d <= 30 => ProximityLevel::Near30,
        d if d <= 60 => ProximityLevel::Far60,
        _ => ProximityLevel::None,
    }
}

/// Classification for every grid slot, in slot order.
pub fn classify_all(now: NaiveTime) -> Vec<(TimeSlot, ProximityLevel)> {
    grid::slots().map(|slot| (slot, classify(now, slot))).collect()
}

/// Day column to highlight for `date`.
pub fn today(date: NaiveDate) -> Day {
    Day::from(date.weekday())
}

/// Refresh cadence for the proximity display: a coarse per-minute tick
/// plus a finer sub-tick that only fires on aligned seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSchedule {
    pub tick: Duration,
    pub sub_tick: Duration,
}

impl Default for TickSchedule {
    fn default() -> Self {
        Self::from_secs(60, 15)
    }
}

impl TickSchedule {
    pub fn from_secs(tick_secs: u64, sub_tick_secs: u64) -> Self {
        Self {
            tick: Duration::from_secs(tick_secs),
            sub_tick: Duration::from_secs(sub_tick_secs),
        }
    }

    /// Whether a sub-tick landing at `now` should trigger a refresh.
    pub fn should_refresh(&self, now: NaiveTime) -> bool {
        let step = self.sub_tick.as_secs();
        step != 0 && u64::from(now.second()) % step == 0
    }
}
