use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Day column of the grid, ordered Sunday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Day {
    /// All days in column order.
    pub const ALL: [Day; 7] = [
        Day::Sun,
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
    ];

    /// Fixed column index, 0 = Sunday.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Day> {
        Self::ALL.get(index).copied()
    }

    /// Key fragment used inside cell ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Sun => "sun",
            Day::Mon => "mon",
            Day::Tue => "tue",
            Day::Wed => "wed",
            Day::Thu => "thu",
            Day::Fri => "fri",
            Day::Sat => "sat",
        }
    }

    /// Header label for display.
    pub fn label(self) -> &'static str {
        match self {
            Day::Sun => "Sun",
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
        }
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sun" => Ok(Day::Sun),
            "mon" => Ok(Day::Mon),
            "tue" => Ok(Day::Tue),
            "wed" => Ok(Day::Wed),
            "thu" => Ok(Day::Thu),
            "fri" => Ok(Day::Fri),
            "sat" => Ok(Day::Sat),
            _ => Err(ValidationError::UnknownDay(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_sunday_first_week() {
        for (i, day) in Day::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(Day::from_index(i), Some(*day));
        }
        assert_eq!(Day::from_index(7), None);
    }

    #[test]
    fn weekday_conversion() {
        assert_eq!(Day::from(Weekday::Sun), Day::Sun);
        assert_eq!(Day::from(Weekday::Wed), Day::Wed);
        assert_eq!(Day::from(Weekday::Sat), Day::Sat);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!("fri".parse::<Day>().unwrap(), Day::Fri);
        assert!(matches!(
            "Fri".parse::<Day>(),
            Err(ValidationError::UnknownDay(_))
        ));
    }
}
