//! Fixed event color palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Green,
    Red,
    Orange,
    Purple,
    Pink,
    Yellow,
    Gray,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Orange,
        Color::Purple,
        Color::Pink,
        Color::Yellow,
        Color::Gray,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Yellow => "yellow",
            Color::Gray => "gray",
        }
    }

    /// ANSI foreground code for terminal rendering.
    pub fn ansi_code(self) -> u8 {
        match self {
            Color::Blue => 34,
            Color::Green => 32,
            Color::Red => 31,
            Color::Orange => 33,
            Color::Purple => 35,
            Color::Pink => 95,
            Color::Yellow => 93,
            Color::Gray => 90,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownColor(s.to_string()))
    }
}
