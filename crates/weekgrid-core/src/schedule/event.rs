use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::palette::Color;

/// A labeled, colored entry attached to one or more cells.
///
/// Events have no identity of their own: two cells holding equal
/// `(title, color)` values are the same event for merge purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    pub title: String,
    pub color: Color,
}

impl Event {
    pub fn new(title: impl Into<String>, color: Color) -> Self {
        Self {
            title: title.into(),
            color,
        }
    }

    /// Trim the title and reject it if nothing is left.
    pub fn normalized(self) -> Result<Self, ValidationError> {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let title = if trimmed.len() == self.title.len() {
            self.title
        } else {
            trimmed.to_string()
        };
        Ok(Self {
            title,
            color: self.color,
        })
    }

    /// Same run when both title and color match exactly.
    pub fn same_run(&self, other: &Event) -> bool {
        self.title == other.title && self.color == other.color
    }

    pub fn to_record(&self) -> EventRecord {
        EventRecord {
            title: self.title.clone(),
            color: self.color.to_string(),
        }
    }
}

/// Unvalidated wire form used by persistence and import/export payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub color: String,
}

impl EventRecord {
    pub fn new(title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: color.into(),
        }
    }
}

impl TryFrom<EventRecord> for Event {
    type Error = ValidationError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let color = record.color.parse()?;
        Event::new(record.title, color).normalized()
    }
}
