use std::collections::BTreeMap;

use crate::error::{ImportError, ValidationError};
use crate::grid::CellId;

use super::event::{Event, EventRecord};

/// Validated cell-to-event mapping.
pub type ScheduleMap = BTreeMap<CellId, Event>;

/// Wire form keyed by raw cell-id strings.
pub type RecordMap = BTreeMap<String, EventRecord>;

/// Cell identity to event mapping.
///
/// Pure data: mutations never persist or recompute merges on their own.
/// Callers follow each mutation with a save and a merge pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleStore {
    entries: ScheduleMap,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a wire mapping into a store without touching any existing one.
    ///
    /// # Errors
    /// Returns `ImportError::InvalidKey` or `ImportError::InvalidEntry` for
    /// the first offending entry.
    pub fn from_records(records: RecordMap) -> Result<Self, ImportError> {
        let mut entries = ScheduleMap::new();
        for (key, record) in records {
            let cell: CellId = key
                .parse()
                .map_err(|source| ImportError::InvalidKey {
                    key: key.clone(),
                    source,
                })?;
            let event = Event::try_from(record)
                .map_err(|source| ImportError::InvalidEntry { key, source })?;
            entries.insert(cell, event);
        }
        Ok(Self { entries })
    }

    /// Validate a wire mapping entry by entry, keeping whatever validates.
    ///
    /// Returns the store plus the keys that were skipped. Used when loading
    /// saved data, where one bad cell must not cost the rest of the week.
    pub fn from_records_lossy(records: RecordMap) -> (Self, Vec<String>) {
        let mut entries = ScheduleMap::new();
        let mut skipped = Vec::new();
        for (key, record) in records {
            match (key.parse::<CellId>(), Event::try_from(record)) {
                (Ok(cell), Ok(event)) => {
                    entries.insert(cell, event);
                }
                _ => skipped.push(key),
            }
        }
        (Self { entries }, skipped)
    }

    pub fn get(&self, cell: &CellId) -> Option<&Event> {
        self.entries.get(cell)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or overwrite the event at `cell`. The title is trimmed first.
    ///
    /// # Errors
    /// Returns `ValidationError::EmptyTitle` for an empty title; empty
    /// titles must go through [`ScheduleStore::remove`].
    pub fn set(&mut self, cell: CellId, event: Event) -> Result<Option<Event>, ValidationError> {
        let event = event.normalized()?;
        Ok(self.entries.insert(cell, event))
    }

    /// Delete the event at `cell`. Absent keys are not an error.
    pub fn remove(&mut self, cell: &CellId) -> Option<Event> {
        self.entries.remove(cell)
    }

    /// Delete every listed cell, returning how many were occupied.
    pub fn remove_many<'a, I>(&mut self, cells: I) -> usize
    where
        I: IntoIterator<Item = &'a CellId>,
    {
        cells
            .into_iter()
            .filter(|cell| self.entries.remove(*cell).is_some())
            .count()
    }

    /// Empty the whole mapping, returning how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    /// Replace the whole mapping with validated `records`.
    ///
    /// All-or-nothing: any invalid key or entry leaves the store untouched.
    ///
    /// # Errors
    /// Returns the `ImportError` describing the first invalid entry.
    pub fn replace_all(&mut self, records: RecordMap) -> Result<(), ImportError> {
        let replacement = Self::from_records(records)?;
        *self = replacement;
        Ok(())
    }

    /// Wire form of the current mapping, suitable for `replace_all`.
    pub fn export(&self) -> RecordMap {
        self.entries
            .iter()
            .map(|(cell, event)| (cell.to_string(), event.to_record()))
            .collect()
    }
}
