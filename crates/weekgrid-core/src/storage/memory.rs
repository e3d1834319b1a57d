use std::cell::RefCell;
use std::rc::Rc;

use super::SchedulePersistence;
use crate::error::StorageError;
use crate::schedule::RecordMap;

#[derive(Debug, Default)]
struct MemoryState {
    saved: Option<RecordMap>,
    fail_writes: bool,
    save_count: usize,
}

/// In-process persistence for tests and embedding.
///
/// Clones share the same state, so a test can keep a handle after giving
/// one to a [`Scheduler`](crate::Scheduler).
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a previously saved mapping.
    pub fn with_records(records: RecordMap) -> Self {
        let persistence = Self::new();
        persistence.state.borrow_mut().saved = Some(records);
        persistence
    }

    /// Make every subsequent `save` fail with `StorageError::WriteFailed`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }

    pub fn saved(&self) -> Option<RecordMap> {
        self.state.borrow().saved.clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.state.borrow().save_count
    }
}

impl SchedulePersistence for MemoryPersistence {
    fn load(&self) -> Result<Option<RecordMap>, StorageError> {
        Ok(self.state.borrow().saved.clone())
    }

    fn save(&self, records: &RecordMap) -> Result<(), StorageError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(StorageError::WriteFailed("storage quota exceeded".into()));
        }
        state.saved = Some(records.clone());
        state.save_count += 1;
        Ok(())
    }
}
