//! Schedule store: the cell-to-event mapping and its primitive mutations.

mod event;
mod store;

pub use event::{Event, EventRecord};
pub use store::{RecordMap, ScheduleMap, ScheduleStore};
