//! Integration tests for on-disk persistence and export/import through the
//! scheduler bundle.

use chrono::{TimeZone, Utc};
use weekgrid_core::storage::SCHEDULE_KEY;
use weekgrid_core::{CellId, Color, CoreError, Database, ImportError, Scheduler};

fn cell(key: &str) -> CellId {
    key.parse().unwrap()
}

#[test]
fn entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weekgrid.db");

    {
        let mut scheduler = Scheduler::open(Database::open_at(&path).unwrap()).unwrap();
        scheduler.edit(cell("mon-09:00"), "Standup", Color::Blue).unwrap();
        scheduler.edit(cell("mon-09:15"), "Standup", Color::Blue).unwrap();
        scheduler.select_range(cell("tue-00:00"), cell("tue-01:00"));
        scheduler.fill_selection("Sleep", Color::Gray).unwrap();
    }

    let scheduler = Scheduler::open(Database::open_at(&path).unwrap()).unwrap();
    assert_eq!(scheduler.store().len(), 7);
    assert!(scheduler.selection().is_empty());
    let merged = scheduler.merged();
    assert_eq!(merged.span_of(&cell("mon-09:00")), Some(2));
    assert_eq!(merged.span_of(&cell("tue-00:00")), Some(5));
}

#[test]
fn corrupt_saved_data_starts_empty_and_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weekgrid.db");
    Database::open_at(&path)
        .unwrap()
        .kv_set(SCHEDULE_KEY, "not json")
        .unwrap();

    let mut scheduler = Scheduler::open(Database::open_at(&path).unwrap()).unwrap();
    assert!(scheduler.store().is_empty());
    scheduler.edit(cell("sat-10:00"), "Hike", Color::Green).unwrap();

    let reopened = Scheduler::open(Database::open_at(&path).unwrap()).unwrap();
    assert_eq!(reopened.event_at(&cell("sat-10:00")).unwrap().title, "Hike");
}

#[test]
fn export_then_import_reproduces_grid() {
    let mut source = Scheduler::open(Database::open_memory().unwrap()).unwrap();
    source.edit(cell("wed-18:00"), "Dinner", Color::Orange).unwrap();
    source.edit(cell("wed-18:15"), "Dinner", Color::Orange).unwrap();
    source.edit(cell("sun-24:00"), "Reset", Color::Purple).unwrap();

    let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
    let json = source.export_document(now).to_json(true).unwrap();

    let mut target = Scheduler::open(Database::open_memory().unwrap()).unwrap();
    target.edit(cell("mon-09:00"), "Overwritten", Color::Red).unwrap();
    assert_eq!(target.import_json(&json).unwrap(), 3);
    assert_eq!(target.store(), source.store());
    assert_eq!(target.layout(), source.layout());
}

#[test]
fn legacy_import_is_accepted() {
    let mut scheduler = Scheduler::open(Database::open_memory().unwrap()).unwrap();
    let legacy = r#"{
        "thu-07:00": { "title": "Swim", "color": "blue" },
        "thu-07:15": { "title": "Swim", "color": "blue" }
    }"#;
    assert_eq!(scheduler.import_json(legacy).unwrap(), 2);
    assert_eq!(scheduler.merged().span_of(&cell("thu-07:00")), Some(2));
}

#[test]
fn invalid_import_keeps_existing_grid() {
    let mut scheduler = Scheduler::open(Database::open_memory().unwrap()).unwrap();
    scheduler.edit(cell("fri-17:00"), "Drinks", Color::Yellow).unwrap();
    let before = scheduler.store().clone();

    let bad = r#"{
        "version": "1.0",
        "exportDate": "2026-10-17T12:00:00Z",
        "schedules": {
            "fri-09:00": { "title": "ok", "color": "blue" },
            "fri-09:15": { "title": "", "color": "blue" }
        }
    }"#;
    let err = scheduler.import_json(bad).unwrap_err();
    assert!(matches!(err, CoreError::Import(ImportError::InvalidEntry { .. })));
    assert_eq!(scheduler.store(), &before);

    let err = scheduler.import_json("{ definitely not json").unwrap_err();
    assert!(matches!(err, CoreError::Import(ImportError::Json(_))));
    assert_eq!(scheduler.store(), &before);
}
