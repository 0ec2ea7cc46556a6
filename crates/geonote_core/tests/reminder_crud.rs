use geonote_core::db::open_db_in_memory;
use geonote_core::{Reminder, ReminderStore, SqliteReminderStore};

#[test]
fn upsert_and_get_by_id_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::new(&conn);

    let reminder = title_a_reminder();
    store.upsert(&reminder).unwrap();

    let loaded = store.get_by_id("titleA").unwrap().unwrap();
    assert_eq!(loaded.id, reminder.id);
    assert_eq!(loaded.title, reminder.title);
    assert_eq!(loaded.description, reminder.description);
    assert_eq!(loaded.location, reminder.location);
    assert_eq!(loaded.latitude, reminder.latitude);
    assert_eq!(loaded.longitude, reminder.longitude);
}

#[test]
fn upsert_with_existing_id_overwrites_in_place() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::new(&conn);

    store.upsert(&title_a_reminder()).unwrap();

    let replacement = Reminder::with_id(
        "titleA",
        Some("Reminder Title B".to_string()),
        Some("Reminder Description B".to_string()),
        Some("Location B".to_string()),
        Some(51.3930762),
        Some(-0.2487444),
    );
    store.upsert(&replacement).unwrap();

    let loaded = store.get_by_id("titleA").unwrap().unwrap();
    assert_eq!(loaded, replacement);

    // Overwrite, not duplicate-insert.
    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn get_by_id_of_unknown_id_is_absent_not_error() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::new(&conn);

    assert!(store.get_by_id("randomId").unwrap().is_none());
}

#[test]
fn store_accepts_reminders_without_optional_fields() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::new(&conn);

    let bare = Reminder::with_id("bare", None, None, None, None, None);
    store.upsert(&bare).unwrap();

    let loaded = store.get_by_id("bare").unwrap().unwrap();
    assert_eq!(loaded, bare);
    assert!(!loaded.has_coordinates());
}

#[test]
fn list_all_returns_independent_snapshot() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::new(&conn);

    store.upsert(&title_a_reminder()).unwrap();

    let mut snapshot = store.list_all().unwrap();
    snapshot.clear();

    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn clear_removes_everything_and_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteReminderStore::new(&conn);

    store.upsert(&title_a_reminder()).unwrap();
    store.clear().unwrap();
    store.clear().unwrap();

    assert!(store.get_by_id("titleA").unwrap().is_none());
    assert!(store.list_all().unwrap().is_empty());
}

fn title_a_reminder() -> Reminder {
    Reminder::with_id(
        "titleA",
        Some("Reminder Title A".to_string()),
        Some("Reminder Description A".to_string()),
        Some("Location".to_string()),
        Some(51.4930762),
        Some(-0.1487444),
    )
}
