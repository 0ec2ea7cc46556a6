use geonote_core::db::open_db_in_memory;
use geonote_core::{
    MemoryReminderStore, Reminder, ReminderRepository, RepoError, SqliteReminderStore,
};

#[test]
fn save_then_get_preserves_every_field() {
    let conn = open_db_in_memory().unwrap();
    let repo = ReminderRepository::new(SqliteReminderStore::new(&conn));

    let reminder = title_a_reminder();
    repo.save_reminder(&reminder).unwrap();

    let loaded = repo.get_reminder("titleA").unwrap();
    assert_eq!(loaded.id, reminder.id);
    assert_eq!(loaded.title, reminder.title);
    assert_eq!(loaded.description, reminder.description);
    assert_eq!(loaded.location, reminder.location);
    assert_eq!(loaded.latitude, reminder.latitude);
    assert_eq!(loaded.longitude, reminder.longitude);
}

#[test]
fn save_with_same_id_returns_newer_record_only() {
    let conn = open_db_in_memory().unwrap();
    let repo = ReminderRepository::new(SqliteReminderStore::new(&conn));

    repo.save_reminder(&title_a_reminder()).unwrap();

    let replacement = Reminder::with_id(
        "titleA",
        Some("Reminder Title B".to_string()),
        Some("Reminder Description B".to_string()),
        Some("Location B".to_string()),
        Some(51.3930762),
        Some(-0.2487444),
    );
    repo.save_reminder(&replacement).unwrap();

    let loaded = repo.get_reminder("titleA").unwrap();
    assert_eq!(loaded, replacement);
    assert_eq!(repo.list_reminders().unwrap().len(), 1);
}

#[test]
fn get_unknown_id_reports_the_contract_message() {
    let conn = open_db_in_memory().unwrap();
    let repo = ReminderRepository::new(SqliteReminderStore::new(&conn));

    let err = repo.get_reminder("randomId").unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
    assert_eq!(err.to_string(), "Reminder not found!");
}

#[test]
fn empty_store_lists_as_success_with_no_entries() {
    let conn = open_db_in_memory().unwrap();
    let repo = ReminderRepository::new(SqliteReminderStore::new(&conn));

    let listed = repo.list_reminders().unwrap();
    assert!(listed.is_empty());
}

#[test]
fn clear_empties_the_store_and_invalidates_saved_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = ReminderRepository::new(SqliteReminderStore::new(&conn));

    repo.save_reminder(&title_a_reminder()).unwrap();
    repo.clear_reminders().unwrap();

    assert!(repo.list_reminders().unwrap().is_empty());
    let err = repo.get_reminder("titleA").unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[test]
fn list_returns_exactly_the_distinct_saved_records() {
    let conn = open_db_in_memory().unwrap();
    let repo = ReminderRepository::new(SqliteReminderStore::new(&conn));

    let saved: Vec<Reminder> = (0..5)
        .map(|index| {
            Reminder::with_id(
                format!("id-{index}"),
                Some(format!("Title {index}")),
                None,
                Some("Somewhere".to_string()),
                Some(50.0 + f64::from(index)),
                Some(-0.1),
            )
        })
        .collect();
    for reminder in &saved {
        repo.save_reminder(reminder).unwrap();
    }

    let mut listed = repo.list_reminders().unwrap();
    listed.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(listed, saved);
}

#[test]
fn repository_contract_holds_over_the_memory_store() {
    let repo = ReminderRepository::new(MemoryReminderStore::new());

    let reminder = title_a_reminder();
    repo.save_reminder(&reminder).unwrap();
    assert_eq!(repo.get_reminder("titleA").unwrap(), reminder);

    repo.clear_reminders().unwrap();
    let err = repo.get_reminder("titleA").unwrap_err();
    assert_eq!(err.to_string(), "Reminder not found!");
}

#[test]
fn store_fault_surfaces_its_diagnostic_and_stays_distinct_from_empty() {
    let store = MemoryReminderStore::new();
    store.fail_with("disk unavailable");
    let repo = ReminderRepository::new(store);

    let err = repo.list_reminders().unwrap_err();
    assert!(matches!(err, RepoError::Store(_)));
    assert_eq!(err.to_string(), "disk unavailable");

    let save_err = repo.save_reminder(&title_a_reminder()).unwrap_err();
    assert_eq!(save_err.to_string(), "disk unavailable");

    let get_err = repo.get_reminder("titleA").unwrap_err();
    assert!(matches!(get_err, RepoError::Store(_)));
}

#[test]
fn memory_store_recovers_after_failure_is_cleared() {
    let store = MemoryReminderStore::new();
    store.fail_with("disk unavailable");
    store.clear_failure();
    let repo = ReminderRepository::new(store);

    repo.save_reminder(&title_a_reminder()).unwrap();
    assert_eq!(repo.list_reminders().unwrap().len(), 1);
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
