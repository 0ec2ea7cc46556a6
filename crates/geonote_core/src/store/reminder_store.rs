//! Reminder store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable upsert/lookup/list/clear APIs over the canonical
//!   `reminders` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `upsert` replaces an existing row with the same id in place; the
//!   store never holds two records under one id.
//! - `list_all` returns an independent snapshot, not a live view.
//! - `clear` is idempotent.

use crate::db::DbError;
use crate::model::reminder::Reminder;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const REMINDER_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    location,
    latitude,
    longitude
FROM reminders";

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for reminder persistence operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "{message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable keyed storage for reminder records.
///
/// Implementations must serialize conflicting writes to the same id
/// internally; callers never coordinate access themselves.
pub trait ReminderStore {
    /// Inserts or replaces the record keyed by `reminder.id`.
    fn upsert(&self, reminder: &Reminder) -> StoreResult<()>;
    /// Point lookup. Absence is `Ok(None)`, not an error.
    fn get_by_id(&self, id: &str) -> StoreResult<Option<Reminder>>;
    /// Returns a fresh snapshot of every stored reminder.
    fn list_all(&self) -> StoreResult<Vec<Reminder>>;
    /// Removes every reminder. Clearing an empty store succeeds silently.
    fn clear(&self) -> StoreResult<()>;
}

impl<S: ReminderStore + ?Sized> ReminderStore for &S {
    fn upsert(&self, reminder: &Reminder) -> StoreResult<()> {
        (**self).upsert(reminder)
    }

    fn get_by_id(&self, id: &str) -> StoreResult<Option<Reminder>> {
        (**self).get_by_id(id)
    }

    fn list_all(&self) -> StoreResult<Vec<Reminder>> {
        (**self).list_all()
    }

    fn clear(&self) -> StoreResult<()> {
        (**self).clear()
    }
}

/// SQLite-backed reminder store.
pub struct SqliteReminderStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReminderStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ReminderStore for SqliteReminderStore<'_> {
    fn upsert(&self, reminder: &Reminder) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO reminders (
                id,
                title,
                description,
                location,
                latitude,
                longitude
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                location = excluded.location,
                latitude = excluded.latitude,
                longitude = excluded.longitude;",
            params![
                reminder.id.as_str(),
                reminder.title.as_deref(),
                reminder.description.as_deref(),
                reminder.location.as_deref(),
                reminder.latitude,
                reminder.longitude,
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: &str) -> StoreResult<Option<Reminder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_reminder_row(row)?));
        }

        Ok(None)
    }

    fn list_all(&self) -> StoreResult<Vec<Reminder>> {
        let mut stmt = self.conn.prepare(&format!("{REMINDER_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut reminders = Vec::new();

        while let Some(row) = rows.next()? {
            reminders.push(parse_reminder_row(row)?);
        }

        Ok(reminders)
    }

    fn clear(&self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM reminders;", [])?;
        Ok(())
    }
}

fn parse_reminder_row(row: &Row<'_>) -> StoreResult<Reminder> {
    Ok(Reminder {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        location: row.get("location")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}
