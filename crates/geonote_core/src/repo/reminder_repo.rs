//! Reminder repository: the result-wrapping façade over a store.
//!
//! # Responsibility
//! - Expose save/get/list/clear entry points for all core consumers.
//! - Map store absence to `RepoError::NotFound` and pass store fault
//!   diagnostics through unchanged.
//!
//! # Invariants
//! - "Not found" renders exactly `Reminder not found!`; existing
//!   consumers match on that string.
//! - An empty store lists as `Ok` with zero entries, never as an error.
//! - No retries; every fault surfaces immediately to the caller.

use crate::model::reminder::Reminder;
use crate::store::reminder_store::{ReminderStore, StoreError};
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository-level error reported to presentation/background consumers.
#[derive(Debug)]
pub enum RepoError {
    /// The requested id has no matching record. Expected and recoverable;
    /// user-facing as "nothing to show".
    NotFound,
    /// The underlying store failed unexpectedly. The caller may retry the
    /// user's action; the repository itself never does.
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Reminder not found!"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Store-backed repository shared by presentation screens and the
/// geofence event handler.
pub struct ReminderRepository<S: ReminderStore> {
    store: S,
}

impl<S: ReminderStore> ReminderRepository<S> {
    /// Creates a repository using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persists one reminder, overwriting any record with the same id.
    ///
    /// # Contract
    /// - Upsert semantics: last write for an id wins.
    /// - The outcome is returned rather than swallowed, so callers can
    ///   tell a lost write from a durable one.
    pub fn save_reminder(&self, reminder: &Reminder) -> RepoResult<()> {
        self.store.upsert(reminder).map_err(|err| {
            error!(
                "event=reminder_save module=repo status=error id={} error={}",
                reminder.id, err
            );
            RepoError::from(err)
        })
    }

    /// Gets one reminder by id.
    ///
    /// # Contract
    /// - `Ok(reminder)` when the id exists.
    /// - `Err(RepoError::NotFound)` when it does not.
    pub fn get_reminder(&self, id: &str) -> RepoResult<Reminder> {
        match self.store.get_by_id(id) {
            Ok(Some(reminder)) => Ok(reminder),
            Ok(None) => Err(RepoError::NotFound),
            Err(err) => {
                error!(
                    "event=reminder_get module=repo status=error id={id} error={err}"
                );
                Err(err.into())
            }
        }
    }

    /// Lists every stored reminder.
    ///
    /// # Contract
    /// - An empty store is `Ok(vec![])`; only a true store fault is an
    ///   error, carrying the underlying diagnostic.
    pub fn list_reminders(&self) -> RepoResult<Vec<Reminder>> {
        self.store.list_all().map_err(|err| {
            error!("event=reminder_list module=repo status=error error={err}");
            RepoError::from(err)
        })
    }

    /// Removes every stored reminder. Idempotent.
    pub fn clear_reminders(&self) -> RepoResult<()> {
        self.store.clear().map_err(|err| {
            error!("event=reminder_clear module=repo status=error error={err}");
            RepoError::from(err)
        })
    }
}
