//! In-memory reminder store.
//!
//! # Responsibility
//! - Provide a process-local `ReminderStore` for tests and ephemeral use.
//! - Allow forcing storage faults so callers can exercise error paths.
//!
//! # Invariants
//! - All access goes through the internal mutex, so racing upserts on one
//!   id resolve to last-write-wins and reads are never torn.

use crate::model::reminder::Reminder;
use crate::store::reminder_store::{ReminderStore, StoreError, StoreResult};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Mutex-guarded map store keyed by reminder id.
#[derive(Debug, Default)]
pub struct MemoryReminderStore {
    inner: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    records: BTreeMap<String, Reminder>,
    failure: Option<String>,
}

impl MemoryReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation fail with the given diagnostic,
    /// until `clear_failure` is called.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.lock().failure = Some(message.into());
    }

    /// Restores normal operation after `fail_with`.
    pub fn clear_failure(&self) {
        self.lock().failure = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // A poisoned mutex means a panic mid-operation; the map itself is
        // still structurally sound, so recover the guard.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MemoryState {
    fn check_available(&self) -> StoreResult<()> {
        match &self.failure {
            Some(message) => Err(StoreError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

impl ReminderStore for MemoryReminderStore {
    fn upsert(&self, reminder: &Reminder) -> StoreResult<()> {
        let mut state = self.lock();
        state.check_available()?;
        state.records.insert(reminder.id.clone(), reminder.clone());
        Ok(())
    }

    fn get_by_id(&self, id: &str) -> StoreResult<Option<Reminder>> {
        let state = self.lock();
        state.check_available()?;
        Ok(state.records.get(id).cloned())
    }

    fn list_all(&self) -> StoreResult<Vec<Reminder>> {
        let state = self.lock();
        state.check_available()?;
        Ok(state.records.values().cloned().collect())
    }

    fn clear(&self) -> StoreResult<()> {
        let mut state = self.lock();
        state.check_available()?;
        state.records.clear();
        Ok(())
    }
}
