//! Geofence alert resolution.
//!
//! # Responsibility
//! - Turn enter-transition events into notification payloads by looking
//!   up each triggering reminder through the repository.
//!
//! # Invariants
//! - Only `Enter` transitions produce alerts.
//! - An id with no stored reminder is dropped silently; the caller shows
//!   nothing rather than a broken notification.

use crate::geofence::{GeofenceEvent, GeofenceTransition};
use crate::model::reminder::Reminder;
use crate::repo::reminder_repo::{ReminderRepository, RepoError};
use crate::store::reminder_store::ReminderStore;
use log::{debug, error};
use serde::{Deserialize, Serialize};

/// Notification payload handed to the platform notification layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderAlert {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub id: String,
}

impl From<Reminder> for ReminderAlert {
    fn from(reminder: Reminder) -> Self {
        Self {
            title: reminder.title,
            description: reminder.description,
            location: reminder.location,
            latitude: reminder.latitude,
            longitude: reminder.longitude,
            id: reminder.id,
        }
    }
}

/// Resolves transition events against the shared repository handle.
pub struct AlertService<'repo, S: ReminderStore> {
    repo: &'repo ReminderRepository<S>,
}

impl<'repo, S: ReminderStore> AlertService<'repo, S> {
    pub fn new(repo: &'repo ReminderRepository<S>) -> Self {
        Self { repo }
    }

    /// Returns one alert per triggering reminder that still exists.
    ///
    /// # Contract
    /// - `Enter`: each request id is looked up; found reminders become
    ///   alerts, missing ones are skipped.
    /// - `Dwell`/`Exit`: no alerts.
    pub fn alerts_for_event(&self, event: &GeofenceEvent) -> Vec<ReminderAlert> {
        if event.transition != GeofenceTransition::Enter {
            debug!(
                "event=geofence_transition module=geofence status=ignored transition={:?}",
                event.transition
            );
            return Vec::new();
        }

        let mut alerts = Vec::new();
        for request_id in &event.request_ids {
            match self.repo.get_reminder(request_id) {
                Ok(reminder) => alerts.push(ReminderAlert::from(reminder)),
                Err(RepoError::NotFound) => {
                    debug!(
                        "event=geofence_alert module=geofence status=skipped id={request_id} reason=not_found"
                    );
                }
                Err(err) => {
                    error!(
                        "event=geofence_alert module=geofence status=error id={request_id} error={err}"
                    );
                }
            }
        }
        alerts
    }
}
