//! Core domain logic for geonote, a location-based reminder system.
//! This crate is the single source of truth for reminder persistence and
//! geofence alert resolution.

pub mod db;
pub mod geofence;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use geofence::alerts::{AlertService, ReminderAlert};
pub use geofence::{
    GeofenceEvent, GeofenceTransition, MonitoredRegion, GEOFENCE_RADIUS_METERS,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::reminder::{Reminder, ReminderId};
pub use repo::reminder_repo::{ReminderRepository, RepoError, RepoResult};
pub use store::memory::MemoryReminderStore;
pub use store::reminder_store::{
    ReminderStore, SqliteReminderStore, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
