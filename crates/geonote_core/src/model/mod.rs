//! Domain model for location-bound reminders.
//!
//! # Responsibility
//! - Define the canonical reminder record shared by store, repository and
//!   geofence alerting.
//!
//! # Invariants
//! - Every reminder is identified by a stable string `ReminderId`.
//! - Deletion is bulk-only (`clear`); there is no per-record tombstone.

pub mod reminder;
