//! Geofence region derivation and transition events.
//!
//! # Responsibility
//! - Describe the circular region a consumer registers with the OS after
//!   a reminder is saved.
//! - Model the transition events the OS delivers back.
//!
//! # Invariants
//! - A region is derivable only from a reminder carrying both
//!   coordinates.
//! - `request_id` always equals the reminder id, so an event can be
//!   resolved back to its record by point lookup.

pub mod alerts;

use crate::model::reminder::Reminder;
use serde::{Deserialize, Serialize};

/// Fixed radius for every monitored region, in meters.
pub const GEOFENCE_RADIUS_METERS: f64 = 100.0;

/// Boundary-crossing kind reported by the OS location service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeofenceTransition {
    /// The device entered the region; the only kind that alerts.
    Enter,
    /// The device lingered inside the region.
    Dwell,
    /// The device left the region.
    Exit,
}

/// Circular region registered with the OS, keyed by reminder id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoredRegion {
    pub request_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
}

impl MonitoredRegion {
    /// Derives the region for a saved reminder, or `None` when the
    /// reminder has no coordinates to monitor.
    pub fn for_reminder(reminder: &Reminder) -> Option<Self> {
        let latitude = reminder.latitude?;
        let longitude = reminder.longitude?;
        Some(Self {
            request_id: reminder.id.clone(),
            latitude,
            longitude,
            radius_meters: GEOFENCE_RADIUS_METERS,
        })
    }
}

/// One decoded transition event. The OS may report several triggering
/// regions in a single delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeofenceEvent {
    pub transition: GeofenceTransition,
    pub request_ids: Vec<String>,
}

impl GeofenceEvent {
    pub fn new(transition: GeofenceTransition, request_ids: Vec<String>) -> Self {
        Self {
            transition,
            request_ids,
        }
    }
}
