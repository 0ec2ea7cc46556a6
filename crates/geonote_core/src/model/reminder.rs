//! Reminder domain model.
//!
//! # Responsibility
//! - Define the single persisted entity of the core.
//! - Provide constructors for generated and caller-supplied identities.
//!
//! # Invariants
//! - `id` is stable and never reused for another reminder.
//! - All descriptive fields are optional at this layer; presentation-level
//!   validation (non-empty title/location) happens above the core.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a reminder, used as the store's primary key and
/// as the geofence request id.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ReminderId = String;

/// A user-defined reminder tied to a geographic point of interest.
///
/// The store accepts any shape, including records without coordinates;
/// such records simply never produce a monitored region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable global ID, also the geofence request id after registration.
    pub id: ReminderId,
    /// Short user-facing title.
    pub title: Option<String>,
    /// Longer free-form body shown in the triggered notification.
    pub description: Option<String>,
    /// Human-readable place label.
    pub location: Option<String>,
    /// Latitude in degrees.
    pub latitude: Option<f64>,
    /// Longitude in degrees.
    pub longitude: Option<f64>,
}

impl Reminder {
    /// Creates a reminder with a freshly generated stable ID.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            title,
            description,
            location,
            latitude,
            longitude,
        )
    }

    /// Creates a reminder with a caller-provided stable ID.
    ///
    /// Used when identity already exists externally, e.g. a geofence
    /// handler re-reading a record by its request id.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this reminder lifetime.
    pub fn with_id(
        id: impl Into<ReminderId>,
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            title,
            description,
            location,
            latitude,
            longitude,
        }
    }

    /// Returns whether both coordinates are present, i.e. whether this
    /// reminder can back a monitored geofence region.
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
