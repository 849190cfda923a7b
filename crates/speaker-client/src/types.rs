//! Speaker API data transfer objects
//!
//! These types mirror the JSON returned by the speakers endpoint.
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable record key assigned by the backend
pub type SpeakerId = u32;

/// A speaker as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerRecord {
    /// Unique id (assigned by the backend)
    pub id: SpeakerId,

    /// Given name, also the sort key of the presented list
    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub bio: String,

    /// Whether the user marked this speaker as a favorite
    #[serde(default)]
    pub favorite: bool,

    /// Speaking on Saturday
    #[serde(default)]
    pub sat: bool,

    /// Speaking on Sunday
    #[serde(default)]
    pub sun: bool,

    /// Fields the backend stores that this client does not model.
    ///
    /// Kept so that a wholesale `PUT` writes them back untouched.
    #[serde(flatten, default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl SpeakerRecord {
    /// Create a record with empty bio and no day eligibility
    pub fn new(id: SpeakerId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            bio: String::new(),
            favorite: false,
            sat: false,
            sun: false,
            extra: BTreeMap::new(),
        }
    }

    /// Set the days this speaker is eligible for
    pub fn with_days(mut self, sat: bool, sun: bool) -> Self {
        self.sat = sat;
        self.sun = sun;
        self
    }

    /// Copy of this record with only the favorite flag changed
    pub fn with_favorite(&self, favorite: bool) -> Self {
        Self {
            favorite,
            ..self.clone()
        }
    }

    /// "First Last" for display
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
