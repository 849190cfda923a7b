//! Application state
//!
//! `AppState` is the single source of truth for a session. The store keeps
//! it behind an `Arc` and replaces it only through the reducer; the record
//! collection is shared as `Arc<[Arc<SpeakerRecord>]>` so records a
//! reducer did not touch stay pointer-equal across states.

use speaker_client::{NetworkError, SpeakerId, SpeakerRecord};
use speaker_config::AppConfig;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Shared, read-only speaker collection
pub type SpeakerList = Arc<[Arc<SpeakerRecord>]>;

/// Readiness of the session's data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing requested yet
    #[default]
    Uninitialized,
    /// Initial fetch in flight
    Fetching,
    /// Collection loaded; favorites may be toggled
    Ready,
    /// Initial fetch failed; terminal for this session
    Failed,
}

/// Updates in flight for one speaker (reconcile mode only)
///
/// The entry lives until every update sent for the speaker has been
/// answered; only then is the local flag settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingUpdate {
    /// Sequence number of the latest update sent for this speaker
    pub seq: u64,
    /// Updates sent but not yet answered
    pub in_flight: u32,
    /// Highest acknowledged sequence number, 0 if none yet
    pub confirmed_seq: u64,
    /// Flag value of that acknowledgement, or the value before the first
    /// update while nothing has been acknowledged
    pub confirmed_favorite: bool,
}

impl PendingUpdate {
    /// First update for a speaker whose flag was `previous`
    pub fn started(seq: u64, previous: bool) -> Self {
        Self {
            seq,
            in_flight: 1,
            confirmed_seq: 0,
            confirmed_favorite: previous,
        }
    }
}

/// Presentation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub running: bool,
    pub show_saturday: bool,
    pub show_sunday: bool,
    /// Cursor into the presented (filtered, sorted) list
    pub selected: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            running: true,
            show_saturday: true,
            show_sunday: true,
            selected: 0,
        }
    }
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub load_status: LoadStatus,
    /// True until the first `SetAll` has been applied
    pub is_loading: bool,
    /// The initial fetch failed
    pub has_errored: bool,
    pub error: Option<NetworkError>,
    /// At most one entry per id; order carries no meaning
    pub records: SpeakerList,
    /// Favorite gestures so far, regardless of network outcome
    pub favorite_click_count: u64,
    /// Updates awaiting acknowledgement, keyed by speaker
    pub pending: BTreeMap<SpeakerId, PendingUpdate>,
    pub ui: UiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            load_status: LoadStatus::default(),
            is_loading: true,
            has_errored: false,
            error: None,
            records: Arc::from(Vec::new()),
            favorite_click_count: 0,
            pending: BTreeMap::new(),
            ui: UiState::default(),
        }
    }
}

impl AppState {
    /// Initial state with the configured filter defaults
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            ui: UiState {
                show_saturday: config.show_saturday,
                show_sunday: config.show_sunday,
                ..UiState::default()
            },
            ..Self::default()
        }
    }

    /// Find a record by id
    pub fn record(&self, id: SpeakerId) -> Option<&Arc<SpeakerRecord>> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Whether an update for this speaker is awaiting acknowledgement
    pub fn is_pending(&self, id: SpeakerId) -> bool {
        self.pending.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.load_status, LoadStatus::Uninitialized);
        assert!(state.is_loading);
        assert!(!state.has_errored);
        assert!(state.error.is_none());
        assert!(state.records.is_empty());
        assert_eq!(state.favorite_click_count, 0);
        assert!(state.ui.running);
    }

    #[test]
    fn test_from_config_uses_filter_defaults() {
        let config = AppConfig {
            show_saturday: false,
            ..AppConfig::default()
        };
        let state = AppState::from_config(&config);
        assert!(!state.ui.show_saturday);
        assert!(state.ui.show_sunday);
        assert!(state.is_loading);
    }
}
