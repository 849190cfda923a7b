//! Speaker actions
//!
//! Actions that change the speaker collection, the favorite flags and the
//! favorite click counter.

use speaker_client::{NetworkError, SpeakerId, SpeakerRecord};

/// Actions for the speaker data
#[derive(Debug, Clone, PartialEq)]
pub enum SpeakerAction {
    // Loading
    /// Initial fetch issued (Uninitialized -> Fetching)
    LoadStart,
    /// Replace the whole collection and leave the loading state
    SetAll(Vec<SpeakerRecord>),
    /// The initial fetch failed
    LoadError(NetworkError),

    // Favorites
    /// Set `favorite = true` on the record with this id
    MarkFavorite(SpeakerId),
    /// Set `favorite = false` on the record with this id
    MarkUnfavorite(SpeakerId),
    /// One more favorite gesture
    IncrementClickCount,

    /// User gesture: flip the favorite flag of this record.
    /// Handled by middleware, which turns it into the actions above.
    ToggleFavorite(SpeakerRecord),

    // Reconciliation (only dispatched in reconcile mode)
    /// Update `seq` for `id` was sent; `previous` is the flag before the toggle
    UpdateStarted {
        id: SpeakerId,
        seq: u64,
        previous: bool,
    },
    /// The backend acknowledged update `seq` with this flag value
    UpdateConfirmed {
        id: SpeakerId,
        seq: u64,
        favorite: bool,
    },
    /// Update `seq` for `id` failed
    UpdateFailed {
        id: SpeakerId,
        seq: u64,
        error: NetworkError,
    },
}
