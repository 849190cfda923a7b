//! Speaker Reducer
//!
//! Handles the speaker collection, favorite flags, the click counter and
//! reconcile bookkeeping.

use crate::actions::SpeakerAction;
use crate::state::{AppState, LoadStatus, PendingUpdate, SpeakerList};
use speaker_client::{SpeakerId, SpeakerRecord};
use std::collections::HashSet;
use std::sync::Arc;

/// Build the shared collection, keeping the first record of each id
fn collect_unique(records: &[SpeakerRecord]) -> SpeakerList {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .filter(|record| {
            let first = seen.insert(record.id);
            if !first {
                log::warn!("Dropping duplicate speaker id {}", record.id);
            }
            first
        })
        .map(|record| Arc::new(record.clone()))
        .collect()
}

/// Copy of `records` with one record's flag replaced
///
/// Every other record is carried over by pointer. Returns `None` when the
/// id is unknown or the flag already has that value.
fn set_favorite(records: &SpeakerList, id: SpeakerId, favorite: bool) -> Option<SpeakerList> {
    let Some(index) = records.iter().position(|r| r.id == id) else {
        log::debug!("Speaker {} not found, favorite unchanged", id);
        return None;
    };
    if records[index].favorite == favorite {
        return None;
    }

    Some(
        records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                if i == index {
                    Arc::new(record.with_favorite(favorite))
                } else {
                    Arc::clone(record)
                }
            })
            .collect(),
    )
}

/// Reduce speaker-related state
///
/// Returns `None` when the action does not change anything.
pub fn reduce(state: &AppState, action: &SpeakerAction) -> Option<AppState> {
    match action {
        SpeakerAction::LoadStart => {
            if state.load_status != LoadStatus::Uninitialized {
                log::debug!("LoadStart ignored in {:?}", state.load_status);
                return None;
            }
            Some(AppState {
                load_status: LoadStatus::Fetching,
                ..state.clone()
            })
        }

        SpeakerAction::SetAll(records) => {
            let records = collect_unique(records);
            log::info!("Loaded {} speakers", records.len());
            Some(AppState {
                records,
                is_loading: false,
                load_status: LoadStatus::Ready,
                ..state.clone()
            })
        }

        SpeakerAction::LoadError(error) => {
            log::error!("Initial speaker fetch failed: {}", error);
            // is_loading stays set: the collection was never loaded
            Some(AppState {
                has_errored: true,
                error: Some(error.clone()),
                load_status: LoadStatus::Failed,
                ..state.clone()
            })
        }

        SpeakerAction::MarkFavorite(id) => {
            let records = set_favorite(&state.records, *id, true)?;
            Some(AppState {
                records,
                ..state.clone()
            })
        }

        SpeakerAction::MarkUnfavorite(id) => {
            let records = set_favorite(&state.records, *id, false)?;
            Some(AppState {
                records,
                ..state.clone()
            })
        }

        SpeakerAction::IncrementClickCount => Some(AppState {
            favorite_click_count: state.favorite_click_count.saturating_add(1),
            ..state.clone()
        }),

        // Request - handled by middleware
        SpeakerAction::ToggleFavorite(_) => None,

        SpeakerAction::UpdateStarted { id, seq, previous } => {
            let mut next = state.clone();
            next.pending
                .entry(*id)
                .and_modify(|pending| {
                    pending.seq = *seq;
                    pending.in_flight += 1;
                })
                .or_insert_with(|| PendingUpdate::started(*seq, *previous));
            Some(next)
        }

        SpeakerAction::UpdateConfirmed { id, seq, favorite } => {
            let mut pending = *state.pending.get(id)?;
            log::debug!("Update #{} for speaker {} confirmed", seq, id);
            pending.in_flight = pending.in_flight.saturating_sub(1);
            // A late answer to an older update never overrides a newer one
            if *seq > pending.confirmed_seq {
                pending.confirmed_seq = *seq;
                pending.confirmed_favorite = *favorite;
            }
            Some(settle(state, *id, pending))
        }

        SpeakerAction::UpdateFailed { id, seq, error } => {
            let mut pending = *state.pending.get(id)?;
            log::warn!("Update #{} for speaker {} failed: {}", seq, id, error);
            pending.in_flight = pending.in_flight.saturating_sub(1);
            Some(settle(state, *id, pending))
        }
    }
}

/// Store the bookkeeping for `id`, or settle the flag once nothing is in
/// flight
///
/// Settling sets the flag to the value of the highest acknowledged update,
/// which is a no-op when the latest update succeeded.
fn settle(state: &AppState, id: SpeakerId, pending: PendingUpdate) -> AppState {
    let mut next = state.clone();
    if pending.in_flight > 0 {
        next.pending.insert(id, pending);
        return next;
    }

    next.pending.remove(&id);
    if let Some(records) = set_favorite(&state.records, id, pending.confirmed_favorite) {
        log::warn!(
            "Speaker {} favorite rolled back to {} (latest acknowledged update #{})",
            id,
            pending.confirmed_favorite,
            pending.confirmed_seq
        );
        next.records = records;
    }
    next
}
