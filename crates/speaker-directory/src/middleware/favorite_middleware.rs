//! Favorite Toggle Middleware
//!
//! Turns a `ToggleFavorite(record)` gesture into:
//! 1. an optimistic `MarkFavorite`/`MarkUnfavorite` for the flipped value
//! 2. `IncrementClickCount`
//! 3. a spawned `update_record` carrying the flipped record
//!
//! Steps 1 and 2 are applied by the store before control returns to the
//! caller; step 3 is never awaited.
//!
//! In `SyncMode::Optimistic` a failed update is only logged: the local
//! flag stays ahead of the backend. In `SyncMode::Reconcile` every update
//! carries a per-speaker sequence number and its outcome is dispatched
//! back. Once every update for a speaker is answered, the reducer settles
//! the flag to the highest acknowledged value. Neither mode orders
//! concurrent `PUT`s at the backend: the last one to arrive wins.

use crate::actions::{Action, SpeakerAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, LoadStatus};
use speaker_client::{SpeakerClient, SpeakerId, SpeakerRecord};
use speaker_config::SyncMode;
use std::collections::HashMap;
use std::sync::Arc;

/// Middleware coordinating optimistic favorite toggles
pub struct FavoriteMiddleware {
    client: Arc<dyn SpeakerClient>,
    mode: SyncMode,
    /// Last sequence number handed out per speaker
    sequences: HashMap<SpeakerId, u64>,
}

impl FavoriteMiddleware {
    pub fn new(client: Arc<dyn SpeakerClient>, mode: SyncMode) -> Self {
        Self {
            client,
            mode,
            sequences: HashMap::new(),
        }
    }

    fn next_sequence(&mut self, id: SpeakerId) -> u64 {
        let seq = self.sequences.entry(id).or_insert(0);
        *seq += 1;
        *seq
    }

    fn toggle(&mut self, record: &SpeakerRecord, dispatcher: &Dispatcher) {
        let favorite = !record.favorite;
        let id = record.id;

        let mark = if favorite {
            SpeakerAction::MarkFavorite(id)
        } else {
            SpeakerAction::MarkUnfavorite(id)
        };
        dispatcher.dispatch(Action::Speaker(mark));
        dispatcher.dispatch(Action::Speaker(SpeakerAction::IncrementClickCount));

        let updated = record.with_favorite(favorite);
        match self.mode {
            SyncMode::Optimistic => self.spawn_update(updated),
            SyncMode::Reconcile => {
                let seq = self.next_sequence(id);
                dispatcher.dispatch(Action::Speaker(SpeakerAction::UpdateStarted {
                    id,
                    seq,
                    previous: record.favorite,
                }));
                self.spawn_reconciled_update(updated, seq, dispatcher);
            }
        }
    }

    fn spawn_update(&self, updated: SpeakerRecord) {
        let client = Arc::clone(&self.client);

        tokio::spawn(async move {
            match client.update_record(updated.id, &updated).await {
                Ok(_) => log::debug!(
                    "Speaker {} favorite={} saved",
                    updated.id,
                    updated.favorite
                ),
                // Not reflected in state: the local flag may now differ from the backend
                Err(e) => log::warn!(
                    "Failed to save favorite={} for speaker {}: {}",
                    updated.favorite,
                    updated.id,
                    e
                ),
            }
        });
    }

    fn spawn_reconciled_update(&self, updated: SpeakerRecord, seq: u64, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        tokio::spawn(async move {
            let id = updated.id;
            let action = match client.update_record(id, &updated).await {
                Ok(echoed) => SpeakerAction::UpdateConfirmed {
                    id,
                    seq,
                    favorite: echoed.favorite,
                },
                Err(error) => SpeakerAction::UpdateFailed { id, seq, error },
            };
            dispatcher.dispatch(Action::Speaker(action));
        });
    }
}

impl Middleware for FavoriteMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Speaker(SpeakerAction::ToggleFavorite(record)) => {
                if state.load_status != LoadStatus::Ready {
                    log::warn!(
                        "Ignoring favorite toggle for speaker {} in {:?}",
                        record.id,
                        state.load_status
                    );
                } else {
                    self.toggle(record, dispatcher);
                }
                false // Consumed: the reducer only sees the resulting actions
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{ready_state, scenario_records, MockClient, UpdateBehavior};
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    fn drain(rx: &mut UnboundedReceiver<Action>) -> Vec<Action> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    fn ana() -> SpeakerRecord {
        scenario_records().remove(0)
    }

    #[tokio::test]
    async fn test_toggle_dispatches_mark_then_increment() {
        let client = MockClient::new(scenario_records());
        let mut middleware = FavoriteMiddleware::new(Arc::new(client), SyncMode::Optimistic);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let state = ready_state(scenario_records());

        let consumed = !middleware.handle(
            &Action::Speaker(SpeakerAction::ToggleFavorite(ana())),
            &state,
            &dispatcher,
        );

        assert!(consumed);
        assert_eq!(
            drain(&mut rx),
            vec![
                Action::Speaker(SpeakerAction::MarkFavorite(1)),
                Action::Speaker(SpeakerAction::IncrementClickCount),
            ]
        );
    }

    #[tokio::test]
    async fn test_toggle_sends_flipped_full_record() {
        let client = MockClient::new(scenario_records());
        let mut middleware =
            FavoriteMiddleware::new(Arc::new(client.clone()), SyncMode::Optimistic);
        let (tx, _rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let state = ready_state(scenario_records());

        let favorite_ana = ana().with_favorite(true);
        middleware.handle(
            &Action::Speaker(SpeakerAction::ToggleFavorite(favorite_ana.clone())),
            &state,
            &dispatcher,
        );
        tokio::task::yield_now().await;

        assert_eq!(client.updates(), vec![(1, ana())]);
    }

    #[tokio::test]
    async fn test_optimistic_failure_is_not_dispatched() {
        let client = MockClient::new(scenario_records()).with_updates(UpdateBehavior::Fail);
        let mut middleware =
            FavoriteMiddleware::new(Arc::new(client.clone()), SyncMode::Optimistic);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let state = ready_state(scenario_records());

        middleware.handle(
            &Action::Speaker(SpeakerAction::ToggleFavorite(ana())),
            &state,
            &dispatcher,
        );
        tokio::task::yield_now().await;

        assert_eq!(client.updates().len(), 1);
        assert_eq!(drain(&mut rx).len(), 2);
    }

    #[tokio::test]
    async fn test_reconcile_tags_updates_with_sequence() {
        let client = MockClient::new(scenario_records()).with_updates(UpdateBehavior::Fail);
        let mut middleware =
            FavoriteMiddleware::new(Arc::new(client.clone()), SyncMode::Reconcile);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        let state = ready_state(scenario_records());

        middleware.handle(
            &Action::Speaker(SpeakerAction::ToggleFavorite(ana())),
            &state,
            &dispatcher,
        );
        middleware.handle(
            &Action::Speaker(SpeakerAction::ToggleFavorite(ana().with_favorite(true))),
            &state,
            &dispatcher,
        );
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        let actions = drain(&mut rx);
        let started: Vec<u64> = actions
            .iter()
            .filter_map(|a| match a {
                Action::Speaker(SpeakerAction::UpdateStarted { seq, .. }) => Some(*seq),
                _ => None,
            })
            .collect();
        let mut failed: Vec<u64> = actions
            .iter()
            .filter_map(|a| match a {
                Action::Speaker(SpeakerAction::UpdateFailed { seq, .. }) => Some(*seq),
                _ => None,
            })
            .collect();
        failed.sort_unstable();

        assert_eq!(started, vec![1, 2]);
        assert_eq!(failed, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_toggle_before_ready_is_ignored() {
        let client = MockClient::new(scenario_records());
        let mut middleware =
            FavoriteMiddleware::new(Arc::new(client.clone()), SyncMode::Optimistic);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);

        let consumed = !middleware.handle(
            &Action::Speaker(SpeakerAction::ToggleFavorite(ana())),
            &AppState::default(),
            &dispatcher,
        );
        tokio::task::yield_now().await;

        assert!(consumed);
        assert!(drain(&mut rx).is_empty());
        assert!(client.updates().is_empty());
    }
}
