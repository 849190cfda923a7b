//! Speaker Data Middleware
//!
//! Manages the initial load of the speaker collection:
//! - `Bootstrap::Start` dispatches `Speaker::LoadStart`
//! - `Speaker::LoadStart` spawns `fetch_all` (once per session)
//! - the fetch task dispatches `SetAll` or `LoadError`

use crate::actions::{Action, BootstrapAction, SpeakerAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, LoadStatus};
use speaker_client::SpeakerClient;
use std::sync::Arc;

/// Middleware that loads the speaker collection
pub struct SpeakerDataMiddleware {
    client: Arc<dyn SpeakerClient>,
}

impl SpeakerDataMiddleware {
    pub fn new(client: Arc<dyn SpeakerClient>) -> Self {
        Self { client }
    }

    fn spawn_fetch(&self, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        tokio::spawn(async move {
            log::info!("Fetching speakers");
            match client.fetch_all().await {
                Ok(records) => {
                    log::info!("Fetched {} speakers", records.len());
                    dispatcher.dispatch(Action::Speaker(SpeakerAction::SetAll(records)));
                }
                Err(e) => {
                    log::error!("Failed to fetch speakers: {}", e);
                    dispatcher.dispatch(Action::Speaker(SpeakerAction::LoadError(e)));
                }
            }
        });
    }
}

impl Middleware for SpeakerDataMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                log::info!("SpeakerDataMiddleware: session starting");
                dispatcher.dispatch(Action::Speaker(SpeakerAction::LoadStart));
                true
            }

            Action::Speaker(SpeakerAction::LoadStart) => {
                // State is the snapshot before the reducer runs
                if state.load_status == LoadStatus::Uninitialized {
                    self.spawn_fetch(dispatcher);
                } else {
                    log::debug!(
                        "SpeakerDataMiddleware: fetch already issued ({:?})",
                        state.load_status
                    );
                }
                true
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{scenario_records, MockClient};
    use speaker_client::NetworkError;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_bootstrap_dispatches_load_start() {
        let client = MockClient::new(scenario_records());
        let mut middleware = SpeakerDataMiddleware::new(Arc::new(client.clone()));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);

        let action = Action::Bootstrap(BootstrapAction::Start);
        assert!(middleware.handle(&action, &AppState::default(), &dispatcher));
        assert_eq!(
            rx.recv().await,
            Some(Action::Speaker(SpeakerAction::LoadStart))
        );
        assert_eq!(client.fetch_calls(), 0);
    }

    #[tokio::test]
    async fn test_load_start_fetches_and_dispatches_set_all() {
        let client = MockClient::new(scenario_records());
        let mut middleware = SpeakerDataMiddleware::new(Arc::new(client.clone()));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);

        let action = Action::Speaker(SpeakerAction::LoadStart);
        assert!(middleware.handle(&action, &AppState::default(), &dispatcher));

        assert_eq!(
            rx.recv().await,
            Some(Action::Speaker(SpeakerAction::SetAll(scenario_records())))
        );
        assert_eq!(client.fetch_calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_dispatches_load_error() {
        let error = NetworkError::Status {
            status: 404,
            url: "http://mock/api/speakers".into(),
        };
        let client = MockClient::failing_fetch(error.clone());
        let mut middleware = SpeakerDataMiddleware::new(Arc::new(client));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);

        middleware.handle(
            &Action::Speaker(SpeakerAction::LoadStart),
            &AppState::default(),
            &dispatcher,
        );

        assert_eq!(
            rx.recv().await,
            Some(Action::Speaker(SpeakerAction::LoadError(error)))
        );
    }

    #[tokio::test]
    async fn test_load_start_after_fetching_does_not_refetch() {
        let client = MockClient::new(scenario_records());
        let mut middleware = SpeakerDataMiddleware::new(Arc::new(client.clone()));
        let (tx, _rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(tx);

        let state = AppState {
            load_status: LoadStatus::Fetching,
            ..AppState::default()
        };
        middleware.handle(&Action::Speaker(SpeakerAction::LoadStart), &state, &dispatcher);
        tokio::task::yield_now().await;

        assert_eq!(client.fetch_calls(), 0);
    }
}
