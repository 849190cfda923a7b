//! Speaker session
//!
//! The surface a presentation layer talks to: a store wired with the
//! speaker middleware, the memoized presented list, and the handful of
//! read and write operations a speaker screen needs.

use crate::actions::{Action, BootstrapAction, SpeakerAction};
use crate::middleware::{FavoriteMiddleware, LoggingMiddleware, SpeakerDataMiddleware};
use crate::state::{AppState, SpeakerList};
use crate::store::Store;
use crate::view_models::{ScreenState, SpeakerListCache};
use speaker_client::{NetworkError, SpeakerClient, SpeakerRecord};
use speaker_config::AppConfig;
use std::sync::Arc;

pub struct SpeakerSession {
    store: Store,
    view_cache: SpeakerListCache,
}

impl SpeakerSession {
    pub fn new(config: &AppConfig, client: Arc<dyn SpeakerClient>) -> Self {
        let mut store = Store::new(AppState::from_config(config));

        // Middleware runs in insertion order
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store.add_middleware(Box::new(SpeakerDataMiddleware::new(Arc::clone(&client))));
        store.add_middleware(Box::new(FavoriteMiddleware::new(client, config.sync_mode)));

        log::debug!("Speaker session created (sync mode {:?})", config.sync_mode);

        Self {
            store,
            view_cache: SpeakerListCache::new(),
        }
    }

    /// Kick off the initial fetch; its result arrives through
    /// `process_pending` or `next_action`
    pub fn start(&mut self) {
        self.dispatch(Action::Bootstrap(BootstrapAction::Start));
    }

    pub fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
    }

    pub fn state(&self) -> &Arc<AppState> {
        self.store.state()
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading
    }

    pub fn has_errored(&self) -> bool {
        self.state().has_errored
    }

    pub fn error(&self) -> Option<&NetworkError> {
        self.state().error.as_ref()
    }

    pub fn records(&self) -> &SpeakerList {
        &self.state().records
    }

    pub fn favorite_click_count(&self) -> u64 {
        self.state().favorite_click_count
    }

    /// Flip the favorite flag of `record`
    ///
    /// The new flag and the incremented click count are visible as soon as
    /// this returns; the backend write happens in the background.
    pub fn toggle(&mut self, record: &SpeakerRecord) {
        self.dispatch(Action::Speaker(SpeakerAction::ToggleFavorite(
            record.clone(),
        )));
    }

    pub fn increment_click_count(&mut self) {
        self.dispatch(Action::Speaker(SpeakerAction::IncrementClickCount));
    }

    /// Filtered, sorted records for the current state
    pub fn visible_speakers(&mut self) -> SpeakerList {
        let state = Arc::clone(self.store.state());
        self.view_cache.for_state(&state)
    }

    pub fn screen(&self) -> ScreenState {
        ScreenState::from_state(self.state())
    }

    /// Apply actions queued by background tasks without waiting
    pub fn process_pending(&mut self) -> usize {
        self.store.process_pending()
    }

    /// Wait for the next action from a background task and apply it
    pub async fn next_action(&mut self) {
        self.store.dispatch_next().await;
    }
}
