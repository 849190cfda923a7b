use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Store - holds application state and manages the Redux loop
///
/// The store owns the only `AppState` of a session and the receiving end
/// of the dispatcher channel. Everything that wants to change state goes
/// through `dispatch`.
pub struct Store {
    state: Arc<AppState>,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: UnboundedReceiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: Arc::new(initial_state),
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store (they run in insertion order)
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action through middleware chain and reducer
    ///
    /// Follow-up actions queued while processing are applied before this
    /// returns, so e.g. an optimistic mark is visible to the caller
    /// immediately.
    pub fn dispatch(&mut self, action: Action) {
        self.apply(action);
        self.process_pending();
    }

    /// Apply every action currently queued on the dispatcher channel
    ///
    /// Returns the number of actions applied.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.apply(action);
            processed += 1;
        }
        processed
    }

    /// Wait for the next queued action (typically from a spawned task)
    /// and dispatch it
    ///
    /// The store keeps a sender alive, so this only returns once an
    /// action arrived.
    pub async fn dispatch_next(&mut self) {
        if let Some(action) = self.action_rx.recv().await {
            self.dispatch(action);
        }
    }

    fn apply(&mut self, action: Action) {
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(Arc::clone(&self.state), &action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{GlobalAction, SpeakerAction};
    use crate::test_fixtures::scenario_records;

    /// Consumes `None`, echoes `Quit` as an increment first
    struct EchoMiddleware;

    impl Middleware for EchoMiddleware {
        fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
            match action {
                Action::None => false,
                Action::Global(GlobalAction::Quit) => {
                    dispatcher.dispatch(Action::Speaker(SpeakerAction::IncrementClickCount));
                    true
                }
                _ => true,
            }
        }
    }

    #[test]
    fn test_dispatch_reduces() {
        let mut store = Store::new(AppState::default());
        store.dispatch(Action::Speaker(SpeakerAction::SetAll(scenario_records())));
        assert!(!store.state().is_loading);
        assert_eq!(store.state().records.len(), 2);
    }

    #[test]
    fn test_consumed_action_skips_reducer() {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(EchoMiddleware));
        let before = Arc::clone(store.state());

        store.dispatch(Action::None);
        assert!(Arc::ptr_eq(&before, store.state()));
    }

    #[test]
    fn test_follow_up_actions_applied_before_return() {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(EchoMiddleware));

        store.dispatch(Action::Global(GlobalAction::Quit));
        assert!(!store.state().ui.running);
        assert_eq!(store.state().favorite_click_count, 1);
    }

    #[tokio::test]
    async fn test_dispatch_next_picks_up_external_actions() {
        let mut store = Store::new(AppState::default());
        let dispatcher = store.dispatcher().clone();

        tokio::spawn(async move {
            dispatcher.dispatch(Action::Speaker(SpeakerAction::IncrementClickCount));
        });
        store.dispatch_next().await;

        assert_eq!(store.state().favorite_click_count, 1);
    }
}
