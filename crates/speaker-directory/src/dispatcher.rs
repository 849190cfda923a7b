//! Dispatcher for middleware action dispatch
//!
//! When middleware (or a task it spawned) needs to dispatch follow-up
//! actions, it uses the Dispatcher. Dispatched actions are queued on an
//! unbounded channel owned by the store and go back through the full
//! middleware chain.
//!
//! This enables patterns like:
//! - `Bootstrap::Start` dispatches `Speaker::LoadStart`
//! - a finished fetch task dispatches `Speaker::SetAll`

use crate::actions::Action;
use tokio::sync::mpsc::UnboundedSender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone, Debug)]
pub struct Dispatcher {
    action_tx: UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: UnboundedSender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the store
    ///
    /// Actions queued while the store is dispatching are processed before
    /// that dispatch returns; actions queued from spawned tasks are picked
    /// up by the event loop.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
