use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod favorite_middleware;
pub mod logging_middleware;
pub mod speaker_data_middleware;

pub use favorite_middleware::FavoriteMiddleware;
pub use logging_middleware::LoggingMiddleware;
pub use speaker_data_middleware::SpeakerDataMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware never blocks: network calls are spawned onto the tokio
/// runtime and report back through the dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
