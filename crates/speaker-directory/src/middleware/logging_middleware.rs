use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // SetAll carries the whole collection; keep the log readable
        match action {
            Action::Speaker(crate::actions::SpeakerAction::SetAll(records)) => {
                log::debug!("Action: Speaker(SetAll({} records))", records.len());
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
