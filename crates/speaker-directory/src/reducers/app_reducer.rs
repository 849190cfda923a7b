use crate::actions::{Action, GlobalAction};
use crate::reducers::{speaker_reducer, view_reducer};
use crate::state::AppState;
use std::sync::Arc;

/// Reducer - pure function that produces new state from current state + action
///
/// This is the root reducer that orchestrates all sub-reducers. When no
/// sub-reducer changes anything, the incoming `Arc` is returned as is, so
/// callers can detect "nothing happened" with `Arc::ptr_eq`.
pub fn reduce(state: Arc<AppState>, action: &Action) -> Arc<AppState> {
    let next = match action {
        Action::Speaker(speaker_action) => speaker_reducer::reduce(&state, speaker_action),
        Action::View(view_action) => view_reducer::reduce(&state, view_action),
        Action::Global(GlobalAction::Quit) => {
            let mut next = AppState::clone(&state);
            next.ui.running = false;
            Some(next)
        }
        // Bootstrap is middleware-only; None is the no-op
        Action::Bootstrap(_) | Action::None => None,
    };

    match next {
        Some(next) => Arc::new(next),
        None => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{BootstrapAction, SpeakerAction};
    use crate::test_fixtures::{ready_state, scenario_records};

    #[test]
    fn test_noop_action_returns_same_arc() {
        let state = ready_state(scenario_records());
        let next = reduce(Arc::clone(&state), &Action::None);
        assert!(Arc::ptr_eq(&state, &next));

        let next = reduce(Arc::clone(&state), &Action::Bootstrap(BootstrapAction::Start));
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_unknown_id_returns_same_arc() {
        let state = ready_state(scenario_records());
        let next = reduce(
            Arc::clone(&state),
            &Action::Speaker(SpeakerAction::MarkFavorite(404)),
        );
        assert!(Arc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_quit_stops_running() {
        let state = Arc::new(AppState::default());
        let next = reduce(state, &Action::Global(GlobalAction::Quit));
        assert!(!next.ui.running);
    }

    #[test]
    fn test_click_count_is_independent_of_records() {
        let mut state = ready_state(scenario_records());
        for _ in 0..5 {
            state = reduce(state, &Action::Speaker(SpeakerAction::IncrementClickCount));
        }
        assert_eq!(state.favorite_click_count, 5);
        assert!(state.records.iter().all(|r| !r.favorite));
    }
}
