//! View Reducer
//!
//! Day filters and the list cursor.

use crate::actions::ViewAction;
use crate::state::{AppState, UiState};

pub fn reduce(state: &AppState, action: &ViewAction) -> Option<AppState> {
    let ui = &state.ui;
    let next_ui = match action {
        ViewAction::ToggleSaturday => UiState {
            show_saturday: !ui.show_saturday,
            selected: 0,
            ..ui.clone()
        },
        ViewAction::ToggleSunday => UiState {
            show_sunday: !ui.show_sunday,
            selected: 0,
            ..ui.clone()
        },
        ViewAction::SelectNext { visible } => {
            if ui.selected + 1 >= *visible {
                return None;
            }
            UiState {
                selected: ui.selected + 1,
                ..ui.clone()
            }
        }
        ViewAction::SelectPrevious => {
            if ui.selected == 0 {
                return None;
            }
            UiState {
                selected: ui.selected - 1,
                ..ui.clone()
            }
        }
    };

    Some(AppState {
        ui: next_ui,
        ..state.clone()
    })
}
