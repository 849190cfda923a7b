//! View model for the speaker table
//!
//! Pre-computes all display text and colors so the view only lays out.

use crate::state::{AppState, SpeakerList};
use crate::view_models::ScreenState;
use ratatui::style::Color;

/// View model for the whole screen
#[derive(Debug, Clone)]
pub struct SpeakerTableViewModel {
    /// "Speakers (3 favorite clicks)"
    pub title: String,
    /// "[x] Saturday  [ ] Sunday"
    pub filter_text: String,
    /// Status line: loading / error / key help
    pub status_text: String,
    pub status_color: Color,
    pub rows: Vec<SpeakerRowViewModel>,
    /// Shown in place of the table when there are no rows
    pub empty_message: String,
    /// Cursor, clamped to the visible rows
    pub selected_index: usize,
}

/// View model for a single speaker row
#[derive(Debug, Clone)]
pub struct SpeakerRowViewModel {
    pub favorite: String, // "♥" or "♡"
    pub name: String,
    pub days: String, // "Sat Sun"
    pub bio: String,
    pub fg_color: Color,
    pub bg_color: Color,
}

impl SpeakerTableViewModel {
    /// Build from state and the already-derived visible list
    pub fn from_state(state: &AppState, visible: &SpeakerList) -> Self {
        let selected_index = state.ui.selected.min(visible.len().saturating_sub(1));

        let (status_text, status_color, empty_message) = match ScreenState::from_state(state) {
            ScreenState::Loading => ("Loading...".to_string(), Color::Yellow, "Loading speakers"),
            ScreenState::Errored(error) => (
                match error {
                    Some(error) => format!("Error: {}", error),
                    None => "Error: speakers could not be loaded".to_string(),
                },
                Color::Red,
                "Could not load speakers",
            ),
            ScreenState::Ready => (
                "j/k move  f favorite  s Saturday  u Sunday  q quit".to_string(),
                Color::DarkGray,
                "No speakers match the selected days",
            ),
        };

        let rows = visible
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let pending = state.is_pending(record.id);
                let favorite = match (record.favorite, pending) {
                    (true, false) => "♥",
                    (false, false) => "♡",
                    (true, true) => "♥…",
                    (false, true) => "♡…",
                };
                let days = [(record.sat, "Sat"), (record.sun, "Sun")]
                    .iter()
                    .filter(|(on, _)| *on)
                    .map(|(_, label)| *label)
                    .collect::<Vec<_>>()
                    .join(" ");
                let (fg_color, bg_color) = if index == selected_index {
                    (Color::Black, Color::Cyan)
                } else {
                    (Color::Reset, Color::Reset)
                };

                SpeakerRowViewModel {
                    favorite: favorite.to_string(),
                    name: record.full_name(),
                    days,
                    bio: record.bio.clone(),
                    fg_color,
                    bg_color,
                }
            })
            .collect();

        Self {
            title: format!(
                " Speakers ({} favorite clicks) ",
                state.favorite_click_count
            ),
            filter_text: format!(
                "[{}] Saturday  [{}] Sunday",
                checkbox(state.ui.show_saturday),
                checkbox(state.ui.show_sunday)
            ),
            status_text,
            status_color,
            rows,
            empty_message: empty_message.to_string(),
            selected_index,
        }
    }
}

fn checkbox(checked: bool) -> char {
    if checked {
        'x'
    } else {
        ' '
    }
}
