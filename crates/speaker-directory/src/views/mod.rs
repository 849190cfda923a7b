use crate::view_models::SpeakerTableViewModel;
use ratatui::{layout::Rect, Frame};

pub mod speakers_view;

/// Render the whole screen
pub fn render(vm: &SpeakerTableViewModel, area: Rect, f: &mut Frame) {
    speakers_view::render(vm, area, f);
}
