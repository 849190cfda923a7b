//! View models
//!
//! Presentation logic derived from `AppState`, kept apart from rendering.

pub mod speaker_list;
pub mod speaker_table_view_model;

pub use speaker_list::{compute_view, ScreenState, SpeakerListCache};
pub use speaker_table_view_model::SpeakerTableViewModel;
