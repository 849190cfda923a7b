//! Sub-reducers
//!
//! Each sub-reducer handles one action domain and returns `None` when the
//! action leaves the state untouched, so the root reducer can hand back
//! the very same `Arc<AppState>`.

pub mod app_reducer;
pub mod speaker_reducer;
pub mod view_reducer;
