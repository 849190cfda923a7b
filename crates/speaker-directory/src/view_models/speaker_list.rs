//! Derived speaker list
//!
//! The presented list is a filtered, sorted projection of
//! `AppState::records`. It is recomputed only when the record collection
//! (by pointer) or one of the two day filters changes; every other state
//! change, such as a click-count increment, reuses the cached list.

use crate::state::{AppState, SpeakerList};
use speaker_client::{NetworkError, SpeakerRecord};
use std::sync::Arc;

/// Filter and sort the collection for presentation
///
/// A record is kept iff `(show_saturday && sat) || (show_sunday && sun)`.
/// With both filters off the result is empty. Sorting is by first name;
/// ties keep collection order.
pub fn compute_view(
    records: &[Arc<SpeakerRecord>],
    show_saturday: bool,
    show_sunday: bool,
) -> SpeakerList {
    let mut visible: Vec<Arc<SpeakerRecord>> = records
        .iter()
        .filter(|r| (show_saturday && r.sat) || (show_sunday && r.sun))
        .cloned()
        .collect();
    // Vec::sort_by is stable
    visible.sort_by(|a, b| a.first_name.cmp(&b.first_name));
    visible.into()
}

/// Inputs the cached list was computed from
struct CacheKey {
    records: SpeakerList,
    show_saturday: bool,
    show_sunday: bool,
}

impl CacheKey {
    fn matches(&self, records: &SpeakerList, show_saturday: bool, show_sunday: bool) -> bool {
        Arc::ptr_eq(&self.records, records)
            && self.show_saturday == show_saturday
            && self.show_sunday == show_sunday
    }
}

/// Memoized `compute_view`
///
/// Holding on to the keyed `records` Arc keeps its allocation alive, so a
/// pointer match always means the same collection.
pub struct SpeakerListCache {
    cached: Option<(CacheKey, SpeakerList)>,
    /// Presented while loading, shared so every call returns the same Arc
    empty: SpeakerList,
    recomputations: usize,
}

impl Default for SpeakerListCache {
    fn default() -> Self {
        Self {
            cached: None,
            empty: Arc::from(Vec::new()),
            recomputations: 0,
        }
    }
}

impl SpeakerListCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The presented list for these inputs, computed at most once per
    /// distinct input
    pub fn get(
        &mut self,
        records: &SpeakerList,
        show_saturday: bool,
        show_sunday: bool,
    ) -> SpeakerList {
        if let Some((key, view)) = &self.cached {
            if key.matches(records, show_saturday, show_sunday) {
                return Arc::clone(view);
            }
        }

        let view = compute_view(records, show_saturday, show_sunday);
        self.recomputations += 1;
        log::trace!(
            "Recomputed speaker list: {} of {} visible",
            view.len(),
            records.len()
        );
        self.cached = Some((
            CacheKey {
                records: Arc::clone(records),
                show_saturday,
                show_sunday,
            },
            Arc::clone(&view),
        ));
        view
    }

    /// The presented list for `state`; empty while the collection is loading
    pub fn for_state(&mut self, state: &AppState) -> SpeakerList {
        if state.is_loading {
            return Arc::clone(&self.empty);
        }
        self.get(&state.records, state.ui.show_saturday, state.ui.show_sunday)
    }

    /// How many times the list was actually computed
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

/// What the screen should show for the session as a whole
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    Loading,
    /// The initial fetch failed; carries the error when one was recorded
    Errored(Option<NetworkError>),
    Ready,
}

impl ScreenState {
    /// An errored fetch wins over the loading flag, which a failed initial
    /// fetch never clears
    pub fn from_state(state: &AppState) -> Self {
        if state.has_errored {
            ScreenState::Errored(state.error.clone())
        } else if state.is_loading {
            ScreenState::Loading
        } else {
            ScreenState::Ready
        }
    }
}
