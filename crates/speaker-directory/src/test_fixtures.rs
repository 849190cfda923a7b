//! Shared fixtures for unit tests

use crate::actions::{Action, SpeakerAction};
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use async_trait::async_trait;
use speaker_client::{NetworkError, SpeakerClient, SpeakerId, SpeakerRecord};
use std::sync::{Arc, Mutex};

/// Ana (Saturday), Bo (Sunday)
pub fn scenario_records() -> Vec<SpeakerRecord> {
    vec![
        SpeakerRecord::new(1, "Ana", "Ruiz").with_days(true, false),
        SpeakerRecord::new(2, "Bo", "Li").with_days(false, true),
    ]
}

/// A larger, unsorted collection with a first-name tie
pub fn conference_records() -> Vec<SpeakerRecord> {
    vec![
        SpeakerRecord::new(10, "Sam", "Okafor").with_days(true, true),
        SpeakerRecord::new(11, "Ana", "Berg").with_days(false, true),
        SpeakerRecord::new(12, "Lee", "Chan").with_days(true, false),
        SpeakerRecord::new(13, "Ana", "Abbas").with_days(true, false),
        SpeakerRecord::new(14, "Kim", "Dube").with_days(false, false),
    ]
}

/// State after a successful initial fetch of `records`
pub fn ready_state(records: Vec<SpeakerRecord>) -> Arc<AppState> {
    let state = Arc::new(AppState::default());
    let state = reduce(state, &Action::Speaker(SpeakerAction::LoadStart));
    reduce(state, &Action::Speaker(SpeakerAction::SetAll(records)))
}

/// How the mock answers `update_record`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateBehavior {
    Echo,
    Fail,
}

/// Recording `SpeakerClient` for middleware and session tests
#[derive(Clone)]
pub struct MockClient {
    fetch_result: Result<Vec<SpeakerRecord>, NetworkError>,
    update_behavior: UpdateBehavior,
    fetch_calls: Arc<Mutex<usize>>,
    updates: Arc<Mutex<Vec<(SpeakerId, SpeakerRecord)>>>,
}

impl MockClient {
    pub fn new(records: Vec<SpeakerRecord>) -> Self {
        Self {
            fetch_result: Ok(records),
            update_behavior: UpdateBehavior::Echo,
            fetch_calls: Arc::new(Mutex::new(0)),
            updates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_fetch(error: NetworkError) -> Self {
        Self {
            fetch_result: Err(error),
            ..Self::new(Vec::new())
        }
    }

    pub fn with_updates(mut self, behavior: UpdateBehavior) -> Self {
        self.update_behavior = behavior;
        self
    }

    pub fn fetch_calls(&self) -> usize {
        *self.fetch_calls.lock().unwrap()
    }

    /// Every `update_record` call received so far, in call order
    pub fn updates(&self) -> Vec<(SpeakerId, SpeakerRecord)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeakerClient for MockClient {
    async fn fetch_all(&self) -> Result<Vec<SpeakerRecord>, NetworkError> {
        *self.fetch_calls.lock().unwrap() += 1;
        self.fetch_result.clone()
    }

    async fn update_record(
        &self,
        id: SpeakerId,
        record: &SpeakerRecord,
    ) -> Result<SpeakerRecord, NetworkError> {
        self.updates.lock().unwrap().push((id, record.clone()));
        match self.update_behavior {
            UpdateBehavior::Echo => Ok(record.clone()),
            UpdateBehavior::Fail => Err(NetworkError::Status {
                status: 500,
                url: format!("http://mock/api/speakers/{}", id),
            }),
        }
    }
}
