//! Speaker client trait and error definitions
//!
//! This module defines the `SpeakerClient` trait that every client
//! implementation must satisfy, and the `NetworkError` returned by both
//! remote operations.

use crate::types::{SpeakerId, SpeakerRecord};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a remote call
///
/// Any non-success status or transport problem ends up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// Connection refused, DNS failure, timeout, broken body stream
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status
    #[error("request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    /// The body was not the JSON we expected
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl NetworkError {
    /// HTTP status code, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Speaker API client trait
///
/// Stateless access to the remote speaker collection. Implementations
/// perform no retries and no caching.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// by every spawned request task.
///
/// # Example
///
/// ```rust,ignore
/// use speaker_client::{SpeakerClient, SpeakerRecord};
///
/// async fn favorites(client: &dyn SpeakerClient) -> Result<Vec<SpeakerRecord>, NetworkError> {
///     let all = client.fetch_all().await?;
///     Ok(all.into_iter().filter(|s| s.favorite).collect())
/// }
/// ```
#[async_trait]
pub trait SpeakerClient: Send + Sync {
    /// Fetch the whole speaker collection
    ///
    /// There is no pagination: either every record comes back or the
    /// call fails.
    async fn fetch_all(&self) -> Result<Vec<SpeakerRecord>, NetworkError>;

    /// Replace the stored record for `id` with `record`
    ///
    /// # Arguments
    ///
    /// * `id` - Record to replace
    /// * `record` - The complete new value (not a delta)
    ///
    /// # Returns
    ///
    /// The record as echoed back by the backend.
    async fn update_record(
        &self,
        id: SpeakerId,
        record: &SpeakerRecord,
    ) -> Result<SpeakerRecord, NetworkError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// In-memory backend that replaces records wholesale
    #[derive(Debug, Clone, Default)]
    struct MemoryClient {
        records: Arc<Mutex<Vec<SpeakerRecord>>>,
    }

    #[async_trait]
    impl SpeakerClient for MemoryClient {
        async fn fetch_all(&self) -> Result<Vec<SpeakerRecord>, NetworkError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn update_record(
            &self,
            id: SpeakerId,
            record: &SpeakerRecord,
        ) -> Result<SpeakerRecord, NetworkError> {
            let mut records = self.records.lock().unwrap();
            let slot = records
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| NetworkError::Status {
                    status: 404,
                    url: format!("/api/speakers/{}", id),
                })?;
            *slot = record.clone();
            Ok(record.clone())
        }
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let client = MemoryClient::default();
        client
            .records
            .lock()
            .unwrap()
            .push(SpeakerRecord::new(1, "Ana", "Ruiz").with_days(true, false));

        let updated = SpeakerRecord::new(1, "Ana", "Ruiz").with_favorite(true);
        let echoed = client.update_record(1, &updated).await.unwrap();
        assert_eq!(echoed, updated);

        let all = client.fetch_all().await.unwrap();
        assert_eq!(all, vec![updated]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_status_error() {
        let client = MemoryClient::default();
        let err = client
            .update_record(9, &SpeakerRecord::new(9, "X", "Y"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_error_display() {
        let err = NetworkError::Status {
            status: 500,
            url: "http://localhost:3000/api/speakers".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "request to http://localhost:3000/api/speakers failed with status 500"
        );
        assert_eq!(NetworkError::Transport("refused".into()).status(), None);
    }
}
