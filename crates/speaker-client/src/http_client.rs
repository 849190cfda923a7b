//! reqwest-based speaker API client
//!
//! Direct implementation of the `SpeakerClient` trait over HTTP.
//! `GET {base}/api/speakers` returns the collection, `PUT
//! {base}/api/speakers/{id}` replaces one record and echoes it back.

use crate::client::{NetworkError, SpeakerClient};
use crate::types::{SpeakerId, SpeakerRecord};
use async_trait::async_trait;
use log::debug;
use std::time::Duration;

const SPEAKERS_PATH: &str = "/api/speakers";

/// HTTP client for the speakers endpoint
#[derive(Debug, Clone)]
pub struct HttpSpeakerClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSpeakerClient {
    /// Create a client for `base_url` (e.g. `http://localhost:3000`)
    ///
    /// `timeout` is handed to the transport; `None` keeps reqwest's default.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, NetworkError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(map_reqwest_error)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the collection
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, SPEAKERS_PATH)
    }

    /// URL of a single record
    pub fn record_url(&self, id: SpeakerId) -> String {
        format!("{}{}/{}", self.base_url, SPEAKERS_PATH, id)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> NetworkError {
    if err.is_decode() {
        NetworkError::Decode(err.to_string())
    } else if let Some(status) = err.status() {
        NetworkError::Status {
            status: status.as_u16(),
            url: err.url().map(|u| u.to_string()).unwrap_or_default(),
        }
    } else {
        NetworkError::Transport(err.to_string())
    }
}

/// Turn a non-2xx response into `NetworkError::Status`
fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, NetworkError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(NetworkError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

#[async_trait]
impl SpeakerClient for HttpSpeakerClient {
    async fn fetch_all(&self) -> Result<Vec<SpeakerRecord>, NetworkError> {
        let url = self.collection_url();
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let records: Vec<SpeakerRecord> = ensure_success(response)?
            .json()
            .await
            .map_err(map_reqwest_error)?;

        debug!("Fetched {} speakers from {}", records.len(), url);
        Ok(records)
    }

    async fn update_record(
        &self,
        id: SpeakerId,
        record: &SpeakerRecord,
    ) -> Result<SpeakerRecord, NetworkError> {
        let url = self.record_url(id);
        debug!("PUT {} (favorite={})", url, record.favorite);

        let response = self
            .http
            .put(&url)
            .json(record)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let echoed: SpeakerRecord = ensure_success(response)?
            .json()
            .await
            .map_err(map_reqwest_error)?;

        debug!("PUT {} acknowledged", url);
        Ok(echoed)
    }
}
