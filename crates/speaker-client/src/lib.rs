//! Speaker directory API client
//!
//! This crate provides a trait-based client for the remote speaker store.
//! The application depends on the trait, so tests and alternative
//! transports can be swapped in without touching the coordinator.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              SpeakerClient trait                 │
//! │  - fetch_all()                                   │
//! │  - update_record(id, record)                     │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────────┐
//!              │  HttpSpeakerClient  │
//!              │  (reqwest, JSON)    │
//!              └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use speaker_client::{HttpSpeakerClient, SpeakerClient};
//!
//! # async fn example() -> Result<(), speaker_client::NetworkError> {
//! let client = HttpSpeakerClient::new("http://localhost:3000", None)?;
//! let speakers = client.fetch_all().await?;
//! if let Some(first) = speakers.first() {
//!     client.update_record(first.id, &first.with_favorite(true)).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod http_client;
pub mod types;

/// Default backend when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

pub use client::{NetworkError, SpeakerClient};
pub use http_client::HttpSpeakerClient;
pub use types::{SpeakerId, SpeakerRecord};
