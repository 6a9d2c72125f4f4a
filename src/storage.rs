// SPDX-License-Identifier: MPL-2.0

//! Signed-URL resolution for stored images and icons.
//!
//! Posts and user icons are stored under opaque keys; clients need
//! time-limited signed URLs to display them. Resolution goes through the
//! media service's presign endpoint, one call per non-empty key.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("invalid storage endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("network error: {0}")]
    Network(String),
    #[error("presign returned status {status} for key {key}")]
    Status { status: u16, key: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Resolves an opaque storage key to a displayable, time-limited signed URL.
#[async_trait]
pub trait StorageResolver: Send + Sync {
    async fn resolve_url(&self, key: &str) -> Result<String, StorageError>;
}

#[derive(Deserialize)]
struct PresignResponse {
    url: String,
}

/// HTTP client for the media service's presign endpoint.
pub struct PresignClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl PresignClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StorageError> {
        let endpoint = Url::parse(base_url)?.join("presign")?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StorageError::Network(e.to_string()))?;

        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl StorageResolver for PresignClient {
    async fn resolve_url(&self, key: &str) -> Result<String, StorageError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("key", key);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| StorageError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::Status {
                status: response.status().as_u16(),
                key: key.to_string(),
            });
        }

        let parsed: PresignResponse = response
            .json()
            .await
            .map_err(|e| StorageError::InvalidResponse(e.to_string()))?;

        Ok(parsed.url)
    }
}
