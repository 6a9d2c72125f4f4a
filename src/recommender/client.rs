// SPDX-License-Identifier: MPL-2.0

use crate::recommender::types::RawPost;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum RecommenderError {
    #[error("invalid recommender endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("network error: {0}")]
    Network(String),
    #[error("recommender returned status {0}")]
    Status(u16),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Source of ranked timeline candidates for one user.
///
/// The scoring service returns its full ranked set in a single call;
/// pagination happens locally against the cached result, so no cursor or
/// limit is ever passed downstream.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(&self, user_id: Uuid) -> Result<Vec<RawPost>, RecommenderError>;
}

#[derive(Serialize)]
struct TimelineRequest {
    user_id: String,
}

#[derive(Deserialize)]
struct TimelineResponse {
    posts: Vec<RawPost>,
}

/// Wraps the scoring service's HTTP API so the rest of the crate only sees
/// our own types.
pub struct HttpRecommender {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpRecommender {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RecommenderError> {
        let endpoint = Url::parse(base_url)?.join("timeline")?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RecommenderError::Network(e.to_string()))?;

        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl Recommender for HttpRecommender {
    async fn recommend(&self, user_id: Uuid) -> Result<Vec<RawPost>, RecommenderError> {
        let body = TimelineRequest {
            user_id: user_id.to_string(),
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| RecommenderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RecommenderError::Status(response.status().as_u16()));
        }

        let parsed: TimelineResponse = response
            .json()
            .await
            .map_err(|e| RecommenderError::InvalidResponse(e.to_string()))?;

        Ok(parsed.posts)
    }
}
