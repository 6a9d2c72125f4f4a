// SPDX-License-Identifier: MPL-2.0

use std::env;
use std::time::Duration;

pub const DEFAULT_RECOMMENDER_URL: &str = "https://rank.pawfeed.app";
pub const DEFAULT_STORAGE_URL: &str = "https://media.pawfeed.app";

/// Page size used when the request layer does not supply one.
pub const DEFAULT_PAGE_LIMIT: usize = 20;

/// Upper bound on a single recommender or presign call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the timeline core, built once at service start.
#[derive(Debug, Clone)]
pub struct TimelineConfig {
    /// Base URL of the scoring service.
    pub recommender_url: String,
    /// Base URL of the media presign service.
    pub storage_url: String,
    pub request_timeout: Duration,
    /// Cap on the number of users with a cached set; `None` means
    /// unbounded, matching the reference deployment.
    pub max_cached_users: Option<usize>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            recommender_url: DEFAULT_RECOMMENDER_URL.to_string(),
            storage_url: DEFAULT_STORAGE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_cached_users: None,
        }
    }
}

impl TimelineConfig {
    /// Defaults overridden by `PAWFEED_*` environment variables where set.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("PAWFEED_RECOMMENDER_URL") {
            config.recommender_url = url;
        }
        if let Ok(url) = env::var("PAWFEED_STORAGE_URL") {
            config.storage_url = url;
        }
        if let Ok(secs) = env::var("PAWFEED_REQUEST_TIMEOUT_SECS")
            && let Ok(secs) = secs.parse::<u64>()
        {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Ok(cap) = env::var("PAWFEED_MAX_CACHED_USERS")
            && let Ok(cap) = cap.parse::<usize>()
        {
            config.max_cached_users = Some(cap);
        }

        config
    }
}
