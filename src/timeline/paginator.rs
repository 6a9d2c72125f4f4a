// SPDX-License-Identifier: MPL-2.0

use crate::config::TimelineConfig;
use crate::recommender::{HttpRecommender, Recommender};
use crate::storage::{PresignClient, StorageResolver};
use crate::timeline::TimelineError;
use crate::timeline::assembler::TimelineAssembler;
use crate::timeline::cache::ResponseCache;
use crate::timeline::views::PostView;
use log::{debug, warn};
use std::sync::Arc;
use uuid::Uuid;

/// Orchestrates timeline page requests.
///
/// A request without a cursor pulls the full ranked set from the scoring
/// service, hydrates it, replaces the user's cached set and returns the
/// first page. A request with a cursor pages through the cached set without
/// touching the scoring service. A page shorter than `limit` marks the end
/// of the timeline; there is no separate has-more flag.
pub struct TimelineService {
    recommender: Arc<dyn Recommender>,
    assembler: TimelineAssembler,
    cache: Arc<ResponseCache>,
}

impl TimelineService {
    pub fn new(
        recommender: Arc<dyn Recommender>,
        resolver: Arc<dyn StorageResolver>,
        cache: Arc<ResponseCache>,
    ) -> Self {
        Self {
            recommender,
            assembler: TimelineAssembler::new(resolver),
            cache,
        }
    }

    /// Wire up the HTTP collaborators and cache from configuration.
    pub fn from_config(config: &TimelineConfig) -> Result<Self, TimelineError> {
        let recommender = HttpRecommender::new(&config.recommender_url, config.request_timeout)?;
        let resolver = PresignClient::new(&config.storage_url, config.request_timeout)?;
        let cache = match config.max_cached_users {
            Some(cap) => ResponseCache::bounded(cap),
            None => ResponseCache::new(),
        };

        Ok(Self::new(
            Arc::new(recommender),
            Arc::new(resolver),
            Arc::new(cache),
        ))
    }

    /// The cache backing this service, shared with the request layer.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Fetch one timeline page for `user_id`.
    ///
    /// `cursor` is the id of the last post of the previous page; `None`
    /// forces a fresh fetch. Never returns more than `limit` posts.
    pub async fn fetch_page(
        &self,
        user_id: Uuid,
        cursor: Option<&str>,
        limit: usize,
    ) -> Result<Vec<PostView>, TimelineError> {
        match cursor {
            Some(cursor) => self.continuation(user_id, cursor, limit),
            None => self.fresh_fetch(user_id, limit).await,
        }
    }

    async fn fresh_fetch(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> Result<Vec<PostView>, TimelineError> {
        let raw = self.recommender.recommend(user_id).await.inspect_err(|e| {
            warn!("recommender call failed for user {user_id}: {e}");
        })?;
        debug!("recommender returned {} candidates for user {user_id}", raw.len());

        // Hydration failure returns before the cache is touched, so the
        // user's previous set stays intact and nothing partial is stored.
        let hydrated = self.assembler.hydrate(raw).await.inspect_err(|e| {
            warn!("hydration failed for user {user_id}: {e}");
        })?;

        let page: Vec<PostView> = hydrated.iter().take(limit).cloned().collect();
        self.cache.replace(user_id, hydrated);
        Ok(page)
    }

    fn continuation(
        &self,
        user_id: Uuid,
        cursor: &str,
        limit: usize,
    ) -> Result<Vec<PostView>, TimelineError> {
        let posts = self.cache.get(user_id).unwrap_or_default();
        debug!("serving user {user_id} from cache ({} posts)", posts.len());

        let cursor_id: Uuid = cursor
            .parse()
            .map_err(|_| TimelineError::StaleCursor(cursor.to_string()))?;

        // The cursor must match a cached post; a fresh fetch may have
        // replaced the set underneath the client, and that has to be
        // distinguishable from a genuine end of timeline.
        let Some(at) = posts.iter().position(|p| p.id == cursor_id) else {
            warn!("cursor {cursor} not in cached timeline for user {user_id}");
            return Err(TimelineError::StaleCursor(cursor.to_string()));
        };

        Ok(posts[at + 1..].iter().take(limit).cloned().collect())
    }
}
