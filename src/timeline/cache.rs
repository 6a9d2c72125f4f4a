// SPDX-License-Identifier: MPL-2.0

//! Per-user store of previously hydrated timelines.
//!
//! Each user holds at most one entry: the full ranked set from their last
//! fresh fetch, in recommender order. Entries are replaced wholesale on
//! refresh and read by cursor continuations; nothing expires on a timer.

use crate::timeline::views::PostView;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

struct CacheInner {
    entries: HashMap<Uuid, Arc<Vec<PostView>>>,
    /// Least-recently-refreshed user first; only maintained when bounded.
    order: Vec<Uuid>,
    max_users: Option<usize>,
}

/// Concurrency-safe response cache keyed by user id.
///
/// Intended to be created once at service start and handed to request
/// handlers by reference, not held as a global.
pub struct ResponseCache {
    inner: RwLock<CacheInner>,
}

impl ResponseCache {
    /// Unbounded cache. Memory grows with the number of distinct users; use
    /// [`ResponseCache::bounded`] if that matters for the deployment.
    pub fn new() -> Self {
        Self::with_bound(None)
    }

    /// Cache holding entries for at most `max_users` users, evicting the
    /// user whose timeline was refreshed least recently. Recency advances
    /// on [`replace`](Self::replace) only, so reads never take the write
    /// lock.
    pub fn bounded(max_users: usize) -> Self {
        Self::with_bound(Some(max_users.max(1)))
    }

    fn with_bound(max_users: Option<usize>) -> Self {
        Self {
            inner: RwLock::new(CacheInner {
                entries: HashMap::new(),
                order: Vec::new(),
                max_users,
            }),
        }
    }

    /// Replace the user's entry with a freshly hydrated set.
    ///
    /// Atomic from a reader's point of view: a concurrent [`get`](Self::get)
    /// observes either the old set or the new one, never a gap between them.
    /// No merge — the previous entry is discarded entirely.
    pub fn replace(&self, user_id: Uuid, posts: Vec<PostView>) {
        let mut inner = self.inner.write().unwrap();

        if let Some(cap) = inner.max_users {
            inner.order.retain(|id| *id != user_id);
            inner.order.push(user_id);
            while inner.order.len() > cap {
                let evicted = inner.order.remove(0);
                inner.entries.remove(&evicted);
            }
        }

        inner.entries.insert(user_id, Arc::new(posts));
    }

    /// The user's cached set, in recommender rank order.
    ///
    /// Absent and empty both mean "nothing to page through"; callers do not
    /// need to tell never-fetched apart from an empty timeline.
    pub fn get(&self, user_id: Uuid) -> Option<Arc<Vec<PostView>>> {
        self.inner.read().unwrap().entries.get(&user_id).cloned()
    }

    /// Drop the user's entry, if any.
    pub fn clear(&self, user_id: Uuid) {
        let mut inner = self.inner.write().unwrap();
        inner.entries.remove(&user_id);
        inner.order.retain(|id| *id != user_id);
    }

    /// Number of users currently holding a cached set.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::views::UserView;
    use chrono::Utc;

    fn post(caption: &str) -> PostView {
        PostView {
            id: Uuid::new_v4(),
            caption: caption.to_string(),
            user: UserView {
                id: Uuid::new_v4(),
                name: "pochi".to_string(),
                bio: String::new(),
                icon_image_url: None,
            },
            image_url: "https://media.example/signed/key".to_string(),
            created_at: Utc::now(),
            comments: Vec::new(),
            likes: Vec::new(),
            daily_task: None,
        }
    }

    #[test]
    fn test_get_missing_user_is_none() {
        let cache = ResponseCache::new();
        assert!(cache.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_replace_then_get_returns_same_set() {
        let cache = ResponseCache::new();
        let user = Uuid::new_v4();
        let posts = vec![post("a"), post("b")];
        let ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();

        cache.replace(user, posts);

        let cached = cache.get(user).unwrap();
        let cached_ids: Vec<Uuid> = cached.iter().map(|p| p.id).collect();
        assert_eq!(cached_ids, ids);
    }

    #[test]
    fn test_replace_discards_previous_entry() {
        let cache = ResponseCache::new();
        let user = Uuid::new_v4();

        cache.replace(user, vec![post("old-1"), post("old-2"), post("old-3")]);
        let fresh = vec![post("new-1")];
        let fresh_id = fresh[0].id;
        cache.replace(user, fresh);

        let cached = cache.get(user).unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].id, fresh_id);
    }

    #[test]
    fn test_clear_removes_entry() {
        let cache = ResponseCache::new();
        let user = Uuid::new_v4();
        cache.replace(user, vec![post("a")]);
        cache.clear(user);
        assert!(cache.get(user).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_users_are_independent() {
        let cache = ResponseCache::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        cache.replace(alice, vec![post("a")]);
        cache.replace(bob, vec![post("b"), post("c")]);
        cache.clear(alice);

        assert!(cache.get(alice).is_none());
        assert_eq!(cache.get(bob).unwrap().len(), 2);
    }

    #[test]
    fn test_bounded_evicts_least_recently_refreshed() {
        let cache = ResponseCache::bounded(2);
        let users: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();

        cache.replace(users[0], vec![post("a")]);
        cache.replace(users[1], vec![post("b")]);
        // Refreshing user 0 makes user 1 the eviction candidate
        cache.replace(users[0], vec![post("a2")]);
        cache.replace(users[2], vec![post("c")]);

        assert!(cache.get(users[0]).is_some());
        assert!(cache.get(users[1]).is_none());
        assert!(cache.get(users[2]).is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_get_does_not_advance_recency() {
        let cache = ResponseCache::bounded(2);
        let users: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();

        cache.replace(users[0], vec![post("a")]);
        cache.replace(users[1], vec![post("b")]);
        // Reads must not protect user 0 from eviction
        for _ in 0..5 {
            assert!(cache.get(users[0]).is_some());
        }
        cache.replace(users[2], vec![post("c")]);

        assert!(cache.get(users[0]).is_none());
        assert!(cache.get(users[1]).is_some());
    }

    #[test]
    fn test_concurrent_readers_see_old_or_new_set() {
        use std::sync::Arc as StdArc;
        use std::thread;

        let cache = StdArc::new(ResponseCache::new());
        let user = Uuid::new_v4();
        cache.replace(user, vec![post("old")]);

        let writer = {
            let cache = StdArc::clone(&cache);
            thread::spawn(move || {
                for _ in 0..200 {
                    cache.replace(user, vec![post("new-1"), post("new-2")]);
                }
            })
        };

        // A reader sees one or two posts, never a transient miss
        for _ in 0..200 {
            let cached = cache.get(user).expect("entry must never vanish");
            assert!(matches!(cached.len(), 1 | 2));
        }

        writer.join().unwrap();
    }
}
