// SPDX-License-Identifier: MPL-2.0

//! Recommended-timeline core for the Pawfeed backend.
//!
//! Bridges the synchronous timeline endpoint to the external scoring
//! service: a cursorless request pulls the user's full ranked set, hydrates
//! it (signed image and icon URLs, nested comment and like views) and
//! caches it per user; cursor requests page through the cached set without
//! another scoring call. The cache is in-memory and process-lifetime only —
//! it is a read-through optimization, not a system of record.

pub mod config;
pub mod recommender;
pub mod storage;
pub mod timeline;

pub use config::TimelineConfig;
pub use recommender::{HttpRecommender, RawPost, Recommender, RecommenderError, TaskType};
pub use storage::{PresignClient, StorageError, StorageResolver};
pub use timeline::{PostView, ResponseCache, TimelineAssembler, TimelineError, TimelineService};
