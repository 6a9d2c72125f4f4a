// SPDX-License-Identifier: MPL-2.0

mod assembler;
mod cache;
mod paginator;
mod views;

pub use assembler::TimelineAssembler;
pub use cache::ResponseCache;
pub use paginator::TimelineService;
pub use views::{CommentView, DailyTaskView, LikeView, PostView, UserView};

use crate::recommender::RecommenderError;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors surfaced by a timeline page request.
///
/// All of these are terminal for the current request: nothing is retried
/// and no partial page is ever returned.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// The scoring service call failed or returned malformed data. The
    /// user's cached set is left as it was.
    #[error("recommender unavailable: {0}")]
    Recommender(#[from] RecommenderError),
    /// A signed-URL resolution failed during hydration. The fetch is
    /// aborted and nothing is cached.
    #[error("hydration failed: {0}")]
    Hydration(#[from] StorageError),
    /// The cursor does not match any post in the user's cached set, usually
    /// because a fresh fetch replaced the set since the cursor was issued.
    /// The client should restart from a fresh (cursorless) request.
    #[error("cursor {0:?} not found in cached timeline")]
    StaleCursor(String),
}
