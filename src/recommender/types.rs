// SPDX-License-Identifier: MPL-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ranked candidate post as the scoring service returns it.
///
/// Field names mirror the service's JSON exactly; these types own the wire
/// boundary so the rest of the crate never sees the service's shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPost {
    pub id: Uuid,
    pub caption: String,
    pub image_key: String,
    pub created_at: DateTime<Utc>,
    /// Relevance score assigned by the scoring service. The returned order
    /// already encodes it; kept for logging and debugging only.
    pub score: f64,
    pub user: RawUser,
    #[serde(default)]
    pub comments: Vec<RawComment>,
    #[serde(default)]
    pub likes: Vec<RawLike>,
    pub daily_task: Option<RawDailyTask>,
}

/// Author record nested in posts, comments and likes.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub bio: String,
    /// Storage key of the user's icon; empty when the user has none.
    pub icon_image_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawComment {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user: RawUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLike {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub user: RawUser,
}

/// Reference to the gamified daily task a post was submitted for.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDailyTask {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub task_type: TaskType,
}

/// Daily-task categories the gamification system hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Eating,
    Sleeping,
    Playing,
}
