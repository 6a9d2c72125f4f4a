// SPDX-License-Identifier: MPL-2.0

use crate::recommender::TaskType;
use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Fully hydrated post as served to clients.
///
/// Immutable once built; the cache hands out shared references and never
/// mutates an entry in place. Comment and like counts are not stored — they
/// are emitted from the lists at serialize time so they can never disagree
/// with the list contents.
#[derive(Debug, Clone)]
pub struct PostView {
    pub id: Uuid,
    pub caption: String,
    pub user: UserView,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<CommentView>,
    pub likes: Vec<LikeView>,
    pub daily_task: Option<DailyTaskView>,
}

impl PostView {
    pub fn comments_count(&self) -> usize {
        self.comments.len()
    }

    pub fn likes_count(&self) -> usize {
        self.likes.len()
    }
}

impl Serialize for PostView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PostView", 10)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("caption", &self.caption)?;
        state.serialize_field("user", &self.user)?;
        state.serialize_field("imageUrl", &self.image_url)?;
        state.serialize_field("createdAt", &self.created_at)?;
        state.serialize_field("comments", &self.comments)?;
        state.serialize_field("commentsCount", &self.comments_count())?;
        state.serialize_field("likes", &self.likes)?;
        state.serialize_field("likesCount", &self.likes_count())?;
        state.serialize_field("dailyTask", &self.daily_task)?;
        state.end()
    }
}

/// Author view nested in posts, comments and likes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    /// Signed icon URL; `None` when the user has no stored icon.
    pub icon_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user: UserView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeView {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub user: UserView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTaskView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub task_type: TaskType,
}
