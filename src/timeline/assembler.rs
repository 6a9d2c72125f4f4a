// SPDX-License-Identifier: MPL-2.0

use crate::recommender::{RawComment, RawLike, RawPost, RawUser};
use crate::storage::{StorageError, StorageResolver};
use crate::timeline::views::{CommentView, DailyTaskView, LikeView, PostView, UserView};
use std::sync::Arc;

/// Turns raw scoring-service records into fully hydrated views.
///
/// Hydration is fail-fast: the first signed-URL failure aborts the whole
/// batch, so a partially resolved set is never cached or served. Output
/// order is the input order verbatim — the recommender's ranking is the
/// contract and nothing here re-sorts it.
pub struct TimelineAssembler {
    resolver: Arc<dyn StorageResolver>,
}

impl TimelineAssembler {
    pub fn new(resolver: Arc<dyn StorageResolver>) -> Self {
        Self { resolver }
    }

    /// Hydrate a full ranked batch.
    pub async fn hydrate(&self, raw: Vec<RawPost>) -> Result<Vec<PostView>, StorageError> {
        let mut views = Vec::with_capacity(raw.len());
        for post in raw {
            views.push(self.hydrate_post(post).await?);
        }
        Ok(views)
    }

    async fn hydrate_post(&self, post: RawPost) -> Result<PostView, StorageError> {
        let image_url = self.resolver.resolve_url(&post.image_key).await?;
        let user = self.hydrate_user(post.user).await?;

        let mut comments = Vec::with_capacity(post.comments.len());
        for comment in post.comments {
            comments.push(self.hydrate_comment(comment).await?);
        }

        let mut likes = Vec::with_capacity(post.likes.len());
        for like in post.likes {
            likes.push(self.hydrate_like(like).await?);
        }

        Ok(PostView {
            id: post.id,
            caption: post.caption,
            user,
            image_url,
            created_at: post.created_at,
            comments,
            likes,
            daily_task: post.daily_task.map(|task| DailyTaskView {
                id: task.id,
                created_at: task.created_at,
                task_type: task.task_type,
            }),
        })
    }

    async fn hydrate_comment(&self, comment: RawComment) -> Result<CommentView, StorageError> {
        Ok(CommentView {
            id: comment.id,
            content: comment.content,
            created_at: comment.created_at,
            user: self.hydrate_user(comment.user).await?,
        })
    }

    async fn hydrate_like(&self, like: RawLike) -> Result<LikeView, StorageError> {
        Ok(LikeView {
            id: like.id,
            created_at: like.created_at,
            user: self.hydrate_user(like.user).await?,
        })
    }

    /// Users with no stored icon get no resolver call and no URL.
    async fn hydrate_user(&self, user: RawUser) -> Result<UserView, StorageError> {
        let icon_image_url = if user.icon_image_key.is_empty() {
            None
        } else {
            Some(self.resolver.resolve_url(&user.icon_image_key).await?)
        };

        Ok(UserView {
            id: user.id,
            name: user.name,
            bio: user.bio,
            icon_image_url,
        })
    }
}
