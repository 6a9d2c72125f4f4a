// SPDX-License-Identifier: MPL-2.0

mod client;
mod types;

pub use client::{HttpRecommender, Recommender, RecommenderError};
pub use types::{RawComment, RawDailyTask, RawLike, RawPost, RawUser, TaskType};
