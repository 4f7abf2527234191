// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use chrono::{DateTime, Utc};

/// An article as read back from storage.
///
/// `comment_count` is derived at query time from the comments referencing the
/// article and is never persisted.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
    pub topic: TopicSlug,
    pub author: Username,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i32,
}
