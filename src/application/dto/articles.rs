use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Article with its live comment count.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub article_id: i32,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub author: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub comment_count: i32,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into(),
            title: article.title,
            body: article.body,
            topic: article.topic.into(),
            author: article.author.into(),
            created_at: article.created_at,
            votes: article.votes,
            comment_count: article.comment_count,
        }
    }
}
