// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_comment;
mod postgres_schema;
mod postgres_topic;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_article::{
    PostgresArticleReadRepository, PostgresArticleWriteRepository, build_list_query,
};
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_schema::{CachedArticleSchemaRepository, PostgresArticleSchemaRepository};
pub use postgres_topic::PostgresTopicRepository;
pub use postgres_user::PostgresUserRepository;

use crate::application::services::Repositories;
use crate::domain::article::ArticleSchemaRepository;
use sqlx::PgPool;
use std::sync::Arc;

/// Wire every storage port to Postgres over one pool.
pub fn postgres_repositories(pool: PgPool, cache_article_schema: bool) -> Repositories {
    let live_schema: Arc<dyn ArticleSchemaRepository> =
        Arc::new(PostgresArticleSchemaRepository::new(pool.clone()));
    let article_schema: Arc<dyn ArticleSchemaRepository> = if cache_article_schema {
        Arc::new(CachedArticleSchemaRepository::new(live_schema))
    } else {
        live_schema
    };

    Repositories {
        article_read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        article_write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_schema,
        comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        topics: Arc::new(PostgresTopicRepository::new(pool)),
    }
}
