// src/infrastructure/repositories/postgres_schema.rs
use super::map_sqlx;
use crate::domain::article::{ArticleSchemaRepository, ColumnAllowlist};
use crate::domain::errors::{DomainError, DomainResult, StorageFault};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// SQLSTATE reported by Postgres for a missing relation.
const UNDEFINED_TABLE: &str = "42P01";

/// Reads the articles table's columns from `information_schema` on every call.
#[derive(Clone)]
pub struct PostgresArticleSchemaRepository {
    pool: PgPool,
}

impl PostgresArticleSchemaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleSchemaRepository for PostgresArticleSchemaRepository {
    async fn article_columns(&self) -> DomainResult<ColumnAllowlist> {
        let columns = sqlx::query_scalar::<_, String>(
            "SELECT column_name::text FROM information_schema.columns
             WHERE table_schema = current_schema() AND table_name = 'articles'",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if columns.is_empty() {
            return Err(DomainError::Storage(StorageFault::with_code(
                UNDEFINED_TABLE,
                "relation \"articles\" has no columns in the current schema",
            )));
        }

        Ok(ColumnAllowlist::new(columns))
    }
}

/// Loads the column allowlist once and serves it from memory afterwards.
/// Failed loads are not cached and are retried on the next call.
pub struct CachedArticleSchemaRepository {
    inner: Arc<dyn ArticleSchemaRepository>,
    columns: OnceCell<ColumnAllowlist>,
}

impl CachedArticleSchemaRepository {
    pub fn new(inner: Arc<dyn ArticleSchemaRepository>) -> Self {
        Self {
            inner,
            columns: OnceCell::new(),
        }
    }
}

#[async_trait]
impl ArticleSchemaRepository for CachedArticleSchemaRepository {
    async fn article_columns(&self) -> DomainResult<ColumnAllowlist> {
        self.columns
            .get_or_try_init(|| self.inner.article_columns())
            .await
            .cloned()
    }
}
