// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleListing, ArticleReadRepository, ArticleWriteRepository, VoteDelta,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "articles.article_id, articles.title, articles.body, articles.topic, \
     articles.author, articles.created_at, articles.votes";

const COMMENT_COUNT_JOIN: &str = ", COUNT(comments.comment_id)::int AS comment_count \
     FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id";

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: i32,
    title: String,
    body: String,
    topic: String,
    author: String,
    created_at: DateTime<Utc>,
    votes: i32,
    comment_count: i32,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.article_id),
            title: row.title,
            body: row.body,
            topic: TopicSlug::new(row.topic)?,
            author: Username::new(row.author)?,
            created_at: row.created_at,
            votes: row.votes,
            comment_count: row.comment_count,
        })
    }
}

/// Compose the article listing as a single aggregate query.
///
/// The sort column and direction are the only pieces written into the query
/// text, and both come from already validated values. The column is
/// table-qualified and quoted so it can only ever name a column of `articles`.
/// The topic filter is always a bound parameter.
pub fn build_list_query(listing: &ArticleListing) -> QueryBuilder<'_, Postgres> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
    builder.push(ARTICLE_COLUMNS);
    builder.push(COMMENT_COUNT_JOIN);

    if let Some(topic) = &listing.topic {
        builder.push(" WHERE articles.topic = ");
        builder.push_bind(topic.as_str());
    }

    let direction = listing.order.as_sql();
    builder.push(" GROUP BY articles.article_id ORDER BY ");
    builder.push(quote_article_column(listing.sort_by.as_str()));
    builder.push(" ").push(direction);
    builder.push(", articles.article_id ").push(direction);
    builder
}

fn quote_article_column(column: &str) -> String {
    format!("articles.\"{}\"", column.replace('"', "\"\""))
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(COMMENT_COUNT_JOIN);
        builder.push(" WHERE articles.article_id = ");
        builder.push_bind(i32::from(id));
        builder.push(" GROUP BY articles.article_id");

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<Article>> {
        let mut builder = build_list_query(listing);
        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: VoteDelta,
    ) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "WITH updated AS (
                 UPDATE articles SET votes = votes + $2 WHERE article_id = $1
                 RETURNING article_id, title, body, topic, author, created_at, votes
             )
             SELECT updated.article_id, updated.title, updated.body, updated.topic,
                    updated.author, updated.created_at, updated.votes,
                    (SELECT COUNT(*)::int FROM comments
                      WHERE comments.article_id = updated.article_id) AS comment_count
             FROM updated",
        )
        .bind(i32::from(id))
        .bind(delta.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }
}
