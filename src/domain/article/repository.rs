use crate::domain::article::entity::Article;
use crate::domain::article::listing::{ArticleListing, ColumnAllowlist};
use crate::domain::article::value_objects::{ArticleId, VoteDelta};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<Article>>;
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Apply `votes = votes + delta` as a single storage statement.
    /// Returns `None` when no article has the given id.
    async fn increment_votes(&self, id: ArticleId, delta: VoteDelta)
    -> DomainResult<Option<Article>>;
}

/// Source of the article table's current column names.
#[async_trait]
pub trait ArticleSchemaRepository: Send + Sync {
    async fn article_columns(&self) -> DomainResult<ColumnAllowlist>;
}
