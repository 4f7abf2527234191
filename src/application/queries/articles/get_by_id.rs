use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleId, ArticleReadRepository},
};

pub const ARTICLE_NOT_FOUND: &str = "Article not found";

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::parse(&query.id)?;
        let article = require_article(self.read_repo.as_ref(), id).await?;
        Ok(article.into())
    }
}

/// First step of every article-scoped pipeline: the article must exist before
/// anything that depends on it runs.
pub(crate) async fn require_article(
    repo: &dyn ArticleReadRepository,
    id: ArticleId,
) -> ApplicationResult<Article> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found(ARTICLE_NOT_FOUND))
}
