use super::{ArticleQueryService, require_article};
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct ListArticleCommentsQuery {
    pub article_id: String,
}

impl ArticleQueryService {
    /// Comments for an existing article, newest first. An article without
    /// comments yields an empty list.
    pub async fn list_comments(
        &self,
        query: ListArticleCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let id = ArticleId::parse(&query.article_id)?;
        let article = require_article(self.read_repo.as_ref(), id).await?;

        let comments = self.comment_repo.list_for_article(article.id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
