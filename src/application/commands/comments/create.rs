use super::CommentCommandService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult, queries::articles::require_article},
    domain::{
        article::ArticleId,
        comment::{NewComment, SubmittedField},
    },
};

pub struct CreateCommentCommand {
    pub article_id: String,
    pub username: SubmittedField,
    pub body: SubmittedField,
}

impl CommentCommandService {
    /// Insert a comment on an existing article. Article existence is checked
    /// before the submitted fields are validated.
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let article_id = ArticleId::parse(&command.article_id)?;
        let article = require_article(self.article_repo.as_ref(), article_id).await?;

        let new_comment = NewComment::from_submission(article.id, command.username, command.body)?;
        let comment = self.comment_repo.insert(new_comment).await?;

        tracing::info!(
            comment_id = %comment.id,
            article_id = %comment.article_id,
            author = %comment.author,
            "comment created"
        );
        Ok(comment.into())
    }
}
