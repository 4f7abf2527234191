use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        queries::articles::ARTICLE_NOT_FOUND,
    },
    domain::article::{ArticleId, VoteDelta},
};

/// Vote delta as submitted, before range checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteInput {
    Integer(i64),
    NotNumeric,
}

pub struct UpdateVotesCommand {
    pub id: String,
    pub inc_votes: Option<VoteInput>,
}

impl ArticleCommandService {
    pub async fn update_votes(&self, command: UpdateVotesCommand) -> ApplicationResult<ArticleDto> {
        let input = command
            .inc_votes
            .ok_or_else(|| ApplicationError::bad_request("No votes submitted"))?;
        let id = ArticleId::parse(&command.id)?;
        let delta = match input {
            VoteInput::Integer(value) => i32::try_from(value)
                .map(VoteDelta::new)
                .map_err(|_| ApplicationError::bad_request("Bad request"))?,
            VoteInput::NotNumeric => return Err(ApplicationError::bad_request("Bad request")),
        };

        let article = self
            .write_repo
            .increment_votes(id, delta)
            .await?
            .ok_or_else(|| ApplicationError::not_found(ARTICLE_NOT_FOUND))?;

        tracing::debug!(article_id = %id, delta = delta.value(), votes = article.votes, "votes updated");
        Ok(article.into())
    }
}
