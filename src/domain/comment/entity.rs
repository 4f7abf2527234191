// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentBody, CommentId, SubmittedField};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::Username;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author: Username,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// A comment that passed input validation and is ready to be inserted.
/// The id and timestamp are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author: Username,
    pub body: CommentBody,
}

impl NewComment {
    /// Validate submitted fields in a fixed precedence; the first failing rule
    /// decides the message, so combined failures read differently from
    /// single-field ones.
    pub fn from_submission(
        article_id: ArticleId,
        username: SubmittedField,
        body: SubmittedField,
    ) -> DomainResult<Self> {
        use SubmittedField::{Absent, NonText, Text};

        let (author, body) = match (username, body) {
            (Absent, Absent) => {
                return Err(DomainError::validation("Username and body are required"));
            }
            (NonText, Absent) => {
                return Err(DomainError::validation(
                    "Username must be a string, body is required",
                ));
            }
            (NonText, _) => return Err(DomainError::validation("Username must be a string")),
            (Absent, _) => return Err(DomainError::validation("Username is required")),
            (Text(_), Absent) => return Err(DomainError::validation("Body is required")),
            (Text(_), NonText) => return Err(DomainError::validation("Body must be a string")),
            (Text(author), Text(body)) => (author, body),
        };

        Ok(Self {
            article_id,
            author: Username::new(author)?,
            body: CommentBody::new(body)?,
        })
    }
}
