// src/domain/comment/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const INVALID_COMMENT_ID: &str = "Invalid comment ID";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(i32);

impl CommentId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn parse(raw: &str) -> DomainResult<Self> {
        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| DomainError::validation(INVALID_COMMENT_ID))
    }
}

impl From<CommentId> for i32 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("Body is required"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Shape of one field of a submitted comment, independent of wire format.
///
/// `Absent` covers missing, null and empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmittedField {
    Absent,
    Text(String),
    NonText,
}
