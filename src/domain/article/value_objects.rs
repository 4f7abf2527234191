// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const INVALID_ARTICLE_ID: &str = "Bad request";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i32);

impl ArticleId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parse a path segment into an article id before it reaches storage.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| DomainError::validation(INVALID_ARTICLE_ID))
    }
}

impl From<ArticleId> for i32 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signed amount added to an article's vote tally in one atomic update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteDelta(i32);

impl VoteDelta {
    pub fn new(delta: i32) -> Self {
        Self(delta)
    }

    pub fn value(self) -> i32 {
        self.0
    }
}
