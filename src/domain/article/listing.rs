// src/domain/article/listing.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::TopicSlug;
use std::collections::BTreeSet;

pub const DEFAULT_SORT_COLUMN: &str = "created_at";
pub const INVALID_SORT_QUERY: &str = "Invalid sort query";
pub const INVALID_ORDER_QUERY: &str = "Invalid order query";

/// Column names currently present on the articles table.
///
/// Built from the live schema so that added or removed columns are honoured
/// without code changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnAllowlist(BTreeSet<String>);

impl ColumnAllowlist {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(columns.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.0.contains(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// A sort column that has been confirmed against a [`ColumnAllowlist`].
///
/// This is the only client-derived text that may be composed into query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortColumn(String);

impl SortColumn {
    pub fn parse(requested: Option<&str>, allowlist: &ColumnAllowlist) -> DomainResult<Self> {
        let column = requested.unwrap_or(DEFAULT_SORT_COLUMN);
        if allowlist.contains(column) {
            Ok(Self(column.to_string()))
        } else {
            Err(DomainError::validation(INVALID_SORT_QUERY))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(requested: Option<&str>) -> DomainResult<Self> {
        match requested {
            None => Ok(Self::default()),
            Some("asc" | "ASC") => Ok(Self::Asc),
            Some("desc" | "DESC") => Ok(Self::Desc),
            Some(_) => Err(DomainError::validation(INVALID_ORDER_QUERY)),
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A fully validated request for the article listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListing {
    pub sort_by: SortColumn,
    pub order: SortOrder,
    pub topic: Option<TopicSlug>,
}
