// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Storage(StorageFault),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Raw failure reported by the storage engine.
///
/// `code` is the engine's SQLSTATE when one was reported. `detail` is kept for
/// logs only and must never reach a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageFault {
    pub code: Option<String>,
    pub detail: String,
}

impl StorageFault {
    pub fn new(code: Option<String>, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }

    pub fn with_code(code: &str, detail: impl Into<String>) -> Self {
        Self::new(Some(code.to_string()), detail)
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl fmt::Display for StorageFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{code}] {}", self.detail),
            None => f.write_str(&self.detail),
        }
    }
}
