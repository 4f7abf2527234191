// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Classification attached to a failure, independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    ServerFault,
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("server fault: {0}")]
    ServerFault(String),
}

impl ApplicationError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn server_fault(msg: impl Into<String>) -> Self {
        Self::ServerFault(msg.into())
    }

    /// Kind of an explicit failure. Raw storage faults report `ServerFault`
    /// here; the HTTP classifier refines them by SQLSTATE.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest(_) | Self::Domain(DomainError::Validation(_)) => ErrorKind::BadRequest,
            Self::NotFound(_) | Self::Domain(DomainError::NotFound(_)) => ErrorKind::NotFound,
            Self::ServerFault(_) | Self::Domain(DomainError::Storage(_)) => ErrorKind::ServerFault,
        }
    }
}
