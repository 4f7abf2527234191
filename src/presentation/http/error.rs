// src/presentation/http/error.rs
//! Final classification of failures into HTTP responses.
//!
//! Every failed request produces exactly one `{ "msg": ... }` body. Storage
//! faults are classified by SQLSTATE and never expose driver text.
use crate::application::{
    ApplicationResult,
    error::{ApplicationError, ErrorKind},
};
use crate::domain::errors::{DomainError, StorageFault};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const INTERNAL_ERROR: &str = "Internal Error";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let (status, message) = classify(&err);
        if status.is_server_error() {
            tracing::error!(error = %err, status = status.as_u16(), "request failed");
        } else {
            tracing::debug!(error = %err, status = status.as_u16(), "request rejected");
        }
        Self::new(status, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Map a failure to one status and one client-facing message.
pub fn classify(err: &ApplicationError) -> (StatusCode, String) {
    match err {
        ApplicationError::Domain(DomainError::Storage(fault)) => {
            let (status, message) = classify_storage(fault);
            (status, message.to_string())
        }
        ApplicationError::BadRequest(msg)
        | ApplicationError::NotFound(msg)
        | ApplicationError::ServerFault(msg)
        | ApplicationError::Domain(DomainError::Validation(msg) | DomainError::NotFound(msg)) => {
            (status_for(err.kind()), msg.clone())
        }
    }
}

fn classify_storage(fault: &StorageFault) -> (StatusCode, &'static str) {
    match fault.code() {
        // undefined_table
        Some("42P01") => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR),
        // invalid_text_representation
        Some("22P02") => (StatusCode::BAD_REQUEST, "Bad request"),
        // numeric_value_out_of_range, e.g. a vote total past the column's range
        Some("22003") => (StatusCode::BAD_REQUEST, "Bad request"),
        // not_null_violation
        Some("23502") => (StatusCode::BAD_REQUEST, "Bad Query"),
        // foreign_key_violation
        Some("23503") => (StatusCode::NOT_FOUND, "Not found"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR),
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::ServerFault => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { msg: self.message })).into_response()
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub msg: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
