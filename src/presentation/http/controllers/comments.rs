// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand},
    queries::articles::ListArticleCommentsQuery,
};
use crate::domain::comment::SubmittedField;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::openapi_types::{CommentListResponse, CommentResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Body of a new comment. Fields stay raw JSON so their types can be
/// reported precisely.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    #[schema(value_type = String)]
    pub username: Option<Value>,
    #[schema(value_type = String)]
    pub body: Option<Value>,
}

/// List an article's comments, newest first.
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = String, Path, description = "Numeric article id")),
    responses(
        (status = 200, description = "Comments, newest first.", body = CommentListResponse),
        (status = 400, description = "Non-numeric id.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_article_comments(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
) -> HttpResult<Json<CommentListResponse>> {
    state
        .services
        .article_queries
        .list_comments(ListArticleCommentsQuery { article_id })
        .await
        .into_http()
        .map(|comments| Json(CommentListResponse { comments }))
}

/// Post a comment on an article.
#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = String, Path, description = "Numeric article id")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "The created comment.", body = CommentResponse),
        (status = 400, description = "Missing or mistyped fields, or non-numeric id.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
    JsonBody(payload): JsonBody<Value>,
) -> HttpResult<(StatusCode, Json<CommentResponse>)> {
    let command = CreateCommentCommand {
        article_id,
        username: submitted_field(payload.get("username")),
        body: submitted_field(payload.get("body")),
    };

    let comment = state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

/// Delete a comment.
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "Numeric comment id")),
    responses(
        (status = 204, description = "Deleted."),
        (status = 400, description = "Non-numeric id.", body = ErrorResponse),
        (status = 404, description = "No such comment.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Path(comment_id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { id: comment_id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

/// Missing, null, `false`, `0` and `""` all count as absent.
fn submitted_field(value: Option<&Value>) -> SubmittedField {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => SubmittedField::Absent,
        Some(Value::String(text)) if text.is_empty() => SubmittedField::Absent,
        Some(Value::String(text)) => SubmittedField::Text(text.clone()),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => SubmittedField::Absent,
        Some(_) => SubmittedField::NonText,
    }
}
