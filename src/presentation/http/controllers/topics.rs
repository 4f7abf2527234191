// src/presentation/http/controllers/topics.rs
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi_types::TopicListResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

/// List all topics.
#[utoipa::path(
    get,
    path = "/api/topics",
    responses(
        (status = 200, description = "All topics.", body = TopicListResponse),
        (status = 404, description = "No topics exist (when configured).", body = ErrorResponse)
    ),
    tag = "Topics"
)]
pub async fn list_topics(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<TopicListResponse>> {
    state
        .services
        .topic_queries
        .list_topics()
        .await
        .into_http()
        .map(|topics| Json(TopicListResponse { topics }))
}
