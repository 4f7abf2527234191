// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{UpdateVotesCommand, VoteInput},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, QueryParams};
use crate::presentation::http::openapi_types::{ArticleListResponse, ArticleResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Any column of the articles table. Defaults to `created_at`.
    pub sort_by: Option<String>,
    /// `asc`/`ASC` or `desc`/`DESC`. Defaults to descending.
    pub order: Option<String>,
    /// Only articles with this topic slug.
    pub topic: Option<String>,
}

/// Body of a vote update. Kept as raw JSON so that missing and non-numeric
/// deltas can be told apart.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateVotesRequest {
    #[schema(value_type = Option<i32>)]
    pub inc_votes: Option<Value>,
}

/// List articles with their comment counts.
///
/// Sorted by `sort_by` in `order`, optionally filtered by `topic`.
#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles, sorted.", body = ArticleListResponse),
        (status = 400, description = "Invalid sort, order or filter query.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let query = ListArticlesQuery {
        sort_by: params.sort_by,
        order: params.order,
        topic: params.topic,
    };

    let articles = state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()?;

    Ok(Json(ArticleListResponse { articles }))
}

/// Fetch one article with its comment count.
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Numeric article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleResponse),
        (status = 400, description = "Non-numeric id.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id: article_id })
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

/// Add `inc_votes` to an article's votes.
#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    params(("article_id" = String, Path, description = "Numeric article id")),
    request_body = UpdateVotesRequest,
    responses(
        (status = 200, description = "The updated article.", body = ArticleResponse),
        (status = 400, description = "Missing or non-numeric votes, or non-numeric id.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_votes(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
    JsonBody(payload): JsonBody<Value>,
) -> HttpResult<Json<ArticleResponse>> {
    let command = UpdateVotesCommand {
        id: article_id,
        inc_votes: vote_input(payload.get("inc_votes")),
    };

    state
        .services
        .article_commands
        .update_votes(command)
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

fn vote_input(value: Option<&Value>) -> Option<VoteInput> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(number)) => {
            Some(integral(number).map_or(VoteInput::NotNumeric, VoteInput::Integer))
        }
        Some(_) => Some(VoteInput::NotNumeric),
    }
}

/// Integer value of a JSON number, accepting integral floats such as `1.0`.
fn integral(number: &serde_json::Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|value| value.fract() == 0.0 && value.abs() < 2f64.powi(63))
            .map(|value| value as i64)
    })
}
