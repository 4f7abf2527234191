// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::api::list_endpoints,
        crate::presentation::http::controllers::topics::list_topics,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_votes,
        crate::presentation::http::controllers::comments::list_article_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::get_user,
        super::routes::health
    ),
    components(
        schemas(
            crate::presentation::http::openapi_types::StatusResponse,
            crate::presentation::http::openapi_types::ArticleListResponse,
            crate::presentation::http::openapi_types::ArticleResponse,
            crate::presentation::http::openapi_types::CommentListResponse,
            crate::presentation::http::openapi_types::CommentResponse,
            crate::presentation::http::openapi_types::UserListResponse,
            crate::presentation::http::openapi_types::UserResponse,
            crate::presentation::http::openapi_types::TopicListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::api::EndpointDescription,
            crate::presentation::http::controllers::articles::UpdateVotesRequest,
            crate::presentation::http::controllers::comments::CreateCommentRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::CommentDto,
            crate::application::dto::UserDto,
            crate::application::dto::TopicDto
        )
    ),
    tags(
        (name = "Articles", description = "Article listing, lookup and voting"),
        (name = "Comments", description = "Comments on articles"),
        (name = "Users", description = "User lookup"),
        (name = "Topics", description = "Topic listing"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "NC News API",
        description = "News discussion site: articles, comments, users and topics",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Fills `servers` from `PUBLIC_API_URLS` (comma separated) or `PUBLIC_API_URL`.
struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            let fallback = env::var("PUBLIC_API_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_default();
            if !fallback.is_empty() {
                urls.push(fallback);
            }
        }

        if urls.is_empty() {
            return;
        }

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();
        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
