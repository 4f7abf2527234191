// tests/support/helpers.rs
use super::mocks::InMemoryStore;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use nc_news::application::queries::EmptyListPolicy;
use nc_news::application::services::{ApplicationServices, ListingPolicies, Repositories};
use nc_news::domain::article::ArticleSchemaRepository;
use nc_news::infrastructure::repositories::CachedArticleSchemaRepository;
use nc_news::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt as _;

/// Every repository port backed by the same store.
pub fn repositories_for(store: &InMemoryStore) -> Repositories {
    let schema: Arc<dyn ArticleSchemaRepository> = Arc::new(store.clone());
    Repositories {
        article_read: Arc::new(store.clone()),
        article_write: Arc::new(store.clone()),
        article_schema: Arc::new(CachedArticleSchemaRepository::new(schema)),
        comments: Arc::new(store.clone()),
        users: Arc::new(store.clone()),
        topics: Arc::new(store.clone()),
    }
}

pub fn build_test_state(repos: Repositories, policies: ListingPolicies) -> HttpState {
    HttpState {
        services: Arc::new(ApplicationServices::new(repos, policies)),
    }
}

pub fn router_with(repos: Repositories, policies: ListingPolicies) -> axum::Router {
    build_router(build_test_state(repos, policies), &[])
}

/// Router over freshly seeded data, plus the store for inspecting side effects.
pub fn make_test_router() -> (axum::Router, InMemoryStore) {
    let store = InMemoryStore::seeded();
    let app = router_with(repositories_for(&store), ListingPolicies::default());
    (app, store)
}

/// Router over a store with no rows, using the given empty-table answers.
pub fn make_empty_router(users: EmptyListPolicy, topics: EmptyListPolicy) -> axum::Router {
    let store = InMemoryStore::empty();
    router_with(repositories_for(&store), ListingPolicies { users, topics })
}

pub fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Send one request and return the status with the decoded JSON body.
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(request(method, uri, body))
        .await
        .unwrap();
    let status = resp.status();
    (status, read_json(resp).await)
}

/// Assert that a response is an error body `{ "msg": ... }` with the expected status.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_msg: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let object = json.as_object().expect("error body is an object");
    assert_eq!(object.len(), 1, "error body carries only msg: {json}");
    assert_eq!(json["msg"], expected_msg, "unexpected msg in {json}");
}

pub async fn assert_error(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    expected_status: StatusCode,
    expected_msg: &str,
) {
    let resp = app
        .clone()
        .oneshot(request(method, uri, body))
        .await
        .unwrap();
    assert_error_response(resp, expected_status, expected_msg).await;
}
