use axum::http::{Method, StatusCode};
use nc_news::application::queries::EmptyListPolicy;
use serde_json::json;

mod support;

#[tokio::test]
async fn users_are_listed() {
    let (app, _store) = support::make_test_router();
    let (status, body) = support::send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().expect("users array");
    assert_eq!(users.len(), 4);
    for user in users {
        for key in ["username", "name", "avatar_url"] {
            assert!(user.get(key).is_some(), "missing {key} in {user}");
        }
    }
}

#[tokio::test]
async fn user_is_found_by_exact_username() {
    let (app, _store) = support::make_test_router();

    let (status, body) = support::send(&app, Method::GET, "/api/users/lurker", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "lurker");
    assert_eq!(body["user"]["avatar_url"], "https://avatars.test/lurker.png");

    for name in ["Lurker", "lurk", "nobody"] {
        support::assert_error(
            &app,
            Method::GET,
            &format!("/api/users/{name}"),
            None,
            StatusCode::NOT_FOUND,
            "No user found",
        )
        .await;
    }
}

#[tokio::test]
async fn topics_are_listed() {
    let (app, _store) = support::make_test_router();
    let (status, body) = support::send(&app, Method::GET, "/api/topics", None).await;
    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = body["topics"]
        .as_array()
        .expect("topics array")
        .iter()
        .filter_map(|topic| topic["slug"].as_str())
        .collect();
    assert_eq!(slugs, ["mitch", "cats", "paper"]);
    assert!(body["topics"][0]["description"].is_string());
}

#[tokio::test]
async fn empty_tables_follow_default_policies() {
    let app = support::make_empty_router(EmptyListPolicy::NotFound, EmptyListPolicy::Empty);

    support::assert_error(
        &app,
        Method::GET,
        "/api/users",
        None,
        StatusCode::NOT_FOUND,
        "No users found",
    )
    .await;

    let (status, body) = support::send(&app, Method::GET, "/api/topics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "topics": [] }));

    let (status, body) = support::send(&app, Method::GET, "/api/articles", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "articles": [] }));
}

#[tokio::test]
async fn empty_table_policies_can_be_swapped() {
    let app = support::make_empty_router(EmptyListPolicy::Empty, EmptyListPolicy::NotFound);

    let (status, body) = support::send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "users": [] }));

    support::assert_error(
        &app,
        Method::GET,
        "/api/topics",
        None,
        StatusCode::NOT_FOUND,
        "No topics found",
    )
    .await;
}
