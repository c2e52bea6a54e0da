//! Integration tests for the `/api/community` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn leaderboard_keeps_snapshot_order() {
    let app = common::build_test_app().await;
    let response = get(&app.router, "/api/community/leaderboard").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["userId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["user3", "user4", "user5", "user1", "user2"]);

    let anjali = &json[4];
    assert_eq!(anjali["isOnline"], true);
    assert!(anjali["badge"].is_null());
    assert_eq!(json[0]["badge"], "Expert");
}

#[tokio::test]
async fn list_discussions() {
    let app = common::build_test_app().await;
    let json = body_json(get(&app.router, "/api/community/discussions").await).await;

    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["authorId"], "user4");
    assert_eq!(list[0]["solved"], true);
    assert_eq!(list[1]["solved"], false);
}

#[tokio::test]
async fn get_discussion_by_id() {
    let app = common::build_test_app().await;
    let response = get(&app.router, "/api/community/discussions/discussion2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["category"], "Machine Learning");
}

#[tokio::test]
async fn get_unknown_discussion_returns_404() {
    let app = common::build_test_app().await;
    let response = get(&app.router, "/api/community/discussions/discussion9").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["detail"], "Discussion not found");
}
