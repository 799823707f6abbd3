//! Pull-request creation against a live stub server.

mod common;

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

type CapturedBody = Arc<Mutex<Option<Value>>>;

fn pulls_router(captured: &CapturedBody) -> Router {
    let capture = Arc::clone(captured);

    Router::new()
        .route(
            "/user",
            get(|| async { Json(json!({"uuid": "{me}", "display_name": "Erin"})) }),
        )
        .route(
            "/repositories/acme/widget/effective-default-reviewers",
            get(|| async {
                Json(json!({
                    "page": 1,
                    "values": [
                        {"reviewer_type": "project", "user": {"uuid": "{a}", "display_name": "A"}},
                        {"reviewer_type": "repository", "user": {"uuid": "{b}", "display_name": "B"}},
                        {"reviewer_type": "repository", "user": {"uuid": "{me}", "display_name": "Erin"}}
                    ]
                }))
            }),
        )
        .route(
            "/repositories/acme/widget/pullrequests",
            post(move |Json(body): Json<Value>| {
                let capture = Arc::clone(&capture);
                async move {
                    *capture.lock().unwrap() = Some(body.clone());
                    let response = json!({
                        "id": 12,
                        "title": body["title"],
                        "state": "OPEN",
                        "source": body["source"],
                        "destination": body.get("destination")
                            .cloned()
                            .unwrap_or_else(|| json!({"branch": {"name": "main"}})),
                        "reviewers": [],
                        "close_source_branch": true
                    });
                    (StatusCode::CREATED, Json(response))
                }
            }),
        )
}

#[tokio::test]
async fn create_excludes_the_current_user_from_reviewers() {
    let captured: CapturedBody = Arc::new(Mutex::new(None));
    let log = common::request_log();
    let addr = common::spawn(pulls_router(&captured), &log).await;
    let client = common::client(addr);

    let pr = client
        .pulls()
        .create("acme", "widget", "Add pagination", "feature/pagination", None)
        .await
        .expect("creation should succeed");

    assert_eq!(pr.id, 12);

    let body = captured.lock().unwrap().clone().expect("body captured");
    assert_eq!(
        body["reviewers"],
        json!([{"uuid": "{a}"}, {"uuid": "{b}"}])
    );
    assert_eq!(body["source"]["branch"]["name"], "feature/pagination");
    assert_eq!(body["close_source_branch"], json!(true));
    // Destination omitted: the server picks the default branch.
    assert!(body.get("destination").is_none());
}

#[tokio::test]
async fn create_includes_the_destination_branch_when_given() {
    let captured: CapturedBody = Arc::new(Mutex::new(None));
    let log = common::request_log();
    let addr = common::spawn(pulls_router(&captured), &log).await;
    let client = common::client(addr);

    client
        .pulls()
        .create(
            "acme",
            "widget",
            "Hotfix",
            "hotfix/cve",
            Some("release/1.2"),
        )
        .await
        .expect("creation should succeed");

    let body = captured.lock().unwrap().clone().expect("body captured");
    assert_eq!(body["destination"]["branch"]["name"], "release/1.2");
}

#[tokio::test]
async fn create_issues_the_three_round_trips_in_order() {
    let captured: CapturedBody = Arc::new(Mutex::new(None));
    let log = common::request_log();
    let addr = common::spawn(pulls_router(&captured), &log).await;
    let client = common::client(addr);

    client
        .pulls()
        .create("acme", "widget", "Add pagination", "feature/pagination", None)
        .await
        .expect("creation should succeed");

    let paths: Vec<String> = common::recorded(&log)
        .into_iter()
        .map(|r| format!("{} {}", r.method, r.path))
        .collect();
    assert_eq!(
        paths,
        vec![
            "GET /user",
            "GET /repositories/acme/widget/effective-default-reviewers",
            "POST /repositories/acme/widget/pullrequests",
        ]
    );
}
