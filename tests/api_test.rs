//! Integration tests for the task CRUD HTTP API.
//!
//! Spins up the REST server on a random port with a temp data directory
//! and drives it end-to-end over HTTP.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use taskd::{config::TaskdConfig, rest, store::TaskStore, AppContext};
use tempfile::TempDir;

/// Find a free local port by binding to port 0.
fn find_free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Start a server on a random port and return its base URL.
async fn spawn_server(dir: &TempDir) -> String {
    let port = find_free_port();
    let config = Arc::new(TaskdConfig::new(
        Some(port),
        Some(dir.path().to_path_buf()),
        Some("error".to_string()),
        None,
    ));
    let store = TaskStore::new(dir.path()).await.unwrap();
    let ctx = Arc::new(AppContext::new(config, store));
    tokio::spawn(rest::start_rest_server(ctx));

    // Wait for the listener to come up.
    for _ in 0..50 {
        if tokio::net::TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
            return format!("http://127.0.0.1:{port}");
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server did not start on port {port}");
}

#[tokio::test]
async fn health_returns_message() {
    let dir = TempDir::new().unwrap();
    let base = spawn_server(&dir).await;

    let res = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn create_then_list_newest_first() {
    let dir = TempDir::new().unwrap();
    let base = spawn_server(&dir).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/tasks"))
        .json(&json!({ "title": "Buy milk" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);
    let a: Value = res.json().await.unwrap();
    assert!(a["id"].as_i64().unwrap() > 0);
    assert_eq!(a["title"], "Buy milk");
    assert_eq!(a["description"], "");
    assert_eq!(a["completed"], false);

    let res = client
        .post(format!("{base}/tasks"))
        .json(&json!({ "title": "Walk the dog", "description": "around the block" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);
    let b: Value = res.json().await.unwrap();
    assert_eq!(b["description"], "around the block");

    let res = client.get(format!("{base}/tasks")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let list: Vec<Value> = res.json().await.unwrap();
    assert_eq!(list.len(), 2);
    // Newest first: B was created after A.
    assert_eq!(list[0]["id"], b["id"]);
    assert_eq!(list[1]["id"], a["id"]);
}

#[tokio::test]
async fn create_rejects_empty_or_missing_title() {
    let dir = TempDir::new().unwrap();
    let base = spawn_server(&dir).await;
    let client = reqwest::Client::new();

    for body in [json!({ "title": "" }), json!({ "description": "no title" })] {
        let res = client
            .post(format!("{base}/tasks"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 400);
        let err: Value = res.json().await.unwrap();
        assert!(err["error"].is_string());
    }

    // The store was never touched.
    let res = client.get(format!("{base}/tasks")).send().await.unwrap();
    let list: Vec<Value> = res.json().await.unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn create_rejects_unknown_fields() {
    let dir = TempDir::new().unwrap();
    let base = spawn_server(&dir).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/tasks"))
        .json(&json!({ "title": "ok", "priority": "high" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn toggle_flips_only_completed() {
    let dir = TempDir::new().unwrap();
    let base = spawn_server(&dir).await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/tasks"))
        .json(&json!({ "title": "laundry", "description": "whites only" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    let res = client
        .put(format!("{base}/tasks/{id}"))
        .json(&json!({ "completed": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["title"], created["title"]);
    assert_eq!(updated["description"], created["description"]);
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let dir = TempDir::new().unwrap();
    let base = spawn_server(&dir).await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{base}/tasks/999"))
        .json(&json!({ "completed": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    let err: Value = res.json().await.unwrap();
    assert!(err["error"].is_string());
}

#[tokio::test]
async fn update_rejects_mistyped_completed() {
    let dir = TempDir::new().unwrap();
    let base = spawn_server(&dir).await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/tasks"))
        .json(&json!({ "title": "typed boundary" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    let res = client
        .put(format!("{base}/tasks/{id}"))
        .json(&json!({ "completed": "yes" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn delete_echoes_row_and_removes_it() {
    let dir = TempDir::new().unwrap();
    let base = spawn_server(&dir).await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{base}/tasks"))
        .json(&json!({ "title": "to remove" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    let res = client
        .delete(format!("{base}/tasks/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert!(body["message"].is_string());
    assert_eq!(body["task"]["id"], created["id"]);
    assert_eq!(body["task"]["title"], "to remove");

    let list: Vec<Value> = client
        .get(format!("{base}/tasks"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list.iter().all(|t| t["id"] != created["id"]));

    // Deleting again is a 404.
    let res = client
        .delete(format!("{base}/tasks/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn ui_is_served() {
    let dir = TempDir::new().unwrap();
    let base = spawn_server(&dir).await;

    let res = reqwest::get(format!("{base}/ui")).await.unwrap();
    assert_eq!(res.status(), 200);
    let html = res.text().await.unwrap();
    assert!(html.contains("task-form"));

    let res = reqwest::get(format!("{base}/ui/app.js")).await.unwrap();
    assert_eq!(res.status(), 200);
}
