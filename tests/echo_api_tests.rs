use std::net::SocketAddr;

use serde_json::{Value, json};
use tokio::net::TcpListener;

use irrigation_devkit::server::build_router;

async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, build_router())
            .await
            .expect("serve mock server");
    });
    addr
}

async fn get(addr: SocketAddr, path_and_query: &str) -> reqwest::Response {
    reqwest::Client::new()
        .get(format!("http://{addr}{path_and_query}"))
        .send()
        .await
        .expect("request sent")
}

#[tokio::test]
async fn echoes_pairs_in_order() {
    let addr = spawn_server().await;

    let response = get(addr, "/api/v1/?a=1&b=2").await;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(
        body,
        json!({"status": "success", "data": [{"a": "1"}, {"b": "2"}]})
    );
}

#[tokio::test]
async fn echoes_single_pair() {
    let addr = spawn_server().await;

    let body: Value = get(addr, "/api/v1/?x=hello")
        .await
        .json()
        .await
        .expect("json body");
    assert_eq!(body, json!({"status": "success", "data": [{"x": "hello"}]}));
}

#[tokio::test]
async fn preserves_segment_order_and_duplicates() {
    let addr = spawn_server().await;

    let body: Value = get(addr, "/api/v1/?action=run&zone_id=3&zone_id=1")
        .await
        .json()
        .await
        .expect("json body");
    assert_eq!(
        body["data"],
        json!([{"action": "run"}, {"zone_id": "3"}, {"zone_id": "1"}])
    );
}

#[tokio::test]
async fn rejects_segment_without_equals() {
    let addr = spawn_server().await;

    let response = get(addr, "/api/v1/?abc").await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("json body");
    assert!(body.get("status").is_none());
    assert!(body["error"].as_str().unwrap_or_default().contains("abc"));
    assert_eq!(body["segment"], json!(0));
}

#[tokio::test]
async fn reports_index_of_malformed_segment() {
    let addr = spawn_server().await;

    let response = get(addr, "/api/v1/?a=1&b=2=3").await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["segment"], json!(1));
}

#[tokio::test]
async fn rejects_empty_query() {
    let addr = spawn_server().await;

    let response = get(addr, "/api/v1/").await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn healthcheck_reports_ok() {
    let addr = spawn_server().await;

    let body: Value = get(addr, "/api/health")
        .await
        .json()
        .await
        .expect("json body");
    assert_eq!(body, json!({"status": "ok"}));
}
