#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use customer_server::config::AppConfig;
use customer_server::startup::build_app;
use http::StatusCode;
use serde_json::{json, Value};

/// Zero-config settings: a fresh in-memory SQLite database per app.
pub fn create_test_app_config() -> AppConfig {
    AppConfig::default_config()
}

/// Create a test app with its own in-memory database
pub async fn setup_test_app(app_config: AppConfig) -> Result<Router, Box<dyn std::error::Error>> {
    Ok(build_app(app_config).await?)
}

pub async fn setup_test_server() -> TestServer {
    let app = setup_test_app(create_test_app_config()).await.unwrap();
    TestServer::new(app).unwrap()
}

pub fn create_test_customer_json(name: &str, tel: &str) -> Value {
    json!({ "name": name, "tel": tel })
}

/// POST a valid customer and return its assigned id
pub async fn create_customer(server: &TestServer, name: &str, tel: &str) -> i64 {
    let response = server
        .post("/customer")
        .json(&create_test_customer_json(name, tel))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    body["id"].as_i64().unwrap()
}

/// Assert a 400 problem-detail response with the given detail and instance
pub fn assert_problem(response: &axum_test::TestResponse, detail: &str, instance: &str) {
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["type"], "about:blank");
    assert_eq!(body["title"], "Bad Request");
    assert_eq!(body["status"], 400);
    assert_eq!(body["detail"], detail);
    assert_eq!(body["instance"], instance);
}
