//! Greetings, health, diagnostics, and cross-cutting middleware.

use reqwest::StatusCode;
use secrecy::SecretString;
use serde_json::{Value, json};

use nexora_api::db::MemoryDocumentStore;
use nexora_api::{ApiConfig, Store};
use nexora_core::{Email, NewsletterSubscriber};
use nexora_integration_tests::{FailingStore, TestServer};

async fn get_json(server: &TestServer, path: &str) -> (StatusCode, Value) {
    let resp = server
        .client
        .get(server.url(path))
        .send()
        .await
        .expect("Failed to send request");
    let status = resp.status();
    let body = resp.json().await.expect("Failed to parse body");
    (status, body)
}

#[tokio::test]
async fn test_greetings() {
    let server = TestServer::with_memory_store().await;

    let (status, body) = get_json(&server, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "NEXORA SYNERGY API Running"}));

    let (status, body) = get_json(&server, "/api/hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Hello from the NEXORA SYNERGY backend!"})
    );
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::start(Store::unavailable("DATABASE_URL is not set")).await;

    let resp = server
        .client
        .get(server.url("/health"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
}

#[tokio::test]
async fn test_readiness_follows_store() {
    let ready = TestServer::with_memory_store().await;
    let resp = ready
        .client
        .get(ready.url("/health/ready"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::OK);

    let failing = TestServer::start(Store::from_store(FailingStore)).await;
    let resp = failing
        .client
        .get(failing.url("/health/ready"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_diagnostics_without_store() {
    let server = TestServer::start(Store::unavailable("DATABASE_URL is not set")).await;

    let (status, body) = get_json(&server, "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], Value::Null);
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["collections"], json!([]));
    assert!(
        body["database"]
            .as_str()
            .is_some_and(|d| d.starts_with("❌ Not Available"))
    );
}

#[tokio::test]
async fn test_diagnostics_with_working_store() {
    let store = Store::from_store(MemoryDocumentStore::new("nexora-test"));
    store
        .create(&NewsletterSubscriber {
            email: Email::parse("reader@example.com").expect("valid email"),
        })
        .await
        .expect("Failed to insert");

    let config = ApiConfig {
        database_url: Some(SecretString::from("memory://nexora-test")),
        ..ApiConfig::default()
    };
    let server = TestServer::start_with_config(config, store).await;

    let (status, body) = get_json(&server, "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "nexora-test");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], json!(["newslettersubscriber"]));
}

#[tokio::test]
async fn test_diagnostics_with_failing_store_still_answers() {
    let server = TestServer::start(Store::from_store(FailingStore)).await;

    let (status, body) = get_json(&server, "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["connection_status"], "Connected");
    assert!(
        body["database"]
            .as_str()
            .is_some_and(|d| d.starts_with("⚠️  Connected but Error"))
    );
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = TestServer::with_memory_store().await;

    let resp = server
        .client
        .get(server.url("/api/hello"))
        .header("x-request-id", "req-1234")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(
        resp.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("req-1234")
    );
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let server = TestServer::with_memory_store().await;

    let resp = server
        .client
        .get(server.url("/api/hello"))
        .send()
        .await
        .expect("Failed to send request");

    let id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header missing");
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_cors_allows_any_origin_with_credentials() {
    let server = TestServer::with_memory_store().await;
    let origin = "https://www.nexora-synergy.example";

    let resp = server
        .client
        .get(server.url("/api/content/services"))
        .header("origin", origin)
        .send()
        .await
        .expect("Failed to send request");

    let headers = resp.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(origin)
    );
    assert_eq!(
        headers
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = TestServer::with_memory_store().await;

    let resp = server
        .client
        .request(reqwest::Method::OPTIONS, server.url("/api/contact"))
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .expect("Failed to send request");

    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key("access-control-allow-methods"));
}
