mod common;

use common::TestApp;

#[tokio::test]
async fn ping_returns_pong() {
    let app = TestApp::spawn().await;

    for _ in 0..3 {
        let response = app
            .client
            .get(format!("{}/api/ping", app.address))
            .send()
            .await
            .expect("Failed to execute request");

        assert!(response.status().is_success());

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body, serde_json::json!({ "ok": true, "message": "pong" }));
    }
}

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "zenith-service");
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/api/ping", app.address))
        .header("x-request-id", "req-42")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.headers()["x-request-id"], "req-42");
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/chatbot", app.address),
        )
        .header("origin", "https://client.example")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
