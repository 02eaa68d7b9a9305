//! Demonstration endpoint tests

#[macro_use]
mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_greetings() {
    let app = TestApp::spawn().await;

    let query = app.server.get("/get-test").add_query_param("name", "Sofia").await;
    assert_eq!(query.status_code(), StatusCode::OK);
    assert_eq!(query.json::<serde_json::Value>(), json!({"result": "Hello Sofia"}));

    let path = app.server.get("/get/Lucas/saludo").await;
    assert_eq!(path.status_code(), StatusCode::OK);
    assert_eq!(path.json::<serde_json::Value>(), json!({"result": "Hello Lucas"}));
}

#[tokio::test]
async fn test_greeting_rejects_unknown_name() {
    let app = TestApp::spawn().await;

    let query = app.server.get("/get-test").add_query_param("name", "Pedro").await;
    assert_eq!(query.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let path = app.server.get("/get/pedro/saludo").await;
    assert_eq!(path.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = path.json();
    assert_eq!(body["status"], 422);
}

#[tokio::test]
async fn test_error_response_only_diego() {
    let app = TestApp::spawn().await;

    let ok = app
        .server
        .get("/error_response")
        .add_query_param("name", "Diego")
        .await;
    assert_eq!(ok.status_code(), StatusCode::OK);
    assert_eq!(ok.json::<serde_json::Value>(), json!({"result": "Hello Diego"}));

    for name in ["Lucas", "Sofia", "anyone", "DIEGO"] {
        let denied = app
            .server
            .get("/error_response")
            .add_query_param("name", name)
            .await;
        assert_error_body!(denied, StatusCode::UNAUTHORIZED, "Este usuario no tiene permiso");
    }
}

#[tokio::test]
async fn test_redirect_to_lucas_page() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/redirect_response/hello_lucas").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.header("location"), "/html_response?name=Lucas");
}

#[tokio::test]
async fn test_item_echo() {
    let app = TestApp::spawn().await;

    let with_q = app.server.get("/items/42").add_query_param("q", "hielo").await;
    assert_eq!(with_q.status_code(), StatusCode::OK);
    assert_eq!(
        with_q.json::<serde_json::Value>(),
        json!({"item_id": 42, "q": "hielo"})
    );

    let without_q = app.server.get("/items/7").await;
    assert_eq!(
        without_q.json::<serde_json::Value>(),
        json!({"item_id": 7, "q": null})
    );

    let bad_id = app.server.get("/items/seven").await;
    assert_eq!(bad_id.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/no/such/route").await;

    assert_error_body!(response, StatusCode::NOT_FOUND, "Not Found");
}
