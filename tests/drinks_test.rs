//! Cocktail passthrough tests
//!
//! `/drinks` and `/drinks_json` against a wiremock cocktail API.

#[macro_use]
mod common;

use axum::http::StatusCode;
use common::*;
use drinks_gateway::shared::{Drink, DrinkMap};
use pretty_assertions::assert_eq;

const ALCOHOLIC: &[(&str, &str)] = &[("Mojito", "11000"), ("Margarita", "11007"), ("Negroni", "12528")];
const NON_ALCOHOLIC: &[(&str, &str)] = &[("Limonada", "12560"), ("Horchata", "12572")];

fn expected_map(drinks: &[(&str, &str)]) -> DrinkMap {
    drinks
        .iter()
        .map(|(name, id)| {
            (
                name.to_string(),
                Drink {
                    name: name.to_string(),
                    id: id.to_string(),
                },
            )
        })
        .collect()
}

#[tokio::test]
async fn test_drinks_json_keys_are_drink_names() {
    for (flag, filter, drinks) in [
        ("true", "Alcoholic", ALCOHOLIC),
        ("false", "Non_Alcoholic", NON_ALCOHOLIC),
    ] {
        let app = TestApp::with_upstream().await;
        mount_filter(app.upstream(), filter, drinks).await;

        let response = app
            .server
            .get("/drinks_json")
            .add_query_param("Alcoholic", flag)
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: DrinkMap = response.json();
        assert_eq!(body, expected_map(drinks));
        for (key, drink) in &body {
            assert_eq!(key, &drink.name);
        }
    }
}

#[tokio::test]
async fn test_drinks_json_accepts_loose_booleans() {
    let app = TestApp::with_upstream().await;
    mount_filter(app.upstream(), "Non_Alcoholic", NON_ALCOHOLIC).await;

    let response = app
        .server
        .get("/drinks_json")
        .add_query_param("Alcoholic", "no")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<DrinkMap>().len(), NON_ALCOHOLIC.len());
}

#[tokio::test]
async fn test_drinks_csv_download() {
    let app = TestApp::with_upstream().await;
    mount_filter(app.upstream(), "Alcoholic", ALCOHOLIC).await;

    let response = app
        .server
        .get("/drinks")
        .add_query_param("Alcoholic", "true")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-type"), "text/csv; charset=utf-8");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"drinks.csv\""
    );

    let body = response.text().replace("\r\n", "\n");
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines[0], "name,id");
    assert_eq!(lines.len(), ALCOHOLIC.len() + 1);
    for (name, id) in ALCOHOLIC {
        assert!(lines.contains(&format!("{},{}", name, id).as_str()), "{}", body);
    }
}

#[tokio::test]
async fn test_null_drinks_is_empty() {
    let app = TestApp::with_upstream().await;
    mount_filter_raw(app.upstream(), r#"{"drinks": null}"#).await;

    let json = app
        .server
        .get("/drinks_json")
        .add_query_param("Alcoholic", "true")
        .await;
    assert_eq!(json.status_code(), StatusCode::OK);
    assert!(json.json::<DrinkMap>().is_empty());

    let csv = app
        .server
        .get("/drinks")
        .add_query_param("Alcoholic", "true")
        .await;
    assert_eq!(csv.text().trim_end(), "name,id");
}

#[tokio::test]
async fn test_missing_or_invalid_flag_is_422() {
    let app = TestApp::with_upstream().await;

    let missing = app.server.get("/drinks_json").await;
    assert_eq!(missing.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let invalid = app
        .server
        .get("/drinks")
        .add_query_param("Alcoholic", "maybe")
        .await;
    assert_eq!(invalid.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = invalid.json();
    assert_eq!(body["status"], 422);
}

#[tokio::test]
async fn test_upstream_error_status_is_502() {
    let app = TestApp::with_upstream().await;
    mount_filter_status(app.upstream(), 500).await;

    let response = app
        .server
        .get("/drinks_json")
        .add_query_param("Alcoholic", "true")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 502);
}

#[tokio::test]
async fn test_malformed_upstream_body_is_502() {
    let app = TestApp::with_upstream().await;
    mount_filter_raw(app.upstream(), "<html>maintenance</html>").await;

    let response = app
        .server
        .get("/drinks")
        .add_query_param("Alcoholic", "false")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
}
