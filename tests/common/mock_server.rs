//! Mock cocktail API
//!
//! Helpers for mounting `filter.php` responses on a wiremock server.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Upstream body for a list of `(name, id)` pairs
pub fn filter_body(drinks: &[(&str, &str)]) -> Value {
    let drinks: Vec<Value> = drinks
        .iter()
        .map(|(name, id)| {
            json!({
                "strDrink": name,
                "strDrinkThumb": format!("https://example.test/{}.jpg", id),
                "idDrink": id,
            })
        })
        .collect();
    json!({ "drinks": drinks })
}

/// Answer `GET /filter.php?a=<filter>` with the given drinks, exactly once
pub async fn mount_filter(server: &MockServer, filter: &str, drinks: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .and(query_param("a", filter))
        .respond_with(ResponseTemplate::new(200).set_body_json(filter_body(drinks)))
        .expect(1)
        .mount(server)
        .await;
}

/// Answer every `GET /filter.php` with the given status
pub async fn mount_filter_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Answer every `GET /filter.php` with a raw body
pub async fn mount_filter_raw(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}
