//! Authentication test helpers
//!
//! Basic-auth header construction and `Set-Cookie` inspection.

use axum::http::{
    header::{AUTHORIZATION, SET_COOKIE},
    HeaderMap, HeaderName, HeaderValue,
};
use axum_extra::extract::cookie::Cookie;
use axum_extra::headers::{Authorization, HeaderMapExt};
use axum_test::TestResponse;

use super::ADMIN_PASSWORD;

/// `Authorization` header name, typed for `add_header`
pub fn authorization() -> HeaderName {
    AUTHORIZATION
}

/// `Basic <base64(username:password)>`
pub fn basic_auth(username: &str, password: &str) -> HeaderValue {
    let mut headers = HeaderMap::new();
    headers.typed_insert(Authorization::basic(username, password));
    headers
        .remove(AUTHORIZATION)
        .expect("typed_insert sets the Authorization header")
}

/// Valid admin credentials
pub fn admin_auth() -> HeaderValue {
    basic_auth("admin", ADMIN_PASSWORD)
}

/// Value of the named cookie from the response's `Set-Cookie` headers
pub fn response_cookie(response: &TestResponse, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|raw| Cookie::parse_encoded(raw.to_string()).ok())
        .filter(|cookie| cookie.name() == name)
        .last()
        .map(|cookie| cookie.value().to_string())
}
