/**
 * Admin Session Cookies
 *
 * Every admin response carries two cookies:
 * - `Authorization` = `Bearer <token>` for the authenticated admin
 * - `detail` = what was attempted, or that the attempt failed
 *
 * `AdminSession` owns the cookie jar for the whole request and turns the
 * store outcome into one `AdminResponse`, so the cookies are attached on
 * the error path as well as the success path.
 */

use aide::generate::GenContext;
use aide::openapi::Operation;
use aide::OperationOutput;
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use schemars::JsonSchema;
use serde::Serialize;

use crate::backend::auth::handlers::types::AdminAction;
use crate::backend::error::BackendError;

pub const AUTHORIZATION_COOKIE: &str = "Authorization";
pub const DETAIL_COOKIE: &str = "detail";

/// Cookies collected for one admin request
pub struct AdminSession {
    jar: CookieJar,
}

impl AdminSession {
    /// Set the token cookie and the "attempted" detail cookie
    pub fn begin(token: &str, action: &AdminAction<'_>) -> Self {
        let authorization = Cookie::build((AUTHORIZATION_COOKIE, format!("Bearer {}", token)))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();

        let jar = CookieJar::new()
            .add(authorization)
            .add(detail_cookie(action.attempted()));

        Self { jar }
    }

    /// Pair the store outcome with the session cookies
    ///
    /// On failure the `detail` cookie is replaced with the failure wording.
    pub fn finish<T>(
        self,
        action: &AdminAction<'_>,
        outcome: Result<T, BackendError>,
    ) -> AdminResponse<T> {
        let jar = match &outcome {
            Ok(_) => self.jar,
            Err(_) => self.jar.add(detail_cookie(action.failed())),
        };
        AdminResponse { jar, outcome }
    }
}

/// Admin response: JSON body or error, with both cookies either way
pub struct AdminResponse<T> {
    jar: CookieJar,
    outcome: Result<T, BackendError>,
}

impl<T: Serialize> IntoResponse for AdminResponse<T> {
    fn into_response(self) -> Response {
        match self.outcome {
            Ok(body) => (self.jar, Json(body)).into_response(),
            Err(err) => (self.jar, err).into_response(),
        }
    }
}

impl<T: JsonSchema + Serialize> OperationOutput for AdminResponse<T> {
    type Inner = T;

    fn operation_response(
        ctx: &mut GenContext,
        operation: &mut Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<T>::operation_response(ctx, operation)
    }

    fn inferred_responses(
        ctx: &mut GenContext,
        operation: &mut Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        let mut responses = Json::<T>::inferred_responses(ctx, operation);
        responses.extend(BackendError::inferred_responses(ctx, operation));
        responses
    }
}

fn detail_cookie(value: String) -> Cookie<'static> {
    Cookie::build((DETAIL_COOKIE, value))
        .path("/")
        .same_site(SameSite::Lax)
        .build()
}
