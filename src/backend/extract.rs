//! Query, path and JSON body extractors whose rejections render as `BackendError`
//!
//! Axum's stock extractors answer deserialization failures with a plain-text
//! body. These wrappers route the rejection through `BackendError`, so an
//! unknown enum value, a non-integer path segment or an incomplete JSON body
//! gets the same `{"detail", "status"}` body as every other error.
//!
//! Each wrapper documents itself in the OpenAPI output the same way the
//! axum extractor it wraps does.

use aide::generate::GenContext;
use aide::openapi::{Operation, Response};
use aide::OperationInput;
use axum::extract::{FromRequest, FromRequestParts};
use schemars::JsonSchema;

use crate::backend::error::BackendError;

/// `axum::extract::Query` with a JSON 422 rejection
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(BackendError))]
pub struct Query<T>(pub T);

/// `axum::extract::Path` with a JSON 422 rejection
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(BackendError))]
pub struct Path<T>(pub T);

/// `axum::Json` request body with a JSON rejection
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct Json<T>(pub T);

impl<T: JsonSchema> OperationInput for Query<T> {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        axum::extract::Query::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut GenContext,
        operation: &mut Operation,
    ) -> Vec<(Option<u16>, Response)> {
        axum::extract::Query::<T>::inferred_early_responses(ctx, operation)
    }
}

impl<T: JsonSchema> OperationInput for Path<T> {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        axum::extract::Path::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut GenContext,
        operation: &mut Operation,
    ) -> Vec<(Option<u16>, Response)> {
        axum::extract::Path::<T>::inferred_early_responses(ctx, operation)
    }
}

impl<T: JsonSchema> OperationInput for Json<T> {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        axum::Json::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut GenContext,
        operation: &mut Operation,
    ) -> Vec<(Option<u16>, Response)> {
        axum::Json::<T>::inferred_early_responses(ctx, operation)
    }
}
