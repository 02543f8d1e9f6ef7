//! Error normalization: every failure leaves the adapter as a JSON envelope.
//!
//! ```json
//! { "error": "SAP Memo Error", "statusText": "Service Unavailable", "details": {"msg": "down"} }
//! { "error": "SAP Memo Error failed", "details": "error sending request for url (...)" }
//! { "message": "No invoices found" }
//! ```

use crate::core::Resource;
use crate::utils::error::{AdapterError, UpstreamError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// An [`AdapterError`] tagged with the endpoint it happened on.
#[derive(Debug)]
pub struct ApiError {
    pub context: &'static str,
    pub error: AdapterError,
}

impl ApiError {
    pub fn new(resource: Resource, error: AdapterError) -> Self {
        Self {
            context: resource.context(),
            error,
        }
    }
}

/// Status and body for `error` under `context`.
pub fn error_envelope(context: &str, error: &AdapterError) -> (StatusCode, Value) {
    match error {
        AdapterError::BadRequest { message } => {
            (StatusCode::BAD_REQUEST, json!({ "error": message }))
        }
        AdapterError::NotFound { message } => {
            (StatusCode::NOT_FOUND, json!({ "message": message }))
        }
        AdapterError::Unauthorized { message } => {
            (StatusCode::UNAUTHORIZED, json!({ "message": message }))
        }
        AdapterError::Upstream(UpstreamError::Status {
            status,
            status_text,
            body,
        }) => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            json!({
                "error": context,
                "statusText": status_text,
                "details": body,
            }),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "error": format!("{} failed", context),
                "details": error_chain(other),
            }),
        ),
    }
}

/// `err` and its sources joined with `": "`, so the root cause survives.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.error.is_client_error() {
            tracing::warn!(context = self.context, "{}", self.error);
        } else {
            tracing::error!(
                context = self.context,
                "{}: {}",
                self.context,
                error_chain(&self.error)
            );
        }

        let (status, body) = error_envelope(self.context, &self.error);
        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.context, self.error)
    }
}

impl std::error::Error for ApiError {}
