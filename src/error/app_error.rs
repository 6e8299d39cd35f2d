use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

pub const DUPLICATE_SERIAL_MESSAGE: &str = "A product with the same serialNum already exists.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    ConfigError(String),
    #[error("internal error: {0}")]
    InternalError(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("validation failed: {0}")]
    ValidationError(#[from] ValidationErrors),
    #[error("conflict: {0}")]
    Conflict(String),
}

impl AppError {
    pub fn duplicate_serial() -> Self {
        AppError::Conflict(DUPLICATE_SERIAL_MESSAGE.to_string())
    }
}

/// Converts a struct field name such as `serial_num` to its JSON name.
pub fn wire_field_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Flattens validator output into `{ field: [message, ...] }`, keyed by the
/// wire name of each field.
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (wire_field_name(&field), messages)
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::DatabaseError(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
            AppError::MigrationError(ref e) => {
                tracing::error!("Migration error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
            AppError::IoError(ref e) => {
                tracing::error!("I/O error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
            AppError::InternalError(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
            AppError::NotFound(ref msg) => {
                tracing::debug!("Not found: {}", msg);
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Some(json!({ "message": msg }))),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, Some(json!({ "message": msg })))
            }
            AppError::ValidationError(ref errors) => (
                StatusCode::BAD_REQUEST,
                Some(json!({
                    "message": "Validation failed",
                    "errors": field_messages(errors),
                })),
            ),
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, Some(json!({ "message": msg }))),
        };

        let body = body.unwrap_or_else(|| json!({ "message": "Internal server error" }));

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn converts_field_names_to_camel_case() {
        assert_eq!(wire_field_name("serial_num"), "serialNum");
        assert_eq!(wire_field_name("image_url"), "imageUrl");
        assert_eq!(wire_field_name("price"), "price");
        assert_eq!(wire_field_name("productName"), "productName");
    }

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let response = AppError::NotFound("product SN1".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn conflict_is_bad_request_with_message() {
        let response = AppError::duplicate_serial().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], DUPLICATE_SERIAL_MESSAGE);
    }

    #[tokio::test]
    async fn payload_too_large_keeps_its_status() {
        let response =
            AppError::PayloadTooLarge("length limit exceeded".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let body = body_json(response).await;
        assert_eq!(body["message"], "length limit exceeded");
    }

    #[tokio::test]
    async fn database_error_does_not_leak_details() {
        let response = AppError::DatabaseError(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "message": "Internal server error" }));
    }

    #[tokio::test]
    async fn validation_error_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "serialNum",
            ValidationError::new("length").with_message("too long".into()),
        );
        errors.add("imageUrl", ValidationError::new("required"));

        let response = AppError::ValidationError(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["errors"]["serialNum"], json!(["too long"]));
        assert_eq!(body["errors"]["imageUrl"], json!(["required"]));
    }
}
