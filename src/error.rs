use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::email::EmailError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("email configuration error: {0}")]
    Configuration(String),

    #[error("email dispatch error: {0}")]
    Dispatch(String),
}

impl From<folio_contact::ContactError> for AppError {
    fn from(err: folio_contact::ContactError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<EmailError> for AppError {
    fn from(err: EmailError) -> Self {
        match err {
            EmailError::Configuration(detail) => AppError::Configuration(detail),
            EmailError::Dispatch(detail) => AppError::Dispatch(detail),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Configuration and dispatch detail is operator-only; the caller
        // gets a generic message.
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Configuration(detail) => {
                tracing::error!(detail = %detail, "email credentials missing or malformed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send email. Please try again later.".to_string(),
                )
            }
            AppError::Dispatch(detail) => {
                tracing::error!(detail = %detail, "email dispatch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send email. Please try again later.".to_string(),
                )
            }
        };

        (
            status,
            Json(json!({ "success": false, "message": message })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let response = AppError::Validation("Invalid or missing required fields.".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn dispatch_detail_is_not_leaked() {
        let response =
            AppError::Dispatch("provider said: 550 relay denied".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
