use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use folio_contact::SubmitInput;
use serde_json::json;
use tracing::{info, warn};

use crate::email::OutboundEmail;
use crate::error::AppError;
use crate::routes::AppState;

/// POST /api/contact
///
/// Re-validates the payload, sanitizes it, composes the notification
/// email and hands it to the dispatcher. A malformed body (missing
/// required field, invalid JSON) gets the same 400 envelope as a
/// validation failure instead of axum's default rejection.
pub async fn action(
    State(state): State<AppState>,
    payload: Result<Json<SubmitInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "contact payload rejected");
        AppError::Validation("Invalid or missing required fields.".to_string())
    })?;

    let submission = input.validated().map_err(|err| {
        warn!(error = %err, "contact payload failed validation");
        AppError::from(err)
    })?;

    let sanitized = submission.sanitized();
    let email = OutboundEmail::contact(&state.config.email, &sanitized);

    let receipt = state.dispatcher.dispatch(&email).await?;
    info!(
        from = %sanitized.email,
        message_id = %receipt.message_id,
        "contact submission dispatched"
    );

    Ok((
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Email sent successfully!" })),
    ))
}
