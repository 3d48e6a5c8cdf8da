// src/handlers/password.rs

use axum::extract::State;
use fortifykey_api::{
    FieldErrors, GeneratePasswordRequest, GeneratePasswordResponse, SendPasswordRequest,
    SendPasswordResponse,
};
use std::sync::Arc;

use crate::app::AppState;
use crate::error::AppError;
use crate::extractors::{BodyRejection, JsonBody};
use crate::mail::EmailPasswordRequest;
use crate::password::{self, PasswordRequest};
use crate::response::AppResponse;

/// POST /generate-password/
/// Generates a random password from the requested length and categories
pub async fn generate_password(
    State(state): State<Arc<AppState>>,
    body: Result<JsonBody<GeneratePasswordRequest>, BodyRejection>,
) -> Result<AppResponse<GeneratePasswordResponse>, AppError> {
    let JsonBody(body) = body.map_err(|BodyRejection(reason)| AppError::invalid_input(reason))?;

    let request = PasswordRequest::from_body(body, state.max_password_length)?;
    let password = password::generate(request.length, &request.categories)?;

    tracing::info!(length = request.length, "Password generated");
    Ok(AppResponse::created(GeneratePasswordResponse::new(password)))
}

/// POST /send-password-to-email/
/// Emails a password; delivery is best-effort
pub async fn send_password(
    State(state): State<Arc<AppState>>,
    body: Result<JsonBody<SendPasswordRequest>, BodyRejection>,
) -> Result<AppResponse<SendPasswordResponse>, AppError> {
    let JsonBody(body) = body.map_err(|BodyRejection(reason)| FieldErrors::non_field(reason))?;

    let request = EmailPasswordRequest::try_from(body)?;
    state
        .notifier
        .notify(&request.email, &request.password)
        .await?;

    Ok(AppResponse::ok(SendPasswordResponse::default()))
}
