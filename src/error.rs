// src/error.rs

use std::any::Any;

use axum::response::{IntoResponse, Response};
use fortifykey_api::{
    ErrorResponse, FailResponse, FieldErrors, GenerationErrorResponse, InvalidInputResponse,
};

use crate::mail::DeliveryError;
use crate::password::{GeneratorError, RequestError};
use crate::response::AppResponse;

/// Text embedded in 500 bodies when the real cause must stay internal
const UNEXPECTED_FAILURE: &str = "unexpected internal failure";

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    // === POST /generate-password/ ===
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Password generation failed: {0}")]
    GenerationFailed(String),

    // === POST /send-password-to-email/ ===
    #[error("Validation failed: {0:?}")]
    ValidationFailed(FieldErrors),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // 400, fixed body
            AppError::InvalidInput(reason) => {
                tracing::debug!(reason = %reason, "Rejected password generation request");
                AppResponse::bad_request(InvalidInputResponse::default()).into_response()
            }
            // 400, field detail
            AppError::ValidationFailed(errors) => {
                tracing::debug!(?errors, "Rejected send-password request");
                AppResponse::bad_request(FailResponse::new(errors)).into_response()
            }
            // 500
            AppError::GenerationFailed(reason) => {
                tracing::error!(reason = %reason, "Password generation failed");
                AppResponse::internal_server_error(GenerationErrorResponse::new(&reason))
                    .into_response()
            }
            AppError::Delivery(err) => {
                tracing::error!(detail = ?err, "Password email delivery failed");
                AppResponse::internal_server_error(ErrorResponse::new(&err.to_string()))
                    .into_response()
            }
            AppError::InternalServerError(reason) => {
                tracing::error!(reason = %reason, "Internal server error");
                AppResponse::internal_server_error(ErrorResponse::new(&reason)).into_response()
            }
        }
    }
}

impl AppError {
    // === Helper constructors ===
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn generation_failed(msg: impl Into<String>) -> Self {
        AppError::GenerationFailed(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::InternalServerError(msg.into())
    }
}

// === Conversions from domain errors ===

impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        AppError::invalid_input(err.to_string())
    }
}

impl From<GeneratorError> for AppError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::EmptyPool => AppError::invalid_input(err.to_string()),
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::ValidationFailed(errors)
    }
}

// === Panic handlers (tower_http::catch_panic) ===

fn panic_detail(panic: &(dyn Any + Send)) -> &str {
    if let Some(msg) = panic.downcast_ref::<String>() {
        msg
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        msg
    } else {
        "non-string panic payload"
    }
}

/// Turns a panic inside `POST /generate-password/` into its 500 body
pub fn generation_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(detail = panic_detail(&*panic), "Panic while generating password");
    AppError::generation_failed(UNEXPECTED_FAILURE).into_response()
}

/// Turns a panic inside `POST /send-password-to-email/` into its 500 body
pub fn send_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(detail = panic_detail(&*panic), "Panic while sending password");
    AppError::internal(UNEXPECTED_FAILURE).into_response()
}
