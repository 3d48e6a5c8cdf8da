//! # fortifykey-api
//!
//! Shared API types for the fortifykey password service.
//! This crate is designed to be WASM-compatible and can be used in both
//! backend (Rust) and frontend (WASM/TypeScript via wasm-bindgen) applications.
//!
//! ## Features
//!
//! - Request DTOs (`GeneratePasswordRequest`, `SendPasswordRequest`, `SendPasswordForm`)
//! - Response DTOs (`GeneratePasswordResponse`, `SendPasswordResponse`, ...)
//! - Error response formats and field-level validation errors (`FieldErrors`)
//! - Generic response wrapper (`AppResponse`)
//!
//! ## Example
//!
//! ```rust
//! use fortifykey_api::SendPasswordRequest;
//! use serde_json::json;
//!
//! let request = SendPasswordRequest {
//!     email: Some(json!("user@example.com")),
//!     password: Some(json!("x7#Kp0!qZr2m")),
//! };
//! assert!(request.validated().is_ok());
//! ```

pub mod error;
pub mod requests;
pub mod responses;
pub mod result;

// Re-exports for convenient access
pub use error::{
    ErrorResponse, FailResponse, FieldErrors, GenerationErrorResponse, InvalidInputResponse,
};
pub use requests::*;
pub use responses::*;
pub use result::{AppResponse, ResponseStatus, StatusCode};
