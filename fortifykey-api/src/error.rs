use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::result::ResponseStatus;

/// Key used for errors that do not belong to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

pub const INVALID_INPUT: &str = "Invalid input";
pub const GENERATION_FAILED: &str = "Password generation failed";
pub const RETRY_MESSAGE: &str = "Something went wrong. Please retry.";

/// Field-level validation errors, keyed by field name.
///
/// Serializes as a plain map: `{"email": ["Enter a valid email address."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one message against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Builds an error set holding a single non-field message
    pub fn non_field(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(NON_FIELD_ERRORS, message);
        errors
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds the fields of `other` that carry no error here yet
    pub fn merge_missing(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_insert(messages);
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Self::new();
        for (field, errs) in errors.field_errors() {
            for err in errs {
                let message = err
                    .message
                    .as_ref()
                    .map_or_else(|| err.code.to_string(), ToString::to_string);
                fields.add(field.to_string(), message);
            }
        }
        fields
    }
}

/// 400 body of `POST /generate-password/`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InvalidInputResponse {
    pub error: String,
}

impl Default for InvalidInputResponse {
    fn default() -> Self {
        Self {
            error: INVALID_INPUT.to_string(),
        }
    }
}

/// 500 body of `POST /generate-password/`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerationErrorResponse {
    pub error: String,
    pub message: String,
    pub status: ResponseStatus,
}

impl GenerationErrorResponse {
    pub fn new(reason: &str) -> Self {
        Self {
            error: format!("An error occurred: {reason}"),
            message: GENERATION_FAILED.to_string(),
            status: ResponseStatus::Error,
        }
    }
}

/// 400 body of `POST /send-password-to-email/`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FailResponse {
    pub data: FieldErrors,
    pub message: String,
    pub status: ResponseStatus,
}

impl FailResponse {
    pub fn new(data: FieldErrors) -> Self {
        Self {
            data,
            message: RETRY_MESSAGE.to_string(),
            status: ResponseStatus::Fail,
        }
    }
}

/// Public API error response format (500 body of `POST /send-password-to-email/`)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
    pub status: ResponseStatus,
}

impl ErrorResponse {
    pub fn new(reason: &str) -> Self {
        Self {
            message: format!("An error occurred: {reason}"),
            status: ResponseStatus::Error,
        }
    }
}
