use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::error::FieldErrors;

// -------- REQUEST DTOs --------

/// Body of `POST /generate-password/`.
///
/// Both fields are kept as raw JSON so that a value of the wrong type can be
/// reported as invalid input by the server instead of failing deserialization.
/// An explicit `null` is kept as `Some(Value::Null)`, an absent field is `None`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GeneratePasswordRequest {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub length: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub complexity: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Body of `POST /send-password-to-email/`.
///
/// Kept as raw JSON like [`GeneratePasswordRequest`], so a value of the wrong
/// type is reported against its own field by [`SendPasswordRequest::validated`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SendPasswordRequest {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<Value>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub password: Option<Value>,
}

/// Send-password fields after string coercion
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct SendPasswordForm {
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address.")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "This field is required."),
        length(min = 1, message = "This field may not be blank.")
    )]
    pub password: Option<String>,
}

impl SendPasswordRequest {
    /// Coerces both fields to trimmed strings and validates them.
    ///
    /// Numbers are accepted as their decimal text. On success every field of
    /// the returned form is guaranteed to be `Some`.
    pub fn validated(self) -> Result<SendPasswordForm, FieldErrors> {
        let mut errors = FieldErrors::new();
        let form = SendPasswordForm {
            email: string_field("email", self.email, &mut errors),
            password: string_field("password", self.password, &mut errors),
        };

        if let Err(invalid) = form.validate() {
            errors.merge_missing(invalid.into());
        }

        if errors.is_empty() {
            Ok(form)
        } else {
            Err(errors)
        }
    }
}

fn string_field(name: &str, value: Option<Value>, errors: &mut FieldErrors) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Null => {
            errors.add(name, "This field may not be null.");
            None
        }
        _ => {
            errors.add(name, "Not a valid string.");
            None
        }
    }
}
