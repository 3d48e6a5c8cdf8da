use fortifykey_api::GeneratePasswordRequest;
use serde_json::Value;

use super::Category;

pub const DEFAULT_LENGTH: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("length must be an integer")]
    LengthNotInteger,
    #[error("length must not be negative")]
    NegativeLength,
    #[error("length exceeds the maximum of {max}")]
    LengthTooLarge { max: usize },
    #[error("complexity must be a list")]
    ComplexityNotList,
    #[error("complexity entries must be strings")]
    ComplexityEntryNotString,
}

/// A type-checked password generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: usize,
    /// Recognized categories only, unknown tags are dropped
    pub categories: Vec<Category>,
}

impl PasswordRequest {
    /// Validates the raw request body.
    ///
    /// Absent `length` means 12; absent, `null` or empty `complexity` means the
    /// default categories. Unknown tags are ignored, so the resulting category
    /// list may be empty.
    pub fn from_body(body: GeneratePasswordRequest, max_length: usize) -> Result<Self, RequestError> {
        let length = match body.length {
            None => DEFAULT_LENGTH,
            Some(value) => parse_length(&value)?,
        };
        if length > max_length {
            return Err(RequestError::LengthTooLarge { max: max_length });
        }

        let categories = match body.complexity {
            None | Some(Value::Null) => Category::DEFAULT.to_vec(),
            Some(Value::Array(tags)) if tags.is_empty() => Category::DEFAULT.to_vec(),
            Some(Value::Array(tags)) => parse_tags(&tags)?,
            Some(_) => return Err(RequestError::ComplexityNotList),
        };

        Ok(Self { length, categories })
    }
}

fn parse_length(value: &Value) -> Result<usize, RequestError> {
    let Value::Number(number) = value else {
        return Err(RequestError::LengthNotInteger);
    };

    if let Some(length) = number.as_u64() {
        // saturate on 32-bit targets, the max-length check rejects it anyway
        return Ok(usize::try_from(length).unwrap_or(usize::MAX));
    }
    if number.as_i64().is_some() {
        return Err(RequestError::NegativeLength);
    }
    Err(RequestError::LengthNotInteger)
}

fn parse_tags(tags: &[Value]) -> Result<Vec<Category>, RequestError> {
    let mut categories = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.as_str().ok_or(RequestError::ComplexityEntryNotString)?;
        if let Some(category) = Category::from_tag(tag) {
            categories.push(category);
        }
    }
    Ok(categories)
}
