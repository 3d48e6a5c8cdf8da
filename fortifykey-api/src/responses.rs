use serde::{Deserialize, Serialize};

use crate::result::ResponseStatus;

pub const PASSWORD_CREATED: &str = "password created successfully";
pub const PASSWORD_SENT: &str = "Password sent to email successfully";

/// 201 body of `POST /generate-password/`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeneratePasswordResponse {
    pub password: String,
    pub message: String,
    pub status: ResponseStatus,
}

impl GeneratePasswordResponse {
    pub fn new(password: String) -> Self {
        Self {
            password,
            message: PASSWORD_CREATED.to_string(),
            status: ResponseStatus::Success,
        }
    }
}

/// 200 body of `POST /send-password-to-email/`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SendPasswordResponse {
    pub message: String,
    pub status: ResponseStatus,
}

impl Default for SendPasswordResponse {
    fn default() -> Self {
        Self {
            message: PASSWORD_SENT.to_string(),
            status: ResponseStatus::Success,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}
