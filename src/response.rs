use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fortifykey_api::{AppResponse as ApiResponse, StatusCode as ApiStatusCode};
use serde::Serialize;

/// Backend wrapper for fortifykey-api's AppResponse that adds Axum integration.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::response::AppResponse;
///
/// AppResponse::created(GeneratePasswordResponse::new(password))
/// AppResponse::ok(SendPasswordResponse::default())
/// ```
pub struct AppResponse<T> {
    inner: ApiResponse<T>,
}

impl<T> AppResponse<T>
where
    T: Serialize,
{
    /// Creates a new response wrapping the API response
    pub fn new(inner: ApiResponse<T>) -> Self {
        Self { inner }
    }

    /// 200 OK with data
    pub fn ok(data: T) -> Self {
        Self::new(ApiResponse::ok(data))
    }

    /// 201 Created with data
    pub fn created(data: T) -> Self {
        Self::new(ApiResponse::created(data))
    }

    /// 400 Bad Request with data
    pub fn bad_request(data: T) -> Self {
        Self::new(ApiResponse::bad_request(data))
    }

    /// 500 Internal Server Error with data
    pub fn internal_server_error(data: T) -> Self {
        Self::new(ApiResponse::internal_server_error(data))
    }
}

/// Converts API StatusCode to Axum's StatusCode
fn convert_status(api_status: ApiStatusCode) -> StatusCode {
    match api_status {
        ApiStatusCode::Ok => StatusCode::OK,
        ApiStatusCode::Created => StatusCode::CREATED,
        ApiStatusCode::BadRequest => StatusCode::BAD_REQUEST,
        ApiStatusCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl<T> IntoResponse for AppResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (convert_status(self.inner.status), Json(self.inner.data)).into_response()
    }
}
