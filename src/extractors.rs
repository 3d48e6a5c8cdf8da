use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use fortifykey_api::FieldErrors;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that reads an empty body as `T::default()`.
///
/// Unlike `axum::Json` it does not insist on a `Content-Type` header, and the
/// rejection only carries a message so that each handler can shape its own
/// 400 response.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

/// Unreadable or unparseable request body.
///
/// Handlers take `Result<JsonBody<_>, BodyRejection>` and shape the 400
/// themselves. The `IntoResponse` fallback below always renders the
/// send-password `fail` body, which is the wrong shape for
/// `/generate-password/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRejection(pub String);

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        AppError::ValidationFailed(FieldErrors::non_field(self.0)).into_response()
    }
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| BodyRejection(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| BodyRejection(format!("JSON parse error - {e}")))
    }
}
