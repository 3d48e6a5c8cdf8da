use fortifykey_api::HealthResponse;

use crate::response::AppResponse;

/// GET /health
/// Simple healthcheck endpoint
pub async fn health() -> AppResponse<HealthResponse> {
    AppResponse::ok(HealthResponse {
        status: "ok".to_string(),
    })
}
