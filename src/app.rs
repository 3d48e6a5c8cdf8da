// src/app.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{generation_panic, send_panic};
use crate::handlers::health::health;
use crate::handlers::password::{generate_password, send_password};
use crate::mail::EmailNotifier;

/// Read-only state shared by the password handlers
pub struct AppState {
    pub notifier: EmailNotifier,
    pub max_password_length: usize,
}

impl AppState {
    pub fn new(notifier: EmailNotifier, max_password_length: usize) -> Self {
        Self {
            notifier,
            max_password_length,
        }
    }
}

/// Password routes, each served with and without the trailing slash
pub fn password_routes(state: Arc<AppState>) -> Router {
    let generate = post(generate_password).layer(CatchPanicLayer::custom(generation_panic));
    let send = post(send_password).layer(CatchPanicLayer::custom(send_panic));

    Router::new()
        .route("/generate-password/", generate.clone())
        .route("/generate-password", generate)
        .route("/send-password-to-email/", send.clone())
        .route("/send-password-to-email", send)
        .with_state(state)
}

/// Browser access from the frontend; any origin when none is configured
fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let origin = match frontend_url {
        None => AllowOrigin::from(Any),
        Some(url) => match url.parse::<HeaderValue>() {
            Ok(origin) => AllowOrigin::exact(origin),
            Err(_) => {
                tracing::warn!(url, "FRONTEND_URL is not a valid origin, CORS disabled");
                AllowOrigin::list(Vec::<HeaderValue>::new())
            }
        },
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Builds the complete application
pub fn build_router(state: Arc<AppState>, frontend_url: Option<&str>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(password_routes(state))
        .layer(cors_layer(frontend_url))
        // Global tracing middleware
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use lambda_http::tower::ServiceExt; // for oneshot
    use serde_json::{Value, json};

    use crate::config::{MailConfig, TransportKind};
    use crate::mail::MailTransport;
    use crate::mail::testing::{FailingTransport, PanickingTransport, RecordingTransport};

    fn mail_config(fail_silently: bool) -> MailConfig {
        MailConfig {
            from_address: "no-reply@fortifykey.app".to_string(),
            product_name: "fortifykey".to_string(),
            transport: TransportKind::Log,
            fail_silently,
        }
    }

    fn app_with(transport: Arc<dyn MailTransport>, fail_silently: bool) -> Router {
        let notifier = EmailNotifier::new(mail_config(fail_silently), transport);
        build_router(Arc::new(AppState::new(notifier, 4096)), None)
    }

    fn test_app() -> Router {
        app_with(Arc::new(RecordingTransport::default()), true)
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .uri(uri)
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_with_defaults() {
        let (status, body) = post_json(test_app(), "/generate-password/", "{}").await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "password created successfully");
        assert_eq!(body["status"], "success");
        assert_eq!(body["password"].as_str().unwrap().chars().count(), 12);
    }

    #[tokio::test]
    async fn test_generate_uppercase_only() {
        let (status, body) = post_json(
            test_app(),
            "/generate-password/",
            r#"{"length": 16, "complexity": ["uppercase"]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let password = body["password"].as_str().unwrap();
        assert_eq!(password.len(), 16);
        assert!(password.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[tokio::test]
    async fn test_generate_without_trailing_slash_or_body() {
        let (status, body) = post_json(test_app(), "/generate-password", "").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["password"].as_str().unwrap().chars().count(), 12);
    }

    #[tokio::test]
    async fn test_generate_rejects_non_integer_length() {
        let (status, body) =
            post_json(test_app(), "/generate-password/", r#"{"length": "abc"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid input" }));
    }

    #[tokio::test]
    async fn test_generate_rejects_non_list_complexity() {
        let (status, body) =
            post_json(test_app(), "/generate-password/", r#"{"complexity": "math"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid input" }));
    }

    #[tokio::test]
    async fn test_generate_rejects_unrecognized_tags_only() {
        let (status, body) = post_json(
            test_app(),
            "/generate-password/",
            r#"{"complexity": ["cyrillic"]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid input" }));
    }

    #[tokio::test]
    async fn test_generate_rejects_malformed_json() {
        let (status, body) = post_json(test_app(), "/generate-password/", "{length").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid input" }));
    }

    #[tokio::test]
    async fn test_generate_zero_length() {
        let (status, body) =
            post_json(test_app(), "/generate-password/", r#"{"length": 0}"#).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["password"], "");
    }

    #[tokio::test]
    async fn test_send_rejects_invalid_email() {
        let (status, body) = post_json(
            test_app(),
            "/send-password-to-email/",
            r#"{"email": "not-an-email", "password": "x"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Something went wrong. Please retry.");
        assert_eq!(body["data"]["email"], json!(["Enter a valid email address."]));
    }

    #[tokio::test]
    async fn test_send_rejects_missing_fields() {
        let (status, body) = post_json(test_app(), "/send-password-to-email/", "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["data"]["email"], json!(["This field is required."]));
        assert_eq!(body["data"]["password"], json!(["This field is required."]));
    }

    #[tokio::test]
    async fn test_send_rejects_malformed_json() {
        let (status, body) = post_json(test_app(), "/send-password-to-email/", "{email").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "fail");
        assert!(body["data"]["non_field_errors"].is_array());
    }

    #[tokio::test]
    async fn test_send_success_dispatches_email() {
        let transport = Arc::new(RecordingTransport::default());
        let app = app_with(transport.clone(), true);

        let (status, body) = post_json(
            app,
            "/send-password-to-email/",
            r#"{"email": "user@example.com", "password": "Xy7!pq"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "message": "Password sent to email successfully", "status": "success" })
        );
        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "user@example.com");
        assert!(sent[0].body.contains("Xy7!pq"));
    }

    #[tokio::test]
    async fn test_send_succeeds_when_delivery_fails_silently() {
        let app = app_with(Arc::new(FailingTransport), true);
        let (status, body) = post_json(
            app,
            "/send-password-to-email/",
            r#"{"email": "user@example.com", "password": "Xy7!pq"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
    }

    #[tokio::test]
    async fn test_send_reports_delivery_failure_when_configured() {
        let app = app_with(Arc::new(FailingTransport), false);
        let (status, body) = post_json(
            app,
            "/send-password-to-email",
            r#"{"email": "user@example.com", "password": "Xy7!pq"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "message": "An error occurred: mail transport failed to deliver the message",
                "status": "error"
            })
        );
    }

    #[tokio::test]
    async fn test_send_coerces_numeric_password() {
        let transport = Arc::new(RecordingTransport::default());
        let app = app_with(transport.clone(), true);
        let (status, _) = post_json(
            app,
            "/send-password-to-email/",
            r#"{"email": "user@example.com", "password": 12345}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(transport.sent()[0].body.contains(": 12345."));
    }

    #[tokio::test]
    async fn test_send_reports_wrongly_typed_field() {
        let (status, body) = post_json(
            test_app(),
            "/send-password-to-email/",
            r#"{"email": 42, "password": "x"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "data": { "email": ["Enter a valid email address."] },
                "message": "Something went wrong. Please retry.",
                "status": "fail"
            })
        );
    }

    #[tokio::test]
    async fn test_send_rejects_non_string_password_without_echoing_it() {
        let (status, body) = post_json(
            test_app(),
            "/send-password-to-email/",
            r#"{"email": "user@example.com", "password": {"secret": "hunter2"}}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["data"], json!({ "password": ["Not a valid string."] }));
        assert!(!body.to_string().contains("hunter2"));
    }

    #[tokio::test]
    async fn test_send_panic_becomes_500() {
        let app = app_with(Arc::new(PanickingTransport), true);
        let (status, body) = post_json(
            app,
            "/send-password-to-email/",
            r#"{"email": "user@example.com", "password": "Xy7!pq"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "message": "An error occurred: unexpected internal failure",
                "status": "error"
            })
        );
    }

    #[tokio::test]
    async fn test_generated_password_round_trips_to_send() {
        let transport = Arc::new(RecordingTransport::default());
        let app = app_with(transport.clone(), true);

        let (_, generated) = post_json(
            app.clone(),
            "/generate-password/",
            r#"{"length": 24, "complexity": ["uppercase", "special", "emojis", "math"]}"#,
        )
        .await;
        let password = generated["password"].as_str().unwrap().to_string();

        let payload = json!({ "email": "user@example.com", "password": password }).to_string();
        let (status, _) = post_json(app, "/send-password-to-email/", &payload).await;

        assert_eq!(status, StatusCode::OK);
        assert!(transport.sent()[0].body.contains(&password));
    }
}
