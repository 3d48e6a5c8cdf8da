use std::env;
use std::sync::Arc;

mod app;
mod config;
mod error;
mod extractors;
mod handlers;
mod mail;
mod password;
mod response;

use app::{AppState, build_router};
use config::Config;
use mail::EmailNotifier;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Defaults when RUST_LOG is not set
        tracing_subscriber::EnvFilter::new("info,fortifykey=debug,hyper_util=warn,tower_http=info")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// ----------------- Main -----------------

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    setup_logging();
    tracing::info!("Starting fortifykey...");

    let config = Config::from_env()?;
    tracing::info!(
        environment = config.environment.as_str(),
        max_password_length = config.max_password_length,
        "Configuration ready"
    );

    let transport = mail::transport_from_config(&config.mail).await;
    let notifier = EmailNotifier::new(config.mail.clone(), transport);
    let state = Arc::new(AppState::new(notifier, config.max_password_length));
    let app = build_router(state, config.frontend_url.as_deref());

    if env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok() {
        tracing::info!("Running in Lambda mode");
        lambda_http::run(app).await
    } else {
        tracing::info!("Running in local HTTP server mode");
        let addr = format!("{}:{}", config.server_host, config.server_port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("🚀 Server running at http://{}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
