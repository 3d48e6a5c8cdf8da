//! Best-effort delivery of generated passwords by email.
//!
//! [`EmailNotifier`] composes the message and hands it to a [`MailTransport`].
//! Whether a delivery failure reaches the caller is decided by
//! [`MailConfig::fail_silently`](crate::config::MailConfig).

pub mod log;
pub mod ses;
#[cfg(test)]
pub mod testing;

use std::sync::Arc;

use async_trait::async_trait;
use fortifykey_api::{FieldErrors, SendPasswordRequest};

use crate::config::{MailConfig, TransportKind};

pub use self::log::LogTransport;
pub use self::ses::SesTransport;

pub const SUBJECT: &str = "Your newly generated password";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// Detail stays out of `Display`, it may carry provider internals
    #[error("mail transport failed to deliver the message")]
    Transport(String),
    #[error("mail message could not be built")]
    InvalidMessage(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError>;
}

/// Builds the transport selected in the configuration
pub async fn transport_from_config(config: &MailConfig) -> Arc<dyn MailTransport> {
    match config.transport {
        TransportKind::Ses => Arc::new(SesTransport::from_env().await),
        TransportKind::Log => Arc::new(LogTransport),
    }
}

/// A validated `POST /send-password-to-email/` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailPasswordRequest {
    pub email: String,
    pub password: String,
}

impl TryFrom<SendPasswordRequest> for EmailPasswordRequest {
    type Error = FieldErrors;

    fn try_from(request: SendPasswordRequest) -> Result<Self, Self::Error> {
        let form = request.validated()?;
        match (form.email, form.password) {
            (Some(email), Some(password)) => Ok(Self { email, password }),
            _ => Err(FieldErrors::non_field("email and password are required")),
        }
    }
}

pub struct EmailNotifier {
    config: MailConfig,
    transport: Arc<dyn MailTransport>,
}

impl EmailNotifier {
    pub fn new(config: MailConfig, transport: Arc<dyn MailTransport>) -> Self {
        Self { config, transport }
    }

    fn compose(&self, email: &str, password: &str) -> OutgoingEmail {
        OutgoingEmail {
            from: self.config.from_address.clone(),
            to: email.to_string(),
            subject: SUBJECT.to_string(),
            body: format!(
                "Hi, This is your newly generated password from {}: {password}.",
                self.config.product_name
            ),
        }
    }

    /// Emails `password` to `email`.
    ///
    /// With `fail_silently` set, a delivery failure is logged and `Ok` is
    /// returned.
    pub async fn notify(&self, email: &str, password: &str) -> Result<(), DeliveryError> {
        let message = self.compose(email, password);

        match self.transport.send(&message).await {
            Ok(()) => {
                tracing::debug!("Password email handed to transport");
                Ok(())
            }
            Err(err) if self.config.fail_silently => {
                tracing::warn!(error = %err, detail = ?err, "Password email not delivered, ignoring");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
