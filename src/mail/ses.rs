use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sesv2::Client;
use aws_sdk_sesv2::error::DisplayErrorContext;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};

use super::{DeliveryError, MailTransport, OutgoingEmail};

const CHARSET: &str = "UTF-8";

/// Sends plain-text mail through Amazon SES v2
pub struct SesTransport {
    client: Client,
}

impl SesTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the default AWS credential and region chain
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::new(Client::new(&config))
    }
}

fn text(data: &str) -> Result<Content, DeliveryError> {
    Content::builder()
        .data(data)
        .charset(CHARSET)
        .build()
        .map_err(|e| DeliveryError::InvalidMessage(e.to_string()))
}

fn content(email: &OutgoingEmail) -> Result<EmailContent, DeliveryError> {
    let message = Message::builder()
        .subject(text(&email.subject)?)
        .body(Body::builder().text(text(&email.body)?).build())
        .build();

    Ok(EmailContent::builder().simple(message).build())
}

#[async_trait]
impl MailTransport for SesTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        let output = self
            .client
            .send_email()
            .from_email_address(&email.from)
            .destination(Destination::builder().to_addresses(&email.to).build())
            .content(content(email)?)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(message_id = ?output.message_id(), "SES accepted message");
        Ok(())
    }
}
