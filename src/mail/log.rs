use async_trait::async_trait;

use super::{DeliveryError, MailTransport, OutgoingEmail};

/// Development transport: logs the envelope, never the body
pub struct LogTransport;

#[async_trait]
impl MailTransport for LogTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        tracing::info!(
            from = %email.from,
            to = %email.to,
            subject = %email.subject,
            "📧 Mail not sent (log transport)"
        );
        Ok(())
    }
}
