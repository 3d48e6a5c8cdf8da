use std::sync::Mutex;

use async_trait::async_trait;

use super::{DeliveryError, MailTransport, OutgoingEmail};

/// Keeps every message instead of sending it
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingTransport {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Rejects every message
pub struct FailingTransport;

#[async_trait]
impl MailTransport for FailingTransport {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), DeliveryError> {
        Err(DeliveryError::Transport("connection refused".to_string()))
    }
}

/// Panics inside `send`, standing in for a bug in a transport
pub struct PanickingTransport;

#[async_trait]
impl MailTransport for PanickingTransport {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), DeliveryError> {
        panic!("transport exploded")
    }
}
