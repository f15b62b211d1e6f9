use tracing::info;

use crate::domain::{
    common::{MailConfig, entities::app_errors::CoreError},
    notification::{
        ports::EmailSender,
        value_objects::{EmailMessage, ReservationNotice},
    },
};

/// Renders reservation emails and writes them to the log instead of delivering them.
#[derive(Debug, Clone)]
pub struct LogMailer {
    sender: String,
}

impl LogMailer {
    pub fn new(config: MailConfig) -> Self {
        Self {
            sender: config.sender,
        }
    }

    fn deliver(&self, message: EmailMessage) -> Result<(), CoreError> {
        if message.to.trim().is_empty() {
            return Err(CoreError::Invalid(
                "reservation has no customer email".to_string(),
            ));
        }

        info!(
            from = %message.from,
            to = %message.to,
            subject = %message.subject,
            "email queued:\n{}",
            message.body
        );

        Ok(())
    }
}

impl EmailSender for LogMailer {
    async fn send_reservation_confirmation(
        &self,
        notice: ReservationNotice,
    ) -> Result<(), CoreError> {
        self.deliver(notice.confirmation(&self.sender))
    }

    async fn send_reservation_cancellation(
        &self,
        notice: ReservationNotice,
    ) -> Result<(), CoreError> {
        self.deliver(notice.cancellation(&self.sender))
    }
}
