//! Outbound email dispatch.
//!
//! The contact handler hands a fully composed [`OutboundEmail`] to a
//! [`Dispatcher`]; the SMTP implementation talks to the provider relay,
//! the mock logs and discards.

mod mock;
mod smtp;

pub use mock::MockDispatcher;
pub use smtp::SmtpDispatcher;

use std::sync::Arc;

use async_trait::async_trait;
use folio_contact::SanitizedSubmission;
use thiserror::Error;

use crate::config::EmailConfig;

#[derive(Error, Debug)]
pub enum EmailError {
    /// Credential absent or malformed; no transport attempt was made.
    #[error("email configuration error: {0}")]
    Configuration(String),

    /// The provider rejected the message or was unreachable.
    #[error("email dispatch error: {0}")]
    Dispatch(String),
}

/// A fully-formed message ready for delivery.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: String,
    pub from: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl OutboundEmail {
    /// Compose the notification email for a sanitized contact submission.
    pub fn contact(config: &EmailConfig, submission: &SanitizedSubmission) -> Self {
        let full_name = submission.full_name();

        let text = format!(
            "Name: {full_name}\nEmail: {email}\nPhone: {phone}\nMessage: {message}",
            email = submission.email,
            phone = submission.phone,
            message = submission.message,
        );

        let html = format!(
            "<h3>New contact form submission</h3>\n\
             <p><strong>Name:</strong> {full_name}</p>\n\
             <p><strong>Email:</strong> {email}</p>\n\
             <p><strong>Phone:</strong> {phone}</p>\n\
             <p><strong>Message:</strong><br>{message}</p>",
            email = submission.email,
            phone = submission.phone,
            message = submission.message,
        );

        Self {
            to: config.to_address.clone(),
            from: config.from_address.clone(),
            reply_to: submission.email.clone(),
            subject: format!("New contact form submission from {full_name}"),
            text,
            html,
        }
    }
}

/// Provider acknowledgement for a delivered message.
#[derive(Debug, Clone)]
pub struct DispatchReceipt {
    pub message_id: String,
}

#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, email: &OutboundEmail) -> Result<DispatchReceipt, EmailError>;
}

/// Select the dispatcher at startup from configuration.
pub fn from_config(config: &EmailConfig) -> Result<Arc<dyn Dispatcher>, EmailError> {
    if config.mock {
        Ok(Arc::new(MockDispatcher::new()))
    } else {
        Ok(Arc::new(SmtpDispatcher::new(config)?))
    }
}

/// SendGrid API keys are `SG.`-prefixed; anything else is refused before
/// any transport work.
pub fn credential_is_well_formed(api_key: &str) -> bool {
    api_key.len() > 3 && api_key.starts_with("SG.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_shape() {
        assert!(credential_is_well_formed("SG.abc123"));
        assert!(!credential_is_well_formed(""));
        assert!(!credential_is_well_formed("SG."));
        assert!(!credential_is_well_formed("sk_live_123"));
    }

    #[test]
    fn contact_email_embeds_sanitized_fields() {
        let config = EmailConfig::default();
        let submission = SanitizedSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "N/A".to_string(),
            message: "Hello, this is a test message.".to_string(),
        };

        let email = OutboundEmail::contact(&config, &submission);
        assert_eq!(email.subject, "New contact form submission from Jane Doe");
        assert_eq!(email.reply_to, "jane@example.com");
        assert!(email.text.contains("Phone: N/A"));
        assert!(email.html.contains("<strong>Email:</strong> jane@example.com"));
    }
}
