use async_trait::async_trait;
use lettre::{
    message::MultiPart, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info};

use super::{credential_is_well_formed, DispatchReceipt, Dispatcher, EmailError, OutboundEmail};
use crate::config::EmailConfig;

/// Delivers through the provider's SMTP relay (SendGrid: username
/// `apikey`, password = the API key).
pub struct SmtpDispatcher {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    api_key: String,
}

impl SmtpDispatcher {
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let creds = Credentials::new("apikey".to_string(), config.api_key.clone());
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| EmailError::Configuration(format!("smtp relay setup: {e}")))?
            .port(config.smtp_port)
            .credentials(creds)
            .build();

        Ok(Self {
            mailer,
            api_key: config.api_key.clone(),
        })
    }

    fn build_message(email: &OutboundEmail) -> Result<Message, EmailError> {
        let build = || -> Result<Message, anyhow::Error> {
            Ok(Message::builder()
                .from(email.from.parse()?)
                .reply_to(email.reply_to.parse()?)
                .to(email.to.parse()?)
                .subject(&email.subject)
                .multipart(MultiPart::alternative_plain_html(
                    email.text.clone(),
                    email.html.clone(),
                ))?)
        };

        build().map_err(|e| EmailError::Dispatch(format!("message build: {e}")))
    }
}

#[async_trait]
impl Dispatcher for SmtpDispatcher {
    async fn dispatch(&self, email: &OutboundEmail) -> Result<DispatchReceipt, EmailError> {
        // Refuse before any transport work when the credential cannot be
        // valid; distinct from a provider failure.
        if !credential_is_well_formed(&self.api_key) {
            return Err(EmailError::Configuration(
                "provider API key is missing or malformed".to_string(),
            ));
        }

        let message = Self::build_message(email)?;

        match self.mailer.send(message).await {
            Ok(response) => {
                let message_id = response.message().collect::<Vec<_>>().join(" ");
                info!(to = %email.to, message_id = %message_id, "contact email delivered");
                Ok(DispatchReceipt { message_id })
            }
            Err(e) => {
                error!(to = %email.to, error = %e, "smtp delivery failed");
                Err(EmailError::Dispatch(e.to_string()))
            }
        }
    }
}
