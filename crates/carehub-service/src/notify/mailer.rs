//! SMTP mailer for the admin fan-out.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use carehub_core::config::mailer::MailerConfig;
use carehub_core::error::AppError;
use carehub_core::result::AppResult;

/// Thin wrapper over the SMTP transport.
///
/// When mail is disabled in configuration, `send` reports the message as
/// not sent without error, so the fan-out degrades to in-app only.
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: Mailbox,
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer")
            .field("enabled", &self.transport.is_some())
            .finish()
    }
}

impl Mailer {
    /// Build a mailer from configuration.
    pub fn new(config: &MailerConfig) -> AppResult<Self> {
        let from: Mailbox = config
            .from_address
            .parse()
            .map_err(|e| AppError::configuration(format!("Invalid from address: {e}")))?;

        if !config.enabled {
            return Ok(Self {
                transport: None,
                from,
            });
        }

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| AppError::configuration(format!("Invalid SMTP relay: {e}")))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport: Some(transport),
            from,
        })
    }

    /// Send one plain-text message. Returns `false` when mail is disabled.
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<bool> {
        let Some(transport) = &self.transport else {
            return Ok(false);
        };

        let to: Mailbox = to
            .parse()
            .map_err(|e| AppError::validation(format!("Invalid recipient address: {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| AppError::internal(format!("Failed to build email: {e}")))?;

        transport
            .send(message)
            .await
            .map_err(|e| AppError::external_service(format!("SMTP send failed: {e}")))?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_mailer_reports_not_sent() {
        let mailer = Mailer::new(&MailerConfig::default()).unwrap();
        let sent = mailer
            .send("admin@example.com", "subject", "body")
            .await
            .unwrap();
        assert!(!sent);
    }

    #[test]
    fn bad_from_address_is_a_configuration_error() {
        let config = MailerConfig {
            from_address: "not an address".to_string(),
            ..MailerConfig::default()
        };
        assert!(Mailer::new(&config).is_err());
    }
}
