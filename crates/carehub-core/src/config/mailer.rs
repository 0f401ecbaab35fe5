//! SMTP mailer configuration.

use serde::{Deserialize, Serialize};

/// SMTP transport settings for the best-effort admin mailer.
///
/// When `enabled` is false the notifier skips the email channel entirely
/// and only writes in-app notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    /// Whether email delivery is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// SMTP relay host.
    #[serde(default = "default_host")]
    pub host: String,
    /// SMTP relay port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// SMTP username.
    #[serde(default)]
    pub username: String,
    /// SMTP password.
    #[serde(default)]
    pub password: String,
    /// From address for outgoing mail.
    #[serde(default = "default_from")]
    pub from_address: String,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: default_host(),
            port: default_port(),
            username: String::new(),
            password: String::new(),
            from_address: default_from(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    587
}

fn default_from() -> String {
    "CareHub <no-reply@carehub.local>".to_string()
}
