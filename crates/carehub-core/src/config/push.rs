//! Push-messaging provider configuration.

use serde::{Deserialize, Serialize};

/// Service-account and endpoint settings for the push-messaging provider.
///
/// Credentials may be supplied either as a JSON key file
/// (`service_account_file`) or inline (`client_email`, `private_key`,
/// `project_id`). Missing credentials are not an error at load time: the
/// dispatcher fails the run with a configuration error when it first needs
/// them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PushConfig {
    /// Path to a provider-issued service-account JSON key file.
    #[serde(default)]
    pub service_account_file: Option<String>,
    /// Service-account client email (inline credentials).
    #[serde(default)]
    pub client_email: Option<String>,
    /// PEM-encoded RSA private key (inline credentials).
    #[serde(default)]
    pub private_key: Option<String>,
    /// Provider project identifier.
    #[serde(default)]
    pub project_id: Option<String>,
    /// OAuth token endpoint.
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    /// Messaging API base URL.
    #[serde(default = "default_messaging_base_url")]
    pub messaging_base_url: String,
    /// OAuth scope requested for the access token.
    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

fn default_messaging_base_url() -> String {
    "https://fcm.googleapis.com".to_string()
}

fn default_scope() -> String {
    "https://www.googleapis.com/auth/firebase.messaging".to_string()
}
