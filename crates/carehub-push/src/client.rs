//! Push provider client.

use chrono::Utc;
use tracing::debug;

use carehub_core::config::push::PushConfig;
use carehub_core::error::AppError;
use carehub_core::result::AppResult;

use crate::credentials::ServiceAccountKey;
use crate::message::PushMessage;
use crate::token::{AssertionClaims, exchange_assertion, sign_assertion};

/// An authorized messaging session: one per dispatcher run.
#[derive(Debug, Clone)]
pub struct PushSession {
    /// Bearer access token minted for this run.
    pub access_token: String,
    /// Project the messaging endpoint is scoped to.
    pub project_id: String,
}

/// Client for the push-messaging HTTP API.
///
/// Credentials are resolved lazily so that a misconfigured deployment
/// fails the dispatcher run (a 500 to the trigger caller) rather than
/// refusing to boot the whole server.
#[derive(Debug, Clone)]
pub struct PushProvider {
    config: PushConfig,
    http: reqwest::Client,
}

impl PushProvider {
    /// Create a new provider client.
    pub fn new(config: PushConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Mint an access token for one dispatcher run.
    ///
    /// Builds the RS256 assertion, signs it with the service-account key,
    /// and exchanges it at the OAuth token endpoint. Any failure here is
    /// fatal for the run.
    pub async fn authorize(&self) -> AppResult<PushSession> {
        let key = ServiceAccountKey::from_config(&self.config)?;

        let claims =
            AssertionClaims::new(&key, &self.config.token_uri, &self.config.scope, Utc::now());
        let assertion = sign_assertion(&claims, &key.private_key)?;

        let token = exchange_assertion(&self.http, &self.config.token_uri, &assertion).await?;
        debug!(project_id = %key.project_id, "Minted push access token");

        Ok(PushSession {
            access_token: token.access_token,
            project_id: key.project_id,
        })
    }

    /// Send one message. A non-success response is an error for this
    /// message only; callers decide whether to continue.
    pub async fn send(&self, session: &PushSession, message: &PushMessage) -> AppResult<()> {
        let url = format!(
            "{}/v1/projects/{}/messages:send",
            self.config.messaging_base_url, session.project_id
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&session.access_token)
            .json(&message.to_payload())
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Push send failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "Push send rejected ({status}): {body}"
            )));
        }

        Ok(())
    }
}
