//! Storage-upgrade request fan-out.

use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use carehub_core::result::AppResult;
use carehub_database::repositories::notification::NotificationRepository;
use carehub_database::repositories::user::UserRepository;
use carehub_entity::user::PortalUser;

use super::mailer::Mailer;

/// A storage-upgrade or plan-change request raised from the portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageRequest {
    /// Identifier of the request row in the portal.
    pub request_id: String,
    /// Request kind (e.g. "storage_upgrade", "plan_change").
    pub request_type: String,
    /// The user who raised the request.
    pub user_id: String,
    /// The organization the request belongs to.
    #[serde(default)]
    pub organization_id: Option<String>,
    /// Requested additional storage in GB.
    #[serde(default, rename = "additionalGB")]
    pub additional_gb: Option<i64>,
    /// Monthly amount for the upgrade.
    #[serde(default)]
    pub monthly_amount: Option<f64>,
    /// Target plan name, for plan changes.
    #[serde(default)]
    pub plan_name: Option<String>,
    /// One-off amount, when applicable.
    #[serde(default)]
    pub amount: Option<f64>,
}

/// Per-admin delivery outcome across both channels.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelOutcome {
    /// The admin addressed.
    pub admin_email: String,
    /// Whether the in-app notification row was written.
    pub in_app: bool,
    /// Whether the email was handed to the SMTP relay.
    pub email: bool,
}

/// Fan-out totals returned to the caller.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FanoutReport {
    /// Admins that received an in-app notification.
    pub notified: u32,
    /// Admins that received an email.
    pub emailed: u32,
    /// Per-admin outcomes.
    pub outcomes: Vec<ChannelOutcome>,
}

/// Summarize settled delivery outcomes into totals.
pub fn summarize(outcomes: Vec<ChannelOutcome>) -> FanoutReport {
    let notified = outcomes.iter().filter(|o| o.in_app).count() as u32;
    let emailed = outcomes.iter().filter(|o| o.email).count() as u32;
    FanoutReport {
        notified,
        emailed,
        outcomes,
    }
}

/// Compose the admin-facing title and message for a request.
pub fn compose(request: &StorageRequest) -> (String, String) {
    let title = match request.request_type.as_str() {
        "plan_change" => "Solicitação de mudança de plano".to_string(),
        _ => "Solicitação de armazenamento adicional".to_string(),
    };

    let mut message = format!(
        "Pedido {} do usuário {}",
        request.request_id, request.user_id
    );
    if let Some(gb) = request.additional_gb {
        message.push_str(&format!(": +{gb} GB"));
    }
    if let Some(plan) = &request.plan_name {
        message.push_str(&format!(", plano {plan}"));
    }
    if let Some(monthly) = request.monthly_amount {
        message.push_str(&format!(", R$ {monthly:.2}/mês"));
    } else if let Some(amount) = request.amount {
        message.push_str(&format!(", R$ {amount:.2}"));
    }
    message.push('.');

    (title, message)
}

/// Notifies every super-admin about a storage request, in-app and by
/// email.
///
/// Each admin is an independent delivery task and each channel is
/// independently best-effort: a failed write or send is logged, recorded
/// in the report, and never surfaces to the caller. Only the initial
/// admin lookup can fail the operation.
#[derive(Debug)]
pub struct StorageRequestNotifier {
    users: Arc<UserRepository>,
    notifications: Arc<NotificationRepository>,
    mailer: Arc<Mailer>,
}

impl StorageRequestNotifier {
    /// Create a new notifier.
    pub fn new(
        users: Arc<UserRepository>,
        notifications: Arc<NotificationRepository>,
        mailer: Arc<Mailer>,
    ) -> Self {
        Self {
            users,
            notifications,
            mailer,
        }
    }

    /// Fan the request out to every super-admin.
    pub async fn notify_super_admins(&self, request: &StorageRequest) -> AppResult<FanoutReport> {
        let admins = self.users.find_super_admins().await?;

        let tasks = admins
            .into_iter()
            .map(|admin| self.deliver(admin, request));
        let outcomes = join_all(tasks).await;

        let report = summarize(outcomes);
        info!(
            request_id = %request.request_id,
            notified = report.notified,
            emailed = report.emailed,
            "Storage request fan-out complete"
        );
        Ok(report)
    }

    /// Deliver to one admin across both channels.
    async fn deliver(&self, admin: PortalUser, request: &StorageRequest) -> ChannelOutcome {
        let (title, message) = compose(request);
        let payload = serde_json::to_value(request).ok();

        let in_app = match self
            .notifications
            .create(
                admin.id,
                "storage_request",
                &title,
                &message,
                payload.as_ref(),
            )
            .await
        {
            Ok(_) => true,
            Err(e) => {
                warn!(admin = %admin.email, error = %e, "In-app notification failed");
                false
            }
        };

        let email = match self.mailer.send(&admin.email, &title, &message).await {
            Ok(sent) => sent,
            Err(e) => {
                warn!(admin = %admin.email, error = %e, "Notification email failed");
                false
            }
        };

        ChannelOutcome {
            admin_email: admin.email,
            in_app,
            email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> StorageRequest {
        StorageRequest {
            request_id: "req-42".to_string(),
            request_type: "storage_upgrade".to_string(),
            user_id: "user-7".to_string(),
            organization_id: None,
            additional_gb: Some(50),
            monthly_amount: Some(29.9),
            plan_name: None,
            amount: None,
        }
    }

    #[test]
    fn composes_upgrade_message() {
        let (title, message) = compose(&request());
        assert_eq!(title, "Solicitação de armazenamento adicional");
        assert!(message.contains("req-42"));
        assert!(message.contains("+50 GB"));
        assert!(message.contains("R$ 29.90/mês"));
    }

    #[test]
    fn composes_plan_change_title() {
        let mut req = request();
        req.request_type = "plan_change".to_string();
        req.plan_name = Some("Pro".to_string());
        let (title, message) = compose(&req);
        assert_eq!(title, "Solicitação de mudança de plano");
        assert!(message.contains("plano Pro"));
    }

    #[test]
    fn summarize_counts_channels_independently() {
        let outcomes = vec![
            ChannelOutcome {
                admin_email: "a@x.com".to_string(),
                in_app: true,
                email: false,
            },
            ChannelOutcome {
                admin_email: "b@x.com".to_string(),
                in_app: true,
                email: true,
            },
            ChannelOutcome {
                admin_email: "c@x.com".to_string(),
                in_app: false,
                email: false,
            },
        ];

        let report = summarize(outcomes);
        assert_eq!(report.notified, 2);
        assert_eq!(report.emailed, 1);
        assert_eq!(report.outcomes.len(), 3);
    }

    #[test]
    fn request_parses_camel_case_payload() {
        let raw = serde_json::json!({
            "requestId": "req-1",
            "requestType": "storage_upgrade",
            "userId": "user-1",
            "additionalGB": 10,
            "monthlyAmount": 9.9
        });
        let parsed: StorageRequest = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.request_id, "req-1");
        assert_eq!(parsed.additional_gb, Some(10));
    }
}
