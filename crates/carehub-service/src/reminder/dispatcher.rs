//! Scheduled reminder dispatch.

use std::sync::Arc;

use chrono::Local;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use carehub_core::result::AppResult;
use carehub_core::types::minutes_of_day;
use carehub_database::repositories::appointment::AppointmentRepository;
use carehub_database::repositories::delivery::DeliveryRepository;
use carehub_database::repositories::medication::MedicationRepository;
use carehub_database::repositories::subscription::SubscriptionRepository;
use carehub_entity::delivery::ReminderKind;
use carehub_push::{PushMessage, PushProvider, PushSession};

use super::window::{APPOINTMENT_WINDOW, MEDICATION_WINDOW};

/// One attempted send, reported back to the trigger caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchDetail {
    /// Reminder kind.
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    /// The user the message was addressed to.
    pub user_id: Uuid,
    /// Whether the provider accepted the message.
    pub success: bool,
}

/// Summary of one dispatcher run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchSummary {
    /// Messages the provider accepted.
    pub notifications_sent: u32,
    /// Every attempted send.
    pub details: Vec<DispatchDetail>,
}

/// Whether a pending dose should be reminded right now.
///
/// A dose already taken is never reminded, even inside the time window —
/// the flag is re-read immediately before sending to catch doses taken
/// since the candidate query.
pub fn should_remind_dose(taken: bool, now_minutes: i64, scheduled_minutes: i64) -> bool {
    !taken && MEDICATION_WINDOW.contains(now_minutes, scheduled_minutes)
}

/// The time-triggered reminder job.
///
/// Runs are assumed single-flight by the scheduler; the delivery ledger
/// additionally keeps each reminder at most-once per window even when
/// trigger runs overlap a window. Sends are sequential and awaited; a
/// failed send is recorded, never retried within the run, and never stops
/// the loop. Only infrastructure failures (credentials, token exchange,
/// candidate queries) abort the run.
#[derive(Debug, Clone)]
pub struct ReminderDispatcher {
    medications: Arc<MedicationRepository>,
    appointments: Arc<AppointmentRepository>,
    subscriptions: Arc<SubscriptionRepository>,
    deliveries: Arc<DeliveryRepository>,
    provider: Arc<PushProvider>,
}

impl ReminderDispatcher {
    /// Create a new dispatcher.
    pub fn new(
        medications: Arc<MedicationRepository>,
        appointments: Arc<AppointmentRepository>,
        subscriptions: Arc<SubscriptionRepository>,
        deliveries: Arc<DeliveryRepository>,
        provider: Arc<PushProvider>,
    ) -> Self {
        Self {
            medications,
            appointments,
            subscriptions,
            deliveries,
            provider,
        }
    }

    /// Execute one dispatch run.
    pub async fn run(&self) -> AppResult<DispatchSummary> {
        let now = Local::now();
        let today = now.date_naive();
        let now_minutes = minutes_of_day(now.time());

        let doses = self.medications.find_due_schedule_candidates(today).await?;
        let appointments = self.appointments.find_upcoming_on(today, now.time()).await?;

        // One token per run; failing here aborts before any send.
        let session = self.provider.authorize().await?;

        let mut summary = DispatchSummary::default();

        for dose in doses {
            let scheduled_minutes = minutes_of_day(dose.time_of_day);
            if !MEDICATION_WINDOW.contains(now_minutes, scheduled_minutes) {
                continue;
            }

            // Fresh read: a dose taken since the candidate query must not
            // be reminded. A vanished entry counts as taken.
            let taken = match self.medications.is_schedule_taken(dose.schedule_id).await {
                Ok(flag) => flag.unwrap_or(true),
                Err(e) => {
                    warn!(schedule_id = %dose.schedule_id, error = %e, "Skipping dose re-check");
                    continue;
                }
            };
            if !should_remind_dose(taken, now_minutes, scheduled_minutes) {
                continue;
            }

            if !self
                .claim(ReminderKind::Medication, dose.schedule_id, today)
                .await
            {
                continue;
            }

            let title = "Lembrete de medicação".to_string();
            let body = format!(
                "Está quase na hora de tomar {} ({}).",
                dose.medication_name, dose.dosage
            );
            self.send_to_user(
                &session,
                dose.user_id,
                ReminderKind::Medication,
                &title,
                &body,
                &mut summary,
            )
            .await;
        }

        for appointment in appointments {
            let scheduled_minutes = minutes_of_day(appointment.appointment_time);
            if !APPOINTMENT_WINDOW.contains(now_minutes, scheduled_minutes) {
                continue;
            }

            if !self
                .claim(ReminderKind::Appointment, appointment.id, today)
                .await
            {
                continue;
            }

            let title = "Lembrete de consulta".to_string();
            let body = format!(
                "Sua consulta com {} começa em cerca de 1 hora.",
                appointment.doctor_name
            );
            self.send_to_user(
                &session,
                appointment.user_id,
                ReminderKind::Appointment,
                &title,
                &body,
                &mut summary,
            )
            .await;
        }

        info!(
            sent = summary.notifications_sent,
            attempted = summary.details.len(),
            "Reminder dispatch complete"
        );
        Ok(summary)
    }

    /// Claim the reminder in the ledger. `false` means already sent this
    /// window (or the claim itself failed) and the reminder is skipped.
    async fn claim(&self, kind: ReminderKind, id: Uuid, today: chrono::NaiveDate) -> bool {
        match self.deliveries.try_claim(kind, id, today).await {
            Ok(claimed) => claimed,
            Err(e) => {
                warn!(kind = %kind, reminder_id = %id, error = %e, "Ledger claim failed");
                false
            }
        }
    }

    /// Send one message per registered device, sequentially. Failures are
    /// recorded and do not block the remaining devices or reminders.
    async fn send_to_user(
        &self,
        session: &PushSession,
        user_id: Uuid,
        kind: ReminderKind,
        title: &str,
        body: &str,
        summary: &mut DispatchSummary,
    ) {
        let subscriptions = match self.subscriptions.find_by_user(user_id).await {
            Ok(subs) => subs,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to load subscriptions");
                return;
            }
        };

        for subscription in subscriptions {
            let message = PushMessage {
                device_token: subscription.device_token,
                title: title.to_string(),
                body: body.to_string(),
            };

            let success = match self.provider.send(session, &message).await {
                Ok(()) => {
                    summary.notifications_sent += 1;
                    true
                }
                Err(e) => {
                    warn!(user_id = %user_id, kind = %kind, error = %e, "Push send failed");
                    false
                }
            };

            summary.details.push(DispatchDetail {
                kind,
                user_id,
                success,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 8 * 60; // 08:00

    #[test]
    fn taken_dose_is_never_reminded_inside_window() {
        assert!(!should_remind_dose(true, NOW, NOW + 10));
    }

    #[test]
    fn pending_dose_inside_window_is_reminded() {
        assert!(should_remind_dose(false, NOW, NOW + 15));
    }

    #[test]
    fn pending_dose_outside_window_is_not_reminded() {
        assert!(!should_remind_dose(false, NOW, NOW + 16));
    }

    #[test]
    fn detail_serializes_to_trigger_contract() {
        let detail = DispatchDetail {
            kind: ReminderKind::Medication,
            user_id: Uuid::nil(),
            success: true,
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["type"], "medication");
        assert_eq!(value["userId"], Uuid::nil().to_string());
        assert_eq!(value["success"], true);
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = DispatchSummary {
            notifications_sent: 2,
            details: Vec::new(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["notificationsSent"], 2);
        assert!(value["details"].as_array().unwrap().is_empty());
    }
}
