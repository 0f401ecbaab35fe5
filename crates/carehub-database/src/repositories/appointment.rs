//! Appointment repository implementation.

use chrono::{NaiveDate, NaiveTime};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use carehub_core::error::{AppError, ErrorKind};
use carehub_core::result::AppResult;
use carehub_entity::appointment::{Appointment, AppointmentKey};

use super::Upserted;

/// Payload fields written alongside an appointment's natural key.
#[derive(Debug, Clone, Default)]
pub struct AppointmentPatch {
    /// Doctor's specialty.
    pub specialty: Option<String>,
    /// Kind of appointment.
    pub appointment_type: Option<String>,
    /// Where the appointment takes place.
    pub location: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

#[derive(FromRow)]
struct AppointmentUpsertRow {
    #[sqlx(flatten)]
    record: Appointment,
    was_inserted: bool,
}

/// Joined row for reminder dispatch: appointment plus the owning user.
#[derive(Debug, Clone, FromRow)]
pub struct UpcomingAppointment {
    /// Appointment identifier.
    pub id: Uuid,
    /// Attending doctor's name.
    pub doctor_name: String,
    /// Appointment time of day.
    pub appointment_time: NaiveTime,
    /// The portal user to notify.
    pub user_id: Uuid,
}

/// Repository for appointment reconciliation and reminder queries.
#[derive(Debug, Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    /// Create a new appointment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reconcile one synced appointment by natural key.
    ///
    /// The unique index over (patient, doctor, date, time) turns this into
    /// a single statement: insert when the event is new, otherwise
    /// overwrite the payload fields in place. Identity fields and the
    /// locally-managed status are never touched on update.
    pub async fn upsert_synced(
        &self,
        key: &AppointmentKey,
        patch: &AppointmentPatch,
        partner_id: Uuid,
    ) -> AppResult<Upserted<Appointment>> {
        let row = sqlx::query_as::<_, AppointmentUpsertRow>(
            "INSERT INTO appointments \
                 (patient_id, doctor_name, appointment_date, appointment_time, \
                  specialty, appointment_type, location, notes, source_partner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (patient_id, doctor_name, appointment_date, appointment_time) \
             DO UPDATE SET \
                 specialty = EXCLUDED.specialty, \
                 appointment_type = EXCLUDED.appointment_type, \
                 location = EXCLUDED.location, \
                 notes = EXCLUDED.notes, \
                 source_partner_id = EXCLUDED.source_partner_id, \
                 updated_at = NOW() \
             RETURNING *, (xmax = 0) AS was_inserted",
        )
        .bind(key.patient_id)
        .bind(&key.doctor_name)
        .bind(key.date)
        .bind(key.time)
        .bind(&patch.specialty)
        .bind(&patch.appointment_type)
        .bind(&patch.location)
        .bind(&patch.notes)
        .bind(partner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to upsert appointment", e)
        })?;

        Ok(Upserted {
            record: row.record,
            inserted: row.was_inserted,
        })
    }

    /// Today's scheduled appointments whose time has not yet passed,
    /// joined with the user to notify.
    pub async fn find_upcoming_on(
        &self,
        date: NaiveDate,
        after: NaiveTime,
    ) -> AppResult<Vec<UpcomingAppointment>> {
        sqlx::query_as::<_, UpcomingAppointment>(
            "SELECT a.id, a.doctor_name, a.appointment_time, p.user_id \
             FROM appointments a \
             JOIN patients p ON p.id = a.patient_id \
             WHERE a.status = 'scheduled' \
               AND a.appointment_date = $1 \
               AND a.appointment_time >= $2 \
             ORDER BY a.appointment_time",
        )
        .bind(date)
        .bind(after)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list upcoming appointments", e)
        })
    }
}
