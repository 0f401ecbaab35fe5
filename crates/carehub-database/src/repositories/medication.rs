//! Medication and schedule repository implementation.

use chrono::{NaiveDate, NaiveTime};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use carehub_core::error::{AppError, ErrorKind};
use carehub_core::result::AppResult;
use carehub_entity::medication::{Medication, MedicationKey};

use super::Upserted;

/// Payload fields written alongside a medication's natural key.
#[derive(Debug, Clone, Default)]
pub struct MedicationPatch {
    /// Frequency description.
    pub frequency: String,
    /// Administration instructions.
    pub instructions: Option<String>,
    /// First day of the treatment.
    pub start_date: Option<NaiveDate>,
    /// Last day of the treatment.
    pub end_date: Option<NaiveDate>,
}

#[derive(FromRow)]
struct MedicationUpsertRow {
    #[sqlx(flatten)]
    record: Medication,
    was_inserted: bool,
}

/// Joined row for reminder dispatch: a pending dose plus medication and
/// user context.
#[derive(Debug, Clone, FromRow)]
pub struct DueScheduleCandidate {
    /// Schedule-entry identifier.
    pub schedule_id: Uuid,
    /// Time of day the dose is due.
    pub time_of_day: NaiveTime,
    /// Medication name for the message template.
    pub medication_name: String,
    /// Dosage for the message template.
    pub dosage: String,
    /// The portal user to notify.
    pub user_id: Uuid,
}

/// Repository for medication reconciliation and reminder queries.
#[derive(Debug, Clone)]
pub struct MedicationRepository {
    pool: PgPool,
}

impl MedicationRepository {
    /// Create a new medication repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reconcile one synced medication by natural key.
    pub async fn upsert_synced(
        &self,
        key: &MedicationKey,
        patch: &MedicationPatch,
        partner_id: Uuid,
    ) -> AppResult<Upserted<Medication>> {
        let row = sqlx::query_as::<_, MedicationUpsertRow>(
            "INSERT INTO medications \
                 (patient_id, name, dosage, frequency, instructions, \
                  start_date, end_date, source_partner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (patient_id, name, dosage) \
             DO UPDATE SET \
                 frequency = EXCLUDED.frequency, \
                 instructions = EXCLUDED.instructions, \
                 start_date = EXCLUDED.start_date, \
                 end_date = EXCLUDED.end_date, \
                 source_partner_id = EXCLUDED.source_partner_id, \
                 updated_at = NOW() \
             RETURNING *, (xmax = 0) AS was_inserted",
        )
        .bind(key.patient_id)
        .bind(&key.name)
        .bind(&key.dosage)
        .bind(&patch.frequency)
        .bind(&patch.instructions)
        .bind(patch.start_date)
        .bind(patch.end_date)
        .bind(partner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to upsert medication", e)
        })?;

        Ok(Upserted {
            record: row.record,
            inserted: row.was_inserted,
        })
    }

    /// Ensure a schedule entry exists for a dose time.
    ///
    /// Existing entries are left untouched so a resync never clears a
    /// patient's `taken` state.
    pub async fn upsert_schedule_time(
        &self,
        medication_id: Uuid,
        time_of_day: NaiveTime,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO medication_schedules (medication_id, time_of_day) \
             VALUES ($1, $2) \
             ON CONFLICT (medication_id, time_of_day) DO NOTHING",
        )
        .bind(medication_id)
        .bind(time_of_day)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to upsert schedule entry", e)
        })?;
        Ok(())
    }

    /// Pending dose times for treatments current on the given date,
    /// joined with medication and user context for the dispatcher.
    pub async fn find_due_schedule_candidates(
        &self,
        on_date: NaiveDate,
    ) -> AppResult<Vec<DueScheduleCandidate>> {
        sqlx::query_as::<_, DueScheduleCandidate>(
            "SELECT ms.id AS schedule_id, ms.time_of_day, \
                    m.name AS medication_name, m.dosage, p.user_id \
             FROM medication_schedules ms \
             JOIN medications m ON m.id = ms.medication_id \
             JOIN patients p ON p.id = m.patient_id \
             WHERE m.active = TRUE \
               AND (m.end_date IS NULL OR m.end_date >= $1) \
               AND ms.taken = FALSE \
             ORDER BY ms.time_of_day",
        )
        .bind(on_date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list due schedules", e)
        })
    }

    /// Fresh read of a schedule entry's `taken` flag.
    ///
    /// `None` means the entry disappeared since the candidate query;
    /// callers treat that the same as taken.
    pub async fn is_schedule_taken(&self, schedule_id: Uuid) -> AppResult<Option<bool>> {
        sqlx::query_scalar::<_, bool>("SELECT taken FROM medication_schedules WHERE id = $1")
            .bind(schedule_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to re-check schedule", e)
            })
    }
}
