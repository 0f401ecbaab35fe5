//! Batch reconciliation for partner sync requests.

use std::sync::Arc;

use tracing::{info, warn};

use carehub_core::error::AppError;
use carehub_core::result::AppResult;
use carehub_core::types::Cpf;
use carehub_database::repositories::appointment::{AppointmentPatch, AppointmentRepository};
use carehub_database::repositories::consent::ConsentRepository;
use carehub_database::repositories::document::{DocumentDraft, DocumentRepository};
use carehub_database::repositories::exam::{ExamPatch, ExamRepository};
use carehub_database::repositories::medication::{MedicationPatch, MedicationRepository};
use carehub_database::repositories::patient::PatientRepository;
use carehub_entity::appointment::{Appointment, AppointmentKey};
use carehub_entity::document::ClinicalDocument;
use carehub_entity::exam::{Exam, ExamKey};
use carehub_entity::medication::{Medication, MedicationKey};
use carehub_entity::partner::Partner;
use carehub_entity::patient::Patient;

use super::outcome::SyncOutcome;
use super::records::{SyncedAppointment, SyncedDocument, SyncedExam, SyncedMedication};

/// Reconciles partner batches into the store, one patient per call.
///
/// Records inside a batch are processed sequentially in input order. A
/// record that fails persistence is logged and skipped — the batch still
/// succeeds with counts covering the records that landed, because the
/// partner re-sends the full batch on its next sync cycle anyway.
#[derive(Debug, Clone)]
pub struct SyncService {
    patients: Arc<PatientRepository>,
    consents: Arc<ConsentRepository>,
    appointments: Arc<AppointmentRepository>,
    medications: Arc<MedicationRepository>,
    exams: Arc<ExamRepository>,
    documents: Arc<DocumentRepository>,
}

impl SyncService {
    /// Create a new sync service.
    pub fn new(
        patients: Arc<PatientRepository>,
        consents: Arc<ConsentRepository>,
        appointments: Arc<AppointmentRepository>,
        medications: Arc<MedicationRepository>,
        exams: Arc<ExamRepository>,
        documents: Arc<DocumentRepository>,
    ) -> Self {
        Self {
            patients,
            consents,
            appointments,
            medications,
            exams,
            documents,
        }
    }

    /// Resolve the target patient and enforce the consent gate.
    ///
    /// Fails closed: no consent row, a negative one, or a revoked one all
    /// reject the request before any write happens.
    async fn resolve_authorized_patient(
        &self,
        partner: &Partner,
        cpf: &Cpf,
    ) -> AppResult<Patient> {
        let patient = self.patients.find_by_cpf(cpf).await?.ok_or_else(|| {
            AppError::not_found("No patient matches the given CPF").with_code("PATIENT_NOT_FOUND")
        })?;

        let consent = self.consents.find_between(patient.id, partner.id).await?;
        match consent {
            Some(c) if c.is_effective() => Ok(patient),
            _ => Err(AppError::authorization(
                "Patient has not granted consent to this partner",
            )
            .with_code("CONSENT_REQUIRED")),
        }
    }

    /// Reconcile a batch of appointments.
    pub async fn sync_appointments(
        &self,
        partner: &Partner,
        cpf: &Cpf,
        records: Vec<SyncedAppointment>,
    ) -> AppResult<SyncOutcome<Appointment>> {
        let patient = self.resolve_authorized_patient(partner, cpf).await?;

        let mut outcome = SyncOutcome::default();
        for record in records {
            let key = AppointmentKey::new(patient.id, &record.doctor_name, record.date, record.time);
            let patch = AppointmentPatch {
                specialty: record.specialty,
                appointment_type: record.appointment_type,
                location: record.location,
                notes: record.notes,
            };

            match self.appointments.upsert_synced(&key, &patch, partner.id).await {
                Ok(upserted) => outcome.absorb(upserted),
                Err(e) => warn!(
                    partner = %partner.name,
                    doctor = %key.doctor_name,
                    error = %e,
                    "Skipping appointment record"
                ),
            }
        }

        info!(
            partner = %partner.name,
            inserted = outcome.inserted,
            updated = outcome.updated,
            "Appointments synchronized"
        );
        Ok(outcome)
    }

    /// Reconcile a batch of medications, including their schedule times.
    pub async fn sync_medications(
        &self,
        partner: &Partner,
        cpf: &Cpf,
        records: Vec<SyncedMedication>,
    ) -> AppResult<SyncOutcome<Medication>> {
        let patient = self.resolve_authorized_patient(partner, cpf).await?;

        let mut outcome = SyncOutcome::default();
        for record in records {
            let key = MedicationKey::new(patient.id, &record.name, &record.dosage);
            let patch = MedicationPatch {
                frequency: record.frequency,
                instructions: record.instructions,
                start_date: record.start_date,
                end_date: record.end_date,
            };

            let medication_id = match self.medications.upsert_synced(&key, &patch, partner.id).await
            {
                Ok(upserted) => {
                    let id = upserted.record.id;
                    outcome.absorb(upserted);
                    id
                }
                Err(e) => {
                    warn!(
                        partner = %partner.name,
                        medication = %key.name,
                        error = %e,
                        "Skipping medication record"
                    );
                    continue;
                }
            };

            for time in record.schedule_times {
                if let Err(e) = self
                    .medications
                    .upsert_schedule_time(medication_id, time)
                    .await
                {
                    warn!(
                        medication_id = %medication_id,
                        time = %time,
                        error = %e,
                        "Skipping schedule entry"
                    );
                }
            }
        }

        info!(
            partner = %partner.name,
            inserted = outcome.inserted,
            updated = outcome.updated,
            "Medications synchronized"
        );
        Ok(outcome)
    }

    /// Reconcile a batch of exams.
    pub async fn sync_exams(
        &self,
        partner: &Partner,
        cpf: &Cpf,
        records: Vec<SyncedExam>,
    ) -> AppResult<SyncOutcome<Exam>> {
        let patient = self.resolve_authorized_patient(partner, cpf).await?;

        let mut outcome = SyncOutcome::default();
        for record in records {
            let key = ExamKey::new(patient.id, &record.name, record.exam_date);
            let patch = ExamPatch {
                exam_type: record.exam_type,
                result_summary: record.result_summary,
                file_url: record.file_url,
            };

            match self.exams.upsert_synced(&key, &patch, partner.id).await {
                Ok(upserted) => outcome.absorb(upserted),
                Err(e) => warn!(
                    partner = %partner.name,
                    exam = %key.name,
                    error = %e,
                    "Skipping exam record"
                ),
            }
        }

        info!(
            partner = %partner.name,
            inserted = outcome.inserted,
            updated = outcome.updated,
            "Exams synchronized"
        );
        Ok(outcome)
    }

    /// Append a batch of clinical documents.
    pub async fn sync_documents(
        &self,
        partner: &Partner,
        cpf: &Cpf,
        records: Vec<SyncedDocument>,
    ) -> AppResult<SyncOutcome<ClinicalDocument>> {
        let patient = self.resolve_authorized_patient(partner, cpf).await?;

        let mut outcome = SyncOutcome::default();
        for record in records {
            let draft = DocumentDraft {
                title: record.title,
                document_type: record.document_type,
                document_date: record.document_date,
                file_url: record.file_url,
                description: record.description,
            };

            match self.documents.insert_synced(patient.id, &draft, partner.id).await {
                Ok(document) => outcome.absorb_insert(document),
                Err(e) => warn!(
                    partner = %partner.name,
                    title = %draft.title,
                    error = %e,
                    "Skipping document record"
                ),
            }
        }

        info!(
            partner = %partner.name,
            inserted = outcome.inserted,
            "Documents synchronized"
        );
        Ok(outcome)
    }
}
