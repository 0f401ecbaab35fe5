//! Typed, validated sync records.
//!
//! The HTTP layer parses and validates partner payloads and converts them
//! into these types; from here on, dates and times are real values, not
//! strings.

use chrono::{NaiveDate, NaiveTime};

/// One appointment from a partner batch.
#[derive(Debug, Clone)]
pub struct SyncedAppointment {
    /// Attending doctor's name.
    pub doctor_name: String,
    /// Doctor's specialty.
    pub specialty: Option<String>,
    /// Appointment date.
    pub date: NaiveDate,
    /// Appointment time of day.
    pub time: NaiveTime,
    /// Kind of appointment.
    pub appointment_type: Option<String>,
    /// Where the appointment takes place.
    pub location: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// One medication from a partner batch.
#[derive(Debug, Clone)]
pub struct SyncedMedication {
    /// Medication name.
    pub name: String,
    /// Dosage description.
    pub dosage: String,
    /// Frequency description.
    pub frequency: String,
    /// Administration instructions.
    pub instructions: Option<String>,
    /// First day of the treatment.
    pub start_date: Option<NaiveDate>,
    /// Last day of the treatment.
    pub end_date: Option<NaiveDate>,
    /// Daily dose times, when the source provides them.
    pub schedule_times: Vec<NaiveTime>,
}

/// One exam from a partner batch.
#[derive(Debug, Clone)]
pub struct SyncedExam {
    /// Exam name.
    pub name: String,
    /// Exam category.
    pub exam_type: Option<String>,
    /// When the exam was performed.
    pub exam_date: NaiveDate,
    /// Short result summary.
    pub result_summary: Option<String>,
    /// Link to the full report.
    pub file_url: Option<String>,
}

/// One clinical document from a partner batch.
#[derive(Debug, Clone)]
pub struct SyncedDocument {
    /// Document title.
    pub title: String,
    /// Document category.
    pub document_type: Option<String>,
    /// When the document was issued.
    pub document_date: Option<NaiveDate>,
    /// Link to the stored file.
    pub file_url: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}
