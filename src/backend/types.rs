//! Typed models for the clinic backend endpoints
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ai::insight::ClinicalInsightRequest;

/// A registered patient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for registering a new patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A scheduled appointment for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub reason: String,
    pub status: String,
}

/// Payload for booking an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub scheduled_at: DateTime<Utc>,
    pub reason: String,
}

/// A stored clinical report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub title: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting or updating a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub patient_id: Uuid,
    pub title: String,
    pub summary: String,
}

/// Acknowledgement returned by delete endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub deleted: bool,
}

/// Aggregate usage counters for the whole clinic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatistics {
    pub total_patients: i64,
    pub total_reports: i64,
    pub total_analyses: i64,
    pub average_confidence: f64,
}

/// An X-ray image submitted for automated analysis, bytes as base64.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysisRequest {
    pub image: String,
    pub file_name: String,
    pub mime_type: String,
}

impl ImageAnalysisRequest {
    /// Build an analysis request from picked image bytes.
    pub fn from_picked(data: &[u8], name: &str, mime_type: &str) -> Self {
        Self {
            image: BASE64.encode(data),
            file_name: name.to_string(),
            mime_type: mime_type.to_string(),
        }
    }
}

/// Outcome of one automated X-ray analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub id: Uuid,
    pub cavity_count: u32,
    pub healthy_count: u32,
    pub confidence: f32,
    pub created_at: DateTime<Utc>,
}

impl AnalysisReport {
    /// Bridge this analysis result into an insight-generation request.
    pub fn to_insight_request(&self, doctor_name: &str, patient_name: &str) -> ClinicalInsightRequest {
        ClinicalInsightRequest {
            doctor_name: doctor_name.to_string(),
            patient_name: patient_name.to_string(),
            cavity_count: self.cavity_count,
            healthy_count: self.healthy_count,
            confidence: self.confidence,
        }
    }
}
