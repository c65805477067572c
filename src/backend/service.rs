//! Typed calls for the clinic backend endpoints

use uuid::Uuid;

use crate::api::{ApiClient, ApiError};

use super::types::{
    AnalysisReport, Appointment, DeleteAck, ImageAnalysisRequest, NewAppointment, NewPatient,
    NewReport, Patient, Report, SystemStatistics,
};

/// Clinic backend surface over a shared [`ApiClient`].
///
/// Every call is one request; a failure is terminal for that call and
/// surfaces as [`ApiError`].
pub struct BackendService<'a> {
    api: &'a ApiClient,
}

impl<'a> BackendService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List every registered patient.
    pub async fn list_patients(&self) -> Result<Vec<Patient>, ApiError> {
        self.api.get("/api/v1/patients").await
    }

    /// Register a new patient.
    pub async fn create_patient(&self, patient: &NewPatient) -> Result<Patient, ApiError> {
        self.api.post("/api/v1/patients", Some(patient)).await
    }

    /// List the appointments of one patient.
    pub async fn patient_appointments(&self, patient_id: Uuid) -> Result<Vec<Appointment>, ApiError> {
        self.api
            .get(&format!("/api/v1/patients/{}/appointments", patient_id))
            .await
    }

    /// Book an appointment for one patient.
    pub async fn schedule_appointment(
        &self,
        patient_id: Uuid,
        appointment: &NewAppointment,
    ) -> Result<Appointment, ApiError> {
        self.api
            .post(
                &format!("/api/v1/patients/{}/appointments", patient_id),
                Some(appointment),
            )
            .await
    }

    /// List every stored report.
    pub async fn list_reports(&self) -> Result<Vec<Report>, ApiError> {
        self.api.get("/api/v1/reports").await
    }

    /// Submit a new report.
    pub async fn submit_report(&self, report: &NewReport) -> Result<Report, ApiError> {
        self.api.post("/api/v1/reports", Some(report)).await
    }

    /// Replace the contents of an existing report.
    pub async fn update_report(&self, report_id: Uuid, report: &NewReport) -> Result<Report, ApiError> {
        self.api
            .put(&format!("/api/v1/reports/{}", report_id), Some(report))
            .await
    }

    /// Delete a report.
    pub async fn delete_report(&self, report_id: Uuid) -> Result<DeleteAck, ApiError> {
        self.api
            .delete(&format!("/api/v1/reports/{}", report_id))
            .await
    }

    /// Fetch clinic-wide usage counters.
    pub async fn system_statistics(&self) -> Result<SystemStatistics, ApiError> {
        self.api.get("/api/v1/system/statistics").await
    }

    /// Submit an X-ray image for automated analysis.
    pub async fn analyze_image(&self, request: &ImageAnalysisRequest) -> Result<AnalysisReport, ApiError> {
        tracing::info!("Submitting {} for analysis", request.file_name);
        self.api.post("/api/v1/analysis", Some(request)).await
    }
}
