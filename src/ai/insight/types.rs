//! Clinical-insight data contracts and error definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::ApiError;

/// Errors that can occur when generating a clinical insight.
///
/// `Api` means the service could not be reached or answered with a failing
/// status; `Decode` means it answered but the content was unusable. The two
/// must stay apart so callers can phrase the right user message.
#[derive(Error, Debug)]
pub enum InsightError {
    #[error("API error: {0}")]
    Api(ApiError),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<ApiError> for InsightError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Decode(message) => InsightError::Decode(message),
            other => InsightError::Api(other),
        }
    }
}

/// Input to insight generation, assembled from one analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalInsightRequest {
    pub doctor_name: String,
    pub patient_name: String,
    pub cavity_count: u32,
    pub healthy_count: u32,
    /// Detection confidence in `[0, 1]`.
    pub confidence: f32,
}

/// Structured insight parsed out of the generation response.
///
/// All five fields are required; a response missing any of them is a decode
/// failure, never a partially populated value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalInsightResponse {
    pub greeting: String,
    pub diagnosis_summary: String,
    pub prevention_tips: Vec<String>,
    pub corrective_actions: Vec<String>,
    pub risk_level: RiskLevel,
}

/// Risk category reported by the model.
///
/// The wire value is a free-form string; anything outside the known set is
/// preserved as `Unknown` so consumers handle it explicitly instead of
/// receiving a silently passed-through label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown(String),
}

impl RiskLevel {
    /// Whether the value matched the known {low, medium, high} set.
    pub fn is_known(&self) -> bool {
        !matches!(self, RiskLevel::Unknown(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Unknown(raw) => raw,
        }
    }
}

impl From<String> for RiskLevel {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "medium" => RiskLevel::Medium,
            "high" => RiskLevel::High,
            _ => RiskLevel::Unknown(raw),
        }
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        level.as_str().to_string()
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
