pub mod gemini;
pub mod insight;

pub use gemini::{GenerateRequest, GenerateResponse};
pub use insight::{ClinicalInsightRequest, ClinicalInsightResponse, InsightService, RiskLevel};
