mod prompts;
mod service;
mod types;

pub use prompts::insight_prompt;
pub use service::{parse_insight, InsightService};
pub use types::{ClinicalInsightRequest, ClinicalInsightResponse, InsightError, RiskLevel};
