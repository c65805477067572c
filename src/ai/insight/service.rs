use crate::ai::gemini::{generate_content_path, GenerateRequest, GenerateResponse};
use crate::api::ApiClient;

use super::prompts::insight_prompt;
use super::types::{ClinicalInsightRequest, ClinicalInsightResponse, InsightError};

/// Turns analysis results into clinical insights through the generation
/// endpoint, using a shared [`ApiClient`].
pub struct InsightService<'a> {
    api: &'a ApiClient,
    model: &'a str,
}

impl<'a> InsightService<'a> {
    pub fn new(api: &'a ApiClient, model: &'a str) -> Self {
        Self { api, model }
    }

    /// Generate a clinical insight for one analysis result.
    ///
    /// A single round trip, no retry: prompt the model, then parse the
    /// embedded JSON out of the response envelope.
    pub async fn generate(
        &self,
        request: &ClinicalInsightRequest,
    ) -> Result<ClinicalInsightResponse, InsightError> {
        let prompt = insight_prompt(request);
        let envelope = GenerateRequest::from_prompt(&prompt);
        let path = generate_content_path(self.model);

        tracing::debug!(
            "Requesting clinical insight for {} from {}",
            request.patient_name,
            self.model
        );

        let response: GenerateResponse = self.api.post(&path, Some(&envelope)).await?;
        parse_insight(&response)
    }
}

/// Extract the structured insight embedded in a generation response.
///
/// Walks `candidates[0].content.parts[0].text` and parses the text as the
/// five-field insight JSON. Any missing path segment or field is a
/// [`InsightError::Decode`]; the value is all-or-nothing.
pub fn parse_insight(response: &GenerateResponse) -> Result<ClinicalInsightResponse, InsightError> {
    let text = response
        .first_text()
        .ok_or_else(|| InsightError::Decode("No text in response".into()))?;

    serde_json::from_str(strip_code_fence(text)).map_err(|e| {
        tracing::error!("Generation response is not a usable insight: {}", e);
        InsightError::Decode(e.to_string())
    })
}

/// Drop a surrounding markdown code fence, if the model added one.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    inner.trim()
}
