use serde::{Deserialize, Serialize};

/// Build the generateContent path for `model`, relative to the service
/// base URL.
pub fn generate_content_path(model: &str) -> String {
    format!("models/{}:generateContent", model)
}

/// Request body for content generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

impl GenerateRequest {
    /// Wrap a single prompt in the nested envelope the endpoint expects.
    pub fn from_prompt(text: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }],
        }
    }
}

/// One content message, a sequence of parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single text part of a content message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Response from content generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A generated candidate response.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateResponse {
    /// Text of the first candidate's first part.
    ///
    /// Returns `None` when any segment of the nested
    /// `candidates[0].content.parts[0].text` path is absent.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
    }
}
