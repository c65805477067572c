//! Remote service endpoint configuration.

/// Base URL for the clinic backend API.
pub const BACKEND_API_URL: &str = "https://api.dentalvision.ai";

/// Base URL for the Generative Language API.
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for insight generation.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Endpoints the client core talks to.
///
/// Immutable once built; the builder-style setters exist so tests and
/// alternate deployments can point at their own servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub backend_base_url: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            backend_base_url: BACKEND_API_URL.to_string(),
            gemini_base_url: GEMINI_API_URL.to_string(),
            gemini_model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Override the backend base URL. A trailing slash is stripped so
    /// endpoint paths can always be joined with a leading `/`.
    pub fn with_backend_base_url(mut self, url: &str) -> Self {
        self.backend_base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Override the generation-service base URL.
    pub fn with_gemini_base_url(mut self, url: &str) -> Self {
        self.gemini_base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Override the model used for insight generation.
    pub fn with_gemini_model(mut self, model: &str) -> Self {
        self.gemini_model = model.to_string();
        self
    }
}
