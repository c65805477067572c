//! JSON-over-HTTP client and the two process-wide service instances

mod client;
mod types;

pub use client::{ApiClient, CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS};
pub use types::ApiError;

use once_cell::sync::OnceCell;

use crate::config::{BACKEND_API_URL, GEMINI_API_URL};

static BACKEND_CLIENT: OnceCell<ApiClient> = OnceCell::new();
static INSIGHT_CLIENT: OnceCell<ApiClient> = OnceCell::new();

/// Shared client for the clinic backend, created on first use.
///
/// Construction is idempotent under concurrent first access; every caller
/// for the lifetime of the process sees the same instance.
pub fn backend_client() -> Result<&'static ApiClient, ApiError> {
    BACKEND_CLIENT.get_or_try_init(|| {
        tracing::info!("Creating backend API client for {}", BACKEND_API_URL);
        ApiClient::new(BACKEND_API_URL)
    })
}

/// Shared client for the generation service, created on first use with a
/// bearer credential. The token supplied by the first successful caller
/// wins; later calls return the existing instance.
pub fn insight_client(token: &str) -> Result<&'static ApiClient, ApiError> {
    INSIGHT_CLIENT.get_or_try_init(|| {
        tracing::info!("Creating generation API client for {}", GEMINI_API_URL);
        ApiClient::with_headers(
            GEMINI_API_URL,
            vec![("Authorization".to_string(), format!("Bearer {}", token))],
        )
    })
}
