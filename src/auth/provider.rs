//! Credential verification seam and the built-in demo verifier

use std::time::Duration;

use async_trait::async_trait;

use super::types::AuthResult;

/// Demo account accepted by [`DemoAuthProvider`].
pub const DEMO_EMAIL: &str = "admin@dentalvision.ai";
pub const DEMO_PASSWORD: &str = "admin123";

const DEFAULT_DELAY_MS: u64 = 1500;

/// Verifies credentials that already passed input validation.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> AuthResult;
}

/// Stand-in verifier until the real account service exists.
///
/// Sleeps an artificial delay to mimic a network round trip, then accepts
/// exactly the demo pair.
pub struct DemoAuthProvider {
    delay: Duration,
}

impl DemoAuthProvider {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    /// Override the artificial delay; tests pass zero.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for DemoAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for DemoAuthProvider {
    async fn authenticate(&self, email: &str, password: &str) -> AuthResult {
        tokio::time::sleep(self.delay).await;

        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            tracing::info!("Demo login accepted for {}", email);
            AuthResult::Success
        } else {
            tracing::debug!("Demo login rejected for {}", email);
            AuthResult::Error {
                message: "Invalid credentials".into(),
            }
        }
    }
}
