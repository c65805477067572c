//! Bearer-credential supply for the third-party generation service.
//!
//! The token itself is provisioned outside this crate; here it is only an
//! opaque string handed over by a [`TokenProvider`], so the demo environment,
//! tests, and a future secret store can all plug in behind the same seam.

use async_trait::async_trait;
use thiserror::Error;

/// Environment variable holding the generation-service credential.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("API credential is not configured")]
    Missing,

    #[error("API credential is invalid: {reason}")]
    Invalid { reason: String },
}

/// Opaque supplier of the bearer credential.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<String, CredentialsError>;
}

/// Reads the credential from the process environment on every call.
pub struct EnvTokenProvider {
    var: String,
}

impl EnvTokenProvider {
    pub fn new() -> Self {
        Self {
            var: GEMINI_API_KEY_VAR.to_string(),
        }
    }

    /// Read from a non-default variable name.
    pub fn from_var(var: &str) -> Self {
        Self {
            var: var.to_string(),
        }
    }
}

impl Default for EnvTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenProvider for EnvTokenProvider {
    async fn token(&self) -> Result<String, CredentialsError> {
        match std::env::var(&self.var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            Ok(_) => Err(CredentialsError::Missing),
            Err(std::env::VarError::NotPresent) => Err(CredentialsError::Missing),
            Err(std::env::VarError::NotUnicode(_)) => Err(CredentialsError::Invalid {
                reason: "credential is not valid unicode".to_string(),
            }),
        }
    }
}

/// Wraps a literal credential supplied by the embedding application.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<String, CredentialsError> {
        if self.token.trim().is_empty() {
            return Err(CredentialsError::Missing);
        }
        Ok(self.token.clone())
    }
}
