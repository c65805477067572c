use thiserror::Error;

/// Errors surfaced by [`super::ApiClient`].
///
/// Callers need three distinguishable failure kinds: the service was
/// unreachable, the service answered with a failing status, or the service
/// answered 2xx with a body that does not match the expected shape.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },

    #[error("decode error: {0}")]
    Decode(String),

    #[error("client configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Status code of a [`ApiError::Status`] failure.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
