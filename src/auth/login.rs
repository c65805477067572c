//! Input validation in front of credential verification

use super::provider::AuthProvider;
use super::types::AuthResult;

/// Login flow: validate the form fields locally, then defer to the
/// configured [`AuthProvider`]. The first failed check wins and the
/// provider is never consulted for invalid input.
pub struct LoginUseCase<P: AuthProvider> {
    provider: P,
}

impl<P: AuthProvider> LoginUseCase<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthResult {
        if email.trim().is_empty() {
            return AuthResult::Error {
                message: "Email is required".into(),
            };
        }
        if password.trim().is_empty() {
            return AuthResult::Error {
                message: "Password is required".into(),
            };
        }
        if !email.contains('@') {
            return AuthResult::Error {
                message: "Invalid email format".into(),
            };
        }
        if password.chars().count() < 6 {
            return AuthResult::Error {
                message: "Password must be at least 6 characters".into(),
            };
        }

        self.provider.authenticate(email, password).await
    }
}
