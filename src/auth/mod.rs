mod login;
mod provider;
mod types;

pub use login::LoginUseCase;
pub use provider::{AuthProvider, DemoAuthProvider, DEMO_EMAIL, DEMO_PASSWORD};
pub use types::AuthResult;
