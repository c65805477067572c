// Platform-agnostic core for the Dental Vision clients
pub mod ai;
pub mod api;
pub mod auth;
pub mod backend;
pub mod config;
pub mod credentials;
pub mod picker;

pub use api::{ApiClient, ApiError};
pub use config::ServiceConfig;
