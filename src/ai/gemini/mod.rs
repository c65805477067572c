mod types;

pub use types::generate_content_path;
pub use types::{Candidate, Content, GenerateRequest, GenerateResponse, Part};
