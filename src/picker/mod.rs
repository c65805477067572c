//! Platform-agnostic image selection

mod mock;
mod native;
mod types;

use async_trait::async_trait;

pub use mock::MockFilePicker;
pub use native::{DialogHost, NativeFilePicker};
pub use types::{mime_type_for, FilePickerResult};

/// Image-selection seam; each platform registers its own implementation.
#[async_trait]
pub trait FilePicker: Send + Sync {
    /// Let the user pick one image; always resolves, never faults.
    async fn pick_image(&self) -> FilePickerResult;
}
