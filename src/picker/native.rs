//! Image selection through the platform's native file dialog

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use super::types::{mime_type_for, FilePickerResult};
use super::FilePicker;

/// Platform surface that can present a native file-selection dialog.
///
/// `Ok(None)` means the user dismissed the dialog without choosing.
#[async_trait]
pub trait DialogHost: Send + Sync {
    async fn choose_file(&self) -> Result<Option<PathBuf>, String>;
}

/// Picker backed by a registered [`DialogHost`] window.
pub struct NativeFilePicker {
    host: Option<Arc<dyn DialogHost>>,
}

impl NativeFilePicker {
    pub fn new(host: Arc<dyn DialogHost>) -> Self {
        Self { host: Some(host) }
    }

    /// Picker with no host window yet; every pick reports an error.
    pub fn unregistered() -> Self {
        Self { host: None }
    }
}

#[async_trait]
impl FilePicker for NativeFilePicker {
    async fn pick_image(&self) -> FilePickerResult {
        let Some(host) = &self.host else {
            return FilePickerResult::Error {
                message: "No host window registered for the file dialog".into(),
            };
        };

        let path = match host.choose_file().await {
            Ok(Some(path)) => path,
            Ok(None) => {
                tracing::debug!("Image selection cancelled");
                return FilePickerResult::Cancelled;
            }
            Err(message) => return FilePickerResult::Error { message },
        };

        let data = match tokio::fs::read(&path).await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Failed to read {}: {}", path.display(), e);
                return FilePickerResult::Error {
                    message: format!("Failed to read {}: {}", path.display(), e),
                };
            }
        };
        if data.is_empty() {
            return FilePickerResult::Error {
                message: format!("Selected file {} is empty", path.display()),
            };
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image.jpg")
            .to_string();
        let mime_type = mime_type_for(&name).to_string();

        FilePickerResult::Success { data, name, mime_type }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unregistered_picker_reports_error() {
        let picker = NativeFilePicker::unregistered();

        let result = picker.pick_image().await;
        assert_eq!(
            result,
            FilePickerResult::Error {
                message: "No host window registered for the file dialog".into(),
            }
        );
    }
}
