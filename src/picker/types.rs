//! Outcome type and MIME mapping for image selection

use std::path::Path;

/// Outcome of one image-selection attempt.
///
/// Every invocation resolves to exactly one variant; platform faults are
/// carried in `Error` rather than thrown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilePickerResult {
    Success {
        data: Vec<u8>,
        name: String,
        mime_type: String,
    },
    Cancelled,
    Error {
        message: String,
    },
}

/// MIME type for an image file name, by extension.
///
/// Unrecognized or missing extensions fall back to `image/jpeg`, the
/// dominant X-ray export format.
pub fn mime_type_for(name: &str) -> &'static str {
    let extension = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "image/jpeg",
    }
}
