//! Scripted picker for tests and off-device targets

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::types::FilePickerResult;
use super::FilePicker;

/// Picker that replays queued results in order.
#[derive(Clone, Default)]
pub struct MockFilePicker {
    results: Arc<Mutex<VecDeque<FilePickerResult>>>,
}

impl MockFilePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next result `pick_image` will return.
    pub fn push(&self, result: FilePickerResult) {
        self.results.lock().unwrap().push_back(result);
    }
}

#[async_trait]
impl FilePicker for MockFilePicker {
    async fn pick_image(&self) -> FilePickerResult {
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(FilePickerResult::Error {
                message: "No scripted pick result queued".into(),
            })
    }
}
