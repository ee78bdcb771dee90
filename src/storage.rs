/// Storage serialization utilities for chrome.storage.local

use serde::{Deserialize, Serialize};

/// Key under which the current video identifier is persisted
pub const VIDEO_ID_KEY: &str = "video_id";

/// Record read from / written to chrome.storage.local
///
/// `get(["video_id"])` resolves to `{}` when nothing was ever stored,
/// hence the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoredVideo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

impl StoredVideo {
    pub fn new(video_id: impl Into<String>) -> Self {
        StoredVideo {
            video_id: Some(video_id.into()),
        }
    }

    pub fn into_video_id(self) -> Option<String> {
        self.video_id
    }
}
