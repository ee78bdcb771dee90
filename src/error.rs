use thiserror::Error;

/// Everything that can go wrong while relaying one chat message
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RelayError {
    #[error("no active tab")]
    NoActiveTab,

    #[error("tab query failed: {0}")]
    Tabs(String),

    #[error("no video id in url: {0}")]
    NoVideoInUrl(String),

    #[error("no video id stored")]
    MissingVideoId,

    #[error("stored video id is empty")]
    EmptyVideoId,

    #[error("storage access failed: {0}")]
    Storage(String),

    #[error("invalid backend url {url}: {reason}")]
    InvalidBackendUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("backend responded with status {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),
}
