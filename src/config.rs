/// Relay configuration
///
/// Everything here is compiled in. The backend base can be overridden at
/// build time with `YTC_BACKEND_URL=http://host:port wasm-pack build`.
use crate::error::RelayError;
use url::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

pub const DEFAULT_GREETING: &str =
    "Hello, welcome to YTC, ask me anything about the current video and I will answer";

/// How the tab-derived identifier and the stored identifier are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdResolution {
    /// Refresh from the tab in a separate task and build the request from
    /// whatever storage holds. The request may use the previous video.
    #[default]
    LastKnown,
    /// Finish the tab query and storage write before reading, inside the send.
    Sequenced,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    pub backend_url: String,
    pub id_resolution: IdResolution,
    pub greeting: String,
}

impl RelayConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        RelayConfig {
            backend_url: backend_url.into(),
            ..Self::default()
        }
    }

    pub fn with_id_resolution(mut self, id_resolution: IdResolution) -> Self {
        self.id_resolution = id_resolution;
        self
    }

    /// `<backend_url>/chat/<video_id>`
    pub fn chat_endpoint(&self, video_id: &str) -> Result<Url, RelayError> {
        let invalid = |reason: String| RelayError::InvalidBackendUrl {
            url: self.backend_url.clone(),
            reason,
        };

        let mut url = Url::parse(&self.backend_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base".to_string()))?
            .pop_if_empty()
            .push("chat")
            .push(video_id);

        Ok(url)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        RelayConfig {
            backend_url: option_env!("YTC_BACKEND_URL")
                .unwrap_or(DEFAULT_BACKEND_URL)
                .to_string(),
            id_resolution: IdResolution::default(),
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}
