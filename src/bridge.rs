/// Browser-side implementations of the relay collaborators

use crate::chat_data::{ChatRequest, ChatResponse};
use crate::error::RelayError;
use crate::relay::{ChatBackend, Extension};
use crate::storage::{StoredVideo, VIDEO_ID_KEY};
use url::Url;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTabUrl() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(value: JsValue) -> Result<(), JsValue>;
}

/// chrome.tabs + chrome.storage.local
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeExtension;

impl Extension for ChromeExtension {
    async fn active_tab_url(&self) -> Result<Option<String>, RelayError> {
        let url_js = getActiveTabUrl()
            .await
            .map_err(|e| RelayError::Tabs(format!("{:?}", e)))?;
        Ok(url_js.as_string())
    }

    async fn load_video_id(&self) -> Result<Option<String>, RelayError> {
        let stored_js = getStorage(VIDEO_ID_KEY)
            .await
            .map_err(|e| RelayError::Storage(format!("Failed to get storage: {:?}", e)))?;

        if stored_js.is_null() || stored_js.is_undefined() {
            return Ok(None);
        }

        let stored: StoredVideo = serde_wasm_bindgen::from_value(stored_js)
            .map_err(|e| RelayError::Storage(format!("Failed to parse storage: {:?}", e)))?;
        Ok(stored.into_video_id())
    }

    async fn save_video_id(&self, video_id: &str) -> Result<(), RelayError> {
        let stored_js = serde_wasm_bindgen::to_value(&StoredVideo::new(video_id))
            .map_err(|e| RelayError::Storage(format!("Failed to serialize storage: {:?}", e)))?;

        setStorage(stored_js)
            .await
            .map_err(|e| RelayError::Storage(format!("Failed to save storage: {:?}", e)))
    }
}

/// JSON over fetch
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpBackend;

impl ChatBackend for HttpBackend {
    async fn send(&self, endpoint: &Url, request: &ChatRequest) -> Result<ChatResponse, RelayError> {
        let response = gloo_net::http::Request::post(endpoint.as_str())
            .json(request)
            .map_err(|e| RelayError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(RelayError::Status(response.status()));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| RelayError::Decode(e.to_string()))
    }
}
