//! Chat relay: takes a typed message, resolves the video it is about, asks
//! the backend and renders both sides of the exchange.
//!
//! The relay owns no browser state. Tabs and storage come in through
//! [`Extension`], HTTP through [`ChatBackend`] and rendering through
//! [`ChatView`], so every step can run against in-memory fakes.
#![allow(async_fn_in_trait)]

use crate::chat_data::{Author, ChatRequest, ChatResponse};
use crate::config::{IdResolution, RelayConfig};
use crate::error::RelayError;
use crate::video_id::extract_video_id;
use futures::future::{FutureExt, LocalBoxFuture};
use std::rc::Rc;
use url::Url;

/// Browser extension APIs the relay needs
pub trait Extension {
    /// URL of the active tab, None if the tab has no URL
    async fn active_tab_url(&self) -> Result<Option<String>, RelayError>;

    async fn load_video_id(&self) -> Result<Option<String>, RelayError>;

    async fn save_video_id(&self, video_id: &str) -> Result<(), RelayError>;
}

/// Chat backend transport
pub trait ChatBackend {
    async fn send(&self, endpoint: &Url, request: &ChatRequest) -> Result<ChatResponse, RelayError>;
}

/// Rendering surface for chat bubbles
pub trait ChatView {
    fn render_message(&self, text: &str, author: Author);
}

/// Take a submission out of an input field
///
/// Returns the trimmed message and clears the field. Blank input is left
/// as is and yields None.
pub fn take_submission(input: &mut String) -> Option<String> {
    let message = input.trim();
    if message.is_empty() {
        return None;
    }

    let message = message.to_string();
    input.clear();
    Some(message)
}

pub struct ChatRelay<E, B> {
    extension: E,
    backend: B,
    config: RelayConfig,
}

impl<E: Extension, B: ChatBackend> ChatRelay<E, B> {
    pub fn new(extension: E, backend: B, config: RelayConfig) -> Self {
        ChatRelay {
            extension,
            backend,
            config,
        }
    }

    pub fn extension(&self) -> &E {
        &self.extension
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Render the opening message
    pub fn greet<V: ChatView>(&self, view: &V) {
        view.render_message(&self.config.greeting, Author::Ai);
    }

    /// Handle a form submission
    ///
    /// Blank input is ignored and returns false. Otherwise the field is
    /// cleared and the work is handed to `spawn` as independent tasks: under
    /// [`IdResolution::LastKnown`] the tab refresh runs in its own task, so a
    /// slow tab query never holds back the request. Failures are logged.
    pub fn submit<V, S>(relay: &Rc<Self>, input: &mut String, view: &V, spawn: S) -> bool
    where
        E: 'static,
        B: 'static,
        V: ChatView + Clone + 'static,
        S: Fn(LocalBoxFuture<'static, ()>),
    {
        let Some(message) = take_submission(input) else {
            return false;
        };

        if relay.config.id_resolution == IdResolution::LastKnown {
            let relay = Rc::clone(relay);
            spawn(async move { log_refresh(relay.refresh_video_id().await) }.boxed_local());
        }

        let relay = Rc::clone(relay);
        let view = view.clone();
        spawn(
            async move {
                if let Err(e) = relay.send_message(&message, &view).await {
                    log::error!("Error sending message: {}", e);
                }
            }
            .boxed_local(),
        );

        true
    }

    /// Send one message and render the reply
    ///
    /// The user's message is rendered before anything else happens and
    /// stays rendered whatever the outcome. On success the reply text is
    /// rendered as an AI message and returned.
    pub async fn send_message<V: ChatView>(&self, message: &str, view: &V) -> Result<String, RelayError> {
        view.render_message(message, Author::User);

        let video_id = self.resolve_video_id().await?;
        let endpoint = self.config.chat_endpoint(&video_id)?;
        log::debug!("Sending message to {}", endpoint);

        let response = self.backend.send(&endpoint, &ChatRequest::new(message)).await?;
        log::info!("Message sent successfully: {:?}", response);

        view.render_message(&response.message, Author::Ai);
        Ok(response.message)
    }

    /// Read the active tab, extract its video id and persist it
    pub async fn refresh_video_id(&self) -> Result<String, RelayError> {
        let url = self
            .extension
            .active_tab_url()
            .await?
            .ok_or(RelayError::NoActiveTab)?;

        let video_id = extract_video_id(&url)
            .ok_or_else(|| RelayError::NoVideoInUrl(url.clone()))?
            .to_string();

        self.extension.save_video_id(&video_id).await?;
        log::debug!("Stored video id {:?}", video_id);

        Ok(video_id)
    }

    /// Identifier to address the backend with
    ///
    /// Under `LastKnown` this is whatever storage holds right now, possibly
    /// the id of an earlier video. Under `Sequenced` the tab is refreshed
    /// first; a failed refresh is only logged and the stored id is used.
    async fn resolve_video_id(&self) -> Result<String, RelayError> {
        if self.config.id_resolution == IdResolution::Sequenced {
            log_refresh(self.refresh_video_id().await);
        }

        match self.extension.load_video_id().await? {
            Some(video_id) if video_id.is_empty() => Err(RelayError::EmptyVideoId),
            Some(video_id) => Ok(video_id),
            None => Err(RelayError::MissingVideoId),
        }
    }
}

fn log_refresh(result: Result<String, RelayError>) {
    if let Err(e) = result {
        log::warn!("Could not refresh video id: {}", e);
    }
}
