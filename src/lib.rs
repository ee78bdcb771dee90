/// YTC - Chrome Extension for chatting about the current video
/// Built with Rust + WASM + Yew

mod bridge;
pub mod chat_data;
pub mod clock;
pub mod config;
pub mod error;
pub mod message_list;
pub mod relay;
pub mod storage;
pub mod ui;
pub mod video_id;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the video id extraction for JavaScript access
#[wasm_bindgen]
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id::extract_video_id(url).map(str::to_string)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
