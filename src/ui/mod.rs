/// UI module exports
use web_sys::Element;

pub mod components;
pub mod popup;

/// Scroll a container so its newest child is visible
pub fn scroll_to_bottom(container: &Element) {
    container.set_scroll_top(container.scroll_height());
}
