//! Browser tests, run with `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use web_sys::Element;
use ytc_chat::clock::current_time;
use ytc_chat::ui::scroll_to_bottom;

wasm_bindgen_test_configure!(run_in_browser);

fn scrollable_box() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container
        .set_attribute("style", "height: 50px; overflow-y: auto;")
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn append_bubble(container: &Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    let bubble = document.create_element("div").unwrap();
    bubble.set_attribute("style", "height: 40px;").unwrap();
    container.append_child(&bubble).unwrap();
}

#[wasm_bindgen_test]
fn scroll_to_bottom_after_each_append() {
    let container = scrollable_box();

    for _ in 0..5 {
        append_bubble(&container);
        scroll_to_bottom(&container);

        let max_scroll = container.scroll_height() - container.client_height();
        assert_eq!(container.scroll_top(), max_scroll.max(0));
    }

    assert_eq!(container.child_element_count(), 5);
    container.remove();
}

#[wasm_bindgen_test]
fn current_time_is_zero_padded_24_hour() {
    let time = current_time();
    let (hours, minutes) = time.split_once(':').unwrap();

    assert_eq!(time.len(), 5);
    assert!(hours.parse::<u32>().unwrap() < 24);
    assert!(minutes.parse::<u32>().unwrap() < 60);
}

#[wasm_bindgen_test]
fn extract_video_id_export() {
    assert_eq!(
        ytc_chat::extract_video_id("https://x/watch?v=ABC123&t=5"),
        Some("ABC123&t=5".to_string())
    );
    assert_eq!(ytc_chat::extract_video_id("https://x/novideo"), None);
}
