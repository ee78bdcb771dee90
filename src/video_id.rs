/// Video identifier extraction for YTC

/// Marker that precedes the video identifier in a watch URL
const VIDEO_PARAM: &str = "v=";

/// Extract the video identifier from a tab URL
///
/// Algorithm:
/// 1. Find the first occurrence of "v="
/// 2. Return everything after it, untouched
///
/// No query-string parsing happens here: later parameters stay attached to
/// the identifier, so "watch?v=ABC123&t=5" yields "ABC123&t=5".
///
/// Returns None when the URL has no "v=". A bare trailing "v=" yields "".
///
/// Examples:
/// - https://www.youtube.com/watch?v=dQw4w9WgXcQ → dQw4w9WgXcQ
/// - https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42 → dQw4w9WgXcQ&t=42
/// - https://www.youtube.com/feed/subscriptions → None
pub fn extract_video_id(url: &str) -> Option<&str> {
    url.split_once(VIDEO_PARAM).map(|(_, rest)| rest)
}
