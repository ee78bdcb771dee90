/// Wall-clock timestamps for message bubbles

/// Format hours and minutes as zero-padded 24-hour "HH:MM"
pub fn format_time(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours, minutes)
}

/// Current local time as "HH:MM"
///
/// Reads the browser clock, so this only works on wasm32.
pub fn current_time() -> String {
    let now = js_sys::Date::new_0();
    format_time(now.get_hours(), now.get_minutes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_pads() {
        assert_eq!(format_time(9, 5), "09:05");
        assert_eq!(format_time(0, 0), "00:00");
    }

    #[test]
    fn test_format_time_24_hour() {
        assert_eq!(format_time(23, 0), "23:00");
        assert_eq!(format_time(13, 45), "13:45");
    }
}
