use chrono::NaiveDateTime;

/// Format the range text inputs expect (and are pre-filled with).
pub const INPUT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Lenient wrapper around chrono's parser for the sidebar inputs.
/// Returns `None` on anything that is not a complete datetime; the caller
/// decides how to surface that.
pub fn parse_input_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), INPUT_DATETIME_FORMAT).ok()
}

pub fn format_input_datetime(timestamp: NaiveDateTime) -> String {
    timestamp.format(INPUT_DATETIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_format_round_trips() {
        let parsed = parse_input_datetime("2024-03-01 05:30:00").unwrap();
        assert_eq!(format_input_datetime(parsed), "2024-03-01 05:30:00");
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        assert!(parse_input_datetime(" 2024-03-01 05:30:00\n").is_some());
    }

    #[test]
    fn test_partial_datetimes_are_rejected() {
        assert!(parse_input_datetime("2024-03-01").is_none());
        assert!(parse_input_datetime("05:30:00").is_none());
        assert!(parse_input_datetime("").is_none());
    }
}
