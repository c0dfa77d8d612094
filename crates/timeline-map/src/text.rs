//! Event label display truncation.

/// Labels at or below this length (in characters) display unchanged.
pub const EVENT_DISPLAY_MAX: usize = 10;

/// Characters kept before the ellipsis marker when truncating.
pub const EVENT_TRUNCATED_KEEP: usize = 7;

/// Marker appended to truncated labels.
pub const ELLIPSIS: &str = "...";

/// Truncates an event label to its 10-character display form.
///
/// Counting is per `char`, so multi-byte labels never split inside a
/// character.
pub fn truncate_event_label(label: &str) -> String {
    if label.chars().count() <= EVENT_DISPLAY_MAX {
        return label.to_string();
    }
    let kept: String = label.chars().take(EVENT_TRUNCATED_KEEP).collect();
    format!("{kept}{ELLIPSIS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_pass_through() {
        assert_eq!(truncate_event_label("Short"), "Short");
        assert_eq!(truncate_event_label("ExactlyTen"), "ExactlyTen");
        assert_eq!(truncate_event_label(""), "");
    }

    #[test]
    fn long_labels_truncate_to_ten_chars() {
        assert_eq!(truncate_event_label("HelloWorldExample"), "HelloWo...");
        assert_eq!(truncate_event_label("HelloWorldExample").chars().count(), 10);
    }

    #[test]
    fn truncation_is_char_safe() {
        let label = "événement très long";
        let display = truncate_event_label(label);
        assert_eq!(display.chars().count(), EVENT_DISPLAY_MAX);
        assert!(display.ends_with(ELLIPSIS));
    }
}
