use chrono::{DateTime, Duration, Utc};

// Describe `then` relative to `now`, e.g. "5 minutes ago" or "in 2 hours"
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let in_future = delta < Duration::zero();
    let delta = if in_future { -delta } else { delta };

    if delta >= Duration::days(7) {
        return then.format("%b %-d, %Y").to_string();
    }

    if delta >= Duration::days(1) && delta < Duration::days(2) {
        return if in_future { "tomorrow" } else { "yesterday" }.to_string();
    }

    let (count, unit) = if delta < Duration::minutes(1) {
        (delta.num_seconds(), "second")
    } else if delta < Duration::hours(1) {
        (delta.num_minutes(), "minute")
    } else if delta < Duration::days(1) {
        (delta.num_hours(), "hour")
    } else {
        (delta.num_days(), "day")
    };

    let plural = if count == 1 { "" } else { "s" };

    if in_future {
        format!("in {} {}{}", count, unit, plural)
    } else {
        format!("{} {}{} ago", count, unit, plural)
    }
}

// Blank means absent, empty or whitespace only
pub fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |t| t.trim().is_empty())
}

// Shorten a payment hash or id for display
pub fn shorten_identifier(identifier: &str) -> String {
    if identifier.len() <= 16 {
        return identifier.to_string();
    }

    let start = &identifier[..8];
    let end = &identifier[identifier.len() - 8..];

    format!("{}...{}", start, end)
}

// Cut free text to at most `max_chars` characters, ending the cut with "…"
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 11, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn relative_time_buckets() {
        let now = now();

        assert_eq!(format_relative_time(now, now), "0 seconds ago");
        assert_eq!(format_relative_time(now - Duration::seconds(59), now), "59 seconds ago");
        assert_eq!(format_relative_time(now - Duration::seconds(60), now), "1 minute ago");
        assert_eq!(format_relative_time(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(format_relative_time(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(format_relative_time(now - Duration::hours(23), now), "23 hours ago");
        assert_eq!(format_relative_time(now - Duration::days(1), now), "yesterday");
        assert_eq!(format_relative_time(now - Duration::days(3), now), "3 days ago");
        assert_eq!(format_relative_time(now - Duration::days(7), now), "Nov 13, 2019");
    }

    #[test]
    fn relative_time_in_the_future() {
        let now = now();

        assert_eq!(format_relative_time(now + Duration::minutes(2), now), "in 2 minutes");
        assert_eq!(format_relative_time(now + Duration::days(1), now), "tomorrow");
    }

    #[test]
    fn blank_descriptions() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("  \n")));
        assert!(!is_blank(Some("coffee")));
    }

    #[test]
    fn shortens_long_identifiers() {
        assert_eq!(shorten_identifier("abcd"), "abcd");
        assert_eq!(
            shorten_identifier("9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"),
            "9f86d081...b0f00a08"
        );
    }

    #[test]
    fn truncates_long_text_on_char_boundaries() {
        assert_eq!(truncate_text("coffee", 10), "coffee");
        assert_eq!(truncate_text("coffee", 6), "coffee");
        assert_eq!(truncate_text("coffee beans", 6), "coffe…");
        assert_eq!(truncate_text("кофе и чай", 5), "кофе…");
    }
}
