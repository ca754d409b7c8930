//! Shared display formatting for insight lines.

/// Render an integer with thousands separators, `1234567` -> `1,234,567`.
pub(crate) fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A 0-to-1 rate as a percentage with two decimals, `0.075` -> `7.50%`.
pub(crate) fn percent2(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// A 0-to-1 ratio as a percentage with one decimal, `0.75` -> `75.0%`.
pub(crate) fn percent1(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// First 50 characters of a caption, with an ellipsis when truncated.
pub(crate) fn caption_preview(caption: &str) -> String {
    if caption.chars().count() > 50 {
        let head: String = caption.chars().take(50).collect();
        format!("{head}...")
    } else {
        caption.to_string()
    }
}

/// A 0-23 hour on the 12-hour clock, as (display hour, AM/PM).
pub(crate) fn clock12(hour: u32) -> (u32, &'static str) {
    let am_pm = if hour < 12 { "AM" } else { "PM" };
    let display = if hour > 12 { hour - 12 } else { hour };
    let display = if display == 0 { 12 } else { display };
    (display, am_pm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-12345), "-12,345");
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(percent2(0.075), "7.50%");
        assert_eq!(percent2(2.5), "250.00%");
        assert_eq!(percent1(0.75), "75.0%");
    }

    #[test]
    fn caption_truncation_counts_chars() {
        assert_eq!(caption_preview("short"), "short");
        let exactly_50: String = "x".repeat(50);
        assert_eq!(caption_preview(&exactly_50), exactly_50);
        let over = "x".repeat(51);
        let preview = caption_preview(&over);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 53);
    }

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(clock12(0), (12, "AM"));
        assert_eq!(clock12(9), (9, "AM"));
        assert_eq!(clock12(12), (12, "PM"));
        assert_eq!(clock12(13), (1, "PM"));
        assert_eq!(clock12(23), (11, "PM"));
    }
}
