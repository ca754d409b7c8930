//! Posting-time cohorts: hour-of-day and weekday engagement.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Weekday};
use instalytics_core::ContentItem;

use crate::types::{HourBucket, PostingTimeReport, WeekdayBucket};
use crate::util::per_item;

/// Parse an ISO-8601 timestamp into (hour-of-day, weekday), keeping the
/// timestamp's own encoded offset — no time-zone conversion. Falls back
/// to naive (offset-less) datetimes, which the scraper occasionally
/// emits.
pub(crate) fn parse_timestamp(raw: &str) -> Option<(u32, Weekday)> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some((dt.hour(), dt.weekday()));
    }
    raw.parse::<NaiveDateTime>()
        .ok()
        .map(|dt| (dt.hour(), dt.weekday()))
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub(crate) fn posting_time_analysis(items: &[ContentItem]) -> Option<PostingTimeReport> {
    if items.is_empty() {
        return None;
    }

    // First-seen bucket order; the stable sorts below make it the
    // tie-break. At most 24 hours / 7 weekdays, so linear scans suffice.
    let mut hours: Vec<HourBucket> = Vec::new();
    let mut weekdays: Vec<WeekdayBucket> = Vec::new();

    for item in items {
        let Some(raw) = item.timestamp.as_deref() else {
            continue;
        };
        let Some((hour, weekday)) = parse_timestamp(raw) else {
            tracing::warn!(timestamp = raw, "skipping unparsable timestamp");
            continue;
        };
        let engagement = item.engagement();

        if let Some(bucket) = hours.iter_mut().find(|b| b.hour == hour) {
            bucket.count += 1;
            bucket.total_engagement += engagement;
        } else {
            hours.push(HourBucket {
                hour,
                count: 1,
                total_engagement: engagement,
                avg_engagement: 0.0,
            });
        }

        let name = weekday_name(weekday);
        if let Some(bucket) = weekdays.iter_mut().find(|b| b.weekday == name) {
            bucket.count += 1;
            bucket.total_engagement += engagement;
        } else {
            weekdays.push(WeekdayBucket {
                weekday: name.to_string(),
                count: 1,
                total_engagement: engagement,
                avg_engagement: 0.0,
            });
        }
    }

    for bucket in &mut hours {
        bucket.avg_engagement = per_item(bucket.total_engagement, bucket.count);
    }
    for bucket in &mut weekdays {
        bucket.avg_engagement = per_item(bucket.total_engagement, bucket.count);
    }

    hours.sort_by(|a, b| b.avg_engagement.total_cmp(&a.avg_engagement));
    weekdays.sort_by(|a, b| b.avg_engagement.total_cmp(&a.avg_engagement));

    Some(PostingTimeReport {
        best_posting_hours: hours,
        best_posting_weekdays: weekdays,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(timestamp: Option<&str>, engagement: i64) -> ContentItem {
        ContentItem {
            timestamp: timestamp.map(ToString::to_string),
            likes_count: Some(engagement),
            ..ContentItem::default()
        }
    }

    #[test]
    fn empty_collection_has_no_report() {
        assert!(posting_time_analysis(&[]).is_none());
    }

    #[test]
    fn hour_is_taken_in_the_encoded_offset() {
        // 18:30 UTC, but 13:30 in the -05:00 offset the timestamp carries.
        let (hour, _) = parse_timestamp("2025-06-02T13:30:00-05:00").unwrap();
        assert_eq!(hour, 13);
    }

    #[test]
    fn zulu_and_naive_timestamps_parse() {
        assert!(parse_timestamp("2025-06-02T14:30:00.000Z").is_some());
        assert!(parse_timestamp("2025-06-02T14:30:00").is_some());
        assert!(parse_timestamp("not-a-timestamp").is_none());
    }

    #[test]
    fn buckets_only_for_present_hours() {
        let report = posting_time_analysis(&[
            item(Some("2025-06-02T09:00:00Z"), 10),
            item(Some("2025-06-03T09:30:00Z"), 30),
            item(Some("2025-06-03T17:00:00Z"), 5),
        ])
        .unwrap();
        assert_eq!(report.best_posting_hours.len(), 2);

        let nine = report
            .best_posting_hours
            .iter()
            .find(|b| b.hour == 9)
            .unwrap();
        assert_eq!(nine.count, 2);
        assert!((nine.avg_engagement - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hours_sorted_descending_by_average() {
        let report = posting_time_analysis(&[
            item(Some("2025-06-02T09:00:00Z"), 10),
            item(Some("2025-06-02T17:00:00Z"), 50),
        ])
        .unwrap();
        assert_eq!(report.best_posting_hours[0].hour, 17);
        assert_eq!(report.best_posting_hours[1].hour, 9);
    }

    #[test]
    fn weekdays_use_english_names() {
        // 2025-06-02 is a Monday.
        let report = posting_time_analysis(&[item(Some("2025-06-02T09:00:00Z"), 10)]).unwrap();
        assert_eq!(report.best_posting_weekdays[0].weekday, "Monday");
    }

    #[test]
    fn unparsable_timestamps_are_skipped() {
        let report = posting_time_analysis(&[
            item(Some("garbage"), 10),
            item(None, 20),
            item(Some("2025-06-02T09:00:00Z"), 30),
        ])
        .unwrap();
        assert_eq!(report.best_posting_hours.len(), 1);
        assert_eq!(report.best_posting_hours[0].count, 1);
    }

    #[test]
    fn all_timestamps_unparsable_yields_empty_buckets() {
        let report = posting_time_analysis(&[item(Some("garbage"), 10)]).unwrap();
        assert!(report.best_posting_hours.is_empty());
        assert!(report.best_posting_weekdays.is_empty());
    }
}
