//! Content-structure cohorts: caption length and video duration over
//! fixed three-bucket tables.

use instalytics_core::ContentItem;

use crate::types::{CaptionBucket, DurationBucket, StructureReport};
use crate::util::per_item;

const CAPTION_RANGES: [&str; 3] = ["short (0-50)", "medium (51-150)", "long (151+)"];
const DURATION_RANGES: [&str; 3] = ["short (0-30s)", "medium (31-60s)", "long (61s+)"];

fn caption_slot(len: usize) -> usize {
    if len <= 50 {
        0
    } else if len <= 150 {
        1
    } else {
        2
    }
}

fn duration_slot(seconds: f64) -> usize {
    if seconds <= 30.0 {
        0
    } else if seconds <= 60.0 {
        1
    } else {
        2
    }
}

/// Highest average engagement wins; only a strictly greater value
/// replaces the current best, so ties resolve to the earlier bucket in
/// table order (short, medium, long).
fn best_bucket<'a, I>(buckets: I) -> String
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut best_range = "";
    let mut best_avg = f64::NEG_INFINITY;
    for (range, avg) in buckets {
        if avg > best_avg {
            best_range = range;
            best_avg = avg;
        }
    }
    best_range.to_string()
}

pub(crate) fn content_insights(items: &[ContentItem]) -> Option<StructureReport> {
    if items.is_empty() {
        return None;
    }

    let mut caption_buckets = CAPTION_RANGES.map(|range| CaptionBucket {
        range: range.to_string(),
        count: 0,
        total_engagement: 0,
        avg_engagement: 0.0,
    });
    for item in items {
        let bucket = &mut caption_buckets[caption_slot(item.caption_len())];
        bucket.count += 1;
        bucket.total_engagement += item.engagement();
    }
    for bucket in &mut caption_buckets {
        bucket.avg_engagement = per_item(bucket.total_engagement, bucket.count);
    }

    let mut duration_buckets = DURATION_RANGES.map(|range| DurationBucket {
        range: range.to_string(),
        count: 0,
        total_engagement: 0,
        avg_engagement: 0.0,
        total_views: 0,
        avg_views: 0.0,
    });
    for item in items.iter().filter(|i| i.is_video()) {
        let bucket = &mut duration_buckets[duration_slot(item.duration())];
        bucket.count += 1;
        bucket.total_engagement += item.engagement();
        bucket.total_views += item.views();
    }
    for bucket in &mut duration_buckets {
        bucket.avg_engagement = per_item(bucket.total_engagement, bucket.count);
        bucket.avg_views = per_item(bucket.total_views, bucket.count);
    }

    let best_performing_length = best_bucket(
        caption_buckets
            .iter()
            .map(|b| (b.range.as_str(), b.avg_engagement)),
    );
    let best_performing_duration = best_bucket(
        duration_buckets
            .iter()
            .map(|b| (b.range.as_str(), b.avg_engagement)),
    );

    Some(StructureReport {
        caption_length_ranges: caption_buckets.to_vec(),
        best_performing_length,
        video_duration_ranges: duration_buckets.to_vec(),
        best_performing_duration,
    })
}
