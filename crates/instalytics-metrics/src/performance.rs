//! Per-item performance ranking.

use instalytics_core::ContentItem;

use crate::types::{ContentPerformance, VideoPerformance};
use crate::util::rate;

pub(crate) fn content_performance(items: &[ContentItem]) -> Option<Vec<ContentPerformance>> {
    if items.is_empty() {
        return None;
    }

    let mut records: Vec<ContentPerformance> = items.iter().map(performance_record).collect();
    // sort_by is stable: equal engagement keeps original collection order.
    records.sort_by(|a, b| b.total_engagement.cmp(&a.total_engagement));
    Some(records)
}

fn performance_record(item: &ContentItem) -> ContentPerformance {
    let video = item.is_video().then(|| VideoPerformance {
        views: item.views(),
        plays: item.plays(),
        completion_rate: rate(item.views(), item.plays()),
        duration: item.duration(),
    });

    ContentPerformance {
        id: item.id.clone(),
        short_code: item.short_code.clone(),
        item_type: item.item_type.clone(),
        caption: item.caption.clone(),
        url: item.url.clone(),
        timestamp: item.timestamp.clone(),
        likes: item.likes(),
        comments: item.comments(),
        total_engagement: item.engagement(),
        video,
    }
}
