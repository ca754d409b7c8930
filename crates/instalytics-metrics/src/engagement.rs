//! Collection-wide engagement totals and rates.

use instalytics_core::ContentItem;

use crate::types::EngagementReport;
use crate::util::{per_item, rate};

pub(crate) fn engagement_metrics(items: &[ContentItem]) -> Option<EngagementReport> {
    if items.is_empty() {
        return None;
    }

    let total_likes: i64 = items.iter().map(ContentItem::likes).sum();
    let total_comments: i64 = items.iter().map(ContentItem::comments).sum();
    let total_views: i64 = items
        .iter()
        .filter(|i| i.is_video())
        .map(ContentItem::views)
        .sum();
    let total_plays: i64 = items
        .iter()
        .filter(|i| i.is_video())
        .map(ContentItem::plays)
        .sum();

    let total_content = items.len();
    let total_videos = items.iter().filter(|i| i.is_video()).count();

    Some(EngagementReport {
        total_content,
        total_videos,
        total_likes,
        total_comments,
        total_views,
        total_plays,
        avg_likes_per_content: per_item(total_likes, total_content),
        avg_comments_per_content: per_item(total_comments, total_content),
        avg_views_per_video: per_item(total_views, total_videos),
        avg_plays_per_video: per_item(total_plays, total_videos),
        video_completion_rate: rate(total_views, total_plays),
        engagement_rate: per_item(total_likes + total_comments, total_content),
    })
}
