//! Typed aggregate reports, one per metric category.
//!
//! Each report is an immutable snapshot computed once from a fixed
//! content collection. Collection-order `Vec`s stand in for the
//! original's keyed maps so serialization order — and therefore
//! tie-breaking — is deterministic.

use serde::Serialize;

/// Collection-wide engagement totals and averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementReport {
    pub total_content: usize,
    pub total_videos: usize,
    pub total_likes: i64,
    pub total_comments: i64,
    pub total_views: i64,
    pub total_plays: i64,
    pub avg_likes_per_content: f64,
    pub avg_comments_per_content: f64,
    pub avg_views_per_video: f64,
    pub avg_plays_per_video: f64,
    /// `total_views / total_plays`; 0 when no plays were recorded. The
    /// raw ratio is preserved and may exceed 1.0 when the platform
    /// counts views and plays differently.
    pub video_completion_rate: f64,
    /// `(total_likes + total_comments) / total_content`.
    pub engagement_rate: f64,
}

/// Per-item performance record. The containing list is sorted descending
/// by `total_engagement`, ties keeping original collection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentPerformance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "shortCode", skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub likes: i64,
    pub comments: i64,
    pub total_engagement: i64,
    /// Present only for `Video` items; non-video records serialize
    /// without any of the video fields.
    #[serde(flatten)]
    pub video: Option<VideoPerformance>,
}

/// Video-only performance fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoPerformance {
    pub views: i64,
    pub plays: i64,
    pub completion_rate: f64,
    pub duration: f64,
}

/// Frequency and engagement statistics for one tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagStats {
    pub tag: String,
    pub count: usize,
    pub total_engagement: i64,
    pub avg_engagement: f64,
    /// Ids of the items the tag appeared in, in collection order.
    pub content_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagFrequency {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagEngagement {
    pub tag: String,
    pub avg_engagement: f64,
}

/// Aggregate hashtag or mention statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagReport {
    /// Total tag occurrences across the collection (with repeats).
    pub total_used: usize,
    /// Number of distinct tags (case-sensitive).
    pub unique: usize,
    /// Top 10 by occurrence count, descending; ties keep first-seen order.
    pub top_by_frequency: Vec<TagFrequency>,
    /// Top 10 by average engagement, descending; ties keep first-seen order.
    pub top_by_engagement: Vec<TagEngagement>,
    /// Every distinct tag, in first-seen order.
    pub details: Vec<TagStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourBucket {
    /// Hour of day 0–23, in the timestamp's own encoded offset.
    pub hour: u32,
    pub count: usize,
    pub total_engagement: i64,
    pub avg_engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayBucket {
    /// English weekday name, Monday through Sunday.
    pub weekday: String,
    pub count: usize,
    pub total_engagement: i64,
    pub avg_engagement: f64,
}

/// Hour-of-day and weekday engagement cohorts. Only buckets with at
/// least one item appear, sorted descending by average engagement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostingTimeReport {
    pub best_posting_hours: Vec<HourBucket>,
    pub best_posting_weekdays: Vec<WeekdayBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptionBucket {
    pub range: String,
    pub count: usize,
    pub total_engagement: i64,
    pub avg_engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationBucket {
    pub range: String,
    pub count: usize,
    pub total_engagement: i64,
    pub avg_engagement: f64,
    pub total_views: i64,
    pub avg_views: f64,
}

/// Caption-length and video-duration cohorts over fixed bucket tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureReport {
    pub caption_length_ranges: Vec<CaptionBucket>,
    pub best_performing_length: String,
    pub video_duration_ranges: Vec<DurationBucket>,
    pub best_performing_duration: String,
}

/// Comment sentiment tally for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSentiment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub total: usize,
}

/// Lexicon sentiment aggregated over every classified comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    pub total_comments_analyzed: usize,
    pub positive_comments: usize,
    pub negative_comments: usize,
    pub neutral_comments: usize,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
    /// Per-item tallies in collection order.
    pub content_sentiment: Vec<ItemSentiment>,
}

/// The full category-keyed report set. `None` marks a category computed
/// over an empty collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReports {
    pub engagement_metrics: Option<EngagementReport>,
    pub content_performance: Option<Vec<ContentPerformance>>,
    pub hashtag_analysis: Option<TagReport>,
    pub mention_analysis: Option<TagReport>,
    pub posting_time_analysis: Option<PostingTimeReport>,
    pub content_insights: Option<StructureReport>,
    pub sentiment_analysis: Option<SentimentReport>,
}
