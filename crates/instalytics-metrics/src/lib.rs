//! Aggregate metrics over a scraped content collection.
//!
//! [`MetricsEngine`] holds one immutable collection and computes seven
//! report categories from it. Every computation is a pure function of
//! the collection; calling the same method twice yields identical
//! reports, and an empty collection yields `None` for every category.

mod engagement;
mod performance;
mod sentiment;
mod structure;
mod tags;
mod timing;
pub mod types;
mod util;

use instalytics_core::ContentItem;

pub use types::{
    AggregateReports, CaptionBucket, ContentPerformance, DurationBucket, EngagementReport,
    HourBucket, ItemSentiment, PostingTimeReport, SentimentReport, StructureReport, TagEngagement,
    TagFrequency, TagReport, TagStats, VideoPerformance, WeekdayBucket,
};

/// Computes aggregate reports from a fixed content collection.
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    items: Vec<ContentItem>,
}

impl MetricsEngine {
    #[must_use]
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    /// The collection the engine was built from, in original order.
    #[must_use]
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Collection-wide totals, averages, and rates.
    #[must_use]
    pub fn engagement_metrics(&self) -> Option<EngagementReport> {
        engagement::engagement_metrics(&self.items)
    }

    /// Every item ranked descending by total engagement.
    #[must_use]
    pub fn content_performance(&self) -> Option<Vec<ContentPerformance>> {
        performance::content_performance(&self.items)
    }

    /// Hashtag frequency and engagement statistics.
    #[must_use]
    pub fn hashtag_analysis(&self) -> Option<TagReport> {
        tags::hashtag_analysis(&self.items)
    }

    /// Account-mention frequency and engagement statistics.
    #[must_use]
    pub fn mention_analysis(&self) -> Option<TagReport> {
        tags::mention_analysis(&self.items)
    }

    /// Hour-of-day and weekday engagement cohorts.
    #[must_use]
    pub fn posting_time_analysis(&self) -> Option<PostingTimeReport> {
        timing::posting_time_analysis(&self.items)
    }

    /// Caption-length and video-duration cohorts.
    #[must_use]
    pub fn content_insights(&self) -> Option<StructureReport> {
        structure::content_insights(&self.items)
    }

    /// Lexicon sentiment over attached comments.
    #[must_use]
    pub fn sentiment_analysis(&self) -> Option<SentimentReport> {
        sentiment::sentiment_analysis(&self.items)
    }

    /// All seven report categories in one pass.
    #[must_use]
    pub fn generate_all(&self) -> AggregateReports {
        AggregateReports {
            engagement_metrics: self.engagement_metrics(),
            content_performance: self.content_performance(),
            hashtag_analysis: self.hashtag_analysis(),
            mention_analysis: self.mention_analysis(),
            posting_time_analysis: self.posting_time_analysis(),
            content_insights: self.content_insights(),
            sentiment_analysis: self.sentiment_analysis(),
        }
    }
}
