//! Natural-language insight rendering over aggregate reports.
//!
//! Each report category renders to a list of human-readable lines, and
//! a condensed summary pulls the highlights together. Rendering is pure
//! string formatting over an [`AggregateReports`] value; a category
//! whose report is absent renders a single "No ... data available to
//! analyze." line.

mod engagement;
mod format;
mod performance;
mod sentiment;
mod structure;
mod summary;
mod tags;
mod timing;

use instalytics_metrics::AggregateReports;
use serde::Serialize;

/// Every rendered insight category plus the condensed summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightSet {
    pub engagement_insights: Vec<String>,
    pub content_performance_insights: Vec<String>,
    pub hashtag_insights: Vec<String>,
    pub mention_insights: Vec<String>,
    pub posting_time_insights: Vec<String>,
    pub content_structure_insights: Vec<String>,
    pub sentiment_insights: Vec<String>,
    pub summary: Vec<String>,
}

impl InsightSet {
    /// Category lines by name. Accepts the serialized field name with or
    /// without the `_insights` suffix.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&[String]> {
        let key = name.strip_suffix("_insights").unwrap_or(name);
        match key {
            "engagement" => Some(&self.engagement_insights),
            "content_performance" => Some(&self.content_performance_insights),
            "hashtag" => Some(&self.hashtag_insights),
            "mention" => Some(&self.mention_insights),
            "posting_time" => Some(&self.posting_time_insights),
            "content_structure" => Some(&self.content_structure_insights),
            "sentiment" => Some(&self.sentiment_insights),
            _ => None,
        }
    }

    /// All categories in their fixed rendering order.
    #[must_use]
    pub fn categories(&self) -> [(&'static str, &[String]); 7] {
        [
            ("engagement_insights", self.engagement_insights.as_slice()),
            (
                "content_performance_insights",
                self.content_performance_insights.as_slice(),
            ),
            ("hashtag_insights", self.hashtag_insights.as_slice()),
            ("mention_insights", self.mention_insights.as_slice()),
            (
                "posting_time_insights",
                self.posting_time_insights.as_slice(),
            ),
            (
                "content_structure_insights",
                self.content_structure_insights.as_slice(),
            ),
            ("sentiment_insights", self.sentiment_insights.as_slice()),
        ]
    }
}

/// Render every category and the summary from one report set.
#[must_use]
pub fn render_all(reports: &AggregateReports) -> InsightSet {
    let mut set = InsightSet {
        engagement_insights: engagement::engagement_insights(reports.engagement_metrics.as_ref()),
        content_performance_insights: performance::content_performance_insights(
            reports.content_performance.as_deref(),
        ),
        hashtag_insights: tags::hashtag_insights(reports.hashtag_analysis.as_ref()),
        mention_insights: tags::mention_insights(reports.mention_analysis.as_ref()),
        posting_time_insights: timing::posting_time_insights(
            reports.posting_time_analysis.as_ref(),
        ),
        content_structure_insights: structure::content_structure_insights(
            reports.content_insights.as_ref(),
        ),
        sentiment_insights: sentiment::sentiment_insights(
            reports.sentiment_analysis.as_ref(),
            reports.content_performance.as_deref(),
        ),
        summary: Vec::new(),
    };
    set.summary = summary::summary_insights(&set);
    set
}
