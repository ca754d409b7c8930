//! Hashtag and mention aggregation.
//!
//! Both analyses are structurally identical — only the extracted
//! sequence differs — so they share one accumulator. Tags are compared
//! case-sensitively with no normalization: the scraper preserves
//! author-typed casing, and collapsing case would merge distinct
//! display tags.

use std::collections::HashMap;

use instalytics_core::ContentItem;

use crate::types::{TagEngagement, TagFrequency, TagReport, TagStats};
use crate::util::per_item;

const TOP_TAGS: usize = 10;

pub(crate) fn hashtag_analysis(items: &[ContentItem]) -> Option<TagReport> {
    analyze_tags(items, |item| &item.hashtags)
}

pub(crate) fn mention_analysis(items: &[ContentItem]) -> Option<TagReport> {
    analyze_tags(items, |item| &item.mentions)
}

fn analyze_tags<F>(items: &[ContentItem], extract: F) -> Option<TagReport>
where
    F: Fn(&ContentItem) -> &Vec<String>,
{
    if items.is_empty() {
        return None;
    }

    let mut total_used = 0usize;
    let mut index: HashMap<String, usize> = HashMap::new();
    // First-seen order; the stable sorts below turn it into the tie-break.
    let mut details: Vec<TagStats> = Vec::new();

    for item in items {
        let engagement = item.engagement();
        for tag in extract(item) {
            total_used += 1;
            let slot = *index.entry(tag.clone()).or_insert_with(|| {
                details.push(TagStats {
                    tag: tag.clone(),
                    count: 0,
                    total_engagement: 0,
                    avg_engagement: 0.0,
                    content_ids: Vec::new(),
                });
                details.len() - 1
            });
            let stats = &mut details[slot];
            stats.count += 1;
            stats.total_engagement += engagement;
            if let Some(id) = &item.id {
                stats.content_ids.push(id.clone());
            }
        }
    }

    for stats in &mut details {
        stats.avg_engagement = per_item(stats.total_engagement, stats.count);
    }

    let mut by_frequency: Vec<&TagStats> = details.iter().collect();
    by_frequency.sort_by(|a, b| b.count.cmp(&a.count));
    let top_by_frequency = by_frequency
        .iter()
        .take(TOP_TAGS)
        .map(|s| TagFrequency {
            tag: s.tag.clone(),
            count: s.count,
        })
        .collect();

    let mut by_engagement: Vec<&TagStats> = details.iter().collect();
    by_engagement.sort_by(|a, b| b.avg_engagement.total_cmp(&a.avg_engagement));
    let top_by_engagement = by_engagement
        .iter()
        .take(TOP_TAGS)
        .map(|s| TagEngagement {
            tag: s.tag.clone(),
            avg_engagement: s.avg_engagement,
        })
        .collect();

    Some(TagReport {
        total_used,
        unique: details.len(),
        top_by_frequency,
        top_by_engagement,
        details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, engagement: i64, hashtags: &[&str]) -> ContentItem {
        ContentItem {
            id: Some(id.to_string()),
            likes_count: Some(engagement),
            hashtags: hashtags.iter().map(|t| (*t).to_string()).collect(),
            ..ContentItem::default()
        }
    }

    #[test]
    fn empty_collection_has_no_report() {
        assert!(hashtag_analysis(&[]).is_none());
    }

    #[test]
    fn counts_and_averages() {
        let report = hashtag_analysis(&[
            item("1", 100, &["sale", "brand"]),
            item("2", 50, &["sale"]),
        ])
        .unwrap();
        assert_eq!(report.total_used, 3);
        assert_eq!(report.unique, 2);

        let sale = report.details.iter().find(|s| s.tag == "sale").unwrap();
        assert_eq!(sale.count, 2);
        assert_eq!(sale.total_engagement, 150);
        assert!((sale.avg_engagement - 75.0).abs() < f64::EPSILON);
        assert_eq!(sale.content_ids, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn frequency_ranking_descends_with_first_seen_ties() {
        let report = hashtag_analysis(&[
            item("1", 10, &["alpha", "beta"]),
            item("2", 10, &["beta", "gamma"]),
        ])
        .unwrap();
        let tags: Vec<&str> = report
            .top_by_frequency
            .iter()
            .map(|t| t.tag.as_str())
            .collect();
        // beta appears twice; alpha and gamma tie at one and keep
        // first-seen order.
        assert_eq!(tags, vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn engagement_ranking_descends() {
        let report =
            hashtag_analysis(&[item("1", 10, &["low"]), item("2", 90, &["high"])]).unwrap();
        let tags: Vec<&str> = report
            .top_by_engagement
            .iter()
            .map(|t| t.tag.as_str())
            .collect();
        assert_eq!(tags, vec!["high", "low"]);
    }

    #[test]
    fn top_lists_cap_at_ten() {
        let items: Vec<ContentItem> = (0..15)
            .map(|i| {
                let tag = format!("tag{i}");
                item(&i.to_string(), i, &[tag.as_str()])
            })
            .collect();
        let report = hashtag_analysis(&items).unwrap();
        assert_eq!(report.top_by_frequency.len(), 10);
        assert_eq!(report.top_by_engagement.len(), 10);
        assert_eq!(report.unique, 15);
    }

    #[test]
    fn tags_are_case_sensitive() {
        let report =
            hashtag_analysis(&[item("1", 1, &["Sale"]), item("2", 1, &["sale"])]).unwrap();
        assert_eq!(report.unique, 2);
    }

    #[test]
    fn mentions_use_their_own_sequence() {
        let with_mention = ContentItem {
            id: Some("1".to_string()),
            likes_count: Some(5),
            hashtags: vec!["ignored".to_string()],
            mentions: vec!["partner".to_string()],
            ..ContentItem::default()
        };
        let report = mention_analysis(&[with_mention]).unwrap();
        assert_eq!(report.unique, 1);
        assert_eq!(report.details[0].tag, "partner");
    }
}
