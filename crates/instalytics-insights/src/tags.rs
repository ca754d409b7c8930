//! Hashtag and mention insight lines.

use instalytics_metrics::TagReport;

pub(crate) fn hashtag_insights(report: Option<&TagReport>) -> Vec<String> {
    let Some(report) = report else {
        return vec!["No hashtag data available to analyze.".to_string()];
    };

    let mut lines = Vec::new();

    lines.push(format!(
        "You've used {} unique hashtags across your content.",
        report.unique
    ));

    if !report.top_by_frequency.is_empty() {
        lines.push("Your most frequently used hashtags:".to_string());
        for (i, entry) in report.top_by_frequency.iter().take(5).enumerate() {
            lines.push(format!(
                "{}. #{} - used {} times",
                i + 1,
                entry.tag,
                entry.count
            ));
        }
    }

    if !report.top_by_engagement.is_empty() {
        lines.push("Hashtags with highest engagement:".to_string());
        for (i, entry) in report.top_by_engagement.iter().take(5).enumerate() {
            lines.push(format!(
                "{}. #{} - {:.1} average engagement",
                i + 1,
                entry.tag,
                entry.avg_engagement
            ));
        }
    }

    // High-engagement tags the account is not already leaning on.
    if !report.top_by_engagement.is_empty() && !report.top_by_frequency.is_empty() {
        let frequent: Vec<&str> = report
            .top_by_frequency
            .iter()
            .take(5)
            .map(|e| e.tag.as_str())
            .collect();
        let recommended: Vec<_> = report
            .top_by_engagement
            .iter()
            .filter(|e| !frequent.contains(&e.tag.as_str()))
            .take(3)
            .collect();

        if !recommended.is_empty() {
            lines.push(
                "Recommended hashtags to use more frequently based on engagement:".to_string(),
            );
            for (i, entry) in recommended.iter().enumerate() {
                lines.push(format!(
                    "{}. #{} - {:.1} average engagement",
                    i + 1,
                    entry.tag,
                    entry.avg_engagement
                ));
            }
        }
    }

    lines
}

pub(crate) fn mention_insights(report: Option<&TagReport>) -> Vec<String> {
    let Some(report) = report else {
        return vec!["No mention data available to analyze.".to_string()];
    };

    let mut lines = Vec::new();

    lines.push(format!(
        "You've mentioned {} unique accounts across your content.",
        report.unique
    ));

    if !report.top_by_frequency.is_empty() {
        lines.push("Your most frequently mentioned accounts:".to_string());
        for (i, entry) in report.top_by_frequency.iter().take(3).enumerate() {
            lines.push(format!(
                "{}. @{} - mentioned {} times",
                i + 1,
                entry.tag,
                entry.count
            ));
        }
    }

    if !report.top_by_engagement.is_empty() {
        lines.push("Mentions with highest engagement:".to_string());
        for (i, entry) in report.top_by_engagement.iter().take(3).enumerate() {
            lines.push(format!(
                "{}. @{} - {:.1} average engagement",
                i + 1,
                entry.tag,
                entry.avg_engagement
            ));
        }
    }

    if report.top_by_engagement.len() > 3 {
        lines.push("Consider collaborating more with these high-engagement accounts:".to_string());
        for (i, entry) in report.top_by_engagement.iter().take(3).enumerate() {
            lines.push(format!(
                "{}. @{} - content with this mention averages {:.1} engagement",
                i + 1,
                entry.tag,
                entry.avg_engagement
            ));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use instalytics_metrics::{TagEngagement, TagFrequency};

    fn report(tags: &[(&str, usize, f64)]) -> TagReport {
        TagReport {
            total_used: tags.iter().map(|(_, count, _)| count).sum(),
            unique: tags.len(),
            top_by_frequency: tags
                .iter()
                .map(|(tag, count, _)| TagFrequency {
                    tag: (*tag).to_string(),
                    count: *count,
                })
                .collect(),
            top_by_engagement: tags
                .iter()
                .map(|(tag, _, avg)| TagEngagement {
                    tag: (*tag).to_string(),
                    avg_engagement: *avg,
                })
                .collect(),
            details: Vec::new(),
        }
    }

    #[test]
    fn missing_reports_yield_no_data_lines() {
        assert_eq!(
            hashtag_insights(None),
            vec!["No hashtag data available to analyze.".to_string()]
        );
        assert_eq!(
            mention_insights(None),
            vec!["No mention data available to analyze.".to_string()]
        );
    }

    #[test]
    fn hashtag_lines_list_top_five() {
        let r = report(&[
            ("a", 6, 10.0),
            ("b", 5, 9.0),
            ("c", 4, 8.0),
            ("d", 3, 7.0),
            ("e", 2, 6.0),
            ("f", 1, 5.0),
        ]);
        let lines = hashtag_insights(Some(&r));
        assert_eq!(lines[0], "You've used 6 unique hashtags across your content.");
        assert_eq!(lines[1], "Your most frequently used hashtags:");
        assert_eq!(lines[2], "1. #a - used 6 times");
        assert_eq!(lines[6], "5. #e - used 2 times");
        assert_eq!(lines[7], "Hashtags with highest engagement:");
        assert_eq!(lines[8], "1. #a - 10.0 average engagement");
    }

    #[test]
    fn recommends_engaging_tags_outside_the_frequent_five() {
        // f is sixth by frequency but ranks in the engagement list.
        let r = report(&[
            ("a", 6, 10.0),
            ("b", 5, 9.0),
            ("c", 4, 8.0),
            ("d", 3, 7.0),
            ("e", 2, 6.0),
            ("f", 1, 5.5),
        ]);
        let lines = hashtag_insights(Some(&r));
        let idx = lines
            .iter()
            .position(|l| l == "Recommended hashtags to use more frequently based on engagement:")
            .unwrap();
        assert_eq!(lines[idx + 1], "1. #f - 5.5 average engagement");
    }

    #[test]
    fn no_recommendation_block_when_engaging_tags_are_already_frequent() {
        let r = report(&[("a", 2, 10.0), ("b", 1, 5.0)]);
        let lines = hashtag_insights(Some(&r));
        assert!(!lines.iter().any(|l| l.starts_with("Recommended hashtags")));
    }

    #[test]
    fn mention_lines_cap_at_three() {
        let r = report(&[("w", 4, 9.0), ("x", 3, 8.0), ("y", 2, 7.0), ("z", 1, 6.0)]);
        let lines = mention_insights(Some(&r));
        assert_eq!(
            lines[0],
            "You've mentioned 4 unique accounts across your content."
        );
        assert_eq!(lines[2], "1. @w - mentioned 4 times");
        assert!(!lines.iter().any(|l| l.contains("@z - mentioned")));
        // Four engaging mentions trigger the collaboration block.
        assert!(lines
            .iter()
            .any(|l| l == "Consider collaborating more with these high-engagement accounts:"));
        assert!(lines
            .iter()
            .any(|l| l == "1. @w - content with this mention averages 9.0 engagement"));
    }

    #[test]
    fn collaboration_block_needs_more_than_three_engaging_mentions() {
        let r = report(&[("w", 3, 9.0), ("x", 2, 8.0), ("y", 1, 7.0)]);
        let lines = mention_insights(Some(&r));
        assert!(!lines.iter().any(|l| l.starts_with("Consider collaborating")));
    }
}
