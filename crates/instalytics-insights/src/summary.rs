//! Condensed summary assembled from the rendered category lines.
//!
//! Selection is by substring match over the finished lines, not by
//! re-deriving from the reports, so the summary always agrees verbatim
//! with the per-category output.

use crate::InsightSet;

fn contains_any(line: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| line.contains(needle))
}

pub(crate) fn summary_insights(set: &InsightSet) -> Vec<String> {
    let mut summary = vec!["# Instagram Content Analysis Summary".to_string()];

    if !set.engagement_insights.is_empty() {
        summary.push("\n## Engagement Overview".to_string());
        summary.push(set.engagement_insights[0].clone());
        if set.engagement_insights.len() > 1 {
            summary.push(set.engagement_insights[1].clone());
        }
    }

    if !set.content_performance_insights.is_empty() {
        summary.push("\n## Top Performing Content".to_string());
        summary.extend(
            set.content_performance_insights
                .iter()
                .filter(|line| {
                    contains_any(
                        line,
                        &[
                            "Your top performing content:",
                            "Videos perform better",
                            "Images/carousels perform better",
                        ],
                    )
                })
                .cloned(),
        );
    }

    if !set.hashtag_insights.is_empty() {
        summary.push("\n## Hashtag Performance".to_string());
        let highlights: Vec<String> = set
            .hashtag_insights
            .iter()
            .filter(|line| {
                contains_any(
                    line,
                    &["Hashtags with highest engagement:", "Recommended hashtags"],
                )
            })
            .cloned()
            .collect();
        if !highlights.is_empty() {
            summary.extend(highlights);
            for line in &set.hashtag_insights {
                if line.starts_with("1. #") || line.starts_with("2. #") || line.starts_with("3. #")
                {
                    summary.push(line.clone());
                }
            }
        }
    }

    if !set.posting_time_insights.is_empty() {
        summary.push("\n## Optimal Posting Strategy".to_string());
        let optimal: Vec<String> = set
            .posting_time_insights
            .iter()
            .filter(|line| line.contains("Optimal posting time:"))
            .cloned()
            .collect();
        if optimal.is_empty() {
            summary.extend(
                set.posting_time_insights
                    .iter()
                    .filter(|line| {
                        contains_any(line, &["Best times to post", "Best days to post"])
                    })
                    .take(2)
                    .cloned(),
            );
        } else {
            summary.extend(optimal);
        }
    }

    if !set.content_structure_insights.is_empty() {
        summary.push("\n## Content Structure Recommendations".to_string());
        summary.extend(
            set.content_structure_insights
                .iter()
                .filter(|line| {
                    contains_any(
                        line,
                        &[
                            "Content structure recommendations:",
                            "Captions with",
                            "Videos with",
                        ],
                    )
                })
                .take(3)
                .cloned(),
        );
    }

    if !set.sentiment_insights.is_empty() {
        summary.push("\n## Audience Sentiment".to_string());
        summary.extend(
            set.sentiment_insights
                .iter()
                .filter(|line| contains_any(line, &["Analysis of", "Your audience sentiment"]))
                .take(2)
                .cloned(),
        );
    }

    summary.push("\n## Key Recommendations".to_string());

    if let Some(line) = set
        .content_performance_insights
        .iter()
        .find(|line| line.contains("perform better"))
    {
        let content_type = if line.contains("Videos perform better") {
            "video"
        } else {
            "image/carousel"
        };
        summary.push(format!(
            "- Focus on creating more {content_type} content as it generates higher engagement"
        ));
    }

    if set
        .hashtag_insights
        .iter()
        .any(|line| line.contains("Recommended hashtags"))
    {
        summary.push(
            "- Utilize the recommended hashtags to increase content reach and engagement"
                .to_string(),
        );
    }

    if let Some(line) = set
        .posting_time_insights
        .iter()
        .find(|line| line.contains("Optimal posting time:"))
    {
        summary.push(format!(
            "- {}",
            line.replace("Optimal posting time: ", "Post content on ")
        ));
    }

    for line in &set.content_structure_insights {
        if contains_any(line, &["Optimize your captions", "Create videos that are"]) {
            summary.push(format!("- {line}"));
        }
    }

    summary
}
