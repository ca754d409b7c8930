//! Audience sentiment insight lines.

use instalytics_metrics::{ContentPerformance, ItemSentiment, SentimentReport};

use crate::format::{caption_preview, percent1};

#[allow(clippy::cast_precision_loss)]
fn positive_ratio(tally: &ItemSentiment) -> f64 {
    if tally.total == 0 {
        return 0.0;
    }
    tally.positive as f64 / tally.total as f64
}

/// The item whose comments skew most positive. Only a strictly greater
/// ratio replaces the current best, so ties resolve to the earlier item.
fn most_positive(tallies: &[ItemSentiment]) -> Option<&ItemSentiment> {
    let mut best: Option<&ItemSentiment> = None;
    let mut best_ratio = f64::NEG_INFINITY;
    for tally in tallies {
        let ratio = positive_ratio(tally);
        if ratio > best_ratio {
            best = Some(tally);
            best_ratio = ratio;
        }
    }
    best
}

pub(crate) fn sentiment_insights(
    report: Option<&SentimentReport>,
    performance: Option<&[ContentPerformance]>,
) -> Vec<String> {
    let Some(report) = report else {
        return vec!["No sentiment data available to analyze.".to_string()];
    };

    let mut lines = Vec::new();

    lines.push(format!(
        "Analysis of {} comments shows the following sentiment distribution:",
        report.total_comments_analyzed
    ));
    lines.push(format!("- Positive: {:.1}%", report.positive_percentage));
    lines.push(format!("- Neutral: {:.1}%", report.neutral_percentage));
    lines.push(format!("- Negative: {:.1}%", report.negative_percentage));

    if report.positive_percentage > 60.0 {
        lines.push(
            "Your audience sentiment is predominantly positive, indicating strong content resonance."
                .to_string(),
        );
    } else if report.positive_percentage > 40.0 {
        lines.push(
            "Your audience sentiment is moderately positive, with room for improvement."
                .to_string(),
        );
    } else {
        lines.push(
            "Your audience sentiment shows significant room for improvement. Consider addressing common concerns in comments."
                .to_string(),
        );
    }

    if let Some(best) = most_positive(&report.content_sentiment) {
        if best.total > 0 {
            let ratio = positive_ratio(best);
            if ratio > 0.7 {
                let record = performance
                    .into_iter()
                    .flatten()
                    .find(|r| r.id == best.id);
                if let Some(record) = record {
                    let preview = caption_preview(record.caption.as_deref().unwrap_or(""));
                    lines.push(format!(
                        "Content with highest positive sentiment: '{preview}' ({} positive comments)",
                        percent1(ratio)
                    ));
                }
            }
        }
    }

    lines
}
