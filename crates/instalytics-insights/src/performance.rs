//! Content performance lines: top performers, type comparison, and
//! underperformers.

use instalytics_metrics::ContentPerformance;

use crate::format::{caption_preview, group_thousands};

#[allow(clippy::cast_precision_loss)]
fn avg_engagement(records: &[&ContentPerformance]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: i64 = records.iter().map(|r| r.total_engagement).sum();
    total as f64 / records.len() as f64
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn content_performance_insights(records: Option<&[ContentPerformance]>) -> Vec<String> {
    let Some(records) = records else {
        return vec!["No content performance data available to analyze.".to_string()];
    };
    if records.is_empty() {
        return vec!["No content performance data available to analyze.".to_string()];
    }

    let mut lines = Vec::new();

    lines.push("Your top performing content:".to_string());
    for (i, record) in records.iter().take(3).enumerate() {
        let preview = caption_preview(record.caption.as_deref().unwrap_or(""));
        lines.push(format!(
            "{}. {} - {} total engagement",
            i + 1,
            preview,
            group_thousands(record.total_engagement)
        ));
    }

    let videos: Vec<&ContentPerformance> = records
        .iter()
        .filter(|r| r.item_type.as_deref() == Some("Video"))
        .collect();
    let images: Vec<&ContentPerformance> = records
        .iter()
        .filter(|r| r.item_type.as_deref() != Some("Video"))
        .collect();

    if !videos.is_empty() && !images.is_empty() {
        let avg_video = avg_engagement(&videos);
        let avg_image = avg_engagement(&images);
        if avg_video > avg_image {
            lines.push(format!(
                "Videos perform better than other content types with {avg_video:.1} vs {avg_image:.1} average engagement."
            ));
        } else {
            lines.push(format!(
                "Images/carousels perform better than videos with {avg_image:.1} vs {avg_video:.1} average engagement."
            ));
        }
    }

    if records.len() > 5 {
        let total: i64 = records.iter().map(|r| r.total_engagement).sum();
        let avg = total as f64 / records.len() as f64;

        lines.push("Content that could be improved:".to_string());
        for record in &records[records.len() - 3..] {
            if (record.total_engagement as f64) < avg * 0.5 {
                let preview = caption_preview(record.caption.as_deref().unwrap_or(""));
                lines.push(format!(
                    "- {} - Only {} total engagement (less than 50% of your average)",
                    preview,
                    group_thousands(record.total_engagement)
                ));
            }
        }
    }

    lines
}
