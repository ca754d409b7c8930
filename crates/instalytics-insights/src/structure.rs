//! Content-structure insight lines.

use instalytics_metrics::StructureReport;

pub(crate) fn content_structure_insights(report: Option<&StructureReport>) -> Vec<String> {
    let Some(report) = report else {
        return vec!["No content structure data available to analyze.".to_string()];
    };

    let mut lines = Vec::new();

    lines.push(format!(
        "Captions with {} length perform best in terms of engagement.",
        report.best_performing_length
    ));
    if let Some(bucket) = report
        .caption_length_ranges
        .iter()
        .find(|b| b.range == report.best_performing_length)
    {
        lines.push(format!(
            "- {} captions average {:.1} engagement per post.",
            bucket.range, bucket.avg_engagement
        ));
    }

    lines.push(format!(
        "Videos with {} duration perform best in terms of engagement.",
        report.best_performing_duration
    ));
    if let Some(bucket) = report
        .video_duration_ranges
        .iter()
        .find(|b| b.range == report.best_performing_duration)
    {
        lines.push(format!(
            "- {} videos average {:.1} engagement and {:.1} views per video.",
            bucket.range, bucket.avg_engagement, bucket.avg_views
        ));
    }

    lines.push("Content structure recommendations:".to_string());
    lines.push(format!(
        "- Optimize your captions to be {} for maximum engagement.",
        report.best_performing_length
    ));
    lines.push(format!(
        "- Create videos that are {} to maximize engagement and views.",
        report.best_performing_duration
    ));

    lines
}
