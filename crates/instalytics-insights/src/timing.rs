//! Posting-time insight lines.

use instalytics_metrics::PostingTimeReport;

use crate::format::clock12;

pub(crate) fn posting_time_insights(report: Option<&PostingTimeReport>) -> Vec<String> {
    let Some(report) = report else {
        return vec!["No posting time data available to analyze.".to_string()];
    };

    let mut lines = Vec::new();

    if !report.best_posting_hours.is_empty() {
        lines.push("Best times to post based on engagement:".to_string());
        for (i, bucket) in report.best_posting_hours.iter().take(3).enumerate() {
            let (display, am_pm) = clock12(bucket.hour);
            lines.push(format!(
                "{}. {display} {am_pm} - {:.1} average engagement",
                i + 1,
                bucket.avg_engagement
            ));
        }
    }

    if !report.best_posting_weekdays.is_empty() {
        lines.push("Best days to post based on engagement:".to_string());
        for (i, bucket) in report.best_posting_weekdays.iter().take(3).enumerate() {
            lines.push(format!(
                "{}. {} - {:.1} average engagement",
                i + 1,
                bucket.weekday,
                bucket.avg_engagement
            ));
        }
    }

    if let (Some(top_hour), Some(top_day)) = (
        report.best_posting_hours.first(),
        report.best_posting_weekdays.first(),
    ) {
        let (display, am_pm) = clock12(top_hour.hour);
        lines.push(format!(
            "Optimal posting time: {} at {display} {am_pm} for maximum engagement.",
            top_day.weekday
        ));
    }

    lines
}
