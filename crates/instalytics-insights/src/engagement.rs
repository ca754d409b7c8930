//! Engagement overview lines.

use instalytics_metrics::EngagementReport;

use crate::format::{group_thousands, percent2};

pub(crate) fn engagement_insights(report: Option<&EngagementReport>) -> Vec<String> {
    let Some(report) = report else {
        return vec!["No engagement data available to analyze.".to_string()];
    };

    let mut lines = Vec::new();

    lines.push(format!(
        "Your content has generated a total of {} likes and {} comments across {} posts.",
        group_thousands(report.total_likes),
        group_thousands(report.total_comments),
        report.total_content
    ));

    let rate = percent2(report.engagement_rate);
    if report.engagement_rate > 0.1 {
        lines.push(format!(
            "Your overall engagement rate is {rate}, which is excellent compared to industry averages."
        ));
    } else if report.engagement_rate > 0.03 {
        lines.push(format!(
            "Your overall engagement rate is {rate}, which is good compared to industry averages."
        ));
    } else {
        lines.push(format!(
            "Your overall engagement rate is {rate}, which is below average. Consider strategies to boost engagement."
        ));
    }

    if report.total_videos > 0 {
        lines.push(format!(
            "Your {} videos have accumulated {} views and {} plays.",
            report.total_videos,
            group_thousands(report.total_views),
            group_thousands(report.total_plays)
        ));

        let completion = percent2(report.video_completion_rate);
        if report.video_completion_rate > 0.7 {
            lines.push(format!(
                "Your video completion rate is {completion}, which is excellent. Viewers are highly engaged with your content."
            ));
        } else if report.video_completion_rate > 0.4 {
            lines.push(format!(
                "Your video completion rate is {completion}, which is average. Consider optimizing video length or content to improve viewer retention."
            ));
        } else {
            lines.push(format!(
                "Your video completion rate is {completion}, which is below average. Focus on creating more engaging video content that captures attention early."
            ));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> EngagementReport {
        EngagementReport {
            total_content: 4,
            total_videos: 0,
            total_likes: 1500,
            total_comments: 250,
            total_views: 0,
            total_plays: 0,
            avg_likes_per_content: 375.0,
            avg_comments_per_content: 62.5,
            avg_views_per_video: 0.0,
            avg_plays_per_video: 0.0,
            video_completion_rate: 0.0,
            engagement_rate: 437.5,
        }
    }

    #[test]
    fn missing_report_yields_no_data_line() {
        assert_eq!(
            engagement_insights(None),
            vec!["No engagement data available to analyze.".to_string()]
        );
    }

    #[test]
    fn totals_line_groups_thousands() {
        let lines = engagement_insights(Some(&report()));
        assert_eq!(
            lines[0],
            "Your content has generated a total of 1,500 likes and 250 comments across 4 posts."
        );
    }

    #[test]
    fn high_rate_is_excellent() {
        let lines = engagement_insights(Some(&report()));
        assert_eq!(
            lines[1],
            "Your overall engagement rate is 43750.00%, which is excellent compared to industry averages."
        );
    }

    #[test]
    fn rate_thresholds_are_strict() {
        let mut r = report();
        r.engagement_rate = 0.1;
        let lines = engagement_insights(Some(&r));
        assert!(lines[1].contains("which is good"));

        r.engagement_rate = 0.03;
        let lines = engagement_insights(Some(&r));
        assert!(lines[1].contains("which is below average"));
    }

    #[test]
    fn video_lines_only_with_videos() {
        let lines = engagement_insights(Some(&report()));
        assert_eq!(lines.len(), 2);

        let mut r = report();
        r.total_videos = 2;
        r.total_views = 5000;
        r.total_plays = 10000;
        r.video_completion_rate = 0.5;
        let lines = engagement_insights(Some(&r));
        assert_eq!(
            lines[2],
            "Your 2 videos have accumulated 5,000 views and 10,000 plays."
        );
        assert!(lines[3].contains("50.00%, which is average"));
    }

    #[test]
    fn completion_thresholds_are_strict() {
        let mut r = report();
        r.total_videos = 1;
        r.video_completion_rate = 0.7;
        let lines = engagement_insights(Some(&r));
        assert!(lines[3].contains("which is average"));

        r.video_completion_rate = 0.4;
        let lines = engagement_insights(Some(&r));
        assert!(lines[3].contains("which is below average"));

        r.video_completion_rate = 0.71;
        let lines = engagement_insights(Some(&r));
        assert!(lines[3].contains("which is excellent"));
    }
}
