//! Typed content records for scraped Instagram posts and videos.
//!
//! Scraper actor output is inconsistent across post types and actor
//! versions: numeric fields go missing, ids arrive as numbers or strings,
//! and sequence fields are sometimes absent entirely. Every field here is
//! therefore optional and deserialized leniently — a mistyped field
//! becomes its default instead of failing the whole record. Use the
//! accessor methods for the defaulted numeric views.

use serde::{Deserialize, Deserializer, Serialize};

/// One comment attached to a content item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "lenient_string")]
    pub text: Option<String>,
}

/// One scraped social post or video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    /// Opaque unique identifier; the scraper emits it as a string or a
    /// raw number depending on actor version.
    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(rename = "shortCode", deserialize_with = "lenient_string")]
    pub short_code: Option<String>,
    /// Post type; `"Video"` gates the video-only fields.
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub item_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub caption: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub url: Option<String>,
    /// ISO-8601 datetime, kept raw; parsing happens at cohorting time.
    #[serde(deserialize_with = "lenient_string")]
    pub timestamp: Option<String>,
    #[serde(rename = "likesCount", deserialize_with = "lenient_i64")]
    pub likes_count: Option<i64>,
    #[serde(rename = "commentsCount", deserialize_with = "lenient_i64")]
    pub comments_count: Option<i64>,
    #[serde(rename = "videoViewCount", deserialize_with = "lenient_i64")]
    pub video_view_count: Option<i64>,
    #[serde(rename = "videoPlayCount", deserialize_with = "lenient_i64")]
    pub video_play_count: Option<i64>,
    #[serde(rename = "videoDuration", deserialize_with = "lenient_f64")]
    pub video_duration: Option<f64>,
    #[serde(deserialize_with = "lenient_string_vec")]
    pub hashtags: Vec<String>,
    #[serde(deserialize_with = "lenient_string_vec")]
    pub mentions: Vec<String>,
    #[serde(rename = "latestComments", deserialize_with = "lenient_comments")]
    pub latest_comments: Vec<Comment>,
}

impl ContentItem {
    #[must_use]
    pub fn likes(&self) -> i64 {
        self.likes_count.unwrap_or(0)
    }

    #[must_use]
    pub fn comments(&self) -> i64 {
        self.comments_count.unwrap_or(0)
    }

    /// Likes plus comments — the single comparator used by every ranking
    /// and cohort operation downstream.
    #[must_use]
    pub fn engagement(&self) -> i64 {
        self.likes() + self.comments()
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.item_type.as_deref() == Some("Video")
    }

    #[must_use]
    pub fn views(&self) -> i64 {
        self.video_view_count.unwrap_or(0)
    }

    #[must_use]
    pub fn plays(&self) -> i64 {
        self.video_play_count.unwrap_or(0)
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.video_duration.unwrap_or(0.0)
    }

    /// Caption length in Unicode scalar values, 0 when absent.
    #[must_use]
    pub fn caption_len(&self) -> usize {
        self.caption.as_deref().map_or(0, |c| c.chars().count())
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

fn lenient_string_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(entries) => Ok(entries
            .into_iter()
            .filter_map(|entry| match entry {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn lenient_comments<'de, D>(deserializer: D) -> Result<Vec<Comment>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(entries) => Ok(entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
