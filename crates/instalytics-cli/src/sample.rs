//! Deterministic sample-collection generator.
//!
//! Produces a metadata file in the scraper's JSON shape so the pipeline
//! can be exercised locally without scraping anything. The same seed
//! always yields the same file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, SecondsFormat, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

const SHORT_CODE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const CAPTIONS: [&str; 8] = [
    "New drop is live",
    "Behind the scenes from this week's shoot",
    "Our community keeps growing, thank you for being part of the journey with us every single day",
    "Quick tip for your morning routine",
    "Throwback to the launch event",
    "Sneak peek at what's coming next month, we have been working on this for a long time and cannot wait to share it",
    "Weekend vibes",
    "Meet the team",
];

const HASHTAG_POOL: [&str; 8] = [
    "brand", "launch", "style", "tips", "community", "bts", "newdrop", "weekend",
];

const MENTION_POOL: [&str; 5] = ["studiopartner", "photogal", "citymarket", "thecrew", "eventhq"];

const COMMENT_POOL: [&str; 10] = [
    "This is amazing, love it",
    "great content as always",
    "When does it ship?",
    "Not my favorite, a bit boring honestly",
    "Absolutely beautiful shot",
    "meh",
    "This looks terrible on mobile",
    "Best thing you've posted all year",
    "Can you do a tutorial on this?",
    "so good",
];

fn short_code(rng: &mut StdRng) -> String {
    (0..11)
        .map(|_| {
            let idx = rng.random_range(0..SHORT_CODE_CHARS.len());
            char::from(SHORT_CODE_CHARS[idx])
        })
        .collect()
}

fn pick<'a>(rng: &mut StdRng, pool: &[&'a str], min: usize, max: usize) -> Vec<&'a str> {
    let count = rng.random_range(min..=max);
    let start = rng.random_range(0..pool.len());
    (0..count).map(|i| pool[(start + i) % pool.len()]).collect()
}

/// Generate `count` sample items and write them as a single JSON array
/// to `<output_dir>/sample_content.json`, returning the written path.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or the
/// file cannot be written.
pub(crate) fn write_sample_collection(
    output_dir: &Path,
    count: usize,
    seed: u64,
) -> anyhow::Result<PathBuf> {
    let base = Utc
        .with_ymd_and_hms(2025, 6, 30, 12, 0, 0)
        .single()
        .ok_or_else(|| anyhow::anyhow!("invalid base timestamp"))?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut items = Vec::with_capacity(count);
    for i in 0..count {
        let code = short_code(&mut rng);
        let is_video = rng.random_bool(0.4);
        let caption_base = CAPTIONS[rng.random_range(0..CAPTIONS.len())];
        let hashtags = pick(&mut rng, &HASHTAG_POOL, 1, 3);
        let mentions = pick(&mut rng, &MENTION_POOL, 0, 2);

        let tag_suffix: String = hashtags.iter().map(|t| format!(" #{t}")).collect();
        let mention_suffix: String = mentions.iter().map(|m| format!(" @{m}")).collect();
        let caption = format!("{caption_base}{tag_suffix}{mention_suffix}");

        let timestamp = (base - Duration::hours(rng.random_range(0..24 * 28)))
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        let comments: Vec<_> = pick(&mut rng, &COMMENT_POOL, 0, 4)
            .into_iter()
            .map(|text| json!({ "text": text }))
            .collect();

        let mut item = json!({
            "id": format!("32{i:08}"),
            "shortCode": code,
            "type": if is_video { "Video" } else { "Image" },
            "caption": caption,
            "url": format!("https://www.instagram.com/p/{code}/"),
            "timestamp": timestamp,
            "likesCount": rng.random_range(50..5000),
            "commentsCount": rng.random_range(0..400),
            "hashtags": hashtags,
            "mentions": mentions,
            "latestComments": comments,
        });
        if is_video {
            let plays: i64 = rng.random_range(1_000..50_000);
            let completion: f64 = rng.random_range(0.3..0.95);
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            let views = (plays as f64 * completion) as i64;
            item["videoViewCount"] = json!(views);
            item["videoPlayCount"] = json!(plays);
            item["videoDuration"] = json!(rng.random_range(10.0..120.0));
        }
        items.push(item);
    }

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join("sample_content.json");
    fs::write(&path, serde_json::to_string_pretty(&items)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_writes_identical_files() {
        let dir_a = tempfile::tempdir().unwrap();
        let dir_b = tempfile::tempdir().unwrap();
        let path_a = write_sample_collection(dir_a.path(), 10, 7).unwrap();
        let path_b = write_sample_collection(dir_b.path(), 10, 7).unwrap();
        assert_eq!(
            fs::read_to_string(path_a).unwrap(),
            fs::read_to_string(path_b).unwrap()
        );
    }

    #[test]
    fn different_seeds_differ() {
        let dir = tempfile::tempdir().unwrap();
        let first = fs::read_to_string(write_sample_collection(dir.path(), 10, 1).unwrap()).unwrap();
        let second =
            fs::read_to_string(write_sample_collection(dir.path(), 10, 2).unwrap()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn generated_items_parse_and_hold_invariants() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample_collection(dir.path(), 25, 42).unwrap();
        let raw = fs::read_to_string(path).unwrap();
        let items: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(items.len(), 25);

        for item in &items {
            assert_eq!(item["shortCode"].as_str().unwrap().len(), 11);
            assert!(item["timestamp"].as_str().unwrap().ends_with('Z'));
            if item["type"] == "Video" {
                let views = item["videoViewCount"].as_i64().unwrap();
                let plays = item["videoPlayCount"].as_i64().unwrap();
                assert!(views <= plays, "views {views} must not exceed plays {plays}");
            } else {
                assert!(item.get("videoViewCount").is_none());
            }
        }
    }

    #[test]
    fn items_load_through_the_core_model() {
        let dir = tempfile::tempdir().unwrap();
        write_sample_collection(dir.path(), 5, 3).unwrap();
        let items = instalytics_core::load_content_dir(dir.path()).unwrap();
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|i| i.id.is_some()));
    }
}
