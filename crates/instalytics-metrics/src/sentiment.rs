//! Lexicon comment sentiment.
//!
//! A deliberately small word-list classifier. Each lexicon word is
//! checked against the lowercased comment text with a substring match
//! and contributes at most once, however often it repeats in the text.

use instalytics_core::ContentItem;

use crate::types::{ItemSentiment, SentimentReport};
use crate::util::percentage;

const POSITIVE_WORDS: [&str; 20] = [
    "good",
    "great",
    "awesome",
    "excellent",
    "amazing",
    "love",
    "beautiful",
    "perfect",
    "best",
    "fantastic",
    "wonderful",
    "happy",
    "nice",
    "brilliant",
    "outstanding",
    "superb",
    "impressive",
    "exceptional",
    "terrific",
    "fabulous",
];

const NEGATIVE_WORDS: [&str; 20] = [
    "bad",
    "terrible",
    "awful",
    "horrible",
    "poor",
    "disappointing",
    "worst",
    "hate",
    "dislike",
    "mediocre",
    "useless",
    "boring",
    "stupid",
    "waste",
    "annoying",
    "frustrating",
    "pathetic",
    "ridiculous",
    "lousy",
    "unpleasant",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Positive,
    Negative,
    Neutral,
}

fn classify(text: &str) -> Polarity {
    let lowered = text.to_lowercase();
    let positive = POSITIVE_WORDS.iter().filter(|w| lowered.contains(**w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| lowered.contains(**w)).count();
    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Polarity::Positive,
        std::cmp::Ordering::Less => Polarity::Negative,
        std::cmp::Ordering::Equal => Polarity::Neutral,
    }
}

pub(crate) fn sentiment_analysis(items: &[ContentItem]) -> Option<SentimentReport> {
    if items.is_empty() {
        return None;
    }

    let mut total = 0usize;
    let mut positive_comments = 0usize;
    let mut negative_comments = 0usize;
    let mut neutral_comments = 0usize;
    let mut content_sentiment = Vec::with_capacity(items.len());

    for item in items {
        let mut tally = ItemSentiment {
            id: item.id.clone(),
            positive: 0,
            negative: 0,
            neutral: 0,
            total: 0,
        };
        for comment in &item.latest_comments {
            let Some(text) = comment.text.as_deref() else {
                continue;
            };
            if text.is_empty() {
                continue;
            }
            total += 1;
            tally.total += 1;
            match classify(text) {
                Polarity::Positive => {
                    tally.positive += 1;
                    positive_comments += 1;
                }
                Polarity::Negative => {
                    tally.negative += 1;
                    negative_comments += 1;
                }
                Polarity::Neutral => {
                    tally.neutral += 1;
                    neutral_comments += 1;
                }
            }
        }
        content_sentiment.push(tally);
    }

    Some(SentimentReport {
        total_comments_analyzed: total,
        positive_comments,
        negative_comments,
        neutral_comments,
        positive_percentage: percentage(positive_comments, total),
        negative_percentage: percentage(negative_comments, total),
        neutral_percentage: percentage(neutral_comments, total),
        content_sentiment,
    })
}
