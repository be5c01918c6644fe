//! Keyword-based topic extraction from uploaded notes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::Topic;

const MAX_TOPICS: usize = 15;
const SCORE_PER_MENTION: usize = 20;

/// Topics the extractor recognizes in note text.
const TOPIC_LEXICON: &[&str] = &[
    "Machine Learning",
    "Artificial Intelligence",
    "Neural Networks",
    "Deep Learning",
    "Natural Language Processing",
    "Computer Vision",
    "Data Science",
    "Algorithms",
    "Data Structures",
    "Programming",
];

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.,!?;:-]").expect("character filter pattern is valid"));

/// Collapses whitespace runs and strips characters outside basic
/// punctuation.
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    DISALLOWED.replace_all(&collapsed, "").trim().to_string()
}

/// Scans the notes for known topics, scoring each by mention count. Empty
/// notes or a scan with no hits return the built-in default topic set so
/// downstream generation always has topics to work with.
pub fn extract_topics(notes: &str) -> Vec<Topic> {
    if notes.trim().is_empty() {
        return default_topics();
    }

    let haystack = notes.to_lowercase();
    let mut topics: Vec<Topic> = TOPIC_LEXICON
        .iter()
        .filter_map(|name| {
            let count = haystack.matches(&name.to_lowercase()).count();
            if count == 0 {
                None
            } else {
                Some(Topic::new(*name, (count * SCORE_PER_MENTION).min(100) as u8))
            }
        })
        .collect();

    if topics.is_empty() {
        return default_topics();
    }

    topics.sort_by(|a, b| b.importance_score.cmp(&a.importance_score));
    topics.truncate(MAX_TOPICS);
    topics
}

fn default_topics() -> Vec<Topic> {
    vec![
        Topic::new("Machine Learning", 90),
        Topic::new("Artificial Intelligence", 85),
        Topic::new("Neural Networks", 80),
        Topic::new("Data Science", 75),
        Topic::new("Deep Learning", 70),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_collapses_whitespace_and_strips_noise() {
        let cleaned = clean_text("Machine\n\nLearning\t rocks! ©®");
        assert_eq!(cleaned, "Machine Learning rocks!");
    }

    #[test]
    fn extract_topics_scores_by_mention_count() {
        let notes = "machine learning and more machine learning, plus neural networks";

        let topics = extract_topics(notes);

        assert_eq!(topics[0].name, "Machine Learning");
        assert_eq!(topics[0].importance_score, 40);
        assert!(topics.iter().any(|t| t.name == "Neural Networks"));
    }

    #[test]
    fn extract_topics_caps_score_at_100() {
        let notes = "algorithms ".repeat(20);

        let topics = extract_topics(&notes);

        assert_eq!(topics[0].name, "Algorithms");
        assert_eq!(topics[0].importance_score, 100);
    }

    #[test]
    fn empty_or_unmatched_notes_fall_back_to_default_topics() {
        assert!(!extract_topics("").is_empty());

        let topics = extract_topics("completely unrelated gardening notes");
        assert_eq!(topics[0].name, "Machine Learning");
        assert_eq!(topics.len(), 5);
    }

    #[test]
    fn extraction_is_case_insensitive() {
        let topics = extract_topics("DEEP LEARNING basics");
        assert!(topics.iter().any(|t| t.name == "Deep Learning"));
    }
}
