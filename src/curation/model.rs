use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::categories::Category;

/// Name of the encyclopedia that facts are attributed to.
pub const SOURCE_NAME: &str = "Wikipedia";

pub const MIN_FACT_CHARS: usize = 100;
pub const MAX_FACT_CHARS: usize = 2000;
pub const MAX_TAGS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentence picked from an article, together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePassage {
    pub text: String,
    pub source_title: String,
    pub source_url: String,
    pub category: Category,
}

/// A curated passage with all derived metadata. Built in one go by
/// [`crate::curation::assemble`]; there is no partially-filled state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    pub reading_time: u32,
    pub source: String,
    pub source_url: String,
    pub popularity: u8,
}

/// Character count, which is what every length limit on facts refers to.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Keep the first `max` characters, appending `...` when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if char_len(text) > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_serializes_camel_case() {
        let fact = Fact {
            title: "Title".to_string(),
            content: "Content".to_string(),
            category: Category::Nature,
            tags: vec!["nature".to_string()],
            difficulty: Difficulty::Intermediate,
            reading_time: 1,
            source: "Wikipedia - Ocean".to_string(),
            source_url: "https://en.wikipedia.org/wiki/Ocean".to_string(),
            popularity: 65,
        };

        let value = serde_json::to_value(&fact).unwrap();
        assert_eq!(value["readingTime"], 1);
        assert_eq!(value["sourceUrl"], "https://en.wikipedia.org/wiki/Ocean");
        assert_eq!(value["difficulty"], "intermediate");
        assert_eq!(value["category"], "nature");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("abcdef", 3), "abc...");
        assert_eq!(truncate_with_ellipsis("Dalí Dalí", 4), "Dalí...");
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
    }
}
