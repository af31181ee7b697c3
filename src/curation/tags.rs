use regex::Regex;
use std::sync::LazyLock;

use crate::curation::model::MAX_TAGS;

static CONCEPT_TAGS: LazyLock<[(&str, Regex); 7]> = LazyLock::new(|| {
    let tag = |name, pattern: &str| (name, Regex::new(pattern).unwrap());
    [
        tag(
            "animals",
            r"(?i)\b(animal|species|wildlife|creature|mammal|bird|fish|reptile|insect)\b",
        ),
        tag("discovery", r"(?i)\b(discover|found|uncover|reveal|detect)\b"),
        tag(
            "ancient",
            r"(?i)\b(ancient|old|historical|prehistoric|millennium|century)\b",
        ),
        tag(
            "science",
            r"(?i)\b(research|study|experiment|theory|scientific|discovery)\b",
        ),
        tag(
            "unique",
            r"(?i)\b(unique|rare|unusual|extraordinary|remarkable|special)\b",
        ),
        tag(
            "record",
            r"(?i)\b(largest|smallest|fastest|slowest|highest|deepest|first|last)\b",
        ),
        tag("mystery", r"(?i)\b(mystery|unknown|unexplained|puzzle|enigma)\b"),
    ]
});

// Runs of capitalised words; a stand-in for real named-entity recognition.
static PROPER_NOUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").unwrap());

const MAX_PROPER_NOUNS: usize = 3;
const MIN_PROPER_NOUN_CHARS: usize = 4;
const PROPER_NOUN_STOPWORDS: [&str; 4] = ["the", "and", "this", "that"];

/// Derive topical tags for a fact. The category always comes first; the rest
/// follow in discovery order without duplicates, at most [`MAX_TAGS`] in all.
pub fn extract(content: &str, category: &str) -> Vec<String> {
    let mut tags = TagList::new(category);

    for (name, pattern) in CONCEPT_TAGS.iter() {
        if pattern.is_match(content) {
            tags.push(name);
        }
    }

    for noun in PROPER_NOUN_REGEX
        .find_iter(content)
        .take(MAX_PROPER_NOUNS)
        .map(|m| m.as_str().to_lowercase())
    {
        if noun.chars().count() >= MIN_PROPER_NOUN_CHARS
            && !PROPER_NOUN_STOPWORDS.contains(&noun.as_str())
        {
            tags.push(&noun);
        }
    }

    tags.into_vec()
}

/// Insertion-ordered, deduplicating, size-capped tag list.
struct TagList(Vec<String>);

impl TagList {
    fn new(first: &str) -> Self {
        Self(vec![first.to_string()])
    }

    fn push(&mut self, tag: &str) {
        if self.0.len() < MAX_TAGS && !self.0.iter().any(|t| t == tag) {
            self.0.push(tag.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_always_first() {
        let tags = extract("nothing notable here", "art");
        assert_eq!(tags, vec!["art"]);
    }

    #[test]
    fn test_concept_tags_in_fixed_order() {
        let content = "a rare mammal species was the first of its kind; the mystery remains";
        assert_eq!(
            extract(content, "nature"),
            vec!["nature", "animals", "unique", "record", "mystery"]
        );
    }

    #[test]
    fn test_concept_tags_need_whole_words() {
        // "birds", "founded" and "older" are not in the vocabulary as written.
        let tags = extract("birds founded older towns", "history");
        assert_eq!(tags, vec!["history"]);
    }

    #[test]
    fn test_proper_nouns_lowercased_and_filtered() {
        let content = "The Great Barrier Reef lies off Australia near Cairns and Fiji.";
        // Only the first three runs are considered: "The Great Barrier Reef",
        // "Australia", "Cairns". "Fiji" is never reached.
        assert_eq!(
            extract(content, "nature"),
            vec!["nature", "the great barrier reef", "australia", "cairns"]
        );
    }

    #[test]
    fn test_short_and_stopword_nouns_dropped() {
        let content = "This is Ohio. That is Rome. The end.";
        // "This", "Ohio", "That" are the first three runs.
        assert_eq!(extract(content, "history"), vec!["history", "ohio"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let content = "Science matters. Science again. Science.";
        assert_eq!(extract(content, "science"), vec!["science"]);
    }

    #[test]
    fn test_capped_at_eight() {
        let content = "The ancient mammal was the first rare research mystery found by \
                       Darwin in Galapagos with Wallace.";
        let tags = extract(content, "science");
        assert_eq!(tags.len(), MAX_TAGS);
        assert_eq!(tags[0], "science");
        assert_eq!(
            tags,
            vec![
                "science",
                "animals",
                "discovery",
                "ancient",
                "unique",
                "record",
                "mystery",
                "darwin"
            ]
        );
    }
}
