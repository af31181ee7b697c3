use regex::Regex;
use std::sync::LazyLock;

use crate::curation::model::truncate_with_ellipsis;
use crate::curation::sentences::split_sentences;

const MAX_TITLE_CHARS: usize = 100;
const MAX_SOURCE_TITLE_CHARS: usize = 80;
const MIN_KEY_WORD_CHARS: usize = 6;
const KEY_WORD_STOPWORDS: [&str; 7] = ["is", "was", "are", "were", "the", "a", "an"];

/// Openings that already read like a headline, in priority order.
static TITLE_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(.*?) is the (first|oldest|largest|smallest|highest|only)").unwrap(),
        Regex::new(r"(?i)(.*?) was (discovered|invented|created|founded)").unwrap(),
        Regex::new(r"(?i)(.*?) can (.*?)").unwrap(),
        Regex::new(r"(?i)The (.*?) is known for").unwrap(),
    ]
});

/// Derive a short title for a fact.
pub fn generate(content: &str, source_title: &str) -> String {
    let sentences = split_sentences(content);
    let first_sentence = sentences.first().map(String::as_str).unwrap_or(content);

    for pattern in TITLE_PATTERNS.iter() {
        if let Some(m) = pattern.find(first_sentence) {
            return truncate_with_ellipsis(m.as_str(), MAX_TITLE_CHARS);
        }
    }

    if let Some(key_word) = key_words(content).next() {
        return truncate_with_ellipsis(&format!("{source_title}: {key_word}"), MAX_TITLE_CHARS);
    }

    truncate_with_ellipsis(source_title, MAX_SOURCE_TITLE_CHARS)
}

/// Long, purely alphabetic words in order of appearance.
pub fn key_words(content: &str) -> impl Iterator<Item = &str> {
    content.split_whitespace().filter(|word| {
        !KEY_WORD_STOPWORDS.contains(&word.to_lowercase().as_str())
            && word.chars().count() >= MIN_KEY_WORD_CHARS
            && word.chars().all(char::is_alphabetic)
    })
}
