use regex::{Regex, RegexSet};
use std::sync::LazyLock;
use tracing::{debug, instrument};

use crate::categories::CategoryProfile;
use crate::curation::model::char_len;
use crate::curation::readability::ReadabilityMetrics;

pub const MAX_SENTENCES_PER_ARTICLE: usize = 5;
// Both bounds are inclusive: a sentence of exactly 50 or 500 chars is kept.
const MIN_SENTENCE_CHARS: usize = 50;
const MAX_SENTENCE_CHARS: usize = 500;
const MAX_DIGIT_GROUPS: usize = 5;
const MIN_READING_EASE: f64 = 30.0;

/// Cues that a sentence states something worth showing on its own:
/// superlatives, origins, rarity, absolutes, received belief, capability.
/// Plain substring matches, so "can" also hits "Canada".
static INTERESTING_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)first|oldest|largest|smallest|highest|deepest|fastest|slowest",
        r"(?i)discovered|invented|created|founded|established",
        r"(?i)unusual|unique|rare|extraordinary|remarkable|surprising",
        r"(?i)only|never|always|most|least",
        r"(?i)believed|thought|considered|known",
        r"(?i)can|ability|capable|able",
    ])
    .unwrap()
});

static DIGIT_GROUP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

static PARAGRAPH_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

const ABBREVIATIONS: [&str; 22] = [
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "no", "fig", "approx", "ca",
    "gen", "col", "lt", "sgt", "capt", "mt", "ft", "inc",
];

/// Split text into sentences.
///
/// A sentence ends at `.`, `!` or `?` (plus any closing quotes) when
/// whitespace follows and the next word starts like a sentence. Periods after
/// common abbreviations and initials do not end a sentence. Blank lines always
/// do.
pub fn split_sentences(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK_REGEX
        .split(text)
        .flat_map(split_paragraph)
        .collect()
}

fn split_paragraph(paragraph: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = paragraph.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }

        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if matches!(next, '.' | '!' | '?' | '"' | '\'' | '”' | '’' | ')') {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        if !starts_new_sentence(&paragraph[end..]) {
            continue;
        }
        if c == '.' && ends_with_abbreviation(&paragraph[start..i]) {
            continue;
        }

        push_trimmed(&mut sentences, &paragraph[start..end]);
        start = end;
    }

    push_trimmed(&mut sentences, &paragraph[start..]);
    sentences
}

fn starts_new_sentence(rest: &str) -> bool {
    if !rest.starts_with(char::is_whitespace) {
        return false;
    }
    match rest.trim_start().chars().next() {
        Some(c) => {
            c.is_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '\'' | '“' | '‘' | '(')
        }
        None => false,
    }
}

fn ends_with_abbreviation(before: &str) -> bool {
    let Some(token) = before.split_whitespace().last() else {
        return false;
    };
    let token = token
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    if ABBREVIATIONS.contains(&token.as_str()) {
        return true;
    }

    // Initials and dotted abbreviations: "J", "U.S", "e.g", "i.e".
    token
        .split('.')
        .all(|part| part.chars().count() == 1 && part.chars().all(char::is_alphabetic))
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// Whether a single sentence qualifies as a fact candidate.
pub fn is_interesting(
    sentence: &str,
    profile: &CategoryProfile,
    metrics: &dyn ReadabilityMetrics,
) -> bool {
    let length = char_len(sentence);
    if !(MIN_SENTENCE_CHARS..=MAX_SENTENCE_CHARS).contains(&length) {
        return false;
    }

    if DIGIT_GROUP_REGEX.find_iter(sentence).count() > MAX_DIGIT_GROUPS {
        return false;
    }

    let lowered = sentence.to_lowercase();
    let has_pattern = INTERESTING_PATTERNS.is_match(sentence);
    let has_keyword = profile.keywords.iter().any(|k| lowered.contains(k));
    if !has_pattern && !has_keyword {
        return false;
    }

    metrics.flesch_reading_ease(sentence) > MIN_READING_EASE
}

/// Pick the first few interesting sentences of an article, in source order.
#[instrument(level = "debug", skip_all, fields(article = %article_title, category = %profile.category))]
pub fn select<S: AsRef<str>>(
    sentences: &[S],
    profile: &CategoryProfile,
    article_title: &str,
    metrics: &dyn ReadabilityMetrics,
) -> Vec<String> {
    let selected: Vec<String> = sentences
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| is_interesting(s, profile, metrics))
        .take(MAX_SENTENCES_PER_ARTICLE)
        .map(str::to_string)
        .collect();

    debug!(
        total = sentences.len(),
        selected = selected.len(),
        "Selected interesting sentences"
    );
    selected
}
