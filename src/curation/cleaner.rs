use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// Non-nested and lazy: "[a [b] c]" loses "[a [b]" and keeps " c]".
static CITATION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.*?\]").unwrap());

static PARENTHETICAL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(.*?\)").unwrap());

// Header markup and namespace prefixes in one alternation.
static MARKUP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"={2,}|Category:|File:").unwrap());

/// Normalize raw article text into plain prose.
///
/// Collapses whitespace, drops citation markers and parenthetical asides,
/// removes section-header markup and namespace prefixes. Applying it to its
/// own output returns the same string.
pub fn clean(raw: &str) -> String {
    let mut text = clean_pass(raw);
    // A removal can splice new markup together ("=File:=" becomes "=="),
    // so repeat until nothing changes. After the first pass every change is
    // a deletion.
    loop {
        let next = clean_pass(&text);
        if next == text {
            return text;
        }
        text = next;
    }
}

fn clean_pass(raw: &str) -> String {
    let text = WHITESPACE_REGEX.replace_all(raw, " ");
    let text = CITATION_REGEX.replace_all(&text, "");
    let text = PARENTHETICAL_REGEX.replace_all(&text, "");
    let text = MARKUP_REGEX.replace_all(&text, "");

    // Removals above can leave double spaces behind.
    WHITESPACE_REGEX.replace_all(&text, " ").trim().to_string()
}
