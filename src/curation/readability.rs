use std::collections::HashSet;

use crate::curation::sentences::split_sentences;

/// Readability formulas used to filter sentences and grade difficulty.
pub trait ReadabilityMetrics: Send + Sync {
    /// Flesch reading ease; higher is easier, roughly 0-100 for prose.
    fn flesch_reading_ease(&self, text: &str) -> f64;

    /// Flesch-Kincaid US grade level.
    fn flesch_kincaid_grade(&self, text: &str) -> f64;

    /// Number of distinct hard words in the text.
    fn difficult_word_count(&self, text: &str) -> usize;
}

/// Syllable-counting implementation of the standard formulas.
///
/// Syllables are vowel groups with a silent trailing `e` discounted, which
/// is close enough for English prose. A word counts as difficult when it has
/// three or more syllables.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStats;

const DIFFICULT_SYLLABLES: usize = 3;

struct Counts {
    sentences: usize,
    words: usize,
    syllables: usize,
}

impl TextStats {
    fn counts(text: &str) -> Counts {
        let words: Vec<String> = words(text).collect();
        Counts {
            sentences: split_sentences(text).len().max(1),
            words: words.len(),
            syllables: words.iter().map(|w| count_syllables(w)).sum(),
        }
    }
}

impl ReadabilityMetrics for TextStats {
    fn flesch_reading_ease(&self, text: &str) -> f64 {
        let c = Self::counts(text);
        if c.words == 0 {
            return 0.0;
        }
        let words_per_sentence = c.words as f64 / c.sentences as f64;
        let syllables_per_word = c.syllables as f64 / c.words as f64;
        206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word
    }

    fn flesch_kincaid_grade(&self, text: &str) -> f64 {
        let c = Self::counts(text);
        if c.words == 0 {
            return 0.0;
        }
        let words_per_sentence = c.words as f64 / c.sentences as f64;
        let syllables_per_word = c.syllables as f64 / c.words as f64;
        0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59
    }

    fn difficult_word_count(&self, text: &str) -> usize {
        words(text)
            .filter(|w| count_syllables(w) >= DIFFICULT_SYLLABLES)
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Lower-cased words with surrounding punctuation removed.
fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|token| {
            token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.is_empty() {
        // Numbers and symbols read as one unit.
        return 1;
    }

    let mut count = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    let n = letters.len();
    if n > 2 && letters[n - 1] == 'e' && count > 1 {
        // "table" keeps its final syllable, "whale" does not.
        let consonant_le = letters[n - 2] == 'l' && !is_vowel(letters[n - 3]);
        if !consonant_le {
            count -= 1;
        }
    }

    count.max(1)
}
