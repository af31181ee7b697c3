//! Rule-based curation of article text into facts.
//!
//! Every step here is a pure function of its inputs. Readability scoring and
//! language detection sit behind traits so other implementations can be
//! dropped in.

pub mod assembler;
pub mod cleaner;
pub mod difficulty;
pub mod language;
pub mod model;
pub mod popularity;
pub mod readability;
pub mod reading_time;
pub mod sentences;
pub mod tags;
pub mod title;

#[cfg(test)]
mod tests;

pub use assembler::{FactAssembler, Rejection};
pub use language::{LanguageDetector, LanguageError, WhatlangDetector};
pub use model::{CandidatePassage, Difficulty, Fact};
pub use readability::{ReadabilityMetrics, TextStats};

use crate::categories::CategoryProfile;

/// Split an article into sentences, clean each one, and keep the
/// interesting ones as candidate passages.
pub fn candidate_passages(
    article_text: &str,
    article_title: &str,
    article_url: &str,
    profile: &CategoryProfile,
    metrics: &dyn ReadabilityMetrics,
) -> Vec<CandidatePassage> {
    let cleaned: Vec<String> = sentences::split_sentences(article_text)
        .iter()
        .map(|s| cleaner::clean(s))
        .collect();

    sentences::select(&cleaned, profile, article_title, metrics)
        .into_iter()
        .map(|text| CandidatePassage {
            text,
            source_title: article_title.to_string(),
            source_url: article_url.to_string(),
            category: profile.category,
        })
        .collect()
}

/// Run the whole curation pipeline over one article.
pub fn curate_article<M: ReadabilityMetrics, L: LanguageDetector>(
    assembler: &FactAssembler<M, L>,
    article_text: &str,
    article_title: &str,
    article_url: &str,
    profile: &CategoryProfile,
) -> Vec<Fact> {
    candidate_passages(
        article_text,
        article_title,
        article_url,
        profile,
        assembler.metrics(),
    )
    .iter()
    .filter_map(|passage| assembler.assemble(passage))
    .collect()
}
