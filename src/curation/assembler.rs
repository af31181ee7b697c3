use thiserror::Error;
use tracing::debug;

use crate::curation::cleaner::clean;
use crate::curation::language::{ENGLISH, LanguageDetector, LanguageError, WhatlangDetector};
use crate::curation::model::{
    CandidatePassage, Fact, MAX_FACT_CHARS, MIN_FACT_CHARS, SOURCE_NAME, char_len,
};
use crate::curation::readability::{ReadabilityMetrics, TextStats};
use crate::curation::{difficulty, popularity, reading_time, tags, title};

/// Why a passage did not become a fact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("content too short ({0} chars)")]
    TooShort(usize),

    #[error("content too long ({0} chars)")]
    TooLong(usize),

    #[error(transparent)]
    Language(#[from] LanguageError),

    #[error("content is not English (detected {0})")]
    NotEnglish(String),
}

/// Turns candidate passages into facts, deriving every metadata field.
pub struct FactAssembler<M = TextStats, L = WhatlangDetector> {
    metrics: M,
    detector: L,
}

impl FactAssembler {
    pub fn with_defaults() -> Self {
        Self::new(TextStats, WhatlangDetector)
    }
}

impl<M: ReadabilityMetrics, L: LanguageDetector> FactAssembler<M, L> {
    pub fn new(metrics: M, detector: L) -> Self {
        Self { metrics, detector }
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Build a fact, or `None` when the passage fails a gate.
    pub fn assemble(&self, passage: &CandidatePassage) -> Option<Fact> {
        match self.evaluate(passage) {
            Ok(fact) => Some(fact),
            Err(rejection) => {
                debug!(
                    article = %passage.source_title,
                    reason = %rejection,
                    "Passage rejected"
                );
                None
            }
        }
    }

    pub fn evaluate(&self, passage: &CandidatePassage) -> Result<Fact, Rejection> {
        let content = clean(&passage.text);

        let length = char_len(&content);
        if length < MIN_FACT_CHARS {
            return Err(Rejection::TooShort(length));
        }
        if length > MAX_FACT_CHARS {
            return Err(Rejection::TooLong(length));
        }

        let language = self.detector.detect(&content)?;
        if language != ENGLISH {
            return Err(Rejection::NotEnglish(language));
        }

        let category = passage.category.name();
        Ok(Fact {
            title: title::generate(&content, &passage.source_title),
            tags: tags::extract(&content, category),
            difficulty: difficulty::classify(&content, &self.metrics),
            reading_time: reading_time::estimate(&content),
            popularity: popularity::score(&content, category),
            source: format!("{SOURCE_NAME} - {}", passage.source_title),
            source_url: passage.source_url.clone(),
            category: passage.category,
            content,
        })
    }
}
