use crate::curation::model::Difficulty;
use crate::curation::readability::ReadabilityMetrics;

/// Inputs to the tier decision, split out so the thresholds can be reasoned
/// about without a text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadabilityProfile {
    pub reading_ease: f64,
    pub grade_level: f64,
    pub complex_ratio: f64,
}

impl ReadabilityProfile {
    pub fn measure(content: &str, metrics: &dyn ReadabilityMetrics) -> Self {
        let total_words = content.split_whitespace().count();
        let complex_ratio = if total_words == 0 {
            0.0
        } else {
            metrics.difficult_word_count(content) as f64 / total_words as f64
        };

        Self {
            reading_ease: metrics.flesch_reading_ease(content),
            grade_level: metrics.flesch_kincaid_grade(content),
            complex_ratio,
        }
    }

    pub fn tier(&self) -> Difficulty {
        if self.reading_ease >= 70.0 && self.grade_level <= 8.0 && self.complex_ratio < 0.15 {
            Difficulty::Beginner
        } else if self.reading_ease >= 50.0 && self.grade_level <= 12.0 && self.complex_ratio < 0.25
        {
            Difficulty::Intermediate
        } else {
            Difficulty::Advanced
        }
    }
}

pub fn classify(content: &str, metrics: &dyn ReadabilityMetrics) -> Difficulty {
    ReadabilityProfile::measure(content, metrics).tier()
}
