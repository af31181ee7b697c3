use thiserror::Error;
use whatlang::{Lang, detect};

const MIN_CONFIDENCE: f64 = 0.25;
const MIN_TEXT_LENGTH: usize = 50;

pub const ENGLISH: &str = "en";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("language could not be determined")]
    Undetermined,
}

pub trait LanguageDetector: Send + Sync {
    /// Two-letter code for common Wikipedia languages, otherwise ISO 639-3.
    fn detect(&self, text: &str) -> Result<String, LanguageError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<String, LanguageError> {
        if text.trim().len() < MIN_TEXT_LENGTH {
            return Err(LanguageError::Undetermined);
        }

        match detect(text) {
            Some(info) if info.confidence() >= MIN_CONFIDENCE => Ok(lang_to_code(info.lang())),
            _ => Err(LanguageError::Undetermined),
        }
    }
}

/// Two-letter codes for the larger Wikipedia editions.
const WIKI_EDITION_CODES: [(Lang, &str); 12] = [
    (Lang::Eng, ENGLISH),
    (Lang::Deu, "de"),
    (Lang::Fra, "fr"),
    (Lang::Spa, "es"),
    (Lang::Ita, "it"),
    (Lang::Por, "pt"),
    (Lang::Nld, "nl"),
    (Lang::Rus, "ru"),
    (Lang::Ukr, "uk"),
    (Lang::Jpn, "ja"),
    (Lang::Cmn, "zh"),
    (Lang::Ara, "ar"),
];

fn lang_to_code(lang: Lang) -> String {
    WIKI_EDITION_CODES
        .iter()
        .find(|(known, _)| *known == lang)
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| lang.code().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_english() {
        let text = "The blue whale is the largest animal ever known to have existed on Earth. \
                    It feeds almost entirely on tiny animals called krill.";
        assert_eq!(WhatlangDetector.detect(text), Ok("en".to_string()));
    }

    #[test]
    fn test_detect_french_article() {
        let text = "La tour Eiffel est une tour de fer construite par Gustave Eiffel \
                    pour l'Exposition universelle de Paris en 1889.";
        assert_eq!(WhatlangDetector.detect(text), Ok("fr".to_string()));
    }

    #[test]
    fn test_short_text_is_undetermined() {
        assert_eq!(
            WhatlangDetector.detect("Blue whale"),
            Err(LanguageError::Undetermined)
        );
    }

    #[test]
    fn test_infobox_numbers_are_undetermined() {
        let text = "1889 | 330 | 10100 | 1665 | 48.8584 | 2.2945 | 7000000 | 2018 | 276 | 57";
        assert_eq!(WhatlangDetector.detect(text), Err(LanguageError::Undetermined));
    }

    #[test]
    fn test_unlisted_language_falls_back_to_three_letter_code() {
        assert_eq!(lang_to_code(Lang::Epo), "epo");
        assert_eq!(lang_to_code(Lang::Ukr), "uk");
    }
}
