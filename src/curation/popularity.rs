use crate::categories::Category;

const BASE_SCORE: i32 = 50;
const KEYWORD_BOOST: i32 = 10;
const BOOST_KEYWORDS: [&str; 7] = [
    "first",
    "largest",
    "smallest",
    "only",
    "unique",
    "discovered",
    "mystery",
];

/// Initial popularity on a 0-100 scale.
///
/// Each boost keyword found anywhere in the content counts once, however
/// often it appears. Category names outside the registry get no bonus.
pub fn score(content: &str, category: &str) -> u8 {
    let lowered = content.to_lowercase();
    let keyword_hits = BOOST_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count() as i32;

    let category_bonus = category
        .parse::<Category>()
        .map(|c| c.popularity_bonus())
        .unwrap_or(0);

    (BASE_SCORE + keyword_hits * KEYWORD_BOOST + category_bonus).clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_and_category_bonus() {
        let content = "It was the first and the largest bridge of its time.";
        assert_eq!(score(content, "technology"), 95);
        assert_eq!(score(content, "art"), 80);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        assert_eq!(score("first, first, FIRST", "culture"), 70);
    }

    #[test]
    fn test_unknown_category_gets_no_bonus() {
        assert_eq!(score("nothing special", "sports"), 50);
    }

    #[test]
    fn test_clamped_at_one_hundred() {
        let content = "The first, largest, smallest, only, unique, discovered mystery.";
        assert_eq!(score(content, "technology"), 100);
    }

    #[test]
    fn test_monotonic_in_keyword_count() {
        let mut content = String::new();
        let mut previous = score(&content, "history");
        for keyword in BOOST_KEYWORDS {
            content.push_str(keyword);
            content.push(' ');
            let current = score(&content, "history");
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(previous, 100);
    }
}
