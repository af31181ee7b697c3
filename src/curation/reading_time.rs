const WORDS_PER_MINUTE: f64 = 225.0;
const MIN_MINUTES: u32 = 1;
const MAX_MINUTES: u32 = 15;

/// Estimated reading time in whole minutes, clamped to 1..=15.
pub fn estimate(content: &str) -> u32 {
    let words = content.split_whitespace().count() as f64;
    let minutes = (words / WORDS_PER_MINUTE).round() as u32;
    minutes.clamp(MIN_MINUTES, MAX_MINUTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_rounds_to_nearest_minute() {
        assert_eq!(estimate(&words(450)), 2);
        assert_eq!(estimate(&words(337)), 1);
        assert_eq!(estimate(&words(338)), 2);
    }

    #[test]
    fn test_never_below_one_minute() {
        assert_eq!(estimate(&words(20)), 1);
        assert_eq!(estimate(""), 1);
    }

    #[test]
    fn test_capped_at_fifteen_minutes() {
        assert_eq!(estimate(&words(225 * 15)), 15);
        assert_eq!(estimate(&words(10_000)), 15);
    }
}
