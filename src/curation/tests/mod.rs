use crate::categories::{Category, CategoryRegistry};
use crate::curation::{
    FactAssembler, LanguageDetector, LanguageError, TextStats, candidate_passages, curate_article,
};

const BLUE_WHALE: &str = "The blue whale is a marine mammal and a baleen whale.[1] Reaching a \
maximum confirmed length of 29.9 meters (98 ft) and weighing up to 199 tonnes, it is the largest \
animal known ever to have existed.

== Description ==
The blue whale has a long and slender body that can be various shades of greyish-blue on its back \
and somewhat lighter underneath.[2] It is one of the fastest whales in the ocean and it can swim at \
great speed over long distances when it needs to. Blue whales are among the loudest animals on the \
planet, and their calls can travel across whole ocean basins.[3]

== Diet ==
Its diet consists almost exclusively of krill. It eats a lot. Whales feed by lunging forward at \
groups of krill, taking the animals and a large quantity of water into their mouths.

== Population ==
In 1966, 1967, 1968, 1969, 1970 and 1971 counts were taken in 12 areas of the ocean.";

/// Accepts everything as English so tests exercise the other gates.
struct AlwaysEnglish;

impl LanguageDetector for AlwaysEnglish {
    fn detect(&self, _text: &str) -> Result<String, LanguageError> {
        Ok("en".to_string())
    }
}

const URL: &str = "https://en.wikipedia.org/wiki/Blue_whale";

#[test]
fn test_candidates_are_cleaned_and_bounded() {
    let registry = CategoryRegistry::new();
    let profile = registry.profile(Category::Nature);
    let candidates = candidate_passages(BLUE_WHALE, "Blue whale", URL, profile, &TextStats);

    assert!(!candidates.is_empty());
    assert!(candidates.len() <= 5);
    for candidate in &candidates {
        assert!(!candidate.text.contains('['));
        assert!(!candidate.text.contains("=="));
        assert!(!candidate.text.contains("(98 ft)"));
        assert_eq!(candidate.source_title, "Blue whale");
        assert_eq!(candidate.source_url, URL);
        assert_eq!(candidate.category, Category::Nature);
    }

    // Too many digit groups.
    assert!(candidates.iter().all(|c| !c.text.contains("1966")));
    // Too short.
    assert!(candidates.iter().all(|c| c.text != "It eats a lot."));
}

#[test]
fn test_candidates_keep_article_order() {
    let registry = CategoryRegistry::new();
    let profile = registry.profile(Category::Nature);
    let candidates = candidate_passages(BLUE_WHALE, "Blue whale", URL, profile, &TextStats);

    let positions: Vec<usize> = candidates
        .iter()
        .map(|c| {
            // Sentence endings survive cleaning untouched in this article.
            let chars: Vec<char> = c.text.chars().collect();
            let probe: String = chars[chars.len().saturating_sub(30)..].iter().collect();
            BLUE_WHALE.find(&probe).expect("candidate text comes from the article")
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_curated_facts_hold_invariants() {
    let registry = CategoryRegistry::new();
    let profile = registry.profile(Category::Nature);
    let assembler = FactAssembler::new(TextStats, AlwaysEnglish);

    let facts = curate_article(&assembler, BLUE_WHALE, "Blue whale", URL, profile);
    assert!(!facts.is_empty());

    for fact in &facts {
        let length = fact.content.chars().count();
        assert!((100..=2000).contains(&length), "length {length}");
        assert!(fact.popularity <= 100);
        assert!((1..=15).contains(&fact.reading_time));
        assert!(fact.tags.len() <= 8);
        assert!(fact.tags.contains(&"nature".to_string()));
        assert!(fact.title.chars().count() <= 103);
        assert_eq!(fact.source, "Wikipedia - Blue whale");
        assert_eq!(fact.source_url, URL);
    }
}

#[test]
fn test_curation_is_deterministic() {
    let registry = CategoryRegistry::new();
    let profile = registry.profile(Category::Science);
    let assembler = FactAssembler::with_defaults();

    let first = curate_article(&assembler, BLUE_WHALE, "Blue whale", URL, profile);
    let second = curate_article(&assembler, BLUE_WHALE, "Blue whale", URL, profile);
    assert_eq!(first, second);
}

#[test]
fn test_empty_article_yields_nothing() {
    let registry = CategoryRegistry::new();
    let profile = registry.profile(Category::Art);
    let assembler = FactAssembler::with_defaults();
    assert!(curate_article(&assembler, "", "Nothing", URL, profile).is_empty());
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use crate::curation::model::CandidatePassage;
    use crate::curation::{cleaner, popularity, sentences};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_clean_is_a_fixed_point(raw in "[a-zA-Z0-9 .,:\\[\\]()=\n\t]{0,200}") {
            let once = cleaner::clean(&raw);
            prop_assert_eq!(cleaner::clean(&once), once);
        }

        #[test]
        fn test_clean_is_a_fixed_point_over_markup_fragments(
            fragments in prop::collection::vec(
                prop::sample::select(vec![
                    "Category:", "File:", "Cat", "egory:", "Fi", "le:", ":", "=", "==",
                    "[", "]", "(", ")", " ", "\n", "whale", "krill",
                ]),
                0..40,
            ),
        ) {
            let raw = fragments.concat();
            let once = cleaner::clean(&raw);
            prop_assert_eq!(cleaner::clean(&once), once);
        }

        #[test]
        fn test_select_is_bounded_and_ordered(
            input in prop::collection::vec("[a-zA-Z ,]{0,120}", 0..20),
        ) {
            let registry = CategoryRegistry::new();
            let profile = registry.profile(Category::History);
            let selected = sentences::select(&input, profile, "Fuzz", &TextStats);

            prop_assert!(selected.len() <= 5);
            let mut remaining = input.iter().map(|s| s.trim());
            for s in &selected {
                prop_assert!(remaining.any(|candidate| candidate == s));
            }
        }

        #[test]
        fn test_assembled_facts_hold_invariants(text in "[a-zA-Z .,\\[\\]()]{0,2500}") {
            let assembler = FactAssembler::new(TextStats, AlwaysEnglish);
            let passage = CandidatePassage {
                text,
                source_title: "Fuzz".to_string(),
                source_url: URL.to_string(),
                category: Category::Culture,
            };
            if let Some(fact) = assembler.assemble(&passage) {
                let length = fact.content.chars().count();
                prop_assert!((100..=2000).contains(&length));
                prop_assert!(fact.popularity <= 100);
                prop_assert!((1..=15).contains(&fact.reading_time));
                prop_assert!(fact.tags.len() <= 8);
                prop_assert_eq!(fact.tags[0].as_str(), "culture");
            }
        }

        #[test]
        fn test_extra_keyword_never_lowers_popularity(
            content in "[a-z ]{0,80}",
            keyword in prop::sample::select(vec![
                "first", "largest", "smallest", "only", "unique", "discovered", "mystery",
            ]),
        ) {
            let before = popularity::score(&content, "science");
            let after = popularity::score(&format!("{content} {keyword}"), "science");
            prop_assert!(after >= before);
        }
    }
}
