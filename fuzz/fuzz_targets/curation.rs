#![no_main]

use libfuzzer_sys::fuzz_target;

use factsmith::categories::{Category, CategoryRegistry};
use factsmith::curation::{self, FactAssembler, cleaner};

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let text = String::from_utf8_lossy(data);

    let cleaned = cleaner::clean(&text);
    assert_eq!(cleaner::clean(&cleaned), cleaned);

    // Curation should never panic regardless of input
    let registry = CategoryRegistry::new();
    let assembler = FactAssembler::with_defaults();
    for category in Category::ALL {
        let facts = curation::curate_article(
            &assembler,
            &text,
            "Fuzz",
            "https://en.wikipedia.org/wiki/Fuzz",
            registry.profile(category),
        );
        assert!(facts.len() <= 5);
        for fact in facts {
            assert!(fact.tags.len() <= 8);
            assert!(fact.popularity <= 100);
            assert!((1..=15).contains(&fact.reading_time));
        }
    }
});
