//! Topical categories and their static configuration.
//!
//! Every category carries the seed topics used for article discovery and the
//! keywords that make a sentence relevant to it. The table is fixed at compile
//! time; lookups by name go through [`CategoryRegistry::lookup`] so callers
//! branch on an explicit unknown result.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    History,
    Science,
    Nature,
    Technology,
    Culture,
    Art,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::History,
        Category::Science,
        Category::Nature,
        Category::Technology,
        Category::Culture,
        Category::Art,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Science => "science",
            Self::Nature => "nature",
            Self::Technology => "technology",
            Self::Culture => "culture",
            Self::Art => "art",
        }
    }

    /// Initial popularity bonus granted to facts of this category.
    pub fn popularity_bonus(&self) -> i32 {
        match self {
            Self::History => 15,
            Self::Science => 20,
            Self::Nature => 15,
            Self::Technology => 25,
            Self::Culture => 10,
            Self::Art => 10,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Seed topics and relevance keywords for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProfile {
    pub category: Category,
    pub topics: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryLookup<'a> {
    Known(&'a CategoryProfile),
    Unknown,
}

static PROFILES: [CategoryProfile; 6] = [
    CategoryProfile {
        category: Category::History,
        topics: &[
            "Ancient history",
            "World War II",
            "Renaissance",
            "Roman Empire",
            "Ancient Egypt",
            "Medieval history",
            "Industrial Revolution",
            "Cold War",
            "American Civil War",
            "French Revolution",
            "Ancient Greece",
            "Byzantine Empire",
            "Ming Dynasty",
            "Ottoman Empire",
            "Spanish Inquisition",
            "Age of Exploration",
        ],
        keywords: &[
            "war",
            "empire",
            "civilization",
            "ancient",
            "medieval",
            "revolution",
        ],
    },
    CategoryProfile {
        category: Category::Science,
        topics: &[
            "Quantum physics",
            "DNA",
            "Evolution",
            "Solar system",
            "Periodic table",
            "Photosynthesis",
            "Gravity",
            "Relativity",
            "Genetics",
            "Astronomy",
            "Chemistry",
            "Biology",
            "Neuroscience",
            "Climate change",
            "Ecology",
            "Mathematics",
        ],
        keywords: &["theory", "discovery", "research", "experiment", "scientific"],
    },
    CategoryProfile {
        category: Category::Nature,
        topics: &[
            "Amazon rainforest",
            "Ocean",
            "Biodiversity",
            "Ecosystem",
            "Wildlife",
            "Marine biology",
            "Botany",
            "Zoology",
            "National parks",
            "Conservation",
            "Endangered species",
            "Coral reef",
            "Desert",
            "Mountain",
            "Forest",
            "River",
        ],
        keywords: &["animal", "plant", "species", "habitat", "conservation"],
    },
    CategoryProfile {
        category: Category::Technology,
        topics: &[
            "Internet",
            "Artificial intelligence",
            "Computer science",
            "Space exploration",
            "Robotics",
            "Biotechnology",
            "Nanotechnology",
            "Renewable energy",
            "Electric vehicle",
            "Blockchain",
            "Virtual reality",
            "Machine learning",
            "Quantum computing",
            "Cybersecurity",
            "Smartphone",
        ],
        keywords: &["innovation", "digital", "computer", "technology", "invention"],
    },
    CategoryProfile {
        category: Category::Culture,
        topics: &[
            "Literature",
            "Music",
            "Art",
            "Philosophy",
            "Religion",
            "Language",
            "Anthropology",
            "Sociology",
            "Psychology",
            "Mythology",
            "Folklore",
            "Tradition",
            "Festival",
            "Architecture",
            "Cuisine",
            "Fashion",
        ],
        keywords: &["cultural", "traditional", "artistic", "social"],
    },
    CategoryProfile {
        category: Category::Art,
        topics: &[
            "Painting",
            "Sculpture",
            "Renaissance art",
            "Modern art",
            "Photography",
            "Cinema",
            "Theater",
            "Dance",
            "Leonardo da Vinci",
            "Vincent van Gogh",
            "Pablo Picasso",
            "Michelangelo",
            "Salvador Dalí",
            "Impressionism",
            "Abstract art",
            "Street art",
        ],
        keywords: &["artistic", "creative", "aesthetic", "visual", "cultural"],
    },
];

/// Read-only view over the category table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRegistry {
    profiles: &'static [CategoryProfile],
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self {
            profiles: &PROFILES,
        }
    }

    pub fn profile(&self, category: Category) -> &CategoryProfile {
        // The table holds exactly one profile per variant, in declaration order.
        &self.profiles[category as usize]
    }

    pub fn lookup(&self, name: &str) -> CategoryLookup<'_> {
        match name.parse::<Category>() {
            Ok(category) => CategoryLookup::Known(self.profile(category)),
            Err(_) => CategoryLookup::Unknown,
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.profiles.iter().map(|p| p.category.name()).collect()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
