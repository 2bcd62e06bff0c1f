//! Static Fallback Tables: payloads served when the model call or its parse fails.
//!
//! Everything here is pure and deterministic. Tables are keyed either by
//! career category or by keyword matches against request text.

pub mod details;
pub mod expansion;
pub mod mind_maps;
pub mod roadmap;
pub mod suggestions;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Healthcare,
    Business,
    Creative,
    Education,
    Engineering,
    General,
}

/// Category keywords. Single words match whole tokens; phrases match as substrings.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Technology,
        &[
            "software", "programming", "coding", "code", "computer", "computers", "tech",
            "technology", "developer", "data", "ai", "web", "cyber", "cybersecurity",
            "information technology", "cloud", "machine learning", "artificial intelligence",
            "app", "apps",
        ],
    ),
    (
        Category::Healthcare,
        &[
            "health", "healthcare", "medical", "medicine", "nurse", "nursing", "doctor",
            "patient", "patients", "hospital", "biology", "pharmacy", "therapy", "clinical",
            "caring",
        ],
    ),
    (
        Category::Business,
        &[
            "business", "finance", "financial", "marketing", "management", "sales",
            "accounting", "economics", "entrepreneur", "entrepreneurship", "consulting",
            "startup", "leadership",
        ],
    ),
    (
        Category::Creative,
        &[
            "art", "arts", "design", "designer", "creative", "music", "writing", "film",
            "photography", "media", "fashion", "drawing", "animation", "graphic design",
        ],
    ),
    (
        Category::Education,
        &[
            "teach", "teaching", "teacher", "education", "school", "tutor", "tutoring",
            "training", "mentoring", "academic", "research", "children",
        ],
    ),
    (
        Category::Engineering,
        &[
            "engineering", "mechanical", "electrical", "civil", "construction",
            "manufacturing", "robotics", "aerospace", "automotive", "physics", "building",
        ],
    ),
];

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Technology,
        Category::Healthcare,
        Category::Business,
        Category::Creative,
        Category::Education,
        Category::Engineering,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Healthcare => "healthcare",
            Category::Business => "business",
            Category::Creative => "creative",
            Category::Education => "education",
            Category::Engineering => "engineering",
            Category::General => "general",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Picks the category with the most keyword hits; `General` when nothing matches.
    /// Ties go to the category listed first.
    pub fn detect(text: &str) -> Self {
        let text = text.to_lowercase();
        let tokens = tokenize(&text);

        let mut best = (Category::General, 0usize);
        for (category, keywords) in CATEGORY_KEYWORDS {
            let hits = keywords
                .iter()
                .filter(|kw| keyword_matches(&text, &tokens, kw))
                .count();
            if hits > best.1 {
                best = (*category, hits);
            }
        }
        best.0
    }

    /// An explicit, recognised category name wins over keyword detection.
    pub fn resolve(explicit: Option<&str>, text: &str) -> Self {
        explicit
            .and_then(Self::from_name)
            .filter(|c| *c != Category::General)
            .unwrap_or_else(|| Self::detect(text))
    }
}

pub(crate) fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Whole-token match for single words so "ai" does not hit "maintain".
pub(crate) fn keyword_matches(text: &str, tokens: &[&str], keyword: &str) -> bool {
    if keyword.contains(' ') {
        text.contains(keyword)
    } else {
        tokens.iter().any(|t| *t == keyword)
    }
}
