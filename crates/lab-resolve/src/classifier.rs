//! Tag classification against the closed vocabulary.
//!
//! [`TagClassifier`] is the seam for any classifier, including model-backed
//! ones that call out to an external provider. [`KeywordClassifier`] is the
//! built-in offline implementation.

use std::collections::BTreeSet;
use std::future::Future;

use lab_core::errors::ProviderError;
use lab_core::fields::ValidatedLab;
use lab_core::vocabulary::TagName;

/// The free text a classifier looks at.
#[derive(Debug, Clone, Copy)]
pub struct LabText<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub department: &'a str,
    pub research_areas: &'a [String],
}

impl<'a> From<&'a ValidatedLab> for LabText<'a> {
    fn from(lab: &'a ValidatedLab) -> Self {
        Self {
            name: &lab.name,
            description: &lab.description,
            department: &lab.department,
            research_areas: &lab.research_areas,
        }
    }
}

/// Maps lab text to a subset of the vocabulary. An empty set is a valid result.
pub trait TagClassifier: Send + Sync {
    fn classify(
        &self,
        text: &LabText<'_>,
    ) -> impl Future<Output = Result<BTreeSet<TagName>, ProviderError>> + Send;
}

/// Keyword patterns per tag.
///
/// A pattern is a single word (token equality), a space-separated phrase
/// (consecutive tokens), or a stem ending in `*` (token prefix).
const KEYWORDS: &[(TagName, &[&str])] = &[
    (
        TagName::AiMl,
        &[
            "ai",
            "ml",
            "artificial intelligence",
            "machine learning",
            "deep learning",
            "reinforcement learning",
            "neural network*",
            "computer vision",
            "natural language",
            "nlp",
        ],
    ),
    (
        TagName::ComputerScience,
        &[
            "computer science",
            "computing",
            "computation*",
            "algorithm*",
            "software",
            "programming",
            "compiler*",
            "distributed systems",
            "cybersecurity",
        ],
    ),
    (
        TagName::Engineering,
        &[
            "engineer*",
            "robot*",
            "mechanical",
            "electrical",
            "aerospace",
            "materials",
        ],
    ),
    (
        TagName::DataScience,
        &[
            "data science",
            "big data",
            "data mining",
            "statistic*",
            "analytics",
            "datasets",
        ],
    ),
    (
        TagName::Biology,
        &[
            "bio*",
            "neural",
            "neuron*",
            "brain",
            "cell",
            "cells",
            "cellular",
            "genetic*",
            "genom*",
            "molecular",
            "protein*",
            "organism*",
            "evolution*",
        ],
    ),
    (
        TagName::Chemistry,
        &["chem*", "catalys*", "polymer*", "spectroscopy"],
    ),
    (
        TagName::Physics,
        &[
            "physic*",
            "quantum",
            "optics",
            "optical",
            "astrophysic*",
            "particle*",
            "condensed matter",
        ],
    ),
    (
        TagName::Mathematics,
        &[
            "math*",
            "algebra*",
            "geometry",
            "topology",
            "theorem*",
            "probability",
        ],
    ),
    (
        TagName::Medicine,
        &[
            "medicine",
            "medical",
            "clinic*",
            "patient*",
            "disease*",
            "cancer",
            "oncology",
            "surg*",
            "pharma*",
        ],
    ),
    (
        TagName::Neuroscience,
        &["neuro*", "neural", "brain", "cognit*", "fmri", "eeg"],
    ),
    (
        TagName::Psychology,
        &["psych*", "behavior*", "behaviour*", "mental", "emotion*"],
    ),
    (
        TagName::Environmental,
        &[
            "environment*",
            "climate",
            "ecolog*",
            "sustainab*",
            "ocean*",
            "atmospher*",
        ],
    ),
    (
        TagName::SocialSciences,
        &[
            "social",
            "sociolog*",
            "econom*",
            "politic*",
            "anthropolog*",
            "policy",
        ],
    ),
    (
        TagName::Humanities,
        &[
            "humanities",
            "history",
            "historical",
            "philosoph*",
            "literature",
            "linguistic*",
        ],
    ),
    (
        TagName::Arts,
        &["art", "arts", "music*", "theater", "theatre", "film", "creative"],
    ),
    (
        TagName::Business,
        &[
            "business",
            "management",
            "financ*",
            "marketing",
            "entrepreneur*",
            "accounting",
        ],
    ),
    (
        TagName::Education,
        &[
            "education*",
            "teaching",
            "pedagog*",
            "curriculum",
            "learning sciences",
        ],
    ),
    (
        TagName::Academic,
        &[
            "academic*",
            "university",
            "college",
            "school",
            "faculty",
            "sciences",
        ],
    ),
    (
        TagName::Research,
        &[
            "research*",
            "lab",
            "labs",
            "laborator*",
            "study",
            "studies",
            "investigat*",
        ],
    ),
    (
        TagName::Technology,
        &["technolog*", "tech", "digital", "devices", "hardware", "innovation"],
    ),
    (
        TagName::Health,
        &["health*", "wellness", "nutrition", "epidemiolog*"],
    ),
    (
        TagName::Community,
        &[
            "community",
            "communities",
            "outreach",
            "civic",
            "volunteer*",
            "nonprofit",
        ],
    ),
];

/// Offline classifier matching lowercase word tokens against a keyword table.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Synchronous core of [`TagClassifier::classify`].
    #[must_use]
    pub fn tags_for(&self, text: &LabText<'_>) -> BTreeSet<TagName> {
        let mut tokens = tokenize(text.name);
        tokens.extend(tokenize(text.description));
        tokens.extend(tokenize(text.department));
        for area in text.research_areas {
            tokens.extend(tokenize(area));
        }

        KEYWORDS
            .iter()
            .filter(|(_, patterns)| patterns.iter().any(|p| matches_pattern(p, &tokens)))
            .map(|(tag, _)| *tag)
            .collect()
    }
}

impl TagClassifier for KeywordClassifier {
    async fn classify(&self, text: &LabText<'_>) -> Result<BTreeSet<TagName>, ProviderError> {
        let tags = self.tags_for(text);
        tracing::debug!(name = text.name, tags = tags.len(), "keyword classification");
        Ok(tags)
    }
}

/// Lowercase alphanumeric runs. Field boundaries are not tracked, so a phrase
/// may match across two fields.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn matches_pattern(pattern: &str, tokens: &[String]) -> bool {
    if let Some(stem) = pattern.strip_suffix('*') {
        if stem.contains(' ') {
            let words: Vec<&str> = stem.split(' ').collect();
            return matches_phrase(&words, tokens, true);
        }
        return tokens.iter().any(|t| t.starts_with(stem));
    }
    if pattern.contains(' ') {
        let words: Vec<&str> = pattern.split(' ').collect();
        return matches_phrase(&words, tokens, false);
    }
    tokens.iter().any(|t| t == pattern)
}

/// Consecutive-token match. With `stem_last`, the final word matches as a prefix.
fn matches_phrase(words: &[&str], tokens: &[String], stem_last: bool) -> bool {
    let Some((last, head)) = words.split_last() else {
        return false;
    };
    tokens.windows(words.len()).any(|window| {
        head.iter().zip(window).all(|(w, t)| t == w)
            && if stem_last {
                window[head.len()].starts_with(last)
            } else {
                window[head.len()] == *last
            }
    })
}
