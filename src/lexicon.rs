// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Static knowledge tables: abbreviations, synonyms, jargon, concept pairs.
//!
//! The scorer never hard-codes a word. Everything it knows about "bst" meaning
//! "binary search tree" or "stable" pointing at merge sort comes from
//! `data/lexicon.json`, embedded at compile time and parsed once. Callers with
//! their own vocabulary build a `Lexicon` from JSON and `extend` the builtin
//! one.
//!
//! Keys and terms are normalized on load (lowercase, diacritics stripped,
//! whitespace collapsed), so lookups take normalized tokens.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::utils::normalize;

/// The bundled algorithm-domain vocabulary.
static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| {
    let json_str = include_str!("../data/lexicon.json");
    Lexicon::from_json(json_str).unwrap_or_else(|err| {
        tracing::error!("bundled lexicon failed to load: {err}");
        Lexicon::default()
    })
});

/// On-disk shape. Every table is optional so partial files can extend the builtin set.
#[derive(Debug, Default, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    abbreviations: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    synonyms: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    jargon: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    concepts: Vec<(String, String)>,
}

type Table = BTreeMap<String, BTreeSet<String>>;

/// Read-only lookup tables consulted by the relevance scorer.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    abbreviations: Table,
    /// expansion → abbreviations, built from `abbreviations`
    expansions: Table,
    /// Symmetric: if "fast" lists "quick", "quick" lists "fast".
    synonyms: Table,
    jargon: Table,
    concepts: BTreeSet<(String, String)>,
}

impl Lexicon {
    /// The lexicon bundled with the crate.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Parse a lexicon from its JSON form.
    ///
    /// ```json
    /// { "abbreviations": {"bst": ["binary search tree"]},
    ///   "synonyms": {"fast": ["quick"]},
    ///   "jargon": {"stable": ["merge"]},
    ///   "concepts": [["sort", "order"]] }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;
        let mut lexicon = Lexicon::default();

        for (key, terms) in file.abbreviations {
            let key = checked_key(&key, "abbreviations")?;
            for term in terms.iter().map(|t| normalize(t)).filter(|t| !t.is_empty()) {
                lexicon.expansions.entry(term.clone()).or_default().insert(key.clone());
                lexicon.abbreviations.entry(key.clone()).or_default().insert(term);
            }
        }

        for (key, terms) in file.synonyms {
            let key = checked_key(&key, "synonyms")?;
            for term in terms.iter().map(|t| normalize(t)).filter(|t| !t.is_empty()) {
                if term == key {
                    continue;
                }
                lexicon.synonyms.entry(term.clone()).or_default().insert(key.clone());
                lexicon.synonyms.entry(key.clone()).or_default().insert(term);
            }
        }

        for (key, terms) in file.jargon {
            let key = checked_key(&key, "jargon")?;
            let set = lexicon.jargon.entry(key).or_default();
            set.extend(terms.iter().map(|t| normalize(t)).filter(|t| !t.is_empty()));
        }

        for (a, b) in file.concepts {
            let (a, b) = (normalize(&a), normalize(&b));
            if a.is_empty() || b.is_empty() {
                return Err(Error::InvalidLexicon { table: "concepts" });
            }
            lexicon.concepts.insert(ordered_pair(a, b));
        }

        Ok(lexicon)
    }

    /// Read a lexicon file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Merge another lexicon's entries into this one.
    pub fn extend(&mut self, other: Lexicon) {
        merge_tables(&mut self.abbreviations, other.abbreviations);
        merge_tables(&mut self.expansions, other.expansions);
        merge_tables(&mut self.synonyms, other.synonyms);
        merge_tables(&mut self.jargon, other.jargon);
        self.concepts.extend(other.concepts);
    }

    /// Expansions of an abbreviation ("bst" → "binary search tree").
    pub fn expansions(&self, abbreviation: &str) -> Option<&BTreeSet<String>> {
        self.abbreviations.get(abbreviation)
    }

    /// Every known (expansion, abbreviations) pair, for reverse matching.
    pub fn expansion_entries(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.expansions.iter()
    }

    /// Abbreviations for a full phrase ("binary search tree" → "bst").
    pub fn abbreviations_for(&self, expansion: &str) -> Option<&BTreeSet<String>> {
        self.expansions.get(expansion)
    }

    pub fn synonyms(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.synonyms.get(word)
    }

    pub fn jargon(&self, term: &str) -> Option<&BTreeSet<String>> {
        self.jargon.get(term)
    }

    /// Are these two words a known concept pair? Order doesn't matter.
    pub fn are_related_concepts(&self, a: &str, b: &str) -> bool {
        a != b && self.concepts.contains(&ordered_pair(a.to_string(), b.to_string()))
    }

    /// Every word paired with `word` in the concepts table.
    pub fn related_concepts(&self, word: &str) -> Vec<&str> {
        self.concepts
            .iter()
            .filter_map(|(a, b)| {
                if a == word {
                    Some(b.as_str())
                } else if b == word {
                    Some(a.as_str())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Number of entries across all tables, for diagnostics.
    pub fn len(&self) -> usize {
        self.abbreviations.len() + self.synonyms.len() + self.jargon.len() + self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn checked_key(key: &str, table: &'static str) -> Result<String> {
    let key = normalize(key);
    if key.is_empty() {
        Err(Error::InvalidLexicon { table })
    } else {
        Ok(key)
    }
}

fn ordered_pair(a: String, b: String) -> (String, String) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn merge_tables(into: &mut Table, from: Table) {
    for (key, terms) in from {
        into.entry(key).or_default().extend(terms);
    }
}
