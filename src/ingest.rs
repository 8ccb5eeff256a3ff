// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning domain records into `IndexedDocument`s.
//!
//! The engine only knows one document shape. Anything else gets there
//! through `IntoIndexedDocument`; `AlgorithmRecord` is the adapter for
//! algorithm catalogs and the format the CLI reads.

use serde::Deserialize;

use crate::error::Result;
use crate::types::IndexedDocument;

/// Conversion into the engine's document shape.
pub trait IntoIndexedDocument {
    fn into_indexed_document(self) -> IndexedDocument;
}

impl IntoIndexedDocument for IndexedDocument {
    fn into_indexed_document(self) -> IndexedDocument {
        self
    }
}

/// Convert every record.
pub fn ingest<I>(records: I) -> Vec<IndexedDocument>
where
    I: IntoIterator,
    I::Item: IntoIndexedDocument,
{
    records
        .into_iter()
        .map(IntoIndexedDocument::into_indexed_document)
        .collect()
}

/// Parse a JSON array of algorithm records.
pub fn ingest_json(json: &str) -> Result<Vec<IndexedDocument>> {
    let records: Vec<AlgorithmRecord> = serde_json::from_str(json)?;
    Ok(ingest(records))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Complexity {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub space: Option<String>,
}

/// An entry in an algorithm catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmRecord {
    /// Defaults to a slug of `name`.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub complexity: Option<Complexity>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub related: Vec<String>,
}

impl IntoIndexedDocument for AlgorithmRecord {
    fn into_indexed_document(self) -> IndexedDocument {
        let id = self.id.unwrap_or_else(|| slug(&self.name));

        let mut parts: Vec<String> = Vec::new();
        parts.extend(self.description.iter().cloned());
        if let Some(complexity) = &self.complexity {
            parts.extend(complexity.time.iter().map(|t| format!("time {t}")));
            parts.extend(complexity.space.iter().map(|s| format!("space {s}")));
        }
        parts.extend(self.use_cases);
        parts.extend(self.related);

        IndexedDocument {
            id,
            title: self.name,
            category: self.category,
            tags: self.tags,
            summary: self.description,
            searchable_text: (!parts.is_empty()).then(|| parts.join(" ")),
        }
    }
}

/// "Dijkstra's Algorithm" → "dijkstra-s-algorithm"
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}
