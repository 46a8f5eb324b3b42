// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-field annotation parsing.
//!
//! A field carries up to four raw annotation strings, one per namespace.
//! Each namespace is parsed on its own and never looks at the others:
//!
//! ```text
//! annotation.rs (coordinator)
//! ├── storage.rs       - column mapping, keys, many2many, cascade hints
//! ├── serialization.rs - output name, omitempty, ignore
//! ├── client.rs        - client type override, enum values, skipEdge
//! └── validation.rs    - ordered validation rules
//! ```
//!
//! # Leniency
//!
//! Annotations are hints, not a grammar. Unknown keys are ignored and
//! malformed segments are dropped (logged at `debug`), so parsing never
//! fails. An absent namespace parses to its zero value.
//!
//! # Segment Syntax
//!
//! Segments are separated by `;` (`,` for serialization). A segment is a bare
//! flag or `key:value` / `key=value`, split at the first `:` or `=`.

mod client;
mod serialization;
mod storage;
mod validation;

pub use client::ClientTag;
use serde::{Deserialize, Serialize};
pub use serialization::SerializationTag;
pub use storage::StorageTag;
pub use validation::{Rule, ValidationRule, parse_rules};

use crate::definition::RawTags;

/// Structured annotations of one field, split by namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    /// Storage mapping namespace.
    #[serde(skip_serializing_if = "StorageTag::is_empty")]
    pub storage: StorageTag,

    /// Serialization namespace.
    #[serde(skip_serializing_if = "SerializationTag::is_empty")]
    pub serialization: SerializationTag,

    /// Client type namespace.
    #[serde(skip_serializing_if = "ClientTag::is_empty")]
    pub client: ClientTag,

    /// Validation rules in order of appearance.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validation: Vec<ValidationRule>
}

impl Annotations {
    /// Parse every namespace present in `raw`.
    #[must_use]
    pub fn parse(raw: &RawTags) -> Self {
        Self {
            storage:       raw.storage.as_deref().map(StorageTag::parse).unwrap_or_default(),
            serialization: raw
                .serialization
                .as_deref()
                .map(SerializationTag::parse)
                .unwrap_or_default(),
            client:        raw.client.as_deref().map(ClientTag::parse).unwrap_or_default(),
            validation:    raw.validation.as_deref().map(parse_rules).unwrap_or_default()
        }
    }

    /// Check whether no namespace carries anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
            && self.serialization.is_empty()
            && self.client.is_empty()
            && self.validation.is_empty()
    }
}

/// Trimmed, non-empty segments of a namespace string.
fn segments(raw: &str, separator: char) -> impl Iterator<Item = &str> {
    raw.split(separator).map(str::trim).filter(|s| !s.is_empty())
}

/// Split a segment into its key and optional value.
///
/// The split happens at the first `:` or `=`; the value keeps any later
/// separators (`constraint:OnDelete:CASCADE` → `constraint`,
/// `OnDelete:CASCADE`).
fn split_key_value(segment: &str) -> (&str, Option<&str>) {
    match segment.find([':', '=']) {
        Some(pos) => (segment[..pos].trim(), Some(segment[pos + 1..].trim())),
        None => (segment, None)
    }
}

/// Keep a value only if it has content.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
