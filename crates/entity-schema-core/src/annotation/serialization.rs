// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Serialization namespace (`name,omitempty` / `-`).

use serde::{Deserialize, Serialize};

/// Parsed serialization namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializationTag {
    /// Output name override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Field is never serialized (`-`).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ignore: bool,

    /// Field is omitted when empty (`omitempty`).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub omit_empty: bool
}

impl SerializationTag {
    /// Parse a serialization namespace string.
    ///
    /// `omitempty` and `-` are flags; the first remaining token is the name.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut tag = Self::default();

        for token in raw.split(',').map(str::trim) {
            match token {
                "" => {}
                "omitempty" => tag.omit_empty = true,
                "-" => tag.ignore = true,
                name if tag.name.is_none() => tag.name = Some(name.to_string()),
                _ => {}
            }
        }

        tag
    }

    /// Check whether nothing was set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && !self.ignore && !self.omit_empty
    }
}
