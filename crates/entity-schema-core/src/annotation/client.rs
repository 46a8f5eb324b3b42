// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Client type namespace.
//!
//! Overrides consumed by client generators, plus the `skipEdge` flag that
//! keeps a field out of relationship resolution.
//!
//! | Segment | Effect |
//! |---------|--------|
//! | `type=T` | Explicit client type |
//! | `enum=a,b,c` | Closed value set |
//! | `skipEdge` | Field never receives an edge |
//! | `optional` | Field is optional on the client |

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{non_empty, segments, split_key_value};

/// Parsed client type namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientTag {
    /// Explicit client type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_override: Option<String>,

    /// Enumerated values, in declaration order.
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,

    /// Exclude the field from relationship resolution.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skip_edge: bool,

    /// Field is optional on the client.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool
}

impl ClientTag {
    /// Parse a client namespace string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut tag = Self::default();

        for segment in segments(raw, ';') {
            let (key, value) = split_key_value(segment);
            match (key.to_ascii_lowercase().as_str(), value) {
                ("skipedge", None) => tag.skip_edge = true,
                ("optional", None) => tag.optional = true,
                ("type", value) => match non_empty(value) {
                    Some(ty) => tag.type_override = Some(ty),
                    None => debug!(segment, "client type without value, segment skipped")
                },
                ("enum", Some(list)) => {
                    let values: Vec<String> = list
                        .split(',')
                        .map(str::trim)
                        .filter(|v| !v.is_empty())
                        .map(str::to_string)
                        .collect();
                    if values.is_empty() {
                        debug!(segment, "empty enum list, segment skipped");
                    } else {
                        tag.enum_values = values;
                    }
                }
                _ => {}
            }
        }

        tag
    }

    /// Check whether nothing was set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
