// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Storage mapping namespace.
//!
//! Controls column mapping and relationship overrides. Keys are matched
//! case-insensitively (`foreignKey`, `foreignkey` and `FOREIGNKEY` are the
//! same key).
//!
//! # Supported Keys
//!
//! | Segment | Field |
//! |---------|-------|
//! | `unique` | `unique = true` |
//! | `column:name` | `column` |
//! | `default:value` | `default` |
//! | `foreignKey:Field` | `foreign_key` |
//! | `references:Field` | `references` |
//! | `many2many:join_table` | `many2many` |
//! | `onUpdate:ACTION` | `on_update` |
//! | `onDelete:ACTION` | `on_delete` |
//! | `constraint:OnUpdate:A,OnDelete:B` | both cascade hints |
//!
//! # Example
//!
//! ```rust
//! use entity_schema_core::StorageTag;
//!
//! let tag = StorageTag::parse("foreignKey:OwnerID;references:ID;constraint:OnDelete:CASCADE");
//! assert_eq!(tag.foreign_key.as_deref(), Some("OwnerID"));
//! assert_eq!(tag.references.as_deref(), Some("ID"));
//! assert_eq!(tag.on_delete.as_deref(), Some("CASCADE"));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{non_empty, segments, split_key_value};

/// Parsed storage mapping namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageTag {
    /// Column name override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,

    /// Default value expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// UNIQUE constraint.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unique: bool,

    /// Explicit foreign key field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,

    /// Explicit reference field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<String>,

    /// Many-to-many join identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub many2many: Option<String>,

    /// ON UPDATE hint for generators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_update: Option<String>,

    /// ON DELETE hint for generators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_delete: Option<String>
}

impl StorageTag {
    /// Parse a storage namespace string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut tag = Self::default();

        for segment in segments(raw, ';') {
            let (key, value) = split_key_value(segment);
            let slot = match key.to_ascii_lowercase().as_str() {
                "unique" => {
                    if value.is_none() {
                        tag.unique = true;
                    } else {
                        debug!(segment, "unique takes no value, segment skipped");
                    }
                    continue;
                }
                "constraint" => {
                    tag.apply_constraint(segment, value);
                    continue;
                }
                "column" => &mut tag.column,
                "default" => &mut tag.default,
                "foreignkey" => &mut tag.foreign_key,
                "references" => &mut tag.references,
                "many2many" => &mut tag.many2many,
                "onupdate" => &mut tag.on_update,
                "ondelete" => &mut tag.on_delete,
                _ => continue
            };

            match non_empty(value) {
                Some(value) => *slot = Some(value),
                None => debug!(segment, "storage key without value, segment skipped")
            }
        }

        tag
    }

    /// Apply `OnUpdate:X,OnDelete:Y` from a `constraint` segment.
    fn apply_constraint(&mut self, segment: &str, value: Option<&str>) {
        let Some(value) = value else {
            debug!(segment, "constraint without actions, segment skipped");
            return;
        };

        for action in value.split(',').map(str::trim).filter(|a| !a.is_empty()) {
            let (event, rule) = split_key_value(action);
            let Some(rule) = non_empty(rule) else {
                debug!(segment, action, "constraint action without rule, skipped");
                continue;
            };
            match event.to_ascii_lowercase().as_str() {
                "onupdate" => self.on_update = Some(rule),
                "ondelete" => self.on_delete = Some(rule),
                _ => {}
            }
        }
    }

    /// Check whether nothing was set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check whether this field declares a many-to-many join.
    #[must_use]
    pub fn is_many_to_many(&self) -> bool {
        self.many2many.is_some()
    }
}
