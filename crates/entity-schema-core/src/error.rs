// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for schema building.
//!
//! Every failure aborts the whole build: the builder never returns a partial
//! [`Schema`](crate::Schema). Malformed annotation segments are not errors;
//! they are skipped by the parsers in [`annotation`](crate::annotation).
//!
//! # Error Kinds
//!
//! | Variant | Raised by | Cause |
//! |---------|-----------|-------|
//! | `UnresolvedRelationship` | edge resolver | No key or no reference field found |
//! | `UnknownEntityReference` | schema queries, verification | Name not registered |
//! | `DuplicateEntity` | builder | Two definitions share a name |
//! | `DuplicateField` | field collector | Name collision under `Reject` policy |
//! | `DanglingKey` | verification | Edge key missing from its entity |
//! | `Json` | definitions, config, output | serde_json failure |

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which half of a relationship key pair could not be located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingKey {
    /// No foreign key field exists on either side.
    ForeignKey,

    /// A foreign key was found but the complementary reference field was not.
    Reference
}

impl fmt::Display for MissingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignKey => f.write_str("foreign key"),
            Self::Reference => f.write_str("reference")
        }
    }
}

/// Errors produced while building or querying a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A relationship field could not be resolved to a key pair.
    ///
    /// `tried` lists the candidate keys as `Entity.Field`, in the order they
    /// were looked up.
    #[error(
        "cannot find {missing} for {entity}.{field} (tried: {})",
        .tried.join(", ")
    )]
    UnresolvedRelationship {
        /// Owning entity name.
        entity:  String,
        /// Relationship field name.
        field:   String,
        /// Which key could not be located.
        missing: MissingKey,
        /// Candidate keys that were looked up.
        tried:   Vec<String>
    },

    /// A lookup by entity name failed.
    #[error("unknown entity reference: {name}")]
    UnknownEntityReference {
        /// The name that was looked up.
        name: String
    },

    /// Two definitions were registered under the same name.
    #[error("entity {name} is registered more than once")]
    DuplicateEntity {
        /// The duplicated entity name.
        name: String
    },

    /// Two flattened fields share a name and collisions are rejected.
    #[error("field {field} is declared more than once in {entity}")]
    DuplicateField {
        /// Entity being flattened.
        entity: String,
        /// The colliding field name.
        field:  String
    },

    /// An edge names a key field that does not exist.
    #[error("edge on {entity}.{field} references missing key {key}")]
    DanglingKey {
        /// Owning entity name.
        entity: String,
        /// Relationship field name.
        field:  String,
        /// The missing key, as `Entity.Field`.
        key:    String
    },

    /// JSON encoding or decoding failed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error)
}

impl SchemaError {
    /// Creates an unresolved relationship error.
    #[must_use]
    pub fn unresolved(
        entity: impl Into<String>,
        field: impl Into<String>,
        missing: MissingKey,
        tried: Vec<String>
    ) -> Self {
        Self::UnresolvedRelationship {
            entity: entity.into(),
            field: field.into(),
            missing,
            tried
        }
    }

    /// Creates an unknown entity reference error.
    #[must_use]
    pub fn unknown_entity(name: impl Into<String>) -> Self {
        Self::UnknownEntityReference {
            name: name.into()
        }
    }

    /// Returns `(entity, field)` for errors tied to a specific field.
    #[must_use]
    pub fn location(&self) -> Option<(&str, &str)> {
        match self {
            Self::UnresolvedRelationship {
                entity, field, ..
            }
            | Self::DuplicateField {
                entity, field
            }
            | Self::DanglingKey {
                entity, field, ..
            } => Some((entity.as_str(), field.as_str())),
            _ => None
        }
    }
}

/// Result alias for schema operations.
pub type Result<T, E = SchemaError> = std::result::Result<T, E>;
