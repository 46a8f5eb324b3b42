// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Build configuration.
//!
//! [`SchemaConfig`] is passed explicitly to the builder and to the edge
//! resolver. Nothing in the engine reads global or per-run state.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `primary_key` | `"ID"` | Primary identifier field name |
//! | `key_style` | `Pascal` | How convention keys are spelled |
//! | `collisions` | `FirstWins` | Flattened field name collisions |
//!
//! # Key Styles
//!
//! | Style | Entity `OrderItem` | Field `parent` |
//! |-------|--------------------|----------------|
//! | `Pascal` | `OrderItemID` | `ParentID` |
//! | `Snake` | `order_item_id` | `parent_id` |

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

use crate::error::Result;

fn default_primary_key() -> String {
    "ID".to_string()
}

/// Spelling of convention-derived key names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStyle {
    /// `<Name><PrimaryKey>` with the first letter of the name uppercased.
    #[default]
    Pascal,

    /// `<name_snake>_<primary_key>`.
    Snake
}

/// Policy for two flattened fields with the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Keep the field declared first, drop later ones.
    #[default]
    FirstWins,

    /// Fail the build with `DuplicateField`.
    Reject
}

/// Configuration for a schema build.
///
/// # Example
///
/// ```rust
/// use entity_schema_core::{CollisionPolicy, SchemaConfig};
///
/// let config = SchemaConfig::default().with_collisions(CollisionPolicy::Reject);
/// assert_eq!(config.primary_key, "ID");
/// assert_eq!(config.convention_key("customer"), "CustomerID");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Name of the primary identifier field.
    pub primary_key: String,

    /// Spelling of `<Entity>ID` / `<Field>ID` candidates.
    pub key_style: KeyStyle,

    /// Flattened field collision policy.
    pub collisions: CollisionPolicy
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            primary_key: default_primary_key(),
            key_style:   KeyStyle::default(),
            collisions:  CollisionPolicy::default()
        }
    }
}

impl SchemaConfig {
    /// Preset for snake_case models: primary key `id`, keys like `user_id`.
    #[must_use]
    pub fn snake() -> Self {
        Self {
            primary_key: "id".to_string(),
            key_style: KeyStyle::Snake,
            ..Self::default()
        }
    }

    /// Decode a configuration document. Missing options take defaults.
    ///
    /// # Errors
    ///
    /// `Json` if the document is malformed or an option has the wrong type.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Set the primary identifier field name.
    #[must_use]
    pub fn with_primary_key(mut self, name: impl Into<String>) -> Self {
        self.primary_key = name.into();
        self
    }

    /// Set the convention key style.
    #[must_use]
    pub fn with_key_style(mut self, style: KeyStyle) -> Self {
        self.key_style = style;
        self
    }

    /// Set the field collision policy.
    #[must_use]
    pub fn with_collisions(mut self, policy: CollisionPolicy) -> Self {
        self.collisions = policy;
        self
    }

    /// Convention key for an entity or field name.
    ///
    /// `Order` → `OrderID`, `customer` → `CustomerID` (Pascal);
    /// `OrderItem` → `order_item_id` (Snake).
    #[must_use]
    pub fn convention_key(&self, name: &str) -> String {
        match self.key_style {
            KeyStyle::Pascal => {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => {
                        format!("{}{}{}", first.to_uppercase(), chars.as_str(), self.primary_key)
                    }
                    None => self.primary_key.clone()
                }
            }
            KeyStyle::Snake => format!("{}_{}", name.to_case(Case::Snake), self.primary_key)
        }
    }
}
