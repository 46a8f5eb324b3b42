// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The resolved schema, the engine's output.
//!
//! A [`Schema`] is produced once by the [`SchemaBuilder`](crate::SchemaBuilder)
//! and handed to generators by shared reference. It is plain owned data:
//! nothing is computed lazily and nothing mutates after the build.
//!
//! Decoding a schema from JSON runs [`Schema::verify`], the same edge check
//! the builder ends with.
//!
//! # Structure
//!
//! ```text
//! Schema
//! ├── tables[] Entity ── fields[] Field ── edge? Edge
//! └── types[]  Entity ── fields[] Field             (never an edge)
//! ```
//!
//! # Queries
//!
//! | Query | Answers |
//! |-------|---------|
//! | [`Schema::table`] | Table by name, or `UnknownEntityReference` |
//! | [`Schema::lookup`] | Table or value type by name |
//! | [`Schema::is_known_type`] | Whether a raw type names an entity |
//! | [`Schema::uses_rule`] | Whether any table field uses a rule |
//! | [`Schema::has_pattern_rules`] | Whether any pattern rule is used |
//! | [`Entity::has_validation`] | Whether any field has rules |
//! | [`Entity::unique_relations`] | To-one relationship fields |
//! | [`Field::is_optional`] | Whether clients may omit the field |
//! | [`Field::client_name`] | Name emitted for clients |

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

use crate::{
    annotation::{Annotations, Rule},
    error::{Result, SchemaError},
    naming::NamingCase
};

/// Resolved relationship of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Name of the related entity.
    pub target_entity: String,

    /// `true` for to-one, `false` for to-many.
    pub unique: bool,

    /// Key field on the owning entity.
    pub local_key: String,

    /// Key field on the target entity.
    pub target_key: String,

    /// Many-to-many join identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via_join: Option<String>,

    /// ON UPDATE hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_update: Option<String>,

    /// ON DELETE hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_delete: Option<String>
}

impl Edge {
    /// Check whether the relationship goes through a join table.
    #[must_use]
    pub fn is_many_to_many(&self) -> bool {
        self.via_join.is_some()
    }
}

/// One flattened field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name.
    pub name: String,

    /// Declared type signature as written.
    pub declared_type: String,

    /// Declared type without markers or module path.
    pub raw_type: String,

    /// The field holds many values.
    pub is_collection: bool,

    /// The declared type is a pointer or `Option`.
    pub nullable: bool,

    /// Parsed annotations.
    #[serde(default, skip_serializing_if = "Annotations::is_empty")]
    pub annotations: Annotations,

    /// Relationship, if the raw type is a table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge: Option<Edge>
}

impl Field {
    /// Check whether the field carries a relationship.
    #[must_use]
    pub fn is_relation(&self) -> bool {
        self.edge.is_some()
    }

    /// Check whether clients may omit the field.
    ///
    /// True for nullable types, collections, fields with a storage default
    /// and fields flagged `optional` in the client namespace.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.nullable
            || self.is_collection
            || self.annotations.storage.default.is_some()
            || self.annotations.client.optional
    }

    /// Name emitted for clients: the serialization override, else `case`
    /// applied to the field name.
    #[must_use]
    pub fn client_name(&self, case: NamingCase) -> String {
        match &self.annotations.serialization.name {
            Some(name) => name.clone(),
            None => case.apply(&self.name)
        }
    }
}

/// A table or value type with its flattened fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity name.
    pub name: String,

    /// Storage name override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_name: Option<String>,

    /// Fields in flattened declaration order.
    pub fields: Vec<Field>
}

impl Entity {
    /// Field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Storage name override, else the snake_case entity name.
    #[must_use]
    pub fn storage_name_or_default(&self) -> String {
        match &self.storage_name {
            Some(name) => name.clone(),
            None => self.name.to_case(Case::Snake)
        }
    }

    /// Check whether any field has validation rules.
    #[must_use]
    pub fn has_validation(&self) -> bool {
        self.fields.iter().any(|f| !f.annotations.validation.is_empty())
    }

    /// Fields with a relationship, with their edges.
    pub fn edges(&self) -> impl Iterator<Item = (&Field, &Edge)> {
        self.fields
            .iter()
            .filter_map(|f| f.edge.as_ref().map(|edge| (f, edge)))
    }

    /// Fields with a to-one relationship.
    pub fn unique_relations(&self) -> impl Iterator<Item = &Field> {
        self.edges()
            .filter(|(_, edge)| edge.unique)
            .map(|(field, _)| field)
    }
}

/// Resolved schema.
///
/// # Example
///
/// ```rust
/// use entity_schema_core::{FieldSpec, ModelDef, Registry, SchemaConfig};
///
/// let schema = Registry::new()
///     .table(ModelDef::new("Customer").field(FieldSpec::new("ID", "uint")))
///     .table(
///         ModelDef::new("Order")
///             .field(FieldSpec::new("ID", "uint"))
///             .field(FieldSpec::new("CustomerID", "uint"))
///             .field(FieldSpec::new("customer", "Customer"))
///     )
///     .build(&SchemaConfig::default())
///     .unwrap();
///
/// let edge = schema.table("Order").unwrap().field("customer").unwrap().edge.as_ref().unwrap();
/// assert_eq!((edge.local_key.as_str(), edge.target_key.as_str()), ("CustomerID", "ID"));
/// assert!(schema.table("Invoice").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SchemaDocument")]
pub struct Schema {
    tables: Vec<Entity>,
    types:  Vec<Entity>
}

/// Decoded schema JSON, verified before it becomes a [`Schema`].
#[derive(Deserialize)]
struct SchemaDocument {
    #[serde(default)]
    tables: Vec<Entity>,
    #[serde(default)]
    types:  Vec<Entity>
}

impl TryFrom<SchemaDocument> for Schema {
    type Error = SchemaError;

    fn try_from(document: SchemaDocument) -> Result<Self> {
        let schema = Self::new(document.tables, document.types);
        schema.verify()?;
        Ok(schema)
    }
}

impl Schema {
    pub(crate) fn new(tables: Vec<Entity>, types: Vec<Entity>) -> Self {
        Self {
            tables,
            types
        }
    }

    /// Decode schema JSON written by [`Schema::to_json`].
    ///
    /// # Errors
    ///
    /// `Json` if the input is not a schema document. Edges are checked the
    /// same way [`Schema::verify`] does, so a dangling key or an unknown
    /// target also fails with `Json`.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Check that every table edge points at a table and, unless it goes
    /// through a join table, at key fields that exist on both sides.
    ///
    /// # Errors
    ///
    /// - `UnknownEntityReference` if an edge target is not a table
    /// - `DanglingKey` if a key field is missing
    pub fn verify(&self) -> Result<()> {
        for entity in &self.tables {
            for (field, edge) in entity.edges() {
                let target = self.table(&edge.target_entity)?;
                if edge.is_many_to_many() {
                    continue;
                }

                let dangling = if entity.field(&edge.local_key).is_none() {
                    Some(format!("{}.{}", entity.name, edge.local_key))
                } else if target.field(&edge.target_key).is_none() {
                    Some(format!("{}.{}", target.name, edge.target_key))
                } else {
                    None
                };
                if let Some(key) = dangling {
                    return Err(SchemaError::DanglingKey {
                        entity: entity.name.clone(),
                        field: field.name.clone(),
                        key
                    });
                }
            }
        }
        Ok(())
    }

    /// Persisted entities in registration order.
    #[must_use]
    pub fn tables(&self) -> &[Entity] {
        &self.tables
    }

    /// Value types in registration order.
    #[must_use]
    pub fn types(&self) -> &[Entity] {
        &self.types
    }

    /// Table by name.
    ///
    /// # Errors
    ///
    /// `UnknownEntityReference` if no table has this name.
    pub fn table(&self, name: &str) -> Result<&Entity> {
        self.tables
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| SchemaError::unknown_entity(name))
    }

    /// Table or value type by name, tables first.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Entity> {
        self.tables
            .iter()
            .chain(&self.types)
            .find(|e| e.name == name)
    }

    /// Check whether `raw_type` names a table or value type.
    #[must_use]
    pub fn is_known_type(&self, raw_type: &str) -> bool {
        self.lookup(raw_type).is_some()
    }

    /// Check whether any table field uses `rule`.
    ///
    /// With a non-empty `raw_types`, only fields whose raw type is listed
    /// count.
    #[must_use]
    pub fn uses_rule(&self, rule: Rule, raw_types: &[&str]) -> bool {
        self.table_fields().any(|f| {
            (raw_types.is_empty() || raw_types.contains(&f.raw_type.as_str()))
                && f.annotations.validation.iter().any(|v| v.rule == rule)
        })
    }

    /// Check whether any table field uses a pattern rule.
    #[must_use]
    pub fn has_pattern_rules(&self) -> bool {
        self.table_fields()
            .flat_map(|f| &f.annotations.validation)
            .any(|v| v.rule.is_pattern())
    }

    /// Compact JSON.
    ///
    /// # Errors
    ///
    /// `Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON.
    ///
    /// # Errors
    ///
    /// `Json` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn table_fields(&self) -> impl Iterator<Item = &Field> {
        self.tables.iter().flat_map(|e| &e.fields)
    }
}
