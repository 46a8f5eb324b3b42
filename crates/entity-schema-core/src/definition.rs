// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model definitions, the engine's input.
//!
//! A [`ModelDef`] describes one struct as written: its name, an optional
//! storage name and an ordered list of declarations. A declaration is either
//! a plain field with its declared type and raw annotation strings, or an
//! embedded definition whose fields are spliced in place during flattening.
//!
//! # Structure
//!
//! ```text
//! Registry
//! ├── tables[]  ModelDef ── fields[] ─┬─ FieldDecl::Field(FieldSpec)
//! │                                   │    ├── name
//! │                                   │    ├── declared_type
//! │                                   │    └── tags (RawTags)
//! │                                   └─ FieldDecl::Embed(ModelDef)
//! └── types[]   ModelDef
//! ```
//!
//! # Sources
//!
//! | Source | Entry point |
//! |--------|-------------|
//! | Builder API | [`ModelDef::new`], [`FieldSpec::new`] |
//! | Derive macro | [`Model::definition`] via `#[derive(Model)]` |
//! | JSON document | [`Registry::from_json`] |
//!
//! # JSON Shape
//!
//! ```json
//! {
//!   "tables": [{
//!     "name": "Order",
//!     "fields": [
//!       { "kind": "embed", "name": "Base", "fields": [ ... ] },
//!       { "kind": "field", "name": "customer", "type": "Customer",
//!         "tags": { "storage": "foreignKey:CustomerID" } }
//!     ]
//!   }],
//!   "types": []
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{builder::SchemaBuilder, config::SchemaConfig, error::Result, schema::Schema};

/// Types that can describe themselves as a [`ModelDef`].
///
/// Usually implemented through `#[derive(Model)]`.
pub trait Model {
    /// Definition of this model.
    fn definition() -> ModelDef;
}

/// Raw annotation strings of one field, one per namespace.
///
/// Each string is parsed by [`Annotations::parse`](crate::Annotations::parse).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTags {
    /// Storage mapping namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,

    /// Serialization namespace.
    #[serde(alias = "json", skip_serializing_if = "Option::is_none")]
    pub serialization: Option<String>,

    /// Client type namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,

    /// Validation namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>
}

impl RawTags {
    /// Check whether no namespace is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_none()
            && self.serialization.is_none()
            && self.client.is_none()
            && self.validation.is_none()
    }
}

/// A plain field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name.
    pub name: String,

    /// Declared type signature, e.g. `Vec<Order>` or `*string`.
    #[serde(rename = "type")]
    pub declared_type: String,

    /// Raw annotations.
    #[serde(default, skip_serializing_if = "RawTags::is_empty")]
    pub tags: RawTags
}

impl FieldSpec {
    /// A field without annotations.
    #[must_use]
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name:          name.into(),
            declared_type: declared_type.into(),
            tags:          RawTags::default()
        }
    }

    /// Set the storage namespace.
    #[must_use]
    pub fn storage(mut self, raw: impl Into<String>) -> Self {
        self.tags.storage = Some(raw.into());
        self
    }

    /// Set the serialization namespace.
    #[must_use]
    pub fn json(mut self, raw: impl Into<String>) -> Self {
        self.tags.serialization = Some(raw.into());
        self
    }

    /// Set the client type namespace.
    #[must_use]
    pub fn client(mut self, raw: impl Into<String>) -> Self {
        self.tags.client = Some(raw.into());
        self
    }

    /// Set the validation namespace.
    #[must_use]
    pub fn validate(mut self, raw: impl Into<String>) -> Self {
        self.tags.validation = Some(raw.into());
        self
    }
}

/// One entry in a definition's field list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldDecl {
    /// A named field.
    Field(FieldSpec),

    /// An embedded structure, flattened in place.
    Embed(ModelDef)
}

/// Definition of one struct.
///
/// # Example
///
/// ```rust
/// use entity_schema_core::{FieldSpec, ModelDef};
///
/// let base = ModelDef::new("Base")
///     .field(FieldSpec::new("ID", "uint"))
///     .field(FieldSpec::new("CreatedAt", "time.Time"));
///
/// let user = ModelDef::new("User")
///     .with_storage_name("users")
///     .embed(base)
///     .field(FieldSpec::new("Name", "string").validate("notEmpty"));
///
/// assert_eq!(user.fields.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDef {
    /// Struct name, used to match field types against entities.
    pub name: String,

    /// Storage name override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_name: Option<String>,

    /// Declarations in source order.
    #[serde(default)]
    pub fields: Vec<FieldDecl>
}

impl ModelDef {
    /// An empty definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:         name.into(),
            storage_name: None,
            fields:       Vec::new()
        }
    }

    /// Set the storage name.
    #[must_use]
    pub fn with_storage_name(mut self, name: impl Into<String>) -> Self {
        self.storage_name = Some(name.into());
        self
    }

    /// Append a field.
    #[must_use]
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(FieldDecl::Field(spec));
        self
    }

    /// Append an embedded structure.
    #[must_use]
    pub fn embed(mut self, def: ModelDef) -> Self {
        self.fields.push(FieldDecl::Embed(def));
        self
    }
}

/// Ordered collection of definitions to build a schema from.
///
/// Tables are persisted entities and take part in relationship resolution.
/// Types are plain value types used for client projection only.
///
/// # Example
///
/// ```rust
/// use entity_schema_core::{FieldSpec, ModelDef, Registry, SchemaConfig};
///
/// let schema = Registry::new()
///     .table(ModelDef::new("Customer").field(FieldSpec::new("ID", "uint")))
///     .build(&SchemaConfig::default())
///     .unwrap();
///
/// assert_eq!(schema.tables().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Registry {
    tables: Vec<ModelDef>,
    types:  Vec<ModelDef>
}

impl Registry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a definition document.
    ///
    /// # Errors
    ///
    /// `Json` if the document is malformed or a definition lacks its name.
    pub fn from_json(input: &str) -> Result<Self> {
        let registry: Self = serde_json::from_str(input)?;
        debug!(
            tables = registry.tables.len(),
            types = registry.types.len(),
            "definitions decoded"
        );
        Ok(registry)
    }

    /// Register a table definition.
    #[must_use]
    pub fn table(mut self, def: ModelDef) -> Self {
        debug!(entity = %def.name, "table registered");
        self.tables.push(def);
        self
    }

    /// Register a value type definition.
    #[must_use]
    pub fn value_type(mut self, def: ModelDef) -> Self {
        debug!(entity = %def.name, "value type registered");
        self.types.push(def);
        self
    }

    /// Register a table from its [`Model`] implementation.
    #[must_use]
    pub fn register<T: Model>(self) -> Self {
        self.table(T::definition())
    }

    /// Register a value type from its [`Model`] implementation.
    #[must_use]
    pub fn register_type<T: Model>(self) -> Self {
        self.value_type(T::definition())
    }

    /// Table definitions in registration order.
    #[must_use]
    pub fn tables(&self) -> &[ModelDef] {
        &self.tables
    }

    /// Value type definitions in registration order.
    #[must_use]
    pub fn types(&self) -> &[ModelDef] {
        &self.types
    }

    /// Build a schema with [`SchemaBuilder`].
    ///
    /// # Errors
    ///
    /// Any error of [`SchemaBuilder::build`].
    pub fn build(&self, config: &SchemaConfig) -> Result<Schema> {
        SchemaBuilder::new(config).build(self)
    }
}
