// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema introspection and relationship resolution.
//!
//! This crate turns annotated model definitions into a normalized,
//! queryable [`Schema`]: flattened fields, parsed annotations and resolved
//! relationships between entities. Code generators consume the schema; this
//! crate never generates code, touches a database or validates data.
//!
//! # Overview
//!
//! - [`annotation`] - per-field annotation namespaces
//! - [`FieldCollector`] - flattens embedded structures in declaration order
//! - [`EdgeResolver`] - infers key pairs and cardinality of relationships
//! - [`SchemaBuilder`] - two-pass build over a [`Registry`]
//! - [`Schema`] - the result, with lookup and projection queries
//!
//! # Pipeline
//!
//! ```text
//! Registry ──► SchemaBuilder
//!                 ├── pass 1: FieldCollector ──► Annotations::parse per field
//!                 ├── pass 2: EdgeResolver per relationship field
//!                 └── verify ──► Schema
//! ```
//!
//! # Usage
//!
//! ```rust
//! use entity_schema_core::{FieldSpec, ModelDef, Registry, SchemaConfig};
//!
//! let base = ModelDef::new("Base")
//!     .field(FieldSpec::new("ID", "uint"))
//!     .field(FieldSpec::new("CreatedAt", "time.Time"));
//!
//! let registry = Registry::new()
//!     .table(
//!         ModelDef::new("Customer")
//!             .embed(base.clone())
//!             .field(FieldSpec::new("Orders", "[]Order"))
//!     )
//!     .table(
//!         ModelDef::new("Order")
//!             .embed(base)
//!             .field(FieldSpec::new("CustomerID", "uint"))
//!             .field(FieldSpec::new("customer", "Customer"))
//!     );
//!
//! let schema = registry.build(&SchemaConfig::default()).unwrap();
//! let orders = schema.table("Customer").unwrap().field("Orders").unwrap();
//! let edge = orders.edge.as_ref().unwrap();
//! assert!(!edge.unique);
//! assert_eq!(edge.target_key, "CustomerID");
//! ```
//!
//! # Threading
//!
//! Everything here is plain owned data. Independent builds can run on
//! separate threads without coordination.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotation;
mod builder;
mod collector;
mod config;
mod definition;
mod edge;
mod error;
mod naming;
pub mod prelude;
mod schema;
mod signature;

pub use annotation::{
    Annotations, ClientTag, Rule, SerializationTag, StorageTag, ValidationRule, parse_rules
};
pub use builder::SchemaBuilder;
pub use collector::{FieldCollector, FieldMap};
pub use config::{CollisionPolicy, KeyStyle, SchemaConfig};
pub use definition::{FieldDecl, FieldSpec, Model, ModelDef, RawTags, Registry};
pub use edge::{EdgeResolver, Side};
pub use error::{MissingKey, Result, SchemaError};
pub use naming::NamingCase;
pub use schema::{Edge, Entity, Field, Schema};
pub use signature::TypeSignature;
