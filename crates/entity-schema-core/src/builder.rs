// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema assembly.
//!
//! [`SchemaBuilder`] drives the field collector and the edge resolver over a
//! whole [`Registry`] in two passes:
//!
//! ```text
//! pass 1  tables + types ──► FieldCollector ──► name → FieldMap (no edges)
//! pass 2  tables only    ──► EdgeResolver per field whose raw type is a table
//! verify  every edge key exists on its side
//! ```
//!
//! Pass 1 completes before any edge is resolved, so an entity may point at
//! one registered after it. Value types never receive edges, and a field
//! flagged `skipEdge` in the client namespace is left alone.
//!
//! The first error aborts the build; no partial schema is returned.

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    collector::{FieldCollector, FieldMap},
    config::SchemaConfig,
    definition::{ModelDef, Registry},
    edge::{EdgeResolver, Side},
    error::{Result, SchemaError},
    schema::{Entity, Schema}
};

/// An entity between passes.
#[derive(Debug)]
struct Staged {
    storage_name: Option<String>,
    fields:       FieldMap
}

type StagedMap = IndexMap<String, Staged>;

/// Builds a [`Schema`] from a [`Registry`].
///
/// # Example
///
/// ```rust
/// use entity_schema_core::{FieldSpec, ModelDef, Registry, SchemaBuilder, SchemaConfig};
///
/// let registry = Registry::new()
///     .table(
///         ModelDef::new("Category")
///             .field(FieldSpec::new("ID", "uint"))
///             .field(FieldSpec::new("ParentID", "*uint"))
///             .field(FieldSpec::new("parent", "*Category"))
///     );
///
/// let config = SchemaConfig::default();
/// let schema = SchemaBuilder::new(&config).build(&registry).unwrap();
/// let edge = schema.tables()[0].field("parent").unwrap().edge.clone().unwrap();
/// assert_eq!(edge.local_key, "ParentID");
/// assert_eq!(edge.target_key, "ID");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SchemaBuilder<'a> {
    config: &'a SchemaConfig
}

impl<'a> SchemaBuilder<'a> {
    /// Create a builder with the given configuration.
    #[must_use]
    pub fn new(config: &'a SchemaConfig) -> Self {
        Self {
            config
        }
    }

    /// Build the schema.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if a name is registered twice
    /// - `DuplicateField` on a field collision under the `Reject` policy
    /// - `UnresolvedRelationship` if an edge cannot be resolved
    /// - `UnknownEntityReference` / `DanglingKey` if verification fails
    pub fn build(&self, registry: &Registry) -> Result<Schema> {
        let collector = FieldCollector::new(self.config);

        let mut tables = StagedMap::new();
        stage(&collector, registry.tables(), &mut tables, None)?;
        let mut types = StagedMap::new();
        stage(&collector, registry.types(), &mut types, Some(&tables))?;

        let resolver = EdgeResolver::new(self.config);
        let mut resolved = StagedMap::with_capacity(tables.len());
        for (name, staged) in &tables {
            let fields = resolve_entity(&resolver, name, staged, &tables)?;
            resolved.insert(name.clone(), Staged {
                storage_name: staged.storage_name.clone(),
                fields
            });
        }

        let schema = Schema::new(into_entities(resolved), into_entities(types));
        schema.verify()?;
        debug!(
            tables = schema.tables().len(),
            types = schema.types().len(),
            "schema built"
        );
        Ok(schema)
    }
}

/// Pass 1: flatten definitions into `staged`, rejecting duplicate names.
fn stage(
    collector: &FieldCollector<'_>,
    defs: &[ModelDef],
    staged: &mut StagedMap,
    other: Option<&StagedMap>
) -> Result<()> {
    for def in defs {
        let taken = staged.contains_key(&def.name)
            || other.is_some_and(|other| other.contains_key(&def.name));
        if taken {
            return Err(SchemaError::DuplicateEntity {
                name: def.name.clone()
            });
        }
        let fields = collector.collect(def)?;
        staged.insert(def.name.clone(), Staged {
            storage_name: def.storage_name.clone(),
            fields
        });
    }
    Ok(())
}

/// Pass 2: attach edges to the fields of one table.
fn resolve_entity(
    resolver: &EdgeResolver<'_>,
    name: &str,
    staged: &Staged,
    tables: &StagedMap
) -> Result<FieldMap> {
    let owner = Side::new(name, &staged.fields);
    let mut fields = FieldMap::with_capacity(staged.fields.len());

    for (key, field) in &staged.fields {
        let mut field = field.clone();
        if !field.annotations.client.skip_edge
            && let Some((target_name, target)) = tables.get_key_value(&field.raw_type)
        {
            let target = Side::new(target_name, &target.fields);
            field.edge = Some(resolver.resolve(owner, &field, target)?);
        }
        fields.insert(key.clone(), field);
    }

    Ok(fields)
}

fn into_entities(staged: StagedMap) -> Vec<Entity> {
    staged
        .into_iter()
        .map(|(name, staged)| Entity {
            name,
            storage_name: staged.storage_name,
            fields: staged.fields.into_values().collect()
        })
        .collect()
}
