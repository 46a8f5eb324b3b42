// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field flattening.
//!
//! Walks a definition depth-first and splices embedded structures in place,
//! producing one ordered, name-indexed field map per entity.
//!
//! ```text
//! User                       flattened
//! ├── Base (embed)           ├── ID
//! │   ├── ID                 ├── CreatedAt
//! │   └── CreatedAt          ├── Name
//! ├── Name                   └── Email
//! └── Email
//! ```
//!
//! # Collisions
//!
//! Two flattened fields with the same name are handled by
//! [`CollisionPolicy`]: the first one wins (a warning is logged) or the build
//! fails with `DuplicateField`.

use indexmap::{IndexMap, map::Entry};
use tracing::{debug, warn};

use crate::{
    annotation::Annotations,
    config::{CollisionPolicy, SchemaConfig},
    definition::{FieldDecl, FieldSpec, ModelDef},
    error::{Result, SchemaError},
    schema::Field,
    signature::TypeSignature
};

/// Flattened fields of one entity, in declaration order.
pub type FieldMap = IndexMap<String, Field>;

/// Flattens definitions into field maps.
#[derive(Debug, Clone, Copy)]
pub struct FieldCollector<'a> {
    config: &'a SchemaConfig
}

impl<'a> FieldCollector<'a> {
    /// Create a collector for one build.
    #[must_use]
    pub fn new(config: &'a SchemaConfig) -> Self {
        Self {
            config
        }
    }

    /// Flatten `def` into its ordered field map.
    ///
    /// # Errors
    ///
    /// `DuplicateField` when two fields share a name and the policy is
    /// [`CollisionPolicy::Reject`].
    pub fn collect(&self, def: &ModelDef) -> Result<FieldMap> {
        let mut fields = FieldMap::new();
        self.visit(&def.name, &def.fields, &mut fields)?;
        debug!(entity = %def.name, fields = fields.len(), "fields collected");
        Ok(fields)
    }

    fn visit(&self, entity: &str, decls: &[FieldDecl], fields: &mut FieldMap) -> Result<()> {
        for decl in decls {
            match decl {
                FieldDecl::Field(spec) => self.insert(entity, spec, fields)?,
                FieldDecl::Embed(inner) => self.visit(entity, &inner.fields, fields)?
            }
        }
        Ok(())
    }

    fn insert(&self, entity: &str, spec: &FieldSpec, fields: &mut FieldMap) -> Result<()> {
        match fields.entry(spec.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(build_field(spec));
                Ok(())
            }
            Entry::Occupied(_) => match self.config.collisions {
                CollisionPolicy::FirstWins => {
                    warn!(
                        entity,
                        field = %spec.name,
                        "duplicate field dropped, first declaration kept"
                    );
                    Ok(())
                }
                CollisionPolicy::Reject => Err(SchemaError::DuplicateField {
                    entity: entity.to_string(),
                    field:  spec.name.clone()
                })
            }
        }
    }
}

/// Field without edge, from its declaration.
fn build_field(spec: &FieldSpec) -> Field {
    let signature = TypeSignature::parse(&spec.declared_type);
    Field {
        name:          spec.name.clone(),
        declared_type: spec.declared_type.clone(),
        raw_type:      signature.raw_type,
        is_collection: signature.is_collection,
        nullable:      signature.nullable,
        annotations:   Annotations::parse(&spec.tags),
        edge:          None
    }
}
