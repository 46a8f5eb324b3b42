// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Relationship resolution.
//!
//! Given a field whose raw type names a table, [`EdgeResolver`] works out
//! the cardinality and the key pair connecting the two entities. Precedence
//! is fixed and the first match wins:
//!
//! ```text
//! many2many:<join> ───────────────► via_join, keys = primary, to-many
//!        │ no
//!        ▼
//! collection? ── yes ─► to-many: key  = foreignKey | <Owner>ID   on target
//!        │ no                    ref  = references | primary     on owner
//!        ▼
//! to-one:
//!   (a) foreignKey | <Owner>ID on target? ─► target_key, reference on owner
//!   (b) foreignKey | <Field>ID on owner?  ─► local_key,  reference on target
//!   (c) neither ─► UnresolvedRelationship (foreign key)
//! ```
//!
//! A key found without its complementary reference fails with
//! `UnresolvedRelationship` (reference). Candidate names spell
//! `<Owner>ID` / `<Field>ID` according to [`KeyStyle`](crate::KeyStyle).
//!
//! # Cascade Hints
//!
//! `on_update` / `on_delete` come from the field's own storage tag. When it
//! has none, the first inverse field on the target (a field whose raw type is
//! the owning entity) that carries the hint supplies it.
//!
//! # Example
//!
//! Zero-annotation models with standard naming resolve on their own:
//!
//! ```rust,ignore
//! struct Order    { ID: u64, CustomerID: u64, customer: Customer }
//! struct Customer { ID: u64, orders: Vec<Order> }
//!
//! // Order.customer  → local_key = CustomerID, target_key = ID, unique
//! // Customer.orders → local_key = ID, target_key = CustomerID, to-many
//! ```

use tracing::trace;

use crate::{
    annotation::StorageTag,
    collector::FieldMap,
    config::SchemaConfig,
    error::{MissingKey, Result, SchemaError},
    schema::{Edge, Field}
};

/// One side of a relationship: an entity and its flattened fields.
#[derive(Debug, Clone, Copy)]
pub struct Side<'a> {
    /// Entity name.
    pub entity: &'a str,
    /// Flattened fields of the entity.
    pub fields: &'a FieldMap
}

impl<'a> Side<'a> {
    /// Pair an entity name with its fields.
    #[must_use]
    pub fn new(entity: &'a str, fields: &'a FieldMap) -> Self {
        Self {
            entity,
            fields
        }
    }

    fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    fn qualify(&self, field: &str) -> String {
        format!("{}.{field}", self.entity)
    }
}

/// Resolves relationship fields into edges.
#[derive(Debug, Clone, Copy)]
pub struct EdgeResolver<'a> {
    config: &'a SchemaConfig
}

impl<'a> EdgeResolver<'a> {
    /// Create a resolver for one build.
    #[must_use]
    pub fn new(config: &'a SchemaConfig) -> Self {
        Self {
            config
        }
    }

    /// Resolve `field` of `owner`, whose raw type is `target`.
    ///
    /// # Errors
    ///
    /// `UnresolvedRelationship` when no key or no reference can be located.
    pub fn resolve(&self, owner: Side<'_>, field: &Field, target: Side<'_>) -> Result<Edge> {
        let storage = &field.annotations.storage;
        let (on_update, on_delete) = cascade_hints(owner, field, target);

        let (unique, local_key, target_key) = if storage.is_many_to_many() {
            let primary = self.config.primary_key.clone();
            (false, primary.clone(), primary)
        } else if field.is_collection {
            let (local, remote) = self.to_many(owner, field, target)?;
            (false, local, remote)
        } else {
            let (local, remote) = self.to_one(owner, field, target)?;
            (true, local, remote)
        };

        trace!(
            entity = owner.entity,
            field = %field.name,
            target = target.entity,
            unique,
            local_key = %local_key,
            target_key = %target_key,
            via_join = storage.many2many.as_deref(),
            "edge resolved"
        );

        Ok(Edge {
            target_entity: target.entity.to_string(),
            unique,
            local_key,
            target_key,
            via_join: storage.many2many.clone(),
            on_update,
            on_delete
        })
    }

    /// Key pair for a to-one field, as `(local_key, target_key)`.
    fn to_one(&self, owner: Side<'_>, field: &Field, target: Side<'_>) -> Result<(String, String)> {
        let storage = &field.annotations.storage;
        let reference = self.reference(field);

        let remote_key = storage
            .foreign_key
            .clone()
            .unwrap_or_else(|| self.config.convention_key(owner.entity));
        if target.has(&remote_key) {
            if owner.has(&reference) {
                return Ok((reference, remote_key));
            }
            return Err(unresolved(owner, field, MissingKey::Reference, vec![
                owner.qualify(&reference)
            ]));
        }

        let local_key = storage
            .foreign_key
            .clone()
            .unwrap_or_else(|| self.config.convention_key(&field.name));
        if owner.has(&local_key) {
            if target.has(&reference) {
                return Ok((local_key, reference));
            }
            return Err(unresolved(owner, field, MissingKey::Reference, vec![
                target.qualify(&reference)
            ]));
        }

        Err(unresolved(owner, field, MissingKey::ForeignKey, vec![
            target.qualify(&remote_key),
            owner.qualify(&local_key)
        ]))
    }

    /// Key pair for a to-many field, as `(local_key, target_key)`.
    fn to_many(
        &self,
        owner: Side<'_>,
        field: &Field,
        target: Side<'_>
    ) -> Result<(String, String)> {
        let remote_key = field
            .annotations
            .storage
            .foreign_key
            .clone()
            .unwrap_or_else(|| self.config.convention_key(owner.entity));
        if !target.has(&remote_key) {
            return Err(unresolved(owner, field, MissingKey::ForeignKey, vec![
                target.qualify(&remote_key)
            ]));
        }

        let reference = self.reference(field);
        if !owner.has(&reference) {
            return Err(unresolved(owner, field, MissingKey::Reference, vec![
                owner.qualify(&reference)
            ]));
        }

        Ok((reference, remote_key))
    }

    /// `references` override, else the primary identifier.
    fn reference(&self, field: &Field) -> String {
        field
            .annotations
            .storage
            .references
            .clone()
            .unwrap_or_else(|| self.config.primary_key.clone())
    }
}

fn unresolved(
    owner: Side<'_>,
    field: &Field,
    missing: MissingKey,
    tried: Vec<String>
) -> SchemaError {
    SchemaError::unresolved(owner.entity, &field.name, missing, tried)
}

/// Cascade hints from the field, else from an inverse field on the target.
fn cascade_hints(
    owner: Side<'_>,
    field: &Field,
    target: Side<'_>
) -> (Option<String>, Option<String>) {
    let own = &field.annotations.storage;
    let self_referential = owner.entity == target.entity;

    let inverse: Vec<&StorageTag> = target
        .fields
        .values()
        .filter(|f| f.raw_type == owner.entity)
        .filter(|f| !(self_referential && f.name == field.name))
        .map(|f| &f.annotations.storage)
        .collect();

    let on_update = own
        .on_update
        .clone()
        .or_else(|| inverse.iter().find_map(|s| s.on_update.clone()));
    let on_delete = own
        .on_delete
        .clone()
        .or_else(|| inverse.iter().find_map(|s| s.on_delete.clone()));

    (on_update, on_delete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        KeyStyle,
        collector::FieldCollector,
        definition::{FieldSpec, ModelDef}
    };

    fn collect(config: &SchemaConfig, def: ModelDef) -> FieldMap {
        FieldCollector::new(config).collect(&def).unwrap()
    }

    fn resolve(
        config: &SchemaConfig,
        owner: (&str, &FieldMap),
        field: &str,
        target: (&str, &FieldMap)
    ) -> Result<Edge> {
        EdgeResolver::new(config).resolve(
            Side::new(owner.0, owner.1),
            &owner.1[field],
            Side::new(target.0, target.1)
        )
    }

    fn customer(config: &SchemaConfig) -> FieldMap {
        collect(config, ModelDef::new("Customer").field(FieldSpec::new("ID", "uint")))
    }

    #[test]
    fn local_convention_key() {
        let config = SchemaConfig::default();
        let order = collect(
            &config,
            ModelDef::new("Order")
                .field(FieldSpec::new("ID", "uint"))
                .field(FieldSpec::new("CustomerID", "uint"))
                .field(FieldSpec::new("customer", "Customer"))
        );
        let customer = customer(&config);
        let edge = resolve(&config, ("Order", &order), "customer", ("Customer", &customer)).unwrap();
        assert!(edge.unique);
        assert_eq!(edge.local_key, "CustomerID");
        assert_eq!(edge.target_key, "ID");
        assert_eq!(edge.target_entity, "Customer");
        assert!(edge.via_join.is_none());
    }

    #[test]
    fn target_convention_key_wins() {
        let config = SchemaConfig::default();
        let user = collect(
            &config,
            ModelDef::new("User")
                .field(FieldSpec::new("ID", "uint"))
                .field(FieldSpec::new("ProfileID", "uint"))
                .field(FieldSpec::new("Profile", "*Profile"))
        );
        let profile = collect(
            &config,
            ModelDef::new("Profile")
                .field(FieldSpec::new("ID", "uint"))
                .field(FieldSpec::new("UserID", "uint"))
        );
        let edge = resolve(&config, ("User", &user), "Profile", ("Profile", &profile)).unwrap();
        assert_eq!(edge.local_key, "ID");
        assert_eq!(edge.target_key, "UserID");
    }

    #[test]
    fn explicit_foreign_key_and_reference() {
        let config = SchemaConfig::default();
        let post = collect(
            &config,
            ModelDef::new("Post")
                .field(FieldSpec::new("ID", "uint"))
                .field(FieldSpec::new("AuthorEmail", "string"))
                .field(
                    FieldSpec::new("author", "User")
                        .storage("foreignKey:AuthorEmail;references:Email")
                )
        );
        let user = collect(
            &config,
            ModelDef::new("User")
                .field(FieldSpec::new("ID", "uint"))
                .field(FieldSpec::new("Email", "string"))
        );
        let edge = resolve(&config, ("Post", &post), "author", ("User", &user)).unwrap();
        assert_eq!(edge.local_key, "AuthorEmail");
        assert_eq!(edge.target_key, "Email");
    }

    #[test]
    fn missing_key_reports_candidates() {
        let config = SchemaConfig::default();
        let order = collect(
            &config,
            ModelDef::new("Order")
                .field(FieldSpec::new("ID", "uint"))
                .field(FieldSpec::new("customer", "Customer"))
        );
        let customer = customer(&config);
        let err = resolve(&config, ("Order", &order), "customer", ("Customer", &customer)).unwrap_err();
        match err {
            SchemaError::UnresolvedRelationship {
                entity,
                field,
                missing,
                tried
            } => {
                assert_eq!((entity.as_str(), field.as_str()), ("Order", "customer"));
                assert_eq!(missing, MissingKey::ForeignKey);
                assert_eq!(tried, vec!["Customer.OrderID", "Order.CustomerID"]);
            }
            other => panic!("unexpected error: {other}")
        }
    }

    #[test]
    fn missing_reference_fails() {
        let config = SchemaConfig::default();
        let order = collect(
            &config,
            ModelDef::new("Order")
                .field(FieldSpec::new("CustomerID", "uint"))
                .field(FieldSpec::new("customer", "Customer"))
        );
        let customer = collect(&config, ModelDef::new("Customer").field(FieldSpec::new("Key", "uint")));
        let err = resolve(&config, ("Order", &order), "customer", ("Customer", &customer)).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnresolvedRelationship { missing: MissingKey::Reference, ref tried, .. }
                if tried == &["Customer.ID"]
        ));
    }

    #[test]
    fn target_key_without_owner_reference_fails() {
        let config = SchemaConfig::default();
        let user = collect(
            &config,
            ModelDef::new("User")
                .field(FieldSpec::new("Key", "uint"))
                .field(FieldSpec::new("Profile", "Profile"))
        );
        let profile = collect(
            &config,
            ModelDef::new("Profile")
                .field(FieldSpec::new("ID", "uint"))
                .field(FieldSpec::new("UserID", "uint"))
        );
        let err = resolve(&config, ("User", &user), "Profile", ("Profile", &profile)).unwrap_err();
        match err {
            SchemaError::UnresolvedRelationship {
                entity,
                field,
                missing,
                tried
            } => {
                assert_eq!((entity.as_str(), field.as_str()), ("User", "Profile"));
                assert_eq!(missing, MissingKey::Reference);
                assert_eq!(tried, vec!["User.ID"]);
            }
            other => panic!("unexpected error: {other}")
        }
    }

    #[test]
    fn to_many_without_owner_reference_fails() {
        let config = SchemaConfig::default();
        let customer = collect(
            &config,
            ModelDef::new("Customer")
                .field(FieldSpec::new("Key", "uint"))
                .field(FieldSpec::new("Orders", "[]Order"))
        );
        let order = collect(&config, ModelDef::new("Order").field(FieldSpec::new("CustomerID", "uint")));
        let err = resolve(&config, ("Customer", &customer), "Orders", ("Order", &order)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot find reference for Customer.Orders (tried: Customer.ID)"
        );
        match err {
            SchemaError::UnresolvedRelationship {
                missing,
                tried,
                ..
            } => {
                assert_eq!(missing, MissingKey::Reference);
                assert_eq!(tried, vec!["Customer.ID"]);
            }
            other => panic!("unexpected error: {other}")
        }
    }

    #[test]
    fn to_many_uses_back_reference() {
        let config = SchemaConfig::default();
        let customer = collect(
            &config,
            ModelDef::new("Customer")
                .field(FieldSpec::new("ID", "uint"))
                .field(FieldSpec::new("Orders", "[]Order"))
        );
        let order = collect(
            &config,
            ModelDef::new("Order")
                .field(FieldSpec::new("ID", "uint"))
                .field(FieldSpec::new("CustomerID", "uint"))
        );
        let edge = resolve(&config, ("Customer", &customer), "Orders", ("Order", &order)).unwrap();
        assert!(!edge.unique);
        assert_eq!(edge.local_key, "ID");
        assert_eq!(edge.target_key, "CustomerID");
    }

    #[test]
    fn to_many_without_back_reference_fails() {
        let config = SchemaConfig::default();
        let customer = collect(
            &config,
            ModelDef::new("Customer")
                .field(FieldSpec::new("ID", "uint"))
                .field(FieldSpec::new("Orders", "Vec<Order>"))
        );
        let order = collect(&config, ModelDef::new("Order").field(FieldSpec::new("ID", "uint")));
        let err = resolve(&config, ("Customer", &customer), "Orders", ("Order", &order)).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnresolvedRelationship { missing: MissingKey::ForeignKey, .. }
        ));
    }

    #[test]
    fn many_to_many_skips_inference() {
        let config = SchemaConfig::default();
        let order = collect(
            &config,
            ModelDef::new("Order")
                .field(FieldSpec::new("ID", "uint"))
                .field(FieldSpec::new("ProductID", "uint"))
                .field(FieldSpec::new("products", "[]Product").storage("many2many:order_products"))
        );
        let product = collect(&config, ModelDef::new("Product").field(FieldSpec::new("OrderID", "uint")));
        let edge = resolve(&config, ("Order", &order), "products", ("Product", &product)).unwrap();
        assert_eq!(edge.via_join.as_deref(), Some("order_products"));
        assert_eq!((edge.local_key.as_str(), edge.target_key.as_str()), ("ID", "ID"));
        assert!(!edge.unique);
        assert!(edge.is_many_to_many());
    }

    #[test]
    fn self_reference() {
        let config = SchemaConfig::default();
        let category = collect(
            &config,
            ModelDef::new("Category")
                .field(FieldSpec::new("ID", "uint"))
                .field(FieldSpec::new("ParentID", "*uint"))
                .field(FieldSpec::new("parent", "*Category"))
        );
        let edge = resolve(
            &config,
            ("Category", &category),
            "parent",
            ("Category", &category)
        )
        .unwrap();
        assert_eq!(edge.local_key, "ParentID");
        assert_eq!(edge.target_key, "ID");
        assert_eq!(edge.target_entity, "Category");
    }

    #[test]
    fn snake_key_style() {
        let config = SchemaConfig::default()
            .with_primary_key("id")
            .with_key_style(KeyStyle::Snake);
        let order = collect(
            &config,
            ModelDef::new("Order")
                .field(FieldSpec::new("id", "u64"))
                .field(FieldSpec::new("customer_id", "u64"))
                .field(FieldSpec::new("customer", "Customer"))
        );
        let customer = collect(&config, ModelDef::new("Customer").field(FieldSpec::new("id", "u64")));
        let edge = resolve(&config, ("Order", &order), "customer", ("Customer", &customer)).unwrap();
        assert_eq!((edge.local_key.as_str(), edge.target_key.as_str()), ("customer_id", "id"));
    }

    #[test]
    fn cascade_from_field_then_inverse() {
        let config = SchemaConfig::default();
        let customer = collect(
            &config,
            ModelDef::new("Customer")
                .field(FieldSpec::new("ID", "uint"))
                .field(
                    FieldSpec::new("Orders", "[]Order")
                        .storage("constraint:OnUpdate:CASCADE,OnDelete:SET NULL")
                )
        );
        let order = collect(
            &config,
            ModelDef::new("Order")
                .field(FieldSpec::new("ID", "uint"))
                .field(FieldSpec::new("CustomerID", "uint"))
                .field(FieldSpec::new("customer", "Customer").storage("onDelete:RESTRICT"))
        );
        let edge = resolve(&config, ("Order", &order), "customer", ("Customer", &customer)).unwrap();
        assert_eq!(edge.on_delete.as_deref(), Some("RESTRICT"));
        assert_eq!(edge.on_update.as_deref(), Some("CASCADE"));
    }
}
