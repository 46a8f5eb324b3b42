// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[model(...)]` attribute parsing.
//!
//! | Level | Key | Type | Effect |
//! |-------|-----|------|--------|
//! | struct | `name` | string | Schema name (default: struct name) |
//! | struct | `table` | string | Storage name override |
//! | field | `embed` | flag | Splice the field type's definition in place |
//! | field | `skip` | flag | Leave the field out |
//! | field | `rename` | string | Schema field name (default: field name) |
//! | field | `storage` | string | Storage namespace |
//! | field | `json` | string | Serialization namespace |
//! | field | `client` | string | Client type namespace |
//! | field | `validate` | string | Validation namespace |

use darling::{
    FromDeriveInput, FromField,
    ast::{Data, Style},
    util::Ignored
};
use syn::{DeriveInput, Generics, Ident, Type, ext::IdentExt};

/// Parsed struct with its `#[model(...)]` attributes.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(model))]
pub struct ModelInput {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, carried over to the impl.
    pub generics: Generics,

    /// Named fields.
    pub data: Data<Ignored, ModelField>,

    /// Schema name override.
    #[darling(default)]
    pub name: Option<String>,

    /// Storage name override.
    #[darling(default)]
    pub table: Option<String>
}

/// One field with its `#[model(...)]` attributes.
#[derive(Debug, FromField)]
#[darling(attributes(model))]
pub struct ModelField {
    /// Field identifier; always set for named structs.
    pub ident: Option<Ident>,

    /// Field type.
    pub ty: Type,

    /// Splice the type's definition in place.
    #[darling(default)]
    pub embed: bool,

    /// Leave the field out.
    #[darling(default)]
    pub skip: bool,

    /// Schema field name override.
    #[darling(default)]
    pub rename: Option<String>,

    /// Storage namespace.
    #[darling(default)]
    pub storage: Option<String>,

    /// Serialization namespace.
    #[darling(default)]
    pub json: Option<String>,

    /// Client type namespace.
    #[darling(default)]
    pub client: Option<String>,

    /// Validation namespace.
    #[darling(default)]
    pub validate: Option<String>
}

impl ModelInput {
    /// Parse and check a derive input.
    ///
    /// # Errors
    ///
    /// An error on the struct name for anything but a struct with named
    /// fields, darling errors for unknown keys, and one error per field that
    /// combines `embed` with other keys.
    pub fn parse(input: &DeriveInput) -> darling::Result<Self> {
        let model = Self::from_derive_input(input)?;
        if !matches!(&model.data, Data::Struct(fields) if fields.style == Style::Struct) {
            return Err(darling::Error::custom(
                "`Model` can only be derived for structs with named fields"
            )
            .with_span(&model.ident));
        }
        let mut errors = darling::Error::accumulator();
        for field in model.fields() {
            errors.handle(field.check());
        }
        errors.finish_with(model)
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> Vec<&ModelField> {
        self.data
            .as_ref()
            .take_struct()
            .map(|fields| fields.fields)
            .unwrap_or_default()
    }

    /// Name used in the schema.
    #[must_use]
    pub fn schema_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.ident.unraw().to_string()
        }
    }
}

impl ModelField {
    /// Name used in the schema.
    #[must_use]
    pub fn schema_name(&self) -> String {
        match (&self.rename, &self.ident) {
            (Some(name), _) => name.clone(),
            (None, Some(ident)) => ident.unraw().to_string(),
            (None, None) => String::new()
        }
    }

    /// Raw annotation strings as `(builder method, value)` pairs.
    pub fn tags(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("storage", &self.storage),
            ("json", &self.json),
            ("client", &self.client),
            ("validate", &self.validate)
        ]
        .into_iter()
        .filter_map(|(method, value)| value.as_deref().map(|value| (method, value)))
    }

    /// Reject `embed` mixed with keys that only apply to plain fields.
    fn check(&self) -> darling::Result<()> {
        if self.embed && (self.skip || self.rename.is_some() || self.tags().next().is_some()) {
            let error = darling::Error::custom(
                "`embed` cannot be combined with `skip`, `rename` or annotations"
            );
            return Err(match &self.ident {
                Some(ident) => error.with_span(ident),
                None => error
            });
        }
        Ok(())
    }
}
