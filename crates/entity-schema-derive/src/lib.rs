// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Derive macro for `entity-schema` model definitions.
//!
//! Use the `entity-schema` crate, which re-exports [`Model`](macro@Model)
//! together with the engine.
//!
//! # Attribute Quick Reference
//!
//! ## Struct-Level `#[model(...)]`
//!
//! ```rust,ignore
//! #[derive(Model)]
//! #[model(
//!     name = "Order",   // Optional: schema name (default: struct name)
//!     table = "orders"  // Optional: storage name override
//! )]
//! pub struct Order { /* ... */ }
//! ```
//!
//! ## Field-Level `#[model(...)]`
//!
//! ```rust,ignore
//! pub struct Order {
//!     #[model(embed)]                          // Splice Base's fields here
//!     pub base: Base,
//!
//!     #[model(rename = "CustomerID")]          // Schema field name
//!     pub customer_id: u64,
//!
//!     #[model(
//!         storage = "foreignKey:CustomerID",   // Storage namespace
//!         json = "customer,omitempty",         // Serialization namespace
//!         client = "type=Customer",            // Client type namespace
//!         validate = "notEmpty"                // Validation namespace
//!     )]
//!     pub customer: Customer,
//!
//!     #[model(skip)]                           // Not part of the schema
//!     pub cache: Vec<u8>
//! }
//! ```
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl ::entity_schema_core::Model for Order {
//!     fn definition() -> ::entity_schema_core::ModelDef {
//!         ::entity_schema_core::ModelDef::new("Order")
//!             .with_storage_name("orders")
//!             .embed(<Base as ::entity_schema_core::Model>::definition())
//!             .field(::entity_schema_core::FieldSpec::new("CustomerID", "u64"))
//!             .field(
//!                 ::entity_schema_core::FieldSpec::new("customer", "Customer")
//!                     .storage("foreignKey:CustomerID")
//!                     .json("customer,omitempty")
//!                     .client("type=Customer")
//!                     .validate("notEmpty")
//!             )
//!     }
//! }
//! ```
//!
//! The declared type is the field type's token text with whitespace removed
//! (a single space is kept between adjacent words, as in `&'a mut T`).

mod model;
mod utils;

use proc_macro::TokenStream;

/// Derive `Model::definition()` for a struct with named fields.
///
/// # Example
///
/// ```rust,ignore
/// use entity_schema::Model;
///
/// #[derive(Model)]
/// pub struct Base {
///     #[model(rename = "ID")]
///     pub id: u64
/// }
///
/// #[derive(Model)]
/// #[model(table = "users")]
/// pub struct User {
///     #[model(embed)]
///     pub base: Base,
///     #[model(validate = "notEmpty;maxLen=64")]
///     pub name: String
/// }
/// ```
///
/// # Errors
///
/// Compile errors for enums, tuple structs, unknown keys and `embed`
/// combined with `rename`, `skip` or annotations.
#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    model::derive(input)
}
