// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # entity-schema
//!
//! One crate, all features. Re-exports:
//! - [`Model`](macro@Model) derive macro from `entity-schema-derive`
//! - All types from `entity-schema-core` ([`Registry`], [`SchemaBuilder`],
//!   [`Schema`], [`SchemaConfig`], ...)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use entity_schema::{Model, Registry, SchemaConfig};
//!
//! #[derive(Model)]
//! pub struct Base {
//!     #[model(rename = "ID")]
//!     pub id: u64
//! }
//!
//! #[derive(Model)]
//! #[model(table = "customers")]
//! pub struct Customer {
//!     #[model(embed)]
//!     pub base: Base,
//!     #[model(rename = "Orders")]
//!     pub orders: Vec<Order>
//! }
//!
//! #[derive(Model)]
//! pub struct Order {
//!     #[model(embed)]
//!     pub base: Base,
//!     #[model(rename = "CustomerID")]
//!     pub customer_id: u64,
//!     pub customer: Box<Customer>
//! }
//!
//! let schema = Registry::new()
//!     .register::<Customer>()
//!     .register::<Order>()
//!     .build(&SchemaConfig::default())?;
//!
//! let edge = schema.table("Order")?.field("customer").and_then(|f| f.edge.as_ref());
//! println!("{}", schema.to_json_pretty()?);
//! ```
//!
//! The derive expands to paths under `::entity_schema_core`, so depend on
//! that crate next to this one.

pub use entity_schema_core::*;
pub use entity_schema_derive::Model;

/// Core types plus the [`Model`](macro@Model) derive.
pub mod prelude {
    pub use entity_schema_core::prelude::*;
    pub use entity_schema_derive::Model;
}
