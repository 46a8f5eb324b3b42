// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use entity_schema_core::prelude::*;
//! ```

pub use crate::{
    Edge, Entity, Field, FieldSpec, Model, ModelDef, NamingCase, Registry, Rule, Schema,
    SchemaBuilder, SchemaConfig, SchemaError
};
