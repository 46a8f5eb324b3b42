// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Name case conversion for client projections.

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

/// Case applied to names emitted for clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingCase {
    /// Names are kept as declared.
    #[default]
    AsIs,
    /// `createdAt`
    Camel,
    /// `created_at`
    Snake,
    /// `CreatedAt`
    Pascal
}

impl NamingCase {
    /// Convert `name` to this case.
    #[must_use]
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::AsIs => name.to_string(),
            Self::Camel => name.to_case(Case::Camel),
            Self::Snake => name.to_case(Case::Snake),
            Self::Pascal => name.to_case(Case::Pascal)
        }
    }
}
