// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use entity_schema::Model;

#[derive(Model)]
pub struct Base {
    pub id: u64,
}

#[derive(Model)]
pub struct User {
    #[model(embed, rename = "Base")]
    pub base: Base,
    pub name: String,
}

fn main() {}
