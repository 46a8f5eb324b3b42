// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use entity_schema::Model;

#[derive(Model)]
pub struct Item {
    #[model(indexed)]
    pub id: u64,
}

fn main() {}
