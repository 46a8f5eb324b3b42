// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use entity_schema::Model;

#[derive(Model)]
pub struct Item(u64, String);

fn main() {}
