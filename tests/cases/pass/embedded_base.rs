// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_schema::{FieldDecl, Model};

#[derive(Model)]
pub struct Base {
    #[model(rename = "ID")]
    pub id: u64,
    #[model(rename = "CreatedAt")]
    pub created_at: String,
}

#[derive(Model)]
pub struct User {
    #[model(embed)]
    pub base: Base,
    #[model(rename = "Name")]
    pub name: String,
}

fn main() {
    let def = User::definition();
    assert_eq!(def.fields.len(), 2);
    match &def.fields[0] {
        FieldDecl::Embed(base) => {
            assert_eq!(base.name, "Base");
            assert_eq!(base.fields.len(), 2);
        }
        FieldDecl::Field(_) => panic!("base should be embedded"),
    }
}
