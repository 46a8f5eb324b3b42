// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_schema::{FieldDecl, Model};

#[derive(Model)]
pub struct Page<'a, T: Clone> {
    pub items: &'a [T],
    pub r#type: String,
}

fn main() {
    let def = <Page<'static, u8> as Model>::definition();
    assert_eq!(def.name, "Page");

    let FieldDecl::Field(items) = &def.fields[0] else {
        panic!("items should be a plain field");
    };
    assert_eq!(items.declared_type, "&'a[T]");

    let FieldDecl::Field(kind) = &def.fields[1] else {
        panic!("type should be a plain field");
    };
    assert_eq!(kind.name, "type");
}
