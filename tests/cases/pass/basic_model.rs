// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_schema::{FieldDecl, Model};

#[derive(Model)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: Option<String>,
}

fn main() {
    let def = Customer::definition();
    assert_eq!(def.name, "Customer");
    assert!(def.storage_name.is_none());
    assert_eq!(def.fields.len(), 3);

    let FieldDecl::Field(email) = &def.fields[2] else {
        panic!("email should be a plain field");
    };
    assert_eq!(email.name, "email");
    assert_eq!(email.declared_type, "Option<String>");
    assert!(email.tags.is_empty());
}
