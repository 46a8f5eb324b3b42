// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_schema::{FieldDecl, Model};

#[derive(Model)]
pub struct Customer {
    #[model(rename = "ID")]
    pub id: u64,
}

#[derive(Model)]
#[model(name = "Order", table = "orders")]
pub struct OrderRow {
    #[model(rename = "ID")]
    pub id: u64,

    #[model(rename = "CustomerID")]
    pub customer_id: u64,

    #[model(
        storage = "foreignKey:CustomerID;constraint:OnDelete:CASCADE",
        json = "customer,omitempty",
        client = "type=Customer;optional",
        validate = "notEmpty"
    )]
    pub customer: Box<Customer>,

    #[model(skip)]
    pub cache: Vec<u8>,
}

fn main() {
    let def = OrderRow::definition();
    assert_eq!(def.name, "Order");
    assert_eq!(def.storage_name.as_deref(), Some("orders"));
    assert_eq!(def.fields.len(), 3);

    let FieldDecl::Field(customer) = &def.fields[2] else {
        panic!("customer should be a plain field");
    };
    assert_eq!(customer.declared_type, "Box<Customer>");
    assert_eq!(
        customer.tags.storage.as_deref(),
        Some("foreignKey:CustomerID;constraint:OnDelete:CASCADE")
    );
    assert_eq!(customer.tags.serialization.as_deref(), Some("customer,omitempty"));
    assert_eq!(customer.tags.client.as_deref(), Some("type=Customer;optional"));
    assert_eq!(customer.tags.validation.as_deref(), Some("notEmpty"));
}
