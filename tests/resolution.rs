// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use entity_schema::{
    Edge, MissingKey, Model, NamingCase, Registry, Rule, Schema, SchemaConfig, SchemaError,
    ValidationRule
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("entity_schema_core=trace")
        .with_test_writer()
        .try_init();
}

#[derive(Model)]
struct Base {
    #[model(rename = "ID")]
    id: u64,
    #[model(rename = "CreatedAt")]
    created_at: String
}

#[derive(Model)]
#[model(table = "customers")]
struct Customer {
    #[model(embed)]
    base: Base,
    #[model(rename = "Email", json = "email", validate = "notEmpty;maxLen=120;email")]
    email: String,
    #[model(rename = "Orders", storage = "onDelete:CASCADE")]
    orders: Vec<Order>
}

#[derive(Model)]
struct Order {
    #[model(embed)]
    base: Base,
    #[model(rename = "CustomerID")]
    customer_id: u64,
    customer: Box<Customer>,
    #[model(storage = "many2many:order_products")]
    products: Vec<Product>,
    #[model(client = "skipEdge")]
    shipped_by: Option<Box<Customer>>,
    shipping: Address
}

#[derive(Model)]
struct Product {
    #[model(embed)]
    base: Base,
    #[model(rename = "Name", validate = "notEmpty;minLen=3;maxLen=20;alphaSpace")]
    name: String
}

#[derive(Model)]
struct Address {
    #[model(rename = "Street")]
    street: String,
    #[model(rename = "Zip", validate = "numeric")]
    zip: String,
    resident: Option<Box<Customer>>
}

#[derive(Model)]
struct Category {
    #[model(rename = "ID")]
    id: u64,
    #[model(rename = "ParentID")]
    parent_id: Option<u64>,
    parent: Option<Box<Category>>
}

fn shop() -> Registry {
    Registry::new()
        .register::<Customer>()
        .register::<Order>()
        .register::<Product>()
        .register::<Category>()
        .register_type::<Address>()
}

fn build(registry: &Registry) -> Schema {
    init_tracing();
    registry.build(&SchemaConfig::default()).unwrap()
}

fn edge<'s>(schema: &'s Schema, entity: &str, field: &str) -> Option<&'s Edge> {
    schema.table(entity).unwrap().field(field).unwrap().edge.as_ref()
}

#[test]
fn relationship_fields_get_edges() {
    let schema = build(&shop());
    for entity in schema.tables() {
        for field in &entity.fields {
            let is_table = schema.table(&field.raw_type).is_ok();
            let skipped = field.annotations.client.skip_edge;
            assert_eq!(
                field.edge.is_some(),
                is_table && !skipped,
                "{}.{}",
                entity.name,
                field.name
            );
            if let Some(edge) = &field.edge {
                assert_eq!(edge.unique, !field.is_collection, "{}.{}", entity.name, field.name);
            }
        }
    }
}

#[test]
fn to_one_uses_local_convention_key() {
    let schema = build(&shop());
    let customer = edge(&schema, "Order", "customer").unwrap();
    assert!(customer.unique);
    assert_eq!(customer.target_entity, "Customer");
    assert_eq!(customer.local_key, "CustomerID");
    assert_eq!(customer.target_key, "ID");
    assert_eq!(customer.on_delete.as_deref(), Some("CASCADE"));
}

#[test]
fn to_many_uses_back_reference() {
    let schema = build(&shop());
    let orders = edge(&schema, "Customer", "Orders").unwrap();
    assert!(!orders.unique);
    assert_eq!(orders.local_key, "ID");
    assert_eq!(orders.target_key, "CustomerID");
}

#[test]
fn many_to_many_is_fixed() {
    let schema = build(&shop());
    let products = edge(&schema, "Order", "products").unwrap();
    assert_eq!(products.via_join.as_deref(), Some("order_products"));
    assert_eq!(products.local_key, "ID");
    assert_eq!(products.target_key, "ID");
    assert!(!products.unique);
}

#[test]
fn self_reference_resolves_without_annotations() {
    let schema = build(&shop());
    let parent = edge(&schema, "Category", "parent").unwrap();
    assert_eq!(parent.local_key, "ParentID");
    assert_eq!(parent.target_key, "ID");
    assert_eq!(parent.target_entity, "Category");
}

#[test]
fn skipped_and_value_typed_fields_stay_plain() {
    let schema = build(&shop());
    assert!(edge(&schema, "Order", "shipped_by").is_none());
    assert!(edge(&schema, "Order", "shipping").is_none());

    let address = schema.lookup("Address").unwrap();
    assert!(address.fields.iter().all(|f| f.edge.is_none()));
    assert!(schema.table("Address").is_err());
}

#[test]
fn missing_key_fails_the_build() {
    #[derive(Model)]
    #[model(name = "Order")]
    struct LooseOrder {
        #[model(rename = "ID")]
        id: u64,
        product: Product
    }

    init_tracing();
    let registry = Registry::new()
        .register::<LooseOrder>()
        .register::<Product>();
    let err = registry.build(&SchemaConfig::default()).unwrap_err();
    match &err {
        SchemaError::UnresolvedRelationship {
            entity,
            field,
            missing,
            tried
        } => {
            assert_eq!(entity, "Order");
            assert_eq!(field, "product");
            assert_eq!(*missing, MissingKey::ForeignKey);
            assert_eq!(tried, &["Product.OrderID", "Order.ProductID"]);
        }
        other => panic!("unexpected error: {other}")
    }
    assert!(err.to_string().contains("Order.product"));
}

#[test]
fn flattening_keeps_declaration_order() {
    let schema = build(&shop());
    let names: Vec<_> = schema
        .table("Product")
        .unwrap()
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["ID", "CreatedAt", "Name"]);
}

#[test]
fn validation_rules_keep_order() {
    let schema = build(&shop());
    let name = schema.table("Product").unwrap().field("Name").unwrap();
    assert_eq!(
        name.annotations.validation,
        vec![
            ValidationRule::flag(Rule::NotEmpty),
            ValidationRule::with_parameter(Rule::MinLen, "3"),
            ValidationRule::with_parameter(Rule::MaxLen, "20"),
            ValidationRule::flag(Rule::AlphaSpace)
        ]
    );
    assert!(schema.uses_rule(Rule::Email, &["String"]));
    assert!(!schema.uses_rule(Rule::Email, &["u64"]));
    assert!(!schema.uses_rule(Rule::Numeric, &[]));
    assert!(schema.has_pattern_rules());
}

#[test]
fn client_projection_helpers() {
    let schema = build(&shop());
    let customer = schema.table("Customer").unwrap();
    assert_eq!(customer.storage_name_or_default(), "customers");
    assert!(customer.has_validation());
    assert_eq!(customer.field("Email").unwrap().client_name(NamingCase::Snake), "email");
    assert_eq!(customer.field("CreatedAt").unwrap().client_name(NamingCase::Camel), "createdAt");

    let order = schema.table("Order").unwrap();
    assert_eq!(order.storage_name_or_default(), "order");
    let to_one: Vec<_> = order.unique_relations().map(|f| f.name.as_str()).collect();
    assert_eq!(to_one, vec!["customer"]);
    assert!(order.field("shipped_by").unwrap().is_optional());
    assert!(!order.field("CustomerID").unwrap().is_optional());
}

#[test]
fn builds_are_byte_identical() {
    let first = build(&shop()).to_json().unwrap();
    let second = build(&shop()).to_json().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        build(&shop()).to_json_pretty().unwrap(),
        build(&shop()).to_json_pretty().unwrap()
    );
}

#[test]
fn snake_case_models() {
    #[derive(Model)]
    struct Author {
        id: u64,
        posts: Vec<Post>
    }

    #[derive(Model)]
    struct Post {
        id: u64,
        author_id: u64,
        author: Box<Author>
    }

    init_tracing();
    let schema = Registry::new()
        .register::<Author>()
        .register::<Post>()
        .build(&SchemaConfig::snake())
        .unwrap();

    let author = edge(&schema, "Post", "author").unwrap();
    assert_eq!((author.local_key.as_str(), author.target_key.as_str()), ("author_id", "id"));
    let posts = edge(&schema, "Author", "posts").unwrap();
    assert_eq!((posts.local_key.as_str(), posts.target_key.as_str()), ("id", "author_id"));
}
