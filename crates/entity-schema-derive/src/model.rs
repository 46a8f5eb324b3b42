// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Model` derive implementation.
//!
//! ```text
//! DeriveInput ──► parse::ModelInput ──► generate()
//!                                          ├── ModelDef::new(name)
//!                                          ├── .with_storage_name(table)?
//!                                          └── per field (skip dropped):
//!                                                ├── embed → .embed(<T as Model>::definition())
//!                                                └── plain → .field(FieldSpec::new(..).storage(..)..)
//! ```

mod parse;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_macro_input};

use self::parse::{ModelField, ModelInput};
use crate::utils::type_text;

/// Main entry point for the Model derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ModelInput::parse(&input) {
        Ok(model) => generate(&model).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(model: &ModelInput) -> TokenStream2 {
    let ident = &model.ident;
    let (impl_generics, ty_generics, where_clause) = model.generics.split_for_impl();
    let name = model.schema_name();
    let storage_name = model
        .table
        .as_ref()
        .map(|table| quote! { .with_storage_name(#table) });
    let declarations = model
        .fields()
        .into_iter()
        .filter(|field| !field.skip)
        .map(declaration);

    quote! {
        impl #impl_generics ::entity_schema_core::Model for #ident #ty_generics #where_clause {
            fn definition() -> ::entity_schema_core::ModelDef {
                ::entity_schema_core::ModelDef::new(#name)
                    #storage_name
                    #(#declarations)*
            }
        }
    }
}

/// Builder call appending one field to the definition.
fn declaration(field: &ModelField) -> TokenStream2 {
    let ty = &field.ty;
    if field.embed {
        return quote! {
            .embed(<#ty as ::entity_schema_core::Model>::definition())
        };
    }

    let name = field.schema_name();
    let declared = type_text(ty);
    let tags = field.tags().map(|(method, value)| {
        let method = format_ident!("{method}");
        quote! { .#method(#value) }
    });

    quote! {
        .field(::entity_schema_core::FieldSpec::new(#name, #declared) #(#tags)*)
    }
}
