// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared helpers for code generation.

use quote::ToTokens;
use syn::Type;

/// Declared type text of a field type.
///
/// Token text with whitespace removed, except a single space between two
/// word characters (`&'a mut T`, `dyn Trait`).
///
/// # Example
///
/// ```rust,ignore
/// let ty: Type = parse_quote!(Option<Vec<crate::Tag>>);
/// assert_eq!(type_text(&ty), "Option<Vec<crate::Tag>>");
/// ```
pub fn type_text(ty: &Type) -> String {
    let tokens = ty.to_token_stream().to_string();
    let mut text = String::with_capacity(tokens.len());
    let mut gap = false;

    for ch in tokens.chars() {
        if ch.is_whitespace() {
            gap = true;
            continue;
        }
        if gap && is_word(ch) && text.chars().next_back().is_some_and(is_word) {
            text.push(' ');
        }
        gap = false;
        text.push(ch);
    }

    text
}

fn is_word(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
