// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declared type signature analysis.
//!
//! Reduces a declared type to the bare type name used for entity matching,
//! plus two markers: whether the field holds a collection and whether the
//! field itself may be absent.
//!
//! # Recognized Forms
//!
//! | Declared | Raw type | Collection | Nullable |
//! |----------|----------|------------|----------|
//! | `uint` | `uint` | no | no |
//! | `[]Order` | `Order` | yes | no |
//! | `*string` | `string` | no | yes |
//! | `[]*models.Order` | `Order` | yes | no |
//! | `[5]byte` | `byte` | yes | no |
//! | `Vec<Order>` | `Order` | yes | no |
//! | `Option<String>` | `String` | no | yes |
//! | `Option<Vec<crate::Tag>>` | `Tag` | yes | yes |
//! | `Box<Category>` | `Category` | no | no |
//! | `&'a [Item]` | `Item` | yes | no |
//! | `[u8; 16]` | `u8` | yes | no |
//! | `HashMap<String, u32>` | `HashMap` | no | no |
//! | `map[string]int` | `map` | no | no |
//!
//! `Nullable` describes the field, not the elements: a pointer or `Option`
//! inside a collection does not make the field nullable.

/// Generic wrappers that denote a collection of their first argument.
const COLLECTIONS: &[&str] = &[
    "Vec",
    "VecDeque",
    "LinkedList",
    "HashSet",
    "BTreeSet",
    "IndexSet",
    "BinaryHeap"
];

/// Generic wrappers that are transparent for matching.
const TRANSPARENT: &[&str] = &["Box", "Rc", "Arc"];

/// Result of analysing a declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSignature {
    /// Bare type name without markers or module path.
    pub raw_type:      String,
    /// The field holds many values.
    pub is_collection: bool,
    /// The field itself may be absent.
    pub nullable:      bool
}

impl TypeSignature {
    /// Analyse a declared type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use entity_schema_core::TypeSignature;
    ///
    /// let sig = TypeSignature::parse("Option<Vec<crate::models::Tag>>");
    /// assert_eq!(sig.raw_type, "Tag");
    /// assert!(sig.is_collection);
    /// assert!(sig.nullable);
    /// ```
    #[must_use]
    pub fn parse(declared: &str) -> Self {
        let mut is_collection = false;
        let mut nullable = false;
        let mut rest = declared.trim();

        loop {
            if let Some(inner) = rest.strip_prefix("[]") {
                is_collection = true;
                rest = inner.trim_start();
            } else if let Some(inner) = rest.strip_prefix('*') {
                nullable |= !is_collection;
                rest = inner.trim_start();
            } else if let Some(inner) = rest.strip_prefix('&') {
                rest = strip_reference(inner);
            } else if rest.starts_with('[') {
                let Some(close) = matching_close(rest, '[', ']') else {
                    break;
                };
                is_collection = true;
                rest = if close + 1 == rest.len() {
                    element_of_array(&rest[1..close])
                } else {
                    rest[close + 1..].trim_start()
                };
            } else if let Some(open) = rest.find('<') {
                let head = last_segment(&rest[..open]);
                let Some(close) = matching_close(&rest[open..], '<', '>') else {
                    break;
                };
                let Some(arg) = first_type_argument(&rest[open + 1..open + close]) else {
                    rest = head;
                    break;
                };
                if COLLECTIONS.contains(&head) {
                    is_collection = true;
                } else if head == "Option" {
                    nullable |= !is_collection;
                } else if !TRANSPARENT.contains(&head) {
                    rest = head;
                    break;
                }
                rest = arg;
            } else {
                break;
            }
        }

        let raw_type = if rest.starts_with("map[") {
            "map"
        } else {
            last_segment(rest)
        };

        Self {
            raw_type: raw_type.to_string(),
            is_collection,
            nullable
        }
    }
}

/// Skip an optional lifetime and `mut` after `&`.
fn strip_reference(input: &str) -> &str {
    let mut rest = input.trim_start();
    if let Some(lifetime) = rest.strip_prefix('\'') {
        let end = lifetime
            .find(|ch: char| !(ch.is_alphanumeric() || ch == '_'))
            .unwrap_or(lifetime.len());
        rest = lifetime[end..].trim_start();
    }
    if let Some(inner) = rest.strip_prefix("mut ") {
        rest = inner.trim_start();
    }
    rest
}

/// Element type of a Rust slice or array body (`T` or `T; N`).
fn element_of_array(body: &str) -> &str {
    split_top_level(body, ';').next().unwrap_or(body).trim()
}

/// First generic argument that is not a lifetime.
fn first_type_argument(args: &str) -> Option<&str> {
    split_top_level(args, ',')
        .map(str::trim)
        .find(|arg| !arg.is_empty() && !arg.starts_with('\''))
}

/// Index of the bracket closing the one at position 0.
fn matching_close(input: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    for (index, ch) in input.char_indices() {
        if ch == open {
            depth += 1;
        } else if ch == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(index);
            }
        }
    }
    None
}

/// Split at `separator` outside of any brackets.
fn split_top_level(input: &str, separator: char) -> impl Iterator<Item = &str> {
    let mut depth = 0i32;
    input.split(move |ch: char| {
        match ch {
            '<' | '[' | '(' => depth += 1,
            '>' | ']' | ')' => depth -= 1,
            _ => {}
        }
        depth == 0 && ch == separator
    })
}

/// Last path segment of a type name (`a::b::T` and `pkg.T` give `T`).
fn last_segment(path: &str) -> &str {
    let path = path.trim();
    let after_colons = path.rsplit("::").next().unwrap_or(path);
    after_colons.rsplit('.').next().unwrap_or(after_colons).trim()
}
