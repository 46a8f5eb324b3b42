// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validation namespace.
//!
//! Produces an ordered list of rules. Order of appearance is kept because
//! generators render rules in a fixed pipeline and rely on the user's order
//! within it.
//!
//! # Supported Rules
//!
//! | Rule | Parameter | Renders as pattern |
//! |------|-----------|--------------------|
//! | `notEmpty` | none | no |
//! | `minLen=N` / `maxLen=N` | length | no |
//! | `min=N` / `max=N` | bound | no |
//! | `in=a,b` / `out=a,b` | value list | no |
//! | `match=RE` | regex | no |
//! | `email`, `url` | none | yes |
//! | `alpha`, `alphaSpace`, `alphanumeric`, `numeric` | none | yes |
//! | `cron` | none | no |
//!
//! Rule names are case-sensitive. Unknown names, parameterized rules without
//! a value and flag rules given a value are skipped.
//!
//! # Example
//!
//! ```rust
//! use entity_schema_core::{Rule, parse_rules};
//!
//! let rules = parse_rules("notEmpty;minLen=3;maxLen=20;email");
//! let names: Vec<Rule> = rules.iter().map(|r| r.rule).collect();
//! assert_eq!(names, vec![Rule::NotEmpty, Rule::MinLen, Rule::MaxLen, Rule::Email]);
//! assert_eq!(rules[1].parameter.as_deref(), Some("3"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{non_empty, segments, split_key_value};

/// A validation rule name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    /// Value must not be empty.
    NotEmpty,
    /// Minimum length.
    MinLen,
    /// Maximum length.
    MaxLen,
    /// Minimum value.
    Min,
    /// Maximum value.
    Max,
    /// Value must be one of a list.
    In,
    /// Value must not be one of a list.
    Out,
    /// Value must match a regular expression.
    Match,
    /// Email address.
    Email,
    /// URL.
    Url,
    /// Letters only.
    Alpha,
    /// Letters and spaces.
    AlphaSpace,
    /// Letters and digits.
    Alphanumeric,
    /// Digits only.
    Numeric,
    /// Cron expression.
    Cron
}

impl Rule {
    /// Look up a rule by its annotation name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let rule = match name {
            "notEmpty" => Self::NotEmpty,
            "minLen" => Self::MinLen,
            "maxLen" => Self::MaxLen,
            "min" => Self::Min,
            "max" => Self::Max,
            "in" => Self::In,
            "out" => Self::Out,
            "match" => Self::Match,
            "email" => Self::Email,
            "url" => Self::Url,
            "alpha" => Self::Alpha,
            "alphaSpace" => Self::AlphaSpace,
            "alphanumeric" => Self::Alphanumeric,
            "numeric" => Self::Numeric,
            "cron" => Self::Cron,
            _ => return None
        };
        Some(rule)
    }

    /// Annotation name of this rule.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotEmpty => "notEmpty",
            Self::MinLen => "minLen",
            Self::MaxLen => "maxLen",
            Self::Min => "min",
            Self::Max => "max",
            Self::In => "in",
            Self::Out => "out",
            Self::Match => "match",
            Self::Email => "email",
            Self::Url => "url",
            Self::Alpha => "alpha",
            Self::AlphaSpace => "alphaSpace",
            Self::Alphanumeric => "alphanumeric",
            Self::Numeric => "numeric",
            Self::Cron => "cron"
        }
    }

    /// Check whether the rule requires a parameter.
    #[must_use]
    pub fn takes_parameter(&self) -> bool {
        matches!(
            self,
            Self::MinLen | Self::MaxLen | Self::Min | Self::Max | Self::In | Self::Out | Self::Match
        )
    }

    /// Check whether generators render the rule as a built-in pattern.
    #[must_use]
    pub fn is_pattern(&self) -> bool {
        matches!(
            self,
            Self::Email
                | Self::Url
                | Self::Alpha
                | Self::AlphaSpace
                | Self::Alphanumeric
                | Self::Numeric
        )
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    /// Rule name.
    pub rule:      Rule,
    /// Trailing value for parameterized rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>
}

impl ValidationRule {
    /// A rule without parameter.
    #[must_use]
    pub fn flag(rule: Rule) -> Self {
        Self {
            rule,
            parameter: None
        }
    }

    /// A rule with parameter.
    #[must_use]
    pub fn with_parameter(rule: Rule, parameter: impl Into<String>) -> Self {
        Self {
            rule,
            parameter: Some(parameter.into())
        }
    }
}

/// Parse a validation namespace string into ordered rules.
#[must_use]
pub fn parse_rules(raw: &str) -> Vec<ValidationRule> {
    segments(raw, ';')
        .filter_map(|segment| {
            let (name, value) = split_key_value(segment);
            let Some(rule) = Rule::from_name(name) else {
                debug!(segment, "unknown validation rule, segment skipped");
                return None;
            };
            match (rule.takes_parameter(), non_empty(value)) {
                (true, Some(parameter)) => Some(ValidationRule::with_parameter(rule, parameter)),
                (false, None) if value.is_none() => Some(ValidationRule::flag(rule)),
                _ => {
                    debug!(segment, %rule, "rule parameter mismatch, segment skipped");
                    None
                }
            }
        })
        .collect()
}
