// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[validate(...)]` attribute parsing.
//!
//! # Container
//!
//! Parsed with darling. Each combinator may appear several times:
//!
//! ```rust,ignore
//! #[validate(exactly_one_of(to_role, to_user))]
//! #[validate(at_most_one_of(comment, unset_comment))]
//! #[validate(name = "GrantPrivileges")]
//! ```
//!
//! # Fields
//!
//! | Rule | Generated check |
//! |------|-----------------|
//! | `nested` | validate the value (each item of a `Vec`, only if `Some`) |
//! | `identifier` | `validate::identifier` |
//! | `required` | `validate::required` |
//! | `range(min = N, max = M)` | `validate::range`, bounds inclusive |
//! | `length(min = N, max = M)` | `validate::length`, bounds inclusive |

use darling::{FromDeriveInput, util::PathList};
use syn::{Attribute, Generics, Ident, LitInt, Token};

/// Container attributes of a `Validate` type.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(validate), supports(struct_named, enum_newtype))]
pub struct ContainerAttrs {
    /// Type identifier.
    pub ident: Ident,

    /// Type generics.
    pub generics: Generics,

    /// Structure name override.
    #[darling(default)]
    pub name: Option<String>,

    /// Exactly one field present.
    #[darling(multiple)]
    pub exactly_one_of: Vec<PathList>,

    /// One or more fields present.
    #[darling(multiple)]
    pub at_least_one_of: Vec<PathList>,

    /// Zero or one field present.
    #[darling(multiple)]
    pub at_most_one_of: Vec<PathList>,

    /// Every field present, or none.
    #[darling(multiple)]
    pub all_or_none: Vec<PathList>
}

impl ContainerAttrs {
    /// Structure name reported in violations.
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.ident.to_string())
    }

    /// Every declared combinator as `(function name, field set)`.
    pub fn combinators(&self) -> Vec<(&'static str, &PathList)> {
        let groups: [(&'static str, &Vec<PathList>); 4] = [
            ("exactly_one_of", &self.exactly_one_of),
            ("at_least_one_of", &self.at_least_one_of),
            ("at_most_one_of", &self.at_most_one_of),
            ("all_or_none", &self.all_or_none)
        ];
        groups
            .into_iter()
            .flat_map(|(function, lists)| lists.iter().map(move |list| (function, list)))
            .collect()
    }
}

/// Field-level rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRules {
    /// Recurse into the value.
    pub nested:     bool,
    /// Valid object identifier.
    pub identifier: bool,
    /// Present per the presence rule.
    pub required:   bool,
    /// Inclusive integer bounds.
    pub range:      Option<(i64, i64)>,
    /// Inclusive length bounds.
    pub length:     Option<(usize, usize)>
}

impl FieldRules {
    /// No rule declared.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn bound<T>(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display
{
    let input = meta.value()?;
    let negative = input.parse::<Option<Token![-]>>()?.is_some();
    let value: LitInt = input.parse()?;
    let digits = if negative {
        format!("-{}", value.base10_digits())
    } else {
        value.base10_digits().to_string()
    };
    digits
        .parse()
        .map_err(|err| syn::Error::new(value.span(), err))
}

/// Parse every `#[validate(...)]` on a field or variant.
pub fn parse_field_rules(attrs: &[Attribute]) -> syn::Result<FieldRules> {
    let mut rules = FieldRules::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("validate")) {
        attr.parse_nested_meta(|meta| {
            let key = meta
                .path
                .get_ident()
                .map(ToString::to_string)
                .unwrap_or_default();

            match key.as_str() {
                "nested" => rules.nested = true,
                "identifier" => rules.identifier = true,
                "required" => rules.required = true,
                "range" => {
                    let (mut min, mut max) = (i64::MIN, i64::MAX);
                    meta.parse_nested_meta(|nested| {
                        if nested.path.is_ident("min") {
                            min = bound(&nested)?;
                        } else if nested.path.is_ident("max") {
                            max = bound(&nested)?;
                        } else {
                            return Err(nested.error("expected `min` or `max`"));
                        }
                        Ok(())
                    })?;
                    if min > max {
                        return Err(meta.error("range `min` exceeds `max`"));
                    }
                    rules.range = Some((min, max));
                }
                "length" => {
                    let (mut min, mut max) = (0_usize, usize::MAX);
                    meta.parse_nested_meta(|nested| {
                        if nested.path.is_ident("min") {
                            min = bound(&nested)?;
                        } else if nested.path.is_ident("max") {
                            max = bound(&nested)?;
                        } else {
                            return Err(nested.error("expected `min` or `max`"));
                        }
                        Ok(())
                    })?;
                    if min > max {
                        return Err(meta.error("length `min` exceeds `max`"));
                    }
                    rules.length = Some((min, max));
                }
                _ => {
                    return Err(meta.error(
                        "expected one of: nested, identifier, required, range, length"
                    ));
                }
            }
            Ok(())
        })?;
    }

    Ok(rules)
}
