// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Default SQL names.
//!
//! | Rust | Directive | SQL |
//! |------|-----------|-----|
//! | `or_replace` | keyword | `OR REPLACE` |
//! | `data_retention_time_in_days` | parameter, list | `DATA_RETENTION_TIME_IN_DAYS` |
//! | `AllowWrites` | parameter on a variant | `ALLOW_WRITES` |
//! | `XSmall` | enum variant | `X_SMALL` |

use convert_case::{Boundary, Case, Casing};
use syn::Ident;

/// Identifier text without a raw prefix (`r#type` becomes `type`).
pub fn label(ident: &Ident) -> String {
    let text = ident.to_string();
    match text.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => text
    }
}

/// Snake case words of a field or variant name.
///
/// Only case changes split words, so digits stay attached (`s3_url` and
/// `S3Url` both become `s3_url`).
fn snake_words(ident: &Ident) -> String {
    label(ident)
        .set_boundaries(&[Boundary::LowerUpper, Boundary::DigitUpper, Boundary::Acronym])
        .to_case(Case::Snake)
}

/// `UPPER_SNAKE` name for parameters and lists.
pub fn parameter_name(ident: &Ident) -> String {
    snake_words(ident).to_uppercase()
}

/// Space separated upper-case name for keyword flags.
pub fn keyword_name(ident: &Ident) -> String {
    parameter_name(ident).replace('_', " ")
}

/// SQL spelling of an enum variant.
pub fn variant_name(ident: &Ident) -> String {
    label(ident).to_case(Case::Snake).to_uppercase()
}
