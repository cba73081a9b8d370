// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Derive macros for ddlkit. Use the `ddlkit` crate instead of depending on
//! this one directly: generated code refers to `::ddlkit` paths.
//!
//! # Attribute Quick Reference
//!
//! ## `ToSql`
//!
//! ```rust,ignore
//! #[derive(ToSql)]
//! #[ddl(name = "CreateExternalVolume")]   // Optional: name in logs
//! pub struct CreateExternalVolume {
//!     #[ddl(static = "CREATE")]
//!     create: (),
//!     #[ddl(keyword)]                       // OR REPLACE
//!     or_replace: Option<bool>,
//!     #[ddl(static = "EXTERNAL VOLUME")]
//!     kind: (),
//!     #[ddl(identifier)]
//!     name: AccountObjectIdentifier,
//!     #[ddl(list)]                          // STORAGE_LOCATIONS = (...)
//!     storage_locations: Vec<StorageLocation>,
//!     #[ddl(parameter(single_quotes))]      // COMMENT = '...'
//!     comment: Option<String>,
//! }
//! ```
//!
//! ## `Validate`
//!
//! ```rust,ignore
//! #[derive(Validate)]
//! #[validate(exactly_one_of(to_role, to_user))]
//! pub struct Grant {
//!     to_role: Option<AccountObjectIdentifier>,
//!     to_user: Option<AccountObjectIdentifier>,
//!     #[validate(range(min = 0, max = 90))]
//!     retention_days: Option<u32>,
//!     #[validate(nested)]
//!     set: Option<SetClause>,
//! }
//! ```
//!
//! ## `SqlEnum`
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, SqlEnum)]
//! pub enum StorageProvider {
//!     S3,
//!     #[sql_enum(name = "GCS")]
//!     Gcs,
//! }
//! ```

mod sql_enum;
mod to_sql;
mod utils;
mod validate;

use proc_macro::TokenStream;

/// Derive `ToSql` for an option structure.
///
/// # Field Directives
///
/// | Attribute | Renders |
/// |-----------|---------|
/// | `static = "TEXT"` | `TEXT`, value ignored |
/// | `keyword` | flag name when `true`, or the bare value |
/// | `parameter` | `NAME = value` |
/// | `identifier` | qualified, escaped object name |
/// | `list` | `NAME = (a, b)` |
/// | `skip` | nothing |
///
/// Every field needs a directive or `skip`. Field declaration order is the
/// statement's token order.
///
/// Enums with newtype variants render the active variant with that
/// variant's directive; unit variants take `static`.
#[proc_macro_derive(ToSql, attributes(ddl))]
pub fn derive_to_sql(input: TokenStream) -> TokenStream {
    to_sql::derive(input)
}

/// Derive `Validate` from declared constraints.
///
/// # Container
///
/// `exactly_one_of(..)`, `at_least_one_of(..)`, `at_most_one_of(..)`,
/// `all_or_none(..)`, each repeatable, and `name = ".."`.
///
/// # Fields
///
/// `nested`, `identifier`, `required`, `range(min = .., max = ..)`,
/// `length(min = .., max = ..)`.
#[proc_macro_derive(Validate, attributes(validate))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    validate::derive(input)
}

/// Derive `SqlEnum`, `Display` and `FromStr` for a unit-variant enum.
///
/// The enum must also derive `Clone`, `Copy` and `PartialEq`.
///
/// # Variant Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `name = ".."` | Canonical spelling (default: variant name in `UPPER_SNAKE`) |
/// | `alias = ".."` | Extra accepted spelling, repeatable |
#[proc_macro_derive(SqlEnum, attributes(sql_enum))]
pub fn derive_sql_enum(input: TokenStream) -> TokenStream {
    sql_enum::derive(input)
}
