// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core runtime for ddlkit.
//!
//! This crate provides the runtime half of the declarative SQL engine. The
//! derive macros in `ddlkit-derive-impl` generate implementations of the
//! traits defined here; they can also be implemented by hand.
//!
//! # Overview
//!
//! - [`ToSql`]: an option structure whose fields render to SQL
//! - [`Directive`]: the closed set of per-field rendering instructions
//! - [`Presence`]: the single definition of "set" shared by validation and
//!   rendering
//! - [`Marshaller`]: walks a [`ToSql`] structure and produces SQL text
//! - [`Validate`] / [`Violations`]: constraint checking before marshalling
//! - [`ConvertRow`]: nullable-aware row to domain object conversion
//! - [`SqlEnum`]: case-insensitive lookup tables for SQL enum values
//!
//! # Pipeline
//!
//! ```text
//! request ──► Validate::validate ──► Marshaller::to_sql ──► (execute) ──► ConvertRow::convert
//! ```
//!
//! [`build`] runs the first two steps in one call:
//!
//! ```rust,ignore
//! let sql = ddlkit::build(Some(&opts))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dialect;
pub mod directive;
pub mod enums;
pub mod identifier;
pub mod marshal;
pub mod prelude;
pub mod presence;
pub mod row;
pub mod validate;
pub mod value;

pub use dialect::{Dialect, UnknownDialect};
pub use directive::{
    Directive, Equals, IdentifierOptions, KeywordOptions, ListOptions, ParameterOptions, Quotes,
    Separator
};
pub use enums::{SqlEnum, UnknownVariant};
pub use identifier::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, IdentifierParseError, ObjectIdentifier,
    SchemaObjectIdentifier
};
pub use marshal::{Bound, Field, Marshaller, Param, Shape, ToSql};
pub use presence::Presence;
pub use row::{ConversionError, ConversionErrorKind, ConvertRow};
pub use validate::{ConstraintKind, Validate, ValidationError, Violations};
pub use value::{SqlValue, Value};

/// Render a structure with the default [`Marshaller`] (Snowflake dialect,
/// literals inlined).
///
/// Performs no validation. Use [`build`] when the structure comes from
/// caller input.
pub fn to_sql<T: ToSql + ?Sized>(statement: &T) -> String {
    Marshaller::default().to_sql(statement)
}

/// Validate then render a structure with the default [`Marshaller`].
///
/// A `None` request fails with a single [`ValidationError::NilOptions`].
///
/// # Errors
///
/// Returns every violated constraint when validation fails; no SQL is built
/// in that case.
pub fn build<T: ToSql + Validate>(options: Option<&T>) -> Result<String, Violations> {
    Marshaller::default().build(options)
}
