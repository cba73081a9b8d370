// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Query-result row conversion.
//!
//! A row structure mirrors what the database returns: nullable columns are
//! `Option<T>`, embedded documents are JSON text, lists are delimited text.
//! [`ConvertRow`] turns one such row into a domain object with native types,
//! using the helpers in this module for the secondary parsing.
//!
//! Conversion is all or nothing: when any secondary parse fails the whole row
//! fails with a [`ConversionError`] naming the row type and the field.
//!
//! # Example
//!
//! ```rust
//! use ddlkit_core::{ConversionError, ConvertRow, row};
//!
//! struct WarehouseRow {
//!     name:    String,
//!     comment: Option<String>,
//!     enabled: String
//! }
//!
//! struct Warehouse {
//!     name:    String,
//!     comment: Option<String>,
//!     enabled: bool
//! }
//!
//! impl ConvertRow for WarehouseRow {
//!     type Object = Warehouse;
//!
//!     fn convert(self) -> Result<Warehouse, ConversionError> {
//!         Ok(Warehouse {
//!             name:    self.name,
//!             comment: self.comment,
//!             enabled: row::parse_flag("WarehouseRow", "enabled", &self.enabled)?
//!         })
//!     }
//! }
//!
//! let row = WarehouseRow {
//!     name:    "WH".into(),
//!     comment: None,
//!     enabled: "Y".into()
//! };
//! let warehouse = row.convert().unwrap();
//! assert!(warehouse.enabled);
//! assert!(warehouse.comment.is_none());
//! ```

use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::{
    enums::{SqlEnum, UnknownVariant},
    identifier::IdentifierParseError
};

/// Why a field failed to convert.
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    /// Embedded JSON did not parse into the target type.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Text did not match the expected form.
    #[error("expected {expected}, got `{actual}`")]
    InvalidValue {
        /// Description of the accepted form.
        expected: &'static str,
        /// Offending text.
        actual:   String
    },

    /// Echoed identifier text did not parse.
    #[error(transparent)]
    Identifier(#[from] IdentifierParseError),

    /// Enumerated value matched no variant.
    #[error(transparent)]
    Enum(#[from] UnknownVariant),

    /// A column with no documented default was NULL.
    #[error("value is missing")]
    Missing
}

/// A row that could not be converted.
#[derive(Debug, thiserror::Error)]
#[error("cannot convert {row}.{field}: {kind}")]
pub struct ConversionError {
    /// Row type name.
    pub row:   &'static str,
    /// Failing field.
    pub field: &'static str,
    /// Cause.
    #[source]
    pub kind:  ConversionErrorKind
}

impl ConversionError {
    /// Build an error and log it.
    pub fn new(row: &'static str, field: &'static str, kind: impl Into<ConversionErrorKind>) -> Self {
        let kind = kind.into();
        tracing::debug!(
            target: "ddlkit::row",
            row,
            field,
            error = %kind,
            "row conversion failed"
        );
        Self {
            row,
            field,
            kind
        }
    }

    /// Text did not match `expected`.
    pub fn invalid(
        row: &'static str,
        field: &'static str,
        expected: &'static str,
        actual: impl Into<String>
    ) -> Self {
        Self::new(
            row,
            field,
            ConversionErrorKind::InvalidValue {
                expected,
                actual: actual.into()
            }
        )
    }
}

/// Conversion of one query-result row into a domain object.
pub trait ConvertRow: Sized {
    /// Domain object produced.
    type Object;

    /// Convert the row.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] naming the failing field. No partial
    /// object is produced.
    fn convert(self) -> Result<Self::Object, ConversionError>;
}

/// Convert a batch, one result per row.
///
/// A failing row does not affect the others.
pub fn convert_all<R, I>(rows: I) -> Vec<Result<R::Object, ConversionError>>
where
    R: ConvertRow,
    I: IntoIterator<Item = R>
{
    rows.into_iter().map(ConvertRow::convert).collect()
}

/// Parse an embedded JSON document.
///
/// # Errors
///
/// [`ConversionErrorKind::Json`] when `text` does not deserialize into `T`.
pub fn parse_json<T: DeserializeOwned>(
    row: &'static str,
    field: &'static str,
    text: &str
) -> Result<T, ConversionError> {
    serde_json::from_str(text).map_err(|err| ConversionError::new(row, field, err))
}

/// Parse a nullable embedded JSON document.
///
/// `None` and blank text both yield `None`.
///
/// # Errors
///
/// Same as [`parse_json`].
pub fn parse_optional_json<T: DeserializeOwned>(
    row: &'static str,
    field: &'static str,
    text: Option<&str>
) -> Result<Option<T>, ConversionError> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_json(row, field, text).map(Some)
    }
}

/// Split delimited list text into trimmed items.
///
/// Surrounding brackets are stripped and blank items dropped, so `"[a, b]"`,
/// `"a,b"` and `"a, b,"` all give `["a", "b"]`.
#[must_use]
pub fn split_list(text: &str, delimiter: char) -> Vec<String> {
    let text = text.trim();
    let text = text
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(text);
    text.split(delimiter)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip one layer of echoed quoting (`"x"`, `'x'` or `` `x` ``), undoubling
/// embedded quote characters.
#[must_use]
pub fn unquote(text: &str) -> String {
    let text = text.trim();
    for quote in ['"', '\'', '`'] {
        if text.len() >= 2
            && let Some(inner) = text
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        {
            let doubled: String = [quote, quote].iter().collect();
            return inner.replace(&doubled, &quote.to_string());
        }
    }
    text.to_string()
}

/// Parse a boolean flag column.
///
/// Accepts `true/false`, `Y/N`, `yes/no`, `on/off` and `1/0`,
/// case-insensitively.
///
/// # Errors
///
/// [`ConversionErrorKind::InvalidValue`] for anything else.
pub fn parse_flag(row: &'static str, field: &'static str, text: &str) -> Result<bool, ConversionError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "y" | "yes" | "on" | "1" => Ok(true),
        "false" | "n" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConversionError::invalid(row, field, "a boolean flag", text))
    }
}

/// Parse a numeric column.
///
/// # Errors
///
/// [`ConversionErrorKind::InvalidValue`] when `text` is not a `T`.
pub fn parse_number<T: FromStr>(
    row: &'static str,
    field: &'static str,
    text: &str
) -> Result<T, ConversionError> {
    text.trim()
        .parse()
        .map_err(|_| ConversionError::invalid(row, field, "a number", text))
}

/// Parse echoed identifier text into an identifier type.
///
/// # Errors
///
/// [`ConversionErrorKind::Identifier`] when the text is malformed.
pub fn parse_identifier<T>(row: &'static str, field: &'static str, text: &str) -> Result<T, ConversionError>
where
    T: FromStr<Err = IdentifierParseError>
{
    text.parse().map_err(|err| ConversionError::new(row, field, err))
}

/// Parse an enumerated column, case-insensitively.
///
/// # Errors
///
/// [`ConversionErrorKind::Enum`] when no variant matches.
pub fn parse_enum<T: SqlEnum>(row: &'static str, field: &'static str, text: &str) -> Result<T, ConversionError> {
    T::from_sql(text).map_err(|err| ConversionError::new(row, field, err))
}

/// Unwrap a column with no documented default.
///
/// # Errors
///
/// [`ConversionErrorKind::Missing`] when the column is `None`.
pub fn required<T>(row: &'static str, field: &'static str, value: Option<T>) -> Result<T, ConversionError> {
    value.ok_or_else(|| ConversionError::new(row, field, ConversionErrorKind::Missing))
}
