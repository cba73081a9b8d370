// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ddlkit::prelude::*;
//! ```

pub use crate::{
    AccountObjectIdentifier, ConversionError, ConvertRow, DatabaseObjectIdentifier, Dialect,
    Marshaller, ObjectIdentifier, Presence, SchemaObjectIdentifier, SqlEnum, ToSql, Validate,
    ValidationError, Violations, build, to_sql
};
