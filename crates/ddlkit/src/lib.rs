// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! Declarative SQL statement construction.
//!
//! Describe a statement once as a plain Rust structure, annotate each field
//! with how it renders, and let ddlkit validate the request, render it to
//! SQL, and convert the rows that come back.
//!
//! ```rust
//! use ddlkit::prelude::*;
//!
//! #[derive(Debug, Default, ToSql, Validate)]
//! #[validate(at_most_one_of(if_exists, or_replace))]
//! struct CreateSchema {
//!     #[ddl(static = "CREATE")]
//!     create:     (),
//!     #[ddl(keyword)]
//!     or_replace: Option<bool>,
//!     #[ddl(static = "SCHEMA")]
//!     kind:       (),
//!     #[ddl(keyword = "IF NOT EXISTS")]
//!     if_exists:  Option<bool>,
//!     #[ddl(identifier)]
//!     #[validate(identifier)]
//!     name:       DatabaseObjectIdentifier,
//!     #[ddl(parameter(single_quotes))]
//!     comment:    Option<String>
//! }
//!
//! let opts = CreateSchema {
//!     or_replace: Some(true),
//!     name: DatabaseObjectIdentifier::new("DB", "RAW"),
//!     comment: Some("landing zone".into()),
//!     ..Default::default()
//! };
//!
//! let sql = ddlkit::build(Some(&opts)).unwrap();
//! assert_eq!(sql, r#"CREATE OR REPLACE SCHEMA "DB"."RAW" COMMENT = 'landing zone'"#);
//! ```
//!
//! # Crates
//!
//! - `ddlkit-core`: runtime traits, the marshaller, validators, row helpers
//! - `ddlkit-derive-impl`: the `ToSql`, `Validate` and `SqlEnum` derives
//!
//! # Logging
//!
//! Events are emitted through `tracing` under the `ddlkit::marshal`,
//! `ddlkit::validate` and `ddlkit::row` targets. Install a subscriber to see
//! them.

pub use ddlkit_core::*;
pub use ddlkit_derive_impl::{SqlEnum, ToSql, Validate};

/// Convenient re-exports for common usage, derives included.
///
/// ```rust,ignore
/// use ddlkit::prelude::*;
/// ```
pub mod prelude {
    pub use ddlkit_core::prelude::*;
    pub use ddlkit_derive_impl::{SqlEnum, ToSql, Validate};
}
