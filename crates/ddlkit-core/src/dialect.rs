// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL dialect configuration.
//!
//! This module defines [`Dialect`], which controls the dialect-specific parts
//! of rendering: how identifier parts are escaped and which placeholder
//! syntax bound parameters use.
//!
//! | Dialect | Identifier quoting | Placeholders |
//! |---------|--------------------|--------------|
//! | Snowflake | `"name"` | `?` |
//! | PostgreSQL | `"name"` | `$1, $2, ...` |
//! | MySQL | `` `name` `` | `?` |

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer};

/// Target SQL dialect.
///
/// Parsed case-insensitively from strings, with aliases:
///
/// ```rust
/// use ddlkit_core::Dialect;
///
/// assert_eq!("pg".parse::<Dialect>().unwrap(), Dialect::Postgres);
/// assert_eq!("Snowflake".parse::<Dialect>().unwrap(), Dialect::Snowflake);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Snowflake.
    ///
    /// - Identifiers: `"DB"."SCHEMA"."NAME"`
    /// - Placeholders: `?`
    #[default]
    Snowflake,

    /// PostgreSQL.
    ///
    /// - Identifiers: `"schema"."name"`
    /// - Placeholders: `$1, $2, $3, ...`
    Postgres,

    /// MySQL and MariaDB.
    ///
    /// - Identifiers: `` `db`.`name` ``
    /// - Placeholders: `?`
    MySql
}

impl Dialect {
    /// Quote character used around identifier parts.
    #[must_use]
    pub const fn identifier_quote(&self) -> char {
        match self {
            Self::Snowflake | Self::Postgres => '"',
            Self::MySql => '`'
        }
    }

    /// Escape a single identifier part.
    ///
    /// Embedded quote characters are doubled.
    ///
    /// ```rust
    /// use ddlkit_core::Dialect;
    ///
    /// assert_eq!(Dialect::Snowflake.quote_identifier("my\"db"), "\"my\"\"db\"");
    /// assert_eq!(Dialect::MySql.quote_identifier("users"), "`users`");
    /// ```
    #[must_use]
    pub fn quote_identifier(&self, part: &str) -> String {
        let quote = self.identifier_quote();
        let mut out = String::with_capacity(part.len() + 2);
        out.push(quote);
        for ch in part.chars() {
            if ch == quote {
                out.push(quote);
            }
            out.push(ch);
        }
        out.push(quote);
        out
    }

    /// Placeholder for the bound parameter at `index` (1-based).
    #[must_use]
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            Self::Postgres => format!("${index}"),
            Self::Snowflake | Self::MySql => "?".to_string()
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Snowflake => "snowflake",
            Self::Postgres => "postgres",
            Self::MySql => "mysql"
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown dialect name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown SQL dialect `{0}`; expected snowflake, postgres or mysql")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "snowflake" | "sf" => Ok(Self::Snowflake),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::MySql),
            _ => Err(UnknownDialect(value.to_string()))
        }
    }
}

impl<'de> Deserialize<'de> for Dialect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
