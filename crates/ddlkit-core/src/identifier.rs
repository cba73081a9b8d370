// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Object identifiers.
//!
//! Identifiers name the object a statement acts on. They render as a dot
//! separated list of escaped parts:
//!
//! | Type | Parts | Rendered (Snowflake) |
//! |------|-------|----------------------|
//! | [`AccountObjectIdentifier`] | name | `"WH"` |
//! | [`DatabaseObjectIdentifier`] | database, name | `"DB"."SCHEMA"` |
//! | [`SchemaObjectIdentifier`] | database, schema, name | `"DB"."SCHEMA"."TABLE"` |
//!
//! Identifiers can be parsed back from qualified text, which is how echoed
//! names in query results lose their quoting:
//!
//! ```rust
//! use ddlkit_core::SchemaObjectIdentifier;
//!
//! let id: SchemaObjectIdentifier = "\"DB\".\"PUBLIC\".\"my.table\"".parse().unwrap();
//! assert_eq!(id.name(), "my.table");
//! ```

use std::{fmt, str::FromStr};

use crate::{
    dialect::Dialect,
    presence::Presence,
    value::{SqlValue, Value}
};

/// A reference to a database object.
pub trait ObjectIdentifier: fmt::Debug {
    /// Unescaped name parts, outermost first.
    fn parts(&self) -> Vec<&str>;

    /// Escaped, dot separated name for `dialect`.
    fn qualified_name(&self, dialect: Dialect) -> String {
        self.parts()
            .into_iter()
            .map(|part| dialect.quote_identifier(part))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Every part is non-empty and free of NUL characters.
    fn is_valid(&self) -> bool {
        let parts = self.parts();
        !parts.is_empty()
            && parts
                .iter()
                .all(|part| !part.trim().is_empty() && !part.contains('\0'))
    }
}

/// Error returned when qualified identifier text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierParseError {
    /// The input was empty.
    #[error("identifier is empty")]
    Empty,

    /// A quoted part was never closed.
    #[error("unterminated quoted part in `{0}`")]
    Unterminated(String),

    /// An unquoted part was empty (`a..b`).
    #[error("empty part in `{0}`")]
    EmptyPart(String),

    /// Unexpected text after a closing quote.
    #[error("unexpected character `{found}` after quoted part in `{input}`")]
    TrailingCharacter {
        /// Offending character.
        found: char,
        /// Full input.
        input: String
    },

    /// Wrong number of parts for the identifier type.
    #[error("expected {expected} part(s), found {found} in `{input}`")]
    PartCount {
        /// Parts the target type needs.
        expected: usize,
        /// Parts found.
        found:    usize,
        /// Full input.
        input:    String
    }
}

/// Split qualified identifier text into unescaped parts.
///
/// Parts may be bare (`db.schema`) or quoted with `"` or `` ` ``; inside
/// quotes a doubled quote character stands for itself and dots do not split.
/// Surrounding whitespace of bare parts is trimmed.
///
/// # Errors
///
/// See [`IdentifierParseError`].
pub fn parse_parts(input: &str) -> Result<Vec<String>, IdentifierParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IdentifierParseError::Empty);
    }

    let mut parts = Vec::new();
    let mut chars = trimmed.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let part = match chars.peek().copied() {
            Some(quote @ ('"' | '`')) => {
                chars.next();
                let mut part = String::new();
                loop {
                    match chars.next() {
                        Some(c) if c == quote => {
                            if chars.next_if_eq(&quote).is_some() {
                                part.push(quote);
                            } else {
                                break;
                            }
                        }
                        Some(c) => part.push(c),
                        None => {
                            return Err(IdentifierParseError::Unterminated(input.to_string()));
                        }
                    }
                }
                while chars.next_if(|c| c.is_whitespace()).is_some() {}
                if let Some(&found) = chars.peek()
                    && found != '.'
                {
                    return Err(IdentifierParseError::TrailingCharacter {
                        found,
                        input: input.to_string()
                    });
                }
                part
            }
            _ => {
                let mut part = String::new();
                while let Some(c) = chars.next_if(|c| *c != '.') {
                    part.push(c);
                }
                let part = part.trim().to_string();
                if part.is_empty() {
                    return Err(IdentifierParseError::EmptyPart(input.to_string()));
                }
                part
            }
        };
        parts.push(part);

        if chars.next().is_none() {
            break;
        }
    }

    Ok(parts)
}

fn parse_exact<const N: usize>(input: &str) -> Result<[String; N], IdentifierParseError> {
    let parts = parse_parts(input)?;
    let found = parts.len();
    parts
        .try_into()
        .map_err(|_| IdentifierParseError::PartCount {
            expected: N,
            found,
            input: input.to_string()
        })
}

/// Identifier of an account-level object (warehouse, database, role).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AccountObjectIdentifier {
    name: String
}

impl AccountObjectIdentifier {
    /// Create from an unescaped name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into()
        }
    }

    /// Unescaped name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Identifier of a database-level object (schema, database role).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DatabaseObjectIdentifier {
    database: String,
    name:     String
}

impl DatabaseObjectIdentifier {
    /// Create from unescaped parts.
    pub fn new(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            name:     name.into()
        }
    }

    /// Unescaped database name.
    #[must_use]
    pub fn database_name(&self) -> &str {
        &self.database
    }

    /// Unescaped object name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of the enclosing database.
    #[must_use]
    pub fn database_id(&self) -> AccountObjectIdentifier {
        AccountObjectIdentifier::new(self.database.clone())
    }
}

/// Identifier of a schema-level object (table, view, stage).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SchemaObjectIdentifier {
    database: String,
    schema:   String,
    name:     String
}

impl SchemaObjectIdentifier {
    /// Create from unescaped parts.
    pub fn new(
        database: impl Into<String>,
        schema: impl Into<String>,
        name: impl Into<String>
    ) -> Self {
        Self {
            database: database.into(),
            schema:   schema.into(),
            name:     name.into()
        }
    }

    /// Unescaped database name.
    #[must_use]
    pub fn database_name(&self) -> &str {
        &self.database
    }

    /// Unescaped schema name.
    #[must_use]
    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    /// Unescaped object name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier of the enclosing schema.
    #[must_use]
    pub fn schema_id(&self) -> DatabaseObjectIdentifier {
        DatabaseObjectIdentifier::new(self.database.clone(), self.schema.clone())
    }
}

impl ObjectIdentifier for AccountObjectIdentifier {
    fn parts(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

impl ObjectIdentifier for DatabaseObjectIdentifier {
    fn parts(&self) -> Vec<&str> {
        vec![&self.database, &self.name]
    }
}

impl ObjectIdentifier for SchemaObjectIdentifier {
    fn parts(&self) -> Vec<&str> {
        vec![&self.database, &self.schema, &self.name]
    }
}

impl FromStr for AccountObjectIdentifier {
    type Err = IdentifierParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let [name] = parse_exact::<1>(input)?;
        Ok(Self {
            name
        })
    }
}

impl FromStr for DatabaseObjectIdentifier {
    type Err = IdentifierParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let [database, name] = parse_exact::<2>(input)?;
        Ok(Self {
            database,
            name
        })
    }
}

impl FromStr for SchemaObjectIdentifier {
    type Err = IdentifierParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let [database, schema, name] = parse_exact::<3>(input)?;
        Ok(Self {
            database,
            schema,
            name
        })
    }
}

macro_rules! identifier_glue {
    ($($t:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.qualified_name(Dialect::default()))
                }
            }

            impl Presence for $t {
                fn is_present(&self) -> bool {
                    true
                }
            }

            impl SqlValue for $t {
                fn sql_value(&self) -> Option<Value<'_>> {
                    Some(Value::Identifier(self))
                }
            }
        )+
    };
}

identifier_glue!(
    AccountObjectIdentifier,
    DatabaseObjectIdentifier,
    SchemaObjectIdentifier
);
