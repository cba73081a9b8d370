// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field directives.
//!
//! A [`Directive`] tells the [`Marshaller`](crate::Marshaller) how one field
//! of an option structure becomes SQL text. The set of directives is closed;
//! each variant has a dedicated renderer in [`marshal`](crate::marshal).
//!
//! | Directive | Renders | Example |
//! |-----------|---------|---------|
//! | [`Static`](Directive::Static) | fixed text, value ignored | `CREATE` |
//! | [`Keyword`](Directive::Keyword) | value with no `key =` | `OR REPLACE`, nested clause |
//! | [`Parameter`](Directive::Parameter) | `NAME <op> value` | `COMMENT = 'x'` |
//! | [`Identifier`](Directive::Identifier) | qualified escaped name | `RENAME TO "db"."t"` |
//! | [`List`](Directive::List) | joined items | `COLUMNS = (a, b)` |
//!
//! The option structs have `const` builder methods so hand-written
//! [`ToSql`](crate::ToSql) implementations read like the derive attributes:
//!
//! ```rust
//! use ddlkit_core::{Directive, ParameterOptions};
//!
//! let comment = Directive::Parameter(ParameterOptions::new("COMMENT").single_quotes());
//! let flag = Directive::keyword("OR REPLACE");
//! # let _ = (comment, flag);
//! ```

/// How text values are quoted.
///
/// Quoting is decided by the field's directive, never by the value.
/// Booleans and numbers render bare regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quotes {
    /// Bare text.
    #[default]
    None,
    /// `'text'`, embedded `'` doubled.
    Single,
    /// `"text"`, embedded `"` doubled.
    Double,
    /// `$$text$$`, used for procedure and function bodies.
    DoubleDollar
}

impl Quotes {
    /// Apply this quoting style to `text`.
    ///
    /// ```rust
    /// use ddlkit_core::Quotes;
    ///
    /// assert_eq!(Quotes::Single.apply("it's"), "'it''s'");
    /// assert_eq!(Quotes::DoubleDollar.apply("select 1"), "$$select 1$$");
    /// ```
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::None => text.to_string(),
            Self::Single => format!("'{}'", text.replace('\'', "''")),
            Self::Double => format!("\"{}\"", text.replace('"', "\"\"")),
            Self::DoubleDollar => format!("$${text}$$")
        }
    }
}

/// Operator placed between a name and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Equals {
    /// `NAME = value`
    #[default]
    Equals,
    /// `NAME => value`
    Arrow,
    /// `NAME value`
    None
}

impl Equals {
    /// Join `name` and an already rendered `value`.
    #[must_use]
    pub fn join(&self, name: &str, value: &str) -> String {
        match self {
            Self::Equals => format!("{name} = {value}"),
            Self::Arrow => format!("{name} => {value}"),
            Self::None => format!("{name} {value}")
        }
    }
}

/// Separator between list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Separator {
    /// `a, b, c`
    #[default]
    Comma,
    /// `a b c`
    Space
}

impl Separator {
    /// Separator text including surrounding whitespace.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Comma => ", ",
            Self::Space => " "
        }
    }
}

/// Options for [`Directive::Keyword`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeywordOptions {
    /// Keyword text.
    ///
    /// For flags this is the whole emission (`OR REPLACE`). For any other
    /// value it prefixes the rendered value (`SET <clause>`).
    pub name:        Option<&'static str>,
    /// Quoting for text values.
    pub quotes:      Quotes,
    /// Wrap the rendered value in parentheses.
    pub parentheses: bool
}

impl KeywordOptions {
    /// Keyword with no text of its own.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name:        None,
            quotes:      Quotes::None,
            parentheses: false
        }
    }

    /// Keyword emitting `name`.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self {
            name:        Some(name),
            quotes:      Quotes::None,
            parentheses: false
        }
    }

    /// Set the quoting style.
    #[must_use]
    pub const fn quotes(mut self, quotes: Quotes) -> Self {
        self.quotes = quotes;
        self
    }

    /// Wrap the value in parentheses.
    #[must_use]
    pub const fn parentheses(mut self) -> Self {
        self.parentheses = true;
        self
    }
}

/// Options for [`Directive::Parameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterOptions {
    /// SQL name of the parameter.
    pub name:        &'static str,
    /// Operator between name and value.
    pub equals:      Equals,
    /// Quoting for text values.
    pub quotes:      Quotes,
    /// Wrap the value in parentheses.
    pub parentheses: bool
}

impl ParameterOptions {
    /// `NAME = value` with a bare value.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            equals: Equals::Equals,
            quotes: Quotes::None,
            parentheses: false
        }
    }

    /// Quote text values with single quotes.
    #[must_use]
    pub const fn single_quotes(mut self) -> Self {
        self.quotes = Quotes::Single;
        self
    }

    /// Set the quoting style.
    #[must_use]
    pub const fn quotes(mut self, quotes: Quotes) -> Self {
        self.quotes = quotes;
        self
    }

    /// Render `NAME value`.
    #[must_use]
    pub const fn no_equals(mut self) -> Self {
        self.equals = Equals::None;
        self
    }

    /// Render `NAME => value`.
    #[must_use]
    pub const fn arrow_equals(mut self) -> Self {
        self.equals = Equals::Arrow;
        self
    }

    /// Render `NAME = (value)`.
    #[must_use]
    pub const fn parentheses(mut self) -> Self {
        self.parentheses = true;
        self
    }
}

/// Options for [`Directive::Identifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierOptions {
    /// Keyword placed before the name (`RENAME TO`, `IN`).
    pub name:   Option<&'static str>,
    /// Operator between the keyword and the name.
    ///
    /// Ignored without a keyword.
    pub equals: Equals
}

impl IdentifierOptions {
    /// Bare identifier.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name:   None,
            equals: Equals::None
        }
    }

    /// Identifier preceded by `name`.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self {
            name:   Some(name),
            equals: Equals::None
        }
    }

    /// Render `NAME = "identifier"`.
    #[must_use]
    pub const fn equals(mut self) -> Self {
        self.equals = Equals::Equals;
        self
    }
}

impl Default for IdentifierOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Options for [`Directive::List`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Name placed before the list.
    pub name:               Option<&'static str>,
    /// Operator between the name and the list. Ignored without a name.
    pub equals:             Equals,
    /// Separator between items.
    pub separator:          Separator,
    /// Wrap the joined items in parentheses.
    pub parentheses:        bool,
    /// Quoting for text items.
    pub quotes:             Quotes,
    /// Join the last two items with a space instead of the separator.
    pub no_final_separator: bool
}

impl ListOptions {
    /// Comma separated, parenthesized, unnamed list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name:               None,
            equals:             Equals::Equals,
            separator:          Separator::Comma,
            parentheses:        true,
            quotes:             Quotes::None,
            no_final_separator: false
        }
    }

    /// List preceded by `name =`.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        let mut options = Self::new();
        options.name = Some(name);
        options
    }

    /// Render `NAME (items)`.
    #[must_use]
    pub const fn no_equals(mut self) -> Self {
        self.equals = Equals::None;
        self
    }

    /// Do not wrap the items in parentheses.
    #[must_use]
    pub const fn no_parentheses(mut self) -> Self {
        self.parentheses = false;
        self
    }

    /// Separate items with spaces.
    #[must_use]
    pub const fn no_comma(mut self) -> Self {
        self.separator = Separator::Space;
        self
    }

    /// Quote text items with single quotes.
    #[must_use]
    pub const fn single_quotes(mut self) -> Self {
        self.quotes = Quotes::Single;
        self
    }

    /// Join the last two items with a space.
    #[must_use]
    pub const fn no_final_separator(mut self) -> Self {
        self.no_final_separator = true;
        self
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendering instruction for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Fixed text emitted unconditionally; the field value is ignored.
    Static(&'static str),
    /// Value emitted without a `key =` prefix.
    Keyword(KeywordOptions),
    /// `NAME <op> value`.
    Parameter(ParameterOptions),
    /// Fully-qualified, dialect-escaped object name.
    Identifier(IdentifierOptions),
    /// Sequence of rendered items.
    List(ListOptions)
}

impl Directive {
    /// Keyword directive emitting `name` for flags.
    #[must_use]
    pub const fn keyword(name: &'static str) -> Self {
        Self::Keyword(KeywordOptions::named(name))
    }

    /// `NAME = value` parameter directive.
    #[must_use]
    pub const fn parameter(name: &'static str) -> Self {
        Self::Parameter(ParameterOptions::new(name))
    }

    /// Bare identifier directive.
    #[must_use]
    pub const fn identifier() -> Self {
        Self::Identifier(IdentifierOptions::new())
    }

    /// Short name of the directive kind, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Static(_) => "static",
            Self::Keyword(_) => "keyword",
            Self::Parameter(_) => "parameter",
            Self::Identifier(_) => "identifier",
            Self::List(_) => "list"
        }
    }
}
