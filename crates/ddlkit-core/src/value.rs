// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Renderable field values.
//!
//! [`SqlValue`] turns a Rust field into a borrowed [`Value`] that the
//! [`Marshaller`](crate::Marshaller) knows how to print. The mapping is by
//! type:
//!
//! | Rust type | [`Value`] |
//! |-----------|-----------|
//! | `bool` | [`Bool`](Value::Bool) |
//! | signed / unsigned integers | [`Int`](Value::Int) / [`UInt`](Value::UInt) |
//! | `f32`, `f64` | [`Float`](Value::Float) |
//! | `String`, `str`, [`SqlEnum`](crate::SqlEnum) types | [`Text`](Value::Text) |
//! | identifiers | [`Identifier`](Value::Identifier) |
//! | [`ToSql`] structures | [`Nested`](Value::Nested) |
//! | `Vec<T>` | [`Sequence`](Value::Sequence) |
//! | `Option<T>` | the inner value, or nothing |

use std::{borrow::Cow, fmt};

use crate::{identifier::ObjectIdentifier, marshal::ToSql};

/// A field value borrowed for rendering.
#[derive(Clone)]
pub enum Value<'a> {
    /// Rendered as `true` / `false`.
    Bool(bool),
    /// Signed integer literal.
    Int(i64),
    /// Unsigned integer literal.
    UInt(u64),
    /// Floating point literal.
    Float(f64),
    /// Text, quoted per directive.
    Text(Cow<'a, str>),
    /// Object reference.
    Identifier(&'a dyn ObjectIdentifier),
    /// Sub-clause rendered recursively.
    Nested(&'a dyn ToSql),
    /// Ordered items.
    Sequence(Vec<Value<'a>>)
}

impl Value<'_> {
    /// Short name of the value shape, used in diagnostics.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) | Self::UInt(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Identifier(_) => "identifier",
            Self::Nested(_) => "structure",
            Self::Sequence(_) => "sequence"
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Self::Identifier(v) => f.debug_tuple("Identifier").field(v).finish(),
            Self::Nested(v) => f.debug_tuple("Nested").field(&v.name()).finish(),
            Self::Sequence(v) => f.debug_tuple("Sequence").field(v).finish()
        }
    }
}

/// Conversion of a field into a renderable [`Value`].
///
/// Returns `None` when there is nothing to render. Callers consult
/// [`Presence`](crate::Presence) first; `None` here only covers nested
/// absence such as `Option<Option<T>>`.
pub trait SqlValue {
    /// Borrow the value for rendering.
    fn sql_value(&self) -> Option<Value<'_>>;
}

impl<T: SqlValue> SqlValue for Option<T> {
    fn sql_value(&self) -> Option<Value<'_>> {
        self.as_ref().and_then(SqlValue::sql_value)
    }
}

impl<T: SqlValue> SqlValue for Vec<T> {
    fn sql_value(&self) -> Option<Value<'_>> {
        if self.is_empty() {
            return None;
        }
        Some(Value::Sequence(
            self.iter().filter_map(SqlValue::sql_value).collect()
        ))
    }
}

impl<T: SqlValue + ?Sized> SqlValue for Box<T> {
    fn sql_value(&self) -> Option<Value<'_>> {
        (**self).sql_value()
    }
}

impl<T: SqlValue + ?Sized> SqlValue for &T {
    fn sql_value(&self) -> Option<Value<'_>> {
        (**self).sql_value()
    }
}

impl SqlValue for bool {
    fn sql_value(&self) -> Option<Value<'_>> {
        Some(Value::Bool(*self))
    }
}

macro_rules! signed {
    ($($t:ty),+ $(,)?) => {
        $(impl SqlValue for $t {
            fn sql_value(&self) -> Option<Value<'_>> {
                Some(Value::Int(i64::from(*self)))
            }
        })+
    };
}

macro_rules! unsigned {
    ($($t:ty),+ $(,)?) => {
        $(impl SqlValue for $t {
            fn sql_value(&self) -> Option<Value<'_>> {
                Some(Value::UInt(u64::from(*self)))
            }
        })+
    };
}

signed!(i8, i16, i32, i64);
unsigned!(u8, u16, u32, u64);

impl SqlValue for isize {
    fn sql_value(&self) -> Option<Value<'_>> {
        Some(Value::Int(*self as i64))
    }
}

impl SqlValue for usize {
    fn sql_value(&self) -> Option<Value<'_>> {
        Some(Value::UInt(*self as u64))
    }
}

impl SqlValue for f32 {
    fn sql_value(&self) -> Option<Value<'_>> {
        Some(Value::Float(f64::from(*self)))
    }
}

impl SqlValue for f64 {
    fn sql_value(&self) -> Option<Value<'_>> {
        Some(Value::Float(*self))
    }
}

impl SqlValue for String {
    fn sql_value(&self) -> Option<Value<'_>> {
        Some(Value::Text(Cow::Borrowed(self.as_str())))
    }
}

impl SqlValue for str {
    fn sql_value(&self) -> Option<Value<'_>> {
        Some(Value::Text(Cow::Borrowed(self)))
    }
}

impl SqlValue for Cow<'_, str> {
    fn sql_value(&self) -> Option<Value<'_>> {
        Some(Value::Text(Cow::Borrowed(&**self)))
    }
}

impl SqlValue for () {
    fn sql_value(&self) -> Option<Value<'_>> {
        None
    }
}
