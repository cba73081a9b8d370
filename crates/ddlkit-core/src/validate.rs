// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Option structure validation.
//!
//! Validation runs before marshalling and collects every violation instead of
//! stopping at the first one. Constraints come in two flavours:
//!
//! - **Combinators** over a set of fields, declared on the structure:
//!   [`exactly_one_of`], [`at_least_one_of`], [`at_most_one_of`],
//!   [`all_or_none`].
//! - **Field validators**: [`identifier`], [`range`], [`length`],
//!   [`required`].
//!
//! Presence for every constraint is the [`Presence`] rule shared with the
//! marshaller.
//!
//! # Example
//!
//! ```rust
//! use ddlkit_core::{Presence, Validate, validate::{self, Violations}};
//!
//! struct Grant {
//!     to_role: Option<String>,
//!     to_user: Option<String>
//! }
//!
//! impl Validate for Grant {
//!     const STRUCTURE: &'static str = "Grant";
//!
//!     fn validate_into(&self, violations: &mut Violations) {
//!         violations.check(validate::exactly_one_of(
//!             Self::STRUCTURE,
//!             &[
//!                 ("to_role", self.to_role.is_present()),
//!                 ("to_user", self.to_user.is_present()),
//!             ]
//!         ));
//!     }
//! }
//!
//! let grant = Grant { to_role: None, to_user: None };
//! let err = grant.validate().unwrap_err();
//! assert_eq!(err.to_string(), "Grant: exactly one of [to_role, to_user] must be set");
//! ```

use std::{borrow::Cow, fmt};

use crate::{
    identifier::{
        AccountObjectIdentifier, DatabaseObjectIdentifier, ObjectIdentifier,
        SchemaObjectIdentifier, parse_parts
    },
    presence::Presence
};

/// Kind of a field-set constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Exactly one field present.
    ExactlyOneOf,
    /// One or more fields present.
    AtLeastOneOf,
    /// Zero or one field present.
    AtMostOneOf,
    /// Every field present, or none.
    AllOrNone
}

impl ConstraintKind {
    /// Whether `present` fields out of `total` satisfy the constraint.
    #[must_use]
    pub const fn is_satisfied(&self, present: usize, total: usize) -> bool {
        match self {
            Self::ExactlyOneOf => present == 1,
            Self::AtLeastOneOf => present >= 1,
            Self::AtMostOneOf => present <= 1,
            Self::AllOrNone => present == 0 || present == total
        }
    }

    /// Attribute name of the constraint.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExactlyOneOf => "exactly_one_of",
            Self::AtLeastOneOf => "at_least_one_of",
            Self::AtMostOneOf => "at_most_one_of",
            Self::AllOrNone => "all_or_none"
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure.
///
/// Every variant names the enclosing structure. Combinator variants list all
/// fields involved in the constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No options were supplied.
    #[error("{structure}: options are required")]
    NilOptions {
        /// Structure name.
        structure: &'static str
    },

    /// Zero, or two or more, of the fields were set.
    #[error("{structure}: exactly one of [{}] must be set", .fields.join(", "))]
    ExactlyOneOf {
        /// Structure name.
        structure: &'static str,
        /// Fields in the constraint.
        fields:    Vec<&'static str>
    },

    /// None of the fields were set.
    #[error("{structure}: at least one of [{}] must be set", .fields.join(", "))]
    AtLeastOneOf {
        /// Structure name.
        structure: &'static str,
        /// Fields in the constraint.
        fields:    Vec<&'static str>
    },

    /// More than one of mutually exclusive fields were set.
    #[error("{structure}: at most one of [{}] may be set", .fields.join(", "))]
    AtMostOneOf {
        /// Structure name.
        structure: &'static str,
        /// Fields in the constraint.
        fields:    Vec<&'static str>
    },

    /// Only some of the fields were set.
    #[error("{structure}: either all or none of [{}] must be set", .fields.join(", "))]
    AllOrNone {
        /// Structure name.
        structure: &'static str,
        /// Fields in the constraint.
        fields:    Vec<&'static str>
    },

    /// A required field was absent.
    #[error("{structure}.{field} is required")]
    Required {
        /// Structure name.
        structure: &'static str,
        /// Field name.
        field:     &'static str
    },

    /// A field does not hold a valid object identifier.
    #[error("{structure}.{field}: `{value}` is not a valid identifier")]
    InvalidIdentifier {
        /// Structure name.
        structure: &'static str,
        /// Field name.
        field:     &'static str,
        /// Offending value.
        value:     String
    },

    /// A number is outside its inclusive range.
    #[error("{structure}.{field}: {actual} is outside {min}..={max}")]
    OutOfRange {
        /// Structure name.
        structure: &'static str,
        /// Field name.
        field:     &'static str,
        /// Lower bound.
        min:       i64,
        /// Upper bound.
        max:       i64,
        /// Actual value.
        actual:    i128
    },

    /// A string or sequence length is outside its inclusive range.
    #[error("{structure}.{field}: length {actual} is outside {min}..={max}")]
    Length {
        /// Structure name.
        structure: &'static str,
        /// Field name.
        field:     &'static str,
        /// Minimum length.
        min:       usize,
        /// Maximum length.
        max:       usize,
        /// Actual length.
        actual:    usize
    }
}

impl ValidationError {
    /// Structure the violation belongs to.
    #[must_use]
    pub const fn structure(&self) -> &'static str {
        match self {
            Self::NilOptions {
                structure
            }
            | Self::ExactlyOneOf {
                structure, ..
            }
            | Self::AtLeastOneOf {
                structure, ..
            }
            | Self::AtMostOneOf {
                structure, ..
            }
            | Self::AllOrNone {
                structure, ..
            }
            | Self::Required {
                structure, ..
            }
            | Self::InvalidIdentifier {
                structure, ..
            }
            | Self::OutOfRange {
                structure, ..
            }
            | Self::Length {
                structure, ..
            } => *structure
        }
    }

    /// Fields implicated in the violation.
    #[must_use]
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Self::NilOptions {
                ..
            } => Vec::new(),
            Self::ExactlyOneOf {
                fields, ..
            }
            | Self::AtLeastOneOf {
                fields, ..
            }
            | Self::AtMostOneOf {
                fields, ..
            }
            | Self::AllOrNone {
                fields, ..
            } => fields.clone(),
            Self::Required {
                field, ..
            }
            | Self::InvalidIdentifier {
                field, ..
            }
            | Self::OutOfRange {
                field, ..
            }
            | Self::Length {
                field, ..
            } => vec![*field]
        }
    }

    /// Combinator kind, for field-set violations.
    #[must_use]
    pub const fn constraint(&self) -> Option<ConstraintKind> {
        match self {
            Self::ExactlyOneOf {
                ..
            } => Some(ConstraintKind::ExactlyOneOf),
            Self::AtLeastOneOf {
                ..
            } => Some(ConstraintKind::AtLeastOneOf),
            Self::AtMostOneOf {
                ..
            } => Some(ConstraintKind::AtMostOneOf),
            Self::AllOrNone {
                ..
            } => Some(ConstraintKind::AllOrNone),
            _ => None
        }
    }
}

/// Every violation found in one validation pass.
///
/// Displayed one violation per line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Violations(Vec<ValidationError>);

impl Violations {
    /// Empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a violation.
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Record the outcome of a constraint check, if it failed.
    pub fn check(&mut self, outcome: Option<ValidationError>) {
        if let Some(error) = outcome {
            self.0.push(error);
        }
    }

    /// Iterate over violations in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no violation was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap into the underlying list.
    #[must_use]
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }

    /// `Ok` when empty, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one violation was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

impl From<ValidationError> for Violations {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl Extend<ValidationError> for Violations {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Violations {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A structure with declared constraints.
///
/// Usually derived with `#[derive(Validate)]`.
pub trait Validate {
    /// Structure name reported in violations.
    const STRUCTURE: &'static str;

    /// Append violations of this structure and its present nested
    /// structures to `violations`.
    fn validate_into(&self, violations: &mut Violations);

    /// Run every constraint and collect the violations.
    ///
    /// # Errors
    ///
    /// Returns all violations when at least one constraint fails.
    fn validate(&self) -> Result<(), Violations> {
        let mut violations = Violations::new();
        self.validate_into(&mut violations);
        if !violations.is_empty() {
            tracing::debug!(
                target: "ddlkit::validate",
                structure = Self::STRUCTURE,
                count = violations.len(),
                violations = %violations,
                "validation failed"
            );
        }
        violations.into_result()
    }
}

/// Validate an optional request.
///
/// `None` yields a single [`ValidationError::NilOptions`] without looking at
/// any field.
///
/// # Errors
///
/// Returns every violation found.
pub fn validate_options<T: Validate>(options: Option<&T>) -> Result<&T, Violations> {
    let Some(options) = options else {
        tracing::debug!(
            target: "ddlkit::validate",
            structure = T::STRUCTURE,
            "options are missing"
        );
        return Err(ValidationError::NilOptions {
            structure: T::STRUCTURE
        }
        .into());
    };
    options.validate()?;
    Ok(options)
}

/// Evaluate a field-set constraint.
///
/// `fields` pairs each field name with its presence.
#[must_use]
pub fn constraint(
    kind: ConstraintKind,
    structure: &'static str,
    fields: &[(&'static str, bool)]
) -> Option<ValidationError> {
    let present = fields.iter().filter(|(_, present)| *present).count();
    if kind.is_satisfied(present, fields.len()) {
        return None;
    }

    let fields = fields.iter().map(|(name, _)| *name).collect();
    Some(match kind {
        ConstraintKind::ExactlyOneOf => ValidationError::ExactlyOneOf {
            structure,
            fields
        },
        ConstraintKind::AtLeastOneOf => ValidationError::AtLeastOneOf {
            structure,
            fields
        },
        ConstraintKind::AtMostOneOf => ValidationError::AtMostOneOf {
            structure,
            fields
        },
        ConstraintKind::AllOrNone => ValidationError::AllOrNone {
            structure,
            fields
        }
    })
}

/// Exactly one field present; zero or two or more fail.
#[must_use]
pub fn exactly_one_of(
    structure: &'static str,
    fields: &[(&'static str, bool)]
) -> Option<ValidationError> {
    constraint(ConstraintKind::ExactlyOneOf, structure, fields)
}

/// One or more fields present.
#[must_use]
pub fn at_least_one_of(
    structure: &'static str,
    fields: &[(&'static str, bool)]
) -> Option<ValidationError> {
    constraint(ConstraintKind::AtLeastOneOf, structure, fields)
}

/// Mutually exclusive fields: none or one present.
#[must_use]
pub fn at_most_one_of(
    structure: &'static str,
    fields: &[(&'static str, bool)]
) -> Option<ValidationError> {
    constraint(ConstraintKind::AtMostOneOf, structure, fields)
}

/// Either every field present or none.
#[must_use]
pub fn all_or_none(
    structure: &'static str,
    fields: &[(&'static str, bool)]
) -> Option<ValidationError> {
    constraint(ConstraintKind::AllOrNone, structure, fields)
}

/// Field present per the [`Presence`] rule.
#[must_use]
pub fn required<T: Presence + ?Sized>(
    structure: &'static str,
    field: &'static str,
    value: &T
) -> Option<ValidationError> {
    (!value.is_present()).then_some(ValidationError::Required {
        structure,
        field
    })
}

/// Field holds valid object identifiers. Absent values pass.
#[must_use]
pub fn identifier<T: IdentifierField + ?Sized>(
    structure: &'static str,
    field: &'static str,
    value: &T
) -> Option<ValidationError> {
    value
        .invalid_identifier()
        .map(|value| ValidationError::InvalidIdentifier {
            structure,
            field,
            value: value.into_owned()
        })
}

/// Integer within `min..=max`. Absent values pass.
#[must_use]
pub fn range<T: RangeField + ?Sized>(
    structure: &'static str,
    field: &'static str,
    value: &T,
    min: i64,
    max: i64
) -> Option<ValidationError> {
    let actual = value.range_value()?;
    (actual < i128::from(min) || actual > i128::from(max)).then_some(
        ValidationError::OutOfRange {
            structure,
            field,
            min,
            max,
            actual
        }
    )
}

/// String character count or sequence item count within `min..=max`.
/// Absent values pass.
#[must_use]
pub fn length<T: LengthField + ?Sized>(
    structure: &'static str,
    field: &'static str,
    value: &T,
    min: usize,
    max: usize
) -> Option<ValidationError> {
    let actual = value.length()?;
    (actual < min || actual > max).then_some(ValidationError::Length {
        structure,
        field,
        min,
        max,
        actual
    })
}

/// Values checked by [`identifier`].
pub trait IdentifierField {
    /// Text of the first invalid identifier, if any.
    fn invalid_identifier(&self) -> Option<Cow<'_, str>>;
}

impl<T: IdentifierField> IdentifierField for Option<T> {
    fn invalid_identifier(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(IdentifierField::invalid_identifier)
    }
}

impl<T: IdentifierField> IdentifierField for Vec<T> {
    fn invalid_identifier(&self) -> Option<Cow<'_, str>> {
        self.iter().find_map(IdentifierField::invalid_identifier)
    }
}

impl<T: IdentifierField + ?Sized> IdentifierField for Box<T> {
    fn invalid_identifier(&self) -> Option<Cow<'_, str>> {
        (**self).invalid_identifier()
    }
}

impl IdentifierField for str {
    fn invalid_identifier(&self) -> Option<Cow<'_, str>> {
        let valid = parse_parts(self).is_ok_and(|parts| {
            parts
                .iter()
                .all(|part| !part.trim().is_empty() && !part.contains('\0'))
        });
        (!valid).then_some(Cow::Borrowed(self))
    }
}

impl IdentifierField for String {
    fn invalid_identifier(&self) -> Option<Cow<'_, str>> {
        self.as_str().invalid_identifier()
    }
}

macro_rules! object_identifier_field {
    ($($t:ty),+ $(,)?) => {
        $(impl IdentifierField for $t {
            fn invalid_identifier(&self) -> Option<Cow<'_, str>> {
                (!self.is_valid()).then(|| Cow::Owned(self.parts().join(".")))
            }
        })+
    };
}

object_identifier_field!(
    AccountObjectIdentifier,
    DatabaseObjectIdentifier,
    SchemaObjectIdentifier
);

/// Values checked by [`range`].
pub trait RangeField {
    /// Numeric value, `None` when absent.
    fn range_value(&self) -> Option<i128>;
}

impl<T: RangeField> RangeField for Option<T> {
    fn range_value(&self) -> Option<i128> {
        self.as_ref().and_then(RangeField::range_value)
    }
}

macro_rules! range_field {
    ($($t:ty),+ $(,)?) => {
        $(impl RangeField for $t {
            fn range_value(&self) -> Option<i128> {
                i128::try_from(*self).ok()
            }
        })+
    };
}

range_field!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Values checked by [`length`].
pub trait LengthField {
    /// Character or item count, `None` when absent.
    fn length(&self) -> Option<usize>;
}

impl<T: LengthField> LengthField for Option<T> {
    fn length(&self) -> Option<usize> {
        self.as_ref().and_then(LengthField::length)
    }
}

impl<T> LengthField for Vec<T> {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl LengthField for str {
    fn length(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}

impl LengthField for String {
    fn length(&self) -> Option<usize> {
        Some(self.chars().count())
    }
}
