// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Enumerated SQL option values.
//!
//! [`SqlEnum`] maps a Rust enum to the SQL text of each variant through a
//! single `VARIANTS` table. Parsing is one generic case-insensitive lookup
//! over that table, so result rows echoing `'standard'` or `'STANDARD'` both
//! resolve to the same variant.
//!
//! Usually derived with `#[derive(SqlEnum)]`, which also provides `Display`,
//! `FromStr`, [`Presence`](crate::Presence) and
//! [`SqlValue`](crate::SqlValue).

/// Error returned when text matches no variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {enum_name} value `{value}`; expected one of: {}", .expected.join(", "))]
pub struct UnknownVariant {
    /// Enum type name.
    pub enum_name: &'static str,
    /// Offending input.
    pub value:     String,
    /// Accepted spellings.
    pub expected:  Vec<&'static str>
}

/// Enum with a fixed SQL spelling per variant.
///
/// ```rust
/// use ddlkit_core::SqlEnum;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum WarehouseSize {
///     XSmall,
///     Small
/// }
///
/// impl SqlEnum for WarehouseSize {
///     const NAME: &'static str = "WarehouseSize";
///     const VARIANTS: &'static [(&'static str, Self)] = &[
///         ("XSMALL", Self::XSmall),
///         ("X-SMALL", Self::XSmall),
///         ("SMALL", Self::Small),
///     ];
/// }
///
/// assert_eq!(WarehouseSize::from_sql("x-small"), Ok(WarehouseSize::XSmall));
/// assert_eq!(WarehouseSize::Small.as_sql(), "SMALL");
/// assert!(WarehouseSize::from_sql("huge").is_err());
/// ```
pub trait SqlEnum: Sized + Copy + PartialEq + 'static {
    /// Enum type name for diagnostics.
    const NAME: &'static str;

    /// SQL spellings. The first entry for a variant is its canonical form;
    /// later entries are accepted aliases.
    const VARIANTS: &'static [(&'static str, Self)];

    /// Canonical SQL text.
    fn as_sql(&self) -> &'static str {
        Self::VARIANTS
            .iter()
            .find(|(_, variant)| variant == self)
            .map_or("", |(text, _)| *text)
    }

    /// Case-insensitive lookup.
    ///
    /// # Errors
    ///
    /// [`UnknownVariant`] when `text` matches no entry.
    fn from_sql(text: &str) -> Result<Self, UnknownVariant> {
        lookup(Self::NAME, Self::VARIANTS, text)
    }
}

/// Case-insensitive lookup of `text` in a variant table.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// [`UnknownVariant`] listing the accepted spellings.
pub fn lookup<T: Copy>(
    enum_name: &'static str,
    table: &[(&'static str, T)],
    text: &str
) -> Result<T, UnknownVariant> {
    let needle = text.trim();
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(needle))
        .map(|(_, value)| *value)
        .ok_or_else(|| UnknownVariant {
            enum_name,
            value: text.to_string(),
            expected: table.iter().map(|(name, _)| *name).collect()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ScalingPolicy {
        Standard,
        Economy
    }

    impl SqlEnum for ScalingPolicy {
        const NAME: &'static str = "ScalingPolicy";
        const VARIANTS: &'static [(&'static str, Self)] =
            &[("STANDARD", Self::Standard), ("ECONOMY", Self::Economy)];
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(ScalingPolicy::from_sql("standard"), Ok(ScalingPolicy::Standard));
        assert_eq!(ScalingPolicy::from_sql(" Economy "), Ok(ScalingPolicy::Economy));
    }

    #[test]
    fn canonical_text() {
        assert_eq!(ScalingPolicy::Economy.as_sql(), "ECONOMY");
    }

    #[test]
    fn unknown_lists_expected() {
        let err = ScalingPolicy::from_sql("fast").unwrap_err();
        assert_eq!(err.enum_name, "ScalingPolicy");
        assert_eq!(err.expected, vec!["STANDARD", "ECONOMY"]);
        assert_eq!(
            err.to_string(),
            "unknown ScalingPolicy value `fast`; expected one of: STANDARD, ECONOMY"
        );
    }
}
