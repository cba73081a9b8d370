// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The presence rule.
//!
//! A field takes part in rendering and in constraint checks only when it is
//! *present*:
//!
//! | Type | Present when |
//! |------|--------------|
//! | `Option<T>` | `Some(_)` |
//! | `Vec<T>` | non-empty |
//! | plain value (`bool`, `String`, integers, structures) | always |
//!
//! Both the [`Marshaller`](crate::Marshaller) and the validation combinators
//! in [`validate`](crate::validate) ask this trait, so the two never
//! disagree about what counts as set.
//!
//! Note that `Some(false)` is present. A keyword flag holding `Some(false)`
//! still renders nothing, but it does count for `exactly_one_of` and
//! friends.

use std::borrow::Cow;

/// Whether a field value counts as "set".
pub trait Presence {
    /// Returns `true` when the value is set.
    fn is_present(&self) -> bool;
}

impl<T> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence + ?Sized> Presence for Box<T> {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

macro_rules! always_present {
    ($($t:ty),+ $(,)?) => {
        $(impl Presence for $t {
            fn is_present(&self) -> bool {
                true
            }
        })+
    };
}

always_present!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String, str, ()
);

impl Presence for Cow<'_, str> {
    fn is_present(&self) -> bool {
        true
    }
}
