// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Syntactic type inspection.
//!
//! Proc macros see types as written, so `Option<bool>` is recognised by its
//! last path segment. Aliases are not resolved.

use syn::{GenericArgument, PathArguments, Type};

/// Wrapper shape of a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper<'a> {
    /// `Option<T>`.
    Option(&'a Type),
    /// `Vec<T>`.
    Vec(&'a Type),
    /// `Box<T>`.
    Box(&'a Type),
    /// Anything else.
    Plain
}

/// Single generic argument of `Name<T>` when the last segment is `name`.
fn generic_inner<'a>(ty: &'a Type, name: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != name {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None
    }
}

/// Classify the outermost wrapper of `ty`.
pub fn wrapper(ty: &Type) -> Wrapper<'_> {
    if let Some(inner) = generic_inner(ty, "Option") {
        Wrapper::Option(inner)
    } else if let Some(inner) = generic_inner(ty, "Vec") {
        Wrapper::Vec(inner)
    } else if let Some(inner) = generic_inner(ty, "Box") {
        Wrapper::Box(inner)
    } else {
        Wrapper::Plain
    }
}

/// `bool` or `Option<bool>`.
pub fn is_flag(ty: &Type) -> bool {
    let ty = match wrapper(ty) {
        Wrapper::Option(inner) => inner,
        _ => ty
    };
    matches!(ty, Type::Path(path) if path.path.is_ident("bool"))
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn classify_wrappers() {
        let ty: Type = parse_quote!(Option<String>);
        assert!(matches!(wrapper(&ty), Wrapper::Option(_)));
        let ty: Type = parse_quote!(std::vec::Vec<u8>);
        assert!(matches!(wrapper(&ty), Wrapper::Vec(_)));
        let ty: Type = parse_quote!(Box<Clause>);
        assert!(matches!(wrapper(&ty), Wrapper::Box(_)));
        let ty: Type = parse_quote!(String);
        assert_eq!(wrapper(&ty), Wrapper::Plain);
    }

    #[test]
    fn flags() {
        assert!(is_flag(&parse_quote!(bool)));
        assert!(is_flag(&parse_quote!(Option<bool>)));
        assert!(!is_flag(&parse_quote!(Option<String>)));
        assert!(!is_flag(&parse_quote!(Vec<bool>)));
    }
}
