// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `SqlEnum` derive macro implementation.
//!
//! Builds the `VARIANTS` table from unit variants. Each variant contributes
//! its canonical spelling first, then its aliases:
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, SqlEnum)]
//! pub enum WarehouseSize {
//!     #[sql_enum(name = "XSMALL", alias = "X-SMALL")]
//!     XSmall,
//!     Small, // "SMALL"
//! }
//! ```
//!
//! Also generates `Display` (canonical spelling), `FromStr` (case-insensitive
//! lookup), `Presence` and `SqlValue` (text).


use darling::{FromDeriveInput, FromVariant, ast::Data};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Generics, Ident, parse_macro_input};

use crate::utils::naming::variant_name;

/// Variant attributes.
#[derive(Debug, FromVariant)]
#[darling(attributes(sql_enum))]
struct VariantAttrs {
    ident: Ident,

    /// Canonical spelling override.
    #[darling(default)]
    name: Option<String>,

    /// Additional accepted spellings.
    #[darling(multiple)]
    alias: Vec<String>
}

/// Container attributes.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(sql_enum), supports(enum_unit))]
struct EnumAttrs {
    ident:    Ident,
    generics: Generics,
    data:     Data<VariantAttrs, ()>,

    /// Type name override for diagnostics.
    #[darling(default)]
    name: Option<String>
}

/// Main entry point for the SqlEnum derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

/// Generate the `SqlEnum` impl and its companions.
pub fn generate(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let attrs = EnumAttrs::from_derive_input(input)?;
    let ident = &attrs.ident;
    let name = attrs.name.clone().unwrap_or_else(|| ident.to_string());
    let (impl_generics, ty_generics, where_clause) = attrs.generics.split_for_impl();

    let Data::Enum(variants) = &attrs.data else {
        return Err(darling::Error::unsupported_shape("struct").with_span(ident));
    };

    let mut errors = darling::Error::accumulator();
    let mut seen: Vec<String> = Vec::new();
    let mut entries = Vec::new();

    for variant in variants {
        let variant_ident = &variant.ident;
        let canonical = variant
            .name
            .clone()
            .unwrap_or_else(|| variant_name(variant_ident));
        for spelling in std::iter::once(&canonical).chain(variant.alias.iter()) {
            if seen.iter().any(|other| other.eq_ignore_ascii_case(spelling)) {
                errors.push(
                    darling::Error::custom(format!("`{spelling}` is used by more than one variant"))
                        .with_span(variant_ident)
                );
                continue;
            }
            seen.push(spelling.clone());
            entries.push(quote!((#spelling, Self::#variant_ident)));
        }
    }

    errors.finish()?;

    Ok(quote! {
        impl #impl_generics ::ddlkit::SqlEnum for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            const VARIANTS: &'static [(&'static str, Self)] = &[#(#entries),*];
        }

        impl #impl_generics ::core::fmt::Display for #ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(::ddlkit::SqlEnum::as_sql(self))
            }
        }

        impl #impl_generics ::core::str::FromStr for #ident #ty_generics #where_clause {
            type Err = ::ddlkit::UnknownVariant;

            fn from_str(text: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as ::ddlkit::SqlEnum>::from_sql(text)
            }
        }

        impl #impl_generics ::ddlkit::Presence for #ident #ty_generics #where_clause {
            fn is_present(&self) -> bool {
                true
            }
        }

        impl #impl_generics ::ddlkit::SqlValue for #ident #ty_generics #where_clause {
            fn sql_value(&self) -> ::core::option::Option<::ddlkit::Value<'_>> {
                ::core::option::Option::Some(::ddlkit::Value::Text(
                    ::std::borrow::Cow::Borrowed(::ddlkit::SqlEnum::as_sql(self))
                ))
            }
        }
    })
}
