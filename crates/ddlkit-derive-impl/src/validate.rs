// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Validate` derive macro implementation.
//!
//! Generates `Validate::validate_into` running, in order:
//!
//! 1. container combinators grouped by kind (`exactly_one_of` first, then
//!    `at_least_one_of`, `at_most_one_of`, `all_or_none`), each kind in
//!    declaration order;
//! 2. field rules in field order, nested structures recursing in place.
//!
//! Nested validation follows the field type as written: `Option<T>` is
//! checked only when `Some`, `Vec<T>` item by item, `Box<T>` through the
//! box.

mod attrs;

#[cfg(test)]
mod tests;

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DataEnum, DataStruct, DeriveInput, Fields, Type, parse_macro_input};

use self::attrs::{ContainerAttrs, FieldRules, parse_field_rules};
use crate::utils::{
    naming::label,
    types::{Wrapper, wrapper}
};

/// Main entry point for the Validate derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

/// Generate the `Validate` impl.
pub fn generate(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let attrs = ContainerAttrs::from_derive_input(input)?;
    let ident = &attrs.ident;
    let structure = attrs.label();
    let (impl_generics, ty_generics, where_clause) = attrs.generics.split_for_impl();

    let body = match &input.data {
        Data::Struct(data) => struct_body(&attrs, data)?,
        Data::Enum(data) => {
            if !attrs.combinators().is_empty() {
                return Err(darling::Error::custom(
                    "field-set constraints apply to structs; an enum holds one variant at a time"
                )
                .with_span(ident));
            }
            enum_body(data)?
        }
        Data::Union(_) => {
            return Err(darling::Error::unsupported_shape("union").with_span(ident));
        }
    };

    Ok(quote! {
        impl #impl_generics ::ddlkit::Validate for #ident #ty_generics #where_clause {
            const STRUCTURE: &'static str = #structure;

            fn validate_into(&self, violations: &mut ::ddlkit::validate::Violations) {
                #body
            }
        }
    })
}

fn struct_body(attrs: &ContainerAttrs, data: &DataStruct) -> darling::Result<TokenStream2> {
    let Fields::Named(fields) = &data.fields else {
        return Err(darling::Error::unsupported_shape("tuple or unit struct"));
    };

    let mut errors = darling::Error::accumulator();
    let mut checks = Vec::new();

    for (function, paths) in attrs.combinators() {
        let function = format_ident!("{}", function);
        let mut entries = Vec::with_capacity(paths.len());
        for path in paths.iter() {
            let known = path.get_ident().and_then(|name| {
                fields
                    .named
                    .iter()
                    .filter_map(|field| field.ident.as_ref())
                    .find(|field| *field == name)
            });
            match known {
                Some(field) => {
                    let name = label(field);
                    entries.push(quote! {
                        (#name, ::ddlkit::Presence::is_present(&self.#field))
                    });
                }
                None => errors.push(
                    darling::Error::custom(format!(
                        "`{}` is not a field of this struct",
                        quote!(#path).to_string().replace(' ', "")
                    ))
                    .with_span(path)
                )
            }
        }
        checks.push(quote! {
            violations.check(::ddlkit::validate::#function(
                Self::STRUCTURE,
                &[#(#entries),*]
            ));
        });
    }

    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        if let Some(rules) = errors.handle(parse_field_rules(&field.attrs).map_err(Into::into)) {
            checks.push(rule_checks(&rules, &label(ident), &field.ty, &quote!(&self.#ident)));
        }
    }

    errors.finish()?;
    Ok(quote!(#(#checks)*))
}

fn enum_body(data: &DataEnum) -> darling::Result<TokenStream2> {
    let mut errors = darling::Error::accumulator();
    let mut arms = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        let ident = &variant.ident;
        let Some(field) = variant.fields.iter().next() else {
            continue;
        };
        let Some(rules) = errors.handle(parse_field_rules(&variant.attrs).map_err(Into::into))
        else {
            continue;
        };
        if rules.is_empty() {
            arms.push(quote!(Self::#ident(_) => {}));
        } else {
            let checks = rule_checks(&rules, &ident.to_string(), &field.ty, &quote!(inner));
            arms.push(quote!(Self::#ident(inner) => { #checks }));
        }
    }

    errors.finish()?;
    if arms.is_empty() {
        return Ok(TokenStream2::new());
    }
    Ok(quote! {
        match self {
            #(#arms)*
        }
    })
}

/// Checks for one field. `value` borrows the field.
fn rule_checks(rules: &FieldRules, name: &str, ty: &Type, value: &TokenStream2) -> TokenStream2 {
    let mut checks = Vec::new();

    if rules.required {
        checks.push(quote! {
            violations.check(::ddlkit::validate::required(Self::STRUCTURE, #name, #value));
        });
    }
    if rules.identifier {
        checks.push(quote! {
            violations.check(::ddlkit::validate::identifier(Self::STRUCTURE, #name, #value));
        });
    }
    if let Some((min, max)) = rules.range {
        let min = if min == i64::MIN {
            quote!(::core::primitive::i64::MIN)
        } else {
            quote!(#min)
        };
        checks.push(quote! {
            violations.check(::ddlkit::validate::range(Self::STRUCTURE, #name, #value, #min, #max));
        });
    }
    if let Some((min, max)) = rules.length {
        let max = if max == usize::MAX {
            quote!(::core::primitive::usize::MAX)
        } else {
            quote!(#max)
        };
        checks.push(quote! {
            violations.check(::ddlkit::validate::length(Self::STRUCTURE, #name, #value, #min, #max));
        });
    }
    if rules.nested {
        checks.push(nested(ty, value.clone(), 0));
    }

    quote!(#(#checks)*)
}

/// Recurse into a nested structure following the written type.
fn nested(ty: &Type, value: TokenStream2, depth: usize) -> TokenStream2 {
    let item = format_ident!("__ddlkit_item{}", depth);
    match wrapper(ty) {
        Wrapper::Option(inner) => {
            let body = nested(inner, quote!(#item), depth + 1);
            quote! {
                if let ::core::option::Option::Some(#item) = #value {
                    #body
                }
            }
        }
        Wrapper::Vec(inner) => {
            let body = nested(inner, quote!(#item), depth + 1);
            quote! {
                for #item in #value {
                    #body
                }
            }
        }
        Wrapper::Box(inner) => nested(inner, quote!(&**#value), depth),
        Wrapper::Plain => quote! {
            ::ddlkit::Validate::validate_into(#value, violations);
        }
    }
}
