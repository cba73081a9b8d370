// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `ToSql` derive macro implementation.
//!
//! For a struct, generates `ToSql::fields` listing every non-skipped field in
//! declaration order with its directive. For an enum, `fields` matches on
//! the active variant, so only that branch renders.
//!
//! Also generates `Presence` (always present) and `SqlValue`
//! (`Value::Nested`), so the type can be used as a nested clause or list
//! item of another structure.

mod attrs;
pub mod directive;


use darling::FromDeriveInput;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DataEnum, DataStruct, DeriveInput, Fields, parse_macro_input};

use self::{attrs::ContainerAttrs, directive::DirectiveDef};
use crate::utils::naming::label;

/// Main entry point for the ToSql derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

/// Generate the `ToSql`, `Presence` and `SqlValue` impls.
pub fn generate(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let attrs = ContainerAttrs::from_derive_input(input)?;
    let ident = &attrs.ident;
    let name = attrs.label();
    let (impl_generics, ty_generics, where_clause) = attrs.generics.split_for_impl();

    let body = match &input.data {
        Data::Struct(data) => struct_fields(data)?,
        Data::Enum(data) => {
            if attrs.union {
                return Err(darling::Error::custom(
                    "`union` applies to structs; enums already render only the active variant"
                )
                .with_span(ident));
            }
            enum_fields(data)?
        }
        Data::Union(_) => {
            return Err(darling::Error::unsupported_shape("union").with_span(ident));
        }
    };

    let shape = if attrs.union {
        quote!(::ddlkit::Shape::Union)
    } else {
        quote!(::ddlkit::Shape::Struct)
    };

    Ok(quote! {
        impl #impl_generics ::ddlkit::ToSql for #ident #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                #name
            }

            fn shape(&self) -> ::ddlkit::Shape {
                #shape
            }

            fn fields(&self) -> ::std::vec::Vec<::ddlkit::Field<'_>> {
                #body
            }
        }

        impl #impl_generics ::ddlkit::Presence for #ident #ty_generics #where_clause {
            fn is_present(&self) -> bool {
                true
            }
        }

        impl #impl_generics ::ddlkit::SqlValue for #ident #ty_generics #where_clause {
            fn sql_value(&self) -> ::core::option::Option<::ddlkit::Value<'_>> {
                ::core::option::Option::Some(::ddlkit::Value::Nested(self))
            }
        }
    })
}

fn struct_fields(data: &DataStruct) -> darling::Result<TokenStream2> {
    let Fields::Named(fields) = &data.fields else {
        return Err(darling::Error::unsupported_shape("tuple or unit struct"));
    };

    let mut errors = darling::Error::accumulator();
    let mut entries = Vec::with_capacity(fields.named.len());

    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let parsed: Option<Option<DirectiveDef>> =
            errors.handle(directive::parse(&field.attrs, ident, Some(&field.ty)).map_err(Into::into));
        if let Some(Some(def)) = parsed {
            entries.push(def.field_tokens(&label(ident), &quote!(&self.#ident)));
        }
    }

    errors.finish()?;
    Ok(quote!(::std::vec![#(#entries),*]))
}

fn enum_fields(data: &DataEnum) -> darling::Result<TokenStream2> {
    let mut errors = darling::Error::accumulator();
    let mut arms = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        let ident = &variant.ident;
        let name = ident.to_string();

        match &variant.fields {
            Fields::Unnamed(fields) => {
                let ty = fields.unnamed.first().map(|field| &field.ty);
                let parsed =
                    errors.handle(directive::parse(&variant.attrs, ident, ty).map_err(Into::into));
                match parsed {
                    Some(Some(def)) => {
                        let entry = def.field_tokens(&name, &quote!(inner));
                        let binding = if matches!(def, DirectiveDef::Static(_)) {
                            quote!(_)
                        } else {
                            quote!(inner)
                        };
                        arms.push(quote! {
                            Self::#ident(#binding) => ::std::vec![#entry],
                        });
                    }
                    Some(None) => arms.push(quote! {
                        Self::#ident(_) => ::std::vec::Vec::new(),
                    }),
                    None => {}
                }
            }
            Fields::Unit => {
                let parsed =
                    errors.handle(directive::parse(&variant.attrs, ident, None).map_err(Into::into));
                match parsed {
                    Some(Some(DirectiveDef::Static(text))) => arms.push(quote! {
                        Self::#ident => ::std::vec![::ddlkit::Field::fixed(#name, #text)],
                    }),
                    Some(Some(_)) => errors.push(
                        darling::Error::custom("unit variants take #[ddl(static = \"...\")]")
                            .with_span(ident)
                    ),
                    Some(None) => arms.push(quote! {
                        Self::#ident => ::std::vec::Vec::new(),
                    }),
                    None => {}
                }
            }
            Fields::Named(_) => errors.push(
                darling::Error::unsupported_shape("struct variant").with_span(ident)
            )
        }
    }

    errors.finish()?;
    if arms.is_empty() {
        return Ok(quote!(match *self {}));
    }
    Ok(quote! {
        match self {
            #(#arms)*
        }
    })
}
