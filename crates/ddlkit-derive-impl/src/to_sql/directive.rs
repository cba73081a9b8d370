// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level `#[ddl(...)]` parsing.
//!
//! Every field of a `ToSql` structure carries exactly one directive, or
//! `skip`. Options not meaningful for a directive, and contradictory option
//! pairs, are compile errors.
//!
//! # Grammar
//!
//! ```rust,ignore
//! #[ddl(static = "CREATE")]
//! #[ddl(keyword)]                                  // bool flags: name from field
//! #[ddl(keyword = "SET")]
//! #[ddl(keyword(name = "WITH", parentheses, single_quotes))]
//! #[ddl(parameter)]                                // NAME = value
//! #[ddl(parameter(name = "COMMENT", single_quotes, no_equals, arrow_equals, parentheses))]
//! #[ddl(identifier)]
//! #[ddl(identifier = "RENAME TO")]
//! #[ddl(identifier(name = "WAREHOUSE", equals))]
//! #[ddl(list)]                                     // NAME = (a, b)
//! #[ddl(list(name = "X", unnamed, no_parentheses, no_comma, no_final_separator, single_quotes))]
//! #[ddl(skip)]
//! ```
//!
//! Quote options: `single_quotes`, `double_quotes`, `double_dollar_quotes`,
//! `no_quotes`.

use std::fmt;

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{Attribute, Ident, LitStr, Token, Type, meta::ParseNestedMeta};

use crate::utils::{
    naming::{keyword_name, parameter_name},
    types::is_flag
};

/// Quoting applied to text values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Bare.
    #[default]
    None,
    /// `'x'`.
    Single,
    /// `"x"`.
    Double,
    /// `$$x$$`.
    DoubleDollar
}

impl ToTokens for QuoteStyle {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            Self::None => quote!(::ddlkit::Quotes::None),
            Self::Single => quote!(::ddlkit::Quotes::Single),
            Self::Double => quote!(::ddlkit::Quotes::Double),
            Self::DoubleDollar => quote!(::ddlkit::Quotes::DoubleDollar)
        });
    }
}

/// Operator between a name and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EqualsStyle {
    /// `NAME = value`.
    #[default]
    Equals,
    /// `NAME => value`.
    Arrow,
    /// `NAME value`.
    None
}

impl ToTokens for EqualsStyle {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            Self::Equals => quote!(::ddlkit::Equals::Equals),
            Self::Arrow => quote!(::ddlkit::Equals::Arrow),
            Self::None => quote!(::ddlkit::Equals::None)
        });
    }
}

/// A parsed field directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveDef {
    /// Fixed text, value ignored.
    Static(String),
    /// Bare value or flag.
    Keyword {
        /// Keyword text.
        name:        Option<String>,
        /// Quoting of text values.
        quotes:      QuoteStyle,
        /// Wrap the value in parentheses.
        parentheses: bool
    },
    /// `NAME <op> value`.
    Parameter {
        /// Parameter name.
        name:        String,
        /// Operator.
        equals:      EqualsStyle,
        /// Quoting of text values.
        quotes:      QuoteStyle,
        /// Wrap the value in parentheses.
        parentheses: bool
    },
    /// Qualified object name.
    Identifier {
        /// Prefix keyword.
        name:   Option<String>,
        /// Emit `=` after the prefix.
        equals: bool
    },
    /// Joined items.
    List {
        /// List name.
        name:               Option<String>,
        /// Operator after the name.
        equals:             EqualsStyle,
        /// Comma separator; space otherwise.
        comma:              bool,
        /// Wrap in parentheses.
        parentheses:        bool,
        /// Quoting of text items.
        quotes:             QuoteStyle,
        /// Join the last two items with a space.
        no_final_separator: bool
    }
}

impl DirectiveDef {
    /// Tokens of a `::ddlkit::Field` built from this directive.
    ///
    /// `value` is an expression borrowing the field value.
    pub fn field_tokens(&self, label: &str, value: &TokenStream) -> TokenStream {
        match self {
            Self::Static(text) => quote!(::ddlkit::Field::fixed(#label, #text)),
            _ => quote!(::ddlkit::Field::new(#label, #self, #value))
        }
    }
}

fn optional_str(value: Option<&String>) -> TokenStream {
    match value {
        Some(text) => quote!(::core::option::Option::Some(#text)),
        None => quote!(::core::option::Option::None)
    }
}

impl ToTokens for DirectiveDef {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            Self::Static(text) => quote!(::ddlkit::Directive::Static(#text)),
            Self::Keyword {
                name,
                quotes,
                parentheses
            } => {
                let name = optional_str(name.as_ref());
                quote! {
                    ::ddlkit::Directive::Keyword(::ddlkit::KeywordOptions {
                        name: #name,
                        quotes: #quotes,
                        parentheses: #parentheses,
                    })
                }
            }
            Self::Parameter {
                name,
                equals,
                quotes,
                parentheses
            } => quote! {
                ::ddlkit::Directive::Parameter(::ddlkit::ParameterOptions {
                    name: #name,
                    equals: #equals,
                    quotes: #quotes,
                    parentheses: #parentheses,
                })
            },
            Self::Identifier {
                name,
                equals
            } => {
                let name = optional_str(name.as_ref());
                let equals = if *equals {
                    EqualsStyle::Equals
                } else {
                    EqualsStyle::None
                };
                quote! {
                    ::ddlkit::Directive::Identifier(::ddlkit::IdentifierOptions {
                        name: #name,
                        equals: #equals,
                    })
                }
            }
            Self::List {
                name,
                equals,
                comma,
                parentheses,
                quotes,
                no_final_separator
            } => {
                let name = optional_str(name.as_ref());
                let separator = if *comma {
                    quote!(::ddlkit::Separator::Comma)
                } else {
                    quote!(::ddlkit::Separator::Space)
                };
                quote! {
                    ::ddlkit::Directive::List(::ddlkit::ListOptions {
                        name: #name,
                        equals: #equals,
                        separator: #separator,
                        parentheses: #parentheses,
                        quotes: #quotes,
                        no_final_separator: #no_final_separator,
                    })
                }
            }
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Static,
    Keyword,
    Parameter,
    Identifier,
    List
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Static => "static",
            Self::Keyword => "keyword",
            Self::Parameter => "parameter",
            Self::Identifier => "identifier",
            Self::List => "list"
        })
    }
}

#[derive(Debug, Default)]
struct Options {
    name:               Option<String>,
    quotes:             Option<QuoteStyle>,
    equals:             Option<EqualsStyle>,
    parentheses:        Option<bool>,
    no_comma:           bool,
    no_final_separator: bool,
    unnamed:            bool
}

fn set_once<T: Copy + PartialEq>(
    slot: &mut Option<T>,
    value: T,
    meta: &ParseNestedMeta<'_>,
    what: &str
) -> syn::Result<()> {
    match slot {
        Some(existing) if *existing != value => {
            Err(meta.error(format!("conflicting {what} options")))
        }
        _ => {
            *slot = Some(value);
            Ok(())
        }
    }
}

fn parse_option(kind: Kind, meta: &ParseNestedMeta<'_>, options: &mut Options) -> syn::Result<()> {
    let key = meta
        .path
        .get_ident()
        .map(ToString::to_string)
        .unwrap_or_default();

    match (kind, key.as_str()) {
        (_, "name") => {
            let value: LitStr = meta.value()?.parse()?;
            options.name = Some(value.value());
        }
        (Kind::Keyword | Kind::Parameter | Kind::List, "single_quotes") => {
            set_once(&mut options.quotes, QuoteStyle::Single, meta, "quote")?;
        }
        (Kind::Keyword | Kind::Parameter | Kind::List, "double_quotes") => {
            set_once(&mut options.quotes, QuoteStyle::Double, meta, "quote")?;
        }
        (Kind::Keyword | Kind::Parameter | Kind::List, "double_dollar_quotes") => {
            set_once(&mut options.quotes, QuoteStyle::DoubleDollar, meta, "quote")?;
        }
        (Kind::Keyword | Kind::Parameter | Kind::List, "no_quotes") => {
            set_once(&mut options.quotes, QuoteStyle::None, meta, "quote")?;
        }
        (Kind::Parameter | Kind::List, "no_equals") => {
            set_once(&mut options.equals, EqualsStyle::None, meta, "equals")?;
        }
        (Kind::Parameter | Kind::List, "arrow_equals") => {
            set_once(&mut options.equals, EqualsStyle::Arrow, meta, "equals")?;
        }
        (Kind::Identifier, "equals") => {
            options.equals = Some(EqualsStyle::Equals);
        }
        (Kind::Keyword | Kind::Parameter | Kind::List, "parentheses") => {
            set_once(&mut options.parentheses, true, meta, "parentheses")?;
        }
        (Kind::List, "no_parentheses") => {
            set_once(&mut options.parentheses, false, meta, "parentheses")?;
        }
        (Kind::List, "no_comma") => options.no_comma = true,
        (Kind::List, "no_final_separator") => options.no_final_separator = true,
        (Kind::List, "unnamed") => options.unnamed = true,
        _ => return Err(meta.error(format!("unsupported option `{key}` for {kind}")))
    }
    Ok(())
}

fn kind_of(meta: &ParseNestedMeta<'_>) -> Option<Kind> {
    let ident = meta.path.get_ident()?;
    Some(match ident.to_string().as_str() {
        "static" => Kind::Static,
        "keyword" => Kind::Keyword,
        "parameter" => Kind::Parameter,
        "identifier" => Kind::Identifier,
        "list" => Kind::List,
        _ => return None
    })
}

/// Parse the directive of one field or enum variant.
///
/// `ident` names the field (or variant) and provides default names; `ty` is
/// its type, `None` for unit variants. Returns `None` for `#[ddl(skip)]`.
pub fn parse(attrs: &[Attribute], ident: &Ident, ty: Option<&Type>) -> syn::Result<Option<DirectiveDef>> {
    let mut kind: Option<(Kind, Span)> = None;
    let mut skip = false;
    let mut text: Option<String> = None;
    let mut options = Options::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("ddl")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                return Ok(());
            }
            let Some(found) = kind_of(&meta) else {
                return Err(meta.error(
                    "expected one of: static, keyword, parameter, identifier, list, skip"
                ));
            };
            if let Some((existing, _)) = kind {
                return Err(meta.error(format!(
                    "field already has a {existing} directive; use one directive per field"
                )));
            }
            kind = Some((found, meta.path.get_ident().map_or_else(Span::call_site, Ident::span)));

            if found == Kind::Static {
                if !meta.input.peek(Token![=]) {
                    return Err(meta.error("static takes text: static = \"...\""));
                }
                let value: LitStr = meta.value()?.parse()?;
                text = Some(value.value());
            } else if meta.input.peek(Token![=]) {
                let value: LitStr = meta.value()?.parse()?;
                options.name = Some(value.value());
            } else if meta.input.peek(syn::token::Paren) {
                meta.parse_nested_meta(|option| parse_option(found, &option, &mut options))?;
            }
            Ok(())
        })?;
    }

    match (skip, kind) {
        (true, Some((_, span))) => Err(syn::Error::new(span, "a skipped field cannot carry a directive")),
        (true, None) => Ok(None),
        (false, None) => Err(syn::Error::new_spanned(
            ident,
            "missing #[ddl(...)] directive; use #[ddl(skip)] to leave the field out"
        )),
        (false, Some((kind, span))) => build(kind, span, text, options, ident, ty).map(Some)
    }
}

fn build(
    kind: Kind,
    span: Span,
    text: Option<String>,
    options: Options,
    ident: &Ident,
    ty: Option<&Type>
) -> syn::Result<DirectiveDef> {
    Ok(match kind {
        Kind::Static => DirectiveDef::Static(text.unwrap_or_default()),
        Kind::Keyword => DirectiveDef::Keyword {
            name:        options
                .name
                .or_else(|| ty.filter(|ty| is_flag(ty)).map(|_| keyword_name(ident))),
            quotes:      options.quotes.unwrap_or_default(),
            parentheses: options.parentheses.unwrap_or(false)
        },
        Kind::Parameter => DirectiveDef::Parameter {
            name:        options.name.unwrap_or_else(|| parameter_name(ident)),
            equals:      options.equals.unwrap_or_default(),
            quotes:      options.quotes.unwrap_or_default(),
            parentheses: options.parentheses.unwrap_or(false)
        },
        Kind::Identifier => DirectiveDef::Identifier {
            name:   options.name,
            equals: options.equals.is_some()
        },
        Kind::List => {
            if options.unnamed && options.name.is_some() {
                return Err(syn::Error::new(span, "`unnamed` conflicts with `name`"));
            }
            DirectiveDef::List {
                name:               if options.unnamed {
                    None
                } else {
                    Some(options.name.unwrap_or_else(|| parameter_name(ident)))
                },
                equals:             options.equals.unwrap_or_default(),
                comma:              !options.no_comma,
                parentheses:        options.parentheses.unwrap_or(true),
                quotes:             options.quotes.unwrap_or_default(),
                no_final_separator: options.no_final_separator
            }
        }
    })
}
