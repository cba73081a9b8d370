// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use syn::{Attribute, DeriveInput, parse_quote};

use super::{
    attrs::{FieldRules, parse_field_rules},
    generate
};

fn compact(tokens: proc_macro2::TokenStream) -> String {
    tokens.to_string().split_whitespace().collect()
}

fn rules(attrs: Vec<Attribute>) -> syn::Result<FieldRules> {
    parse_field_rules(&attrs)
}

#[test]
fn parse_simple_rules() {
    let parsed = rules(vec![
        parse_quote!(#[validate(nested)]),
        parse_quote!(#[validate(identifier, required)]),
    ])
    .unwrap();
    assert!(parsed.nested);
    assert!(parsed.identifier);
    assert!(parsed.required);
    assert!(parsed.range.is_none());
}

#[test]
fn parse_bounds() {
    let parsed = rules(vec![parse_quote!(#[validate(range(min = -5, max = 90))])]).unwrap();
    assert_eq!(parsed.range, Some((-5, 90)));

    let parsed = rules(vec![parse_quote!(#[validate(length(max = 10))])]).unwrap();
    assert_eq!(parsed.length, Some((0, 10)));

    let parsed = rules(vec![parse_quote!(#[validate(range(min = 1))])]).unwrap();
    assert_eq!(parsed.range, Some((1, i64::MAX)));
}

#[test]
fn reject_bad_rules() {
    assert!(rules(vec![parse_quote!(#[validate(email)])]).is_err());
    assert!(rules(vec![parse_quote!(#[validate(range(low = 1))])]).is_err());
    assert!(rules(vec![parse_quote!(#[validate(length(min = 5, max = 1))])]).is_err());
}

#[test]
fn unrelated_attributes_are_ignored() {
    let parsed = rules(vec![parse_quote!(#[ddl(parameter)])]).unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn combinators_reference_fields() {
    let input: DeriveInput = parse_quote! {
        #[validate(exactly_one_of(to_role, to_user))]
        #[validate(at_most_one_of(comment, unset_comment))]
        struct Grant {
            to_role: Option<String>,
            to_user: Option<String>,
            comment: Option<String>,
            unset_comment: Option<bool>
        }
    };
    let code = compact(generate(&input).unwrap());
    assert!(code.contains("constSTRUCTURE:&'staticstr=\"Grant\""));
    assert!(code.contains(
        "::ddlkit::validate::exactly_one_of(Self::STRUCTURE,&[(\"to_role\",::ddlkit::Presence::is_present(&self.to_role)),(\"to_user\",::ddlkit::Presence::is_present(&self.to_user))])"
    ));
    assert!(code.contains("::ddlkit::validate::at_most_one_of"));
}

#[test]
fn combinators_run_grouped_by_kind() {
    let input: DeriveInput = parse_quote! {
        #[validate(all_or_none(user, password))]
        #[validate(at_most_one_of(comment, unset_comment))]
        #[validate(exactly_one_of(to_role, to_user))]
        #[validate(at_most_one_of(user, unset_user))]
        struct Grant {
            to_role: Option<String>,
            to_user: Option<String>,
            comment: Option<String>,
            unset_comment: Option<bool>,
            user: Option<String>,
            password: Option<String>,
            unset_user: Option<bool>
        }
    };
    let code = compact(generate(&input).unwrap());
    let at = |needle: &str| code.find(needle).unwrap();
    let exactly = at("::ddlkit::validate::exactly_one_of");
    let comment = at("at_most_one_of(Self::STRUCTURE,&[(\"comment\"");
    let user = at("at_most_one_of(Self::STRUCTURE,&[(\"user\"");
    let all = at("::ddlkit::validate::all_or_none");
    assert!(exactly < comment);
    assert!(comment < user);
    assert!(user < all);
}

#[test]
fn unknown_combinator_field_is_an_error() {
    let input: DeriveInput = parse_quote! {
        #[validate(exactly_one_of(to_role, to_group))]
        struct Grant {
            to_role: Option<String>
        }
    };
    let err = generate(&input).unwrap_err();
    assert!(err.to_string().contains("`to_group` is not a field"));
}

#[test]
fn nested_follows_written_type() {
    let input: DeriveInput = parse_quote! {
        struct CreateVolume {
            #[validate(nested)]
            set: Option<SetClause>,
            #[validate(nested)]
            locations: Vec<Location>,
            #[validate(nested)]
            inner: Box<Clause>
        }
    };
    let code = compact(generate(&input).unwrap());
    assert!(code.contains(
        "if let::core::option::Option::Some(__ddlkit_item0)=&self.set{::ddlkit::Validate::validate_into(__ddlkit_item0,violations);}"
            .replace(' ', "")
            .as_str()
    ));
    assert!(code.contains(
        "for__ddlkit_item0in&self.locations{::ddlkit::Validate::validate_into(__ddlkit_item0,violations);}"
    ));
    assert!(code.contains("::ddlkit::Validate::validate_into(&**&self.inner,violations);"));
}

#[test]
fn field_rules_generate_checks() {
    let input: DeriveInput = parse_quote! {
        #[validate(name = "Warehouse")]
        struct AlterWarehouse {
            #[validate(identifier)]
            name: AccountObjectIdentifier,
            #[validate(range(min = 0, max = 90))]
            retention: Option<u32>,
            #[validate(length(max = 256))]
            comment: Option<String>,
            #[validate(required)]
            size: Option<String>
        }
    };
    let code = compact(generate(&input).unwrap());
    assert!(code.contains("\"Warehouse\""));
    assert!(code.contains("::ddlkit::validate::identifier(Self::STRUCTURE,\"name\",&self.name)"));
    assert!(code.contains("::ddlkit::validate::range(Self::STRUCTURE,\"retention\",&self.retention,0i64,90i64)"));
    assert!(code.contains("::ddlkit::validate::length(Self::STRUCTURE,\"comment\",&self.comment,0usize,256usize)"));
    assert!(code.contains("::ddlkit::validate::required(Self::STRUCTURE,\"size\",&self.size)"));
}

#[test]
fn enum_variants_validate_their_payload() {
    let input: DeriveInput = parse_quote! {
        enum StorageLocation {
            #[validate(nested)]
            S3(S3Location),
            Gcs(GcsLocation)
        }
    };
    let code = compact(generate(&input).unwrap());
    assert!(code.contains("Self::S3(inner)=>{::ddlkit::Validate::validate_into(inner,violations);}"));
    assert!(code.contains("Self::Gcs(_)=>{}"));
}

#[test]
fn enum_rejects_combinators() {
    let input: DeriveInput = parse_quote! {
        #[validate(exactly_one_of(a, b))]
        enum E {
            A(String),
            B(String)
        }
    };
    assert!(generate(&input).is_err());
}
