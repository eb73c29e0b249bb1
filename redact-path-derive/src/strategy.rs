//! Parsing of `#[redact(...)]` field attributes.
//!
//! This module maps attribute syntax to how a field takes part in path
//! lookup and produces structured errors for invalid forms.

use proc_macro2::Span;
use syn::{Attribute, LitStr, Meta, Result, spanned::Spanned};

/// How a field takes part in path lookup.
///
/// | Attribute                   | Strategy        | Behavior                                 |
/// |-----------------------------|-----------------|------------------------------------------|
/// | None                        | `Walk(None)`    | Addressable under its (renamed) name     |
/// | `#[redact(rename = "n")]`   | `Walk(Some(n))` | Addressable as `n`                       |
/// | `#[redact(skip)]`           | `Skip`          | Not addressable, zeroed via `Default`    |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    Walk(Option<LitStr>),
    Skip,
}

fn conflict(span: Span) -> syn::Error {
    syn::Error::new(span, "`skip` and `rename` cannot be combined on the same field")
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut skip = false;
    let mut rename: Option<LitStr> = None;

    for attr in attrs {
        if !attr.path().is_ident("redact") {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        if skip {
                            return Err(meta.error("duplicate `skip` option"));
                        }
                        skip = true;
                        Ok(())
                    } else if meta.path.is_ident("rename") {
                        let name: LitStr = meta.value()?.parse()?;
                        if name.value().is_empty() {
                            return Err(syn::Error::new(name.span(), "`rename` cannot be empty"));
                        }
                        if rename.replace(name).is_some() {
                            return Err(meta.error("duplicate `rename` option"));
                        }
                        Ok(())
                    } else {
                        Err(meta.error("unknown field option; expected `skip` or `rename`"))
                    }
                })?;
            }
            Meta::Path(_) | Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected #[redact(skip)] or #[redact(rename = \"...\")]",
                ));
            }
        }

        if skip && rename.is_some() {
            return Err(conflict(attr.span()));
        }
    }

    Ok(if skip {
        Strategy::Skip
    } else {
        Strategy::Walk(rename)
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_returns_walk() {
        let attrs = parse_attrs(quote! {});
        let strategy = parse_field_strategy(&attrs).unwrap();
        assert!(matches!(strategy, Strategy::Walk(None)));
    }

    #[test]
    fn rename_is_parsed() {
        let attrs = parse_attrs(quote! { #[redact(rename = "Password")] });
        match parse_field_strategy(&attrs).unwrap() {
            Strategy::Walk(Some(name)) => assert_eq!(name.value(), "Password"),
            other => panic!("expected rename, got {other:?}"),
        }
    }

    #[test]
    fn skip_is_parsed() {
        let attrs = parse_attrs(quote! { #[redact(skip)] });
        let strategy = parse_field_strategy(&attrs).unwrap();
        assert!(matches!(strategy, Strategy::Skip));
    }

    #[test]
    fn skip_and_rename_error() {
        let attrs = parse_attrs(quote! { #[redact(skip, rename = "x")] });
        let err = parse_field_strategy(&attrs).unwrap_err();
        assert!(err.to_string().contains("cannot be combined"));
    }

    #[test]
    fn skip_and_rename_in_separate_attributes_error() {
        let attrs = parse_attrs(quote! {
            #[redact(rename = "x")]
            #[redact(skip)]
        });
        assert!(parse_field_strategy(&attrs).is_err());
    }

    #[test]
    fn duplicate_rename_errors() {
        let attrs = parse_attrs(quote! {
            #[redact(rename = "a")]
            #[redact(rename = "b")]
        });
        let err = parse_field_strategy(&attrs).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn empty_rename_errors() {
        let attrs = parse_attrs(quote! { #[redact(rename = "")] });
        let err = parse_field_strategy(&attrs).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn bare_redact_errors() {
        let attrs = parse_attrs(quote! { #[redact] });
        assert!(parse_field_strategy(&attrs).is_err());
    }

    #[test]
    fn unknown_option_errors() {
        let attrs = parse_attrs(quote! { #[redact(sensitive)] });
        let err = parse_field_strategy(&attrs).unwrap_err();
        assert!(err.to_string().contains("unknown field option"));
    }

    #[test]
    fn other_attributes_ignored() {
        let attrs = parse_attrs(quote! {
            #[derive(Clone)]
            #[serde(skip)]
        });
        let strategy = parse_field_strategy(&attrs).unwrap();
        assert!(matches!(strategy, Strategy::Walk(None)));
    }
}
