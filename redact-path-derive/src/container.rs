//! Container-level attribute parsing for `#[derive(Redactable)]`.
//!
//! This module handles `#[redact(...)]` on the struct/enum itself, not on
//! fields.

use syn::{Attribute, LitStr, Meta, Result};

use crate::rename::RenameRule;

/// Options parsed from container-level `#[redact(...)]` attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Naming convention for fields without an explicit `rename`.
    pub(crate) rename_all: Option<RenameRule>,
    /// If true, the zero value is `Default::default()` instead of every
    /// field zeroed.
    pub(crate) use_default: bool,
}

/// Parses container-level `#[redact(...)]` attributes.
pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("redact") {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename_all") {
                        let rule: LitStr = meta.value()?.parse()?;
                        let parsed = RenameRule::parse(&rule.value()).ok_or_else(|| {
                            syn::Error::new(
                                rule.span(),
                                format!(
                                    "unknown rename rule `{}`; expected one of {}",
                                    rule.value(),
                                    RenameRule::ACCEPTED
                                ),
                            )
                        })?;
                        if options.rename_all.replace(parsed).is_some() {
                            return Err(meta.error("duplicate `rename_all` option"));
                        }
                        Ok(())
                    } else if meta.path.is_ident("default") {
                        options.use_default = true;
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown container option `{}`; expected `rename_all` or `default`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::Path(_) | Meta::NameValue(_) => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "expected #[redact(rename_all = \"...\")] or #[redact(default)]",
                ));
            }
        }
    }

    Ok(options)
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
    fn no_attribute_returns_defaults() {
        let attrs = parse_attrs(quote! {});
        let options = parse_container_options(&attrs).unwrap();
        assert!(options.rename_all.is_none());
        assert!(!options.use_default);
    }

    #[test]
    fn rename_all_and_default_are_parsed() {
        let attrs = parse_attrs(quote! { #[redact(rename_all = "PascalCase", default)] });
        let options = parse_container_options(&attrs).unwrap();
        assert_eq!(options.rename_all, Some(RenameRule::Pascal));
        assert!(options.use_default);
    }

    #[test]
    fn unknown_rule_errors() {
        let attrs = parse_attrs(quote! { #[redact(rename_all = "Train-Case")] });
        let err = parse_container_options(&attrs).unwrap_err();
        assert!(err.to_string().contains("unknown rename rule"));
    }

    #[test]
    fn unknown_option_errors() {
        let attrs = parse_attrs(quote! { #[redact(skip_debug)] });
        let err = parse_container_options(&attrs).unwrap_err();
        assert!(err.to_string().contains("unknown container option"));
    }

    #[test]
    fn bare_redact_on_container_errors() {
        let attrs = parse_attrs(quote! { #[redact] });
        assert!(parse_container_options(&attrs).is_err());
    }

    #[test]
    fn other_attributes_ignored() {
        let attrs = parse_attrs(quote! { #[serde(rename_all = "camelCase")] });
        let options = parse_container_options(&attrs).unwrap();
        assert!(options.rename_all.is_none());
    }
}
