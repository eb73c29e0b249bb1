//! Enum-specific `Redactable` derivation.
//!
//! Only the active variant's fields are addressable. An enum has no
//! fieldwise zero value, so it is always zeroed through `Default`.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{DataEnum, Result, spanned::Spanned};

use crate::{
    DeriveOutput,
    container::ContainerOptions,
    crate_path,
    transform::{DeriveContext, FieldPlan, plan_fields},
};

pub(crate) fn derive_enum(
    name: &Ident,
    data: DataEnum,
    options: &ContainerOptions,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    if data.variants.is_empty() {
        return Err(syn::Error::new(
            name.span(),
            format!("`Redactable` cannot be derived for `{name}`: enum has no variants"),
        ));
    }

    let redactable = crate_path("Redactable");
    let mut redactable_generics = Vec::new();
    // Skipped fields are never built field by field, so they need no bounds.
    let mut default_generics = Vec::new();
    let mut field_mut_arms = Vec::new();
    let mut field_names_arms = Vec::new();

    for variant in &data.variants {
        let variant_ident = &variant.ident;
        let mut ctx = DeriveContext {
            generics,
            options,
            redactable_generics: &mut redactable_generics,
            default_generics: &mut default_generics,
        };
        let plans = plan_fields(&mut ctx, &variant.fields)?;
        let addressable: Vec<_> = plans.iter().filter(|plan| plan.is_addressable()).collect();

        let members = addressable.iter().map(|plan| &plan.member);
        let bindings = addressable.iter().map(|plan| &plan.binding);
        let lookups = addressable.iter().filter_map(|plan| {
            let FieldPlan {
                binding, ty, name, ..
            } = plan;
            name.as_ref().map(|name| {
                quote_spanned! {ty.span()=>
                    #name => ::core::option::Option::Some(
                        <#ty as #redactable>::as_redactable_mut(#binding)
                    ),
                }
            })
        });
        let names = addressable.iter().filter_map(|plan| plan.name.as_ref());

        field_mut_arms.push(quote! {
            Self::#variant_ident { #(#members: #bindings,)* .. } => match name {
                #(#lookups)*
                _ => ::core::option::Option::None,
            },
        });
        field_names_arms.push(quote! {
            Self::#variant_ident { .. } => &[#(#names),*],
        });
    }
    default_generics.clear();

    // Spanned at the enum name so a missing `Default` impl is reported there.
    let zeroed_body = quote_spanned! {name.span()=>
        <Self as ::core::default::Default>::default()
    };

    Ok(DeriveOutput {
        zeroed_body,
        field_mut_body: match_self(&field_mut_arms),
        field_names_body: match_self(&field_names_arms),
        redactable_generics,
        default_generics,
        zeroed_by_default: true,
    })
}

fn match_self(arms: &[TokenStream]) -> TokenStream {
    quote! {
        match self {
            #(#arms)*
        }
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::{Data, DeriveInput};

    use super::*;
    use crate::container::parse_container_options;

    fn derive(tokens: TokenStream) -> Result<DeriveOutput> {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        let options = parse_container_options(&input.attrs)?;
        let Data::Enum(data) = input.data else {
            panic!("expected an enum");
        };
        derive_enum(&input.ident, data, &options, &input.generics)
    }

    #[test]
    fn empty_enum_is_rejected() {
        let err = derive(quote! { enum Never {} }).err().expect("should fail");
        assert!(err.to_string().contains("no variants"));
    }

    #[test]
    fn enums_are_zeroed_by_default() {
        let output = derive(quote! {
            enum Credential<T> {
                Password { value: String },
                Token(T, #[redact(skip)] u64),
                Anonymous,
            }
        })
        .unwrap();
        assert!(output.zeroed_by_default);
        assert_eq!(output.redactable_generics, ["T"]);
        assert!(output.default_generics.is_empty());
    }

    #[test]
    fn each_variant_reports_its_own_names() {
        let output = derive(quote! {
            enum Credential {
                Password { value: String },
                Token(String),
            }
        })
        .unwrap();
        let expected = quote! {
            match self {
                Self::Password { .. } => &["value"],
                Self::Token { .. } => &["0"],
            }
        };
        assert_eq!(output.field_names_body.to_string(), expected.to_string());
    }

    #[test]
    fn duplicate_segments_within_a_variant_error() {
        let result = derive(quote! {
            enum Credential {
                Password {
                    value: String,
                    #[redact(rename = "value")]
                    hint: String,
                },
            }
        });
        assert!(result.is_err());
    }
}
