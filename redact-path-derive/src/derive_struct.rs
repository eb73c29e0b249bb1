//! Struct-specific `Redactable` derivation.
//!
//! Named, tuple and unit structs all go through the same braced syntax
//! (`Self { 0: .. }` is valid for tuple structs), so one generator covers
//! the three forms.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{DataStruct, Result, spanned::Spanned};

use crate::{
    DeriveOutput,
    container::ContainerOptions,
    crate_path,
    transform::{DeriveContext, FieldPlan, plan_fields},
};

pub(crate) fn derive_struct(
    data: DataStruct,
    options: &ContainerOptions,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let mut redactable_generics = Vec::new();
    let mut default_generics = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        options,
        redactable_generics: &mut redactable_generics,
        default_generics: &mut default_generics,
    };
    let plans = plan_fields(&mut ctx, &data.fields)?;

    let zeroed_body = if options.use_default {
        // Skipped fields are built by `Default` too; their bounds collapse
        // into `Self: Default`.
        default_generics.clear();
        quote! { ::core::default::Default::default() }
    } else {
        zeroed_fields(&plans)
    };

    let redactable = crate_path("Redactable");
    let arms = plans.iter().filter_map(|plan| {
        let FieldPlan {
            member, name, ty, ..
        } = plan;
        let access = quote! { &mut self.#member };
        name.as_ref().map(|name| {
            quote_spanned! {ty.span()=>
                #name => ::core::option::Option::Some(
                    <#ty as #redactable>::as_redactable_mut(#access)
                ),
            }
        })
    });
    let field_mut_body = quote! {
        match name {
            #(#arms)*
            _ => ::core::option::Option::None,
        }
    };

    let names = plans.iter().filter_map(|plan| plan.name.as_ref());
    let field_names_body = quote! { &[#(#names),*] };

    Ok(DeriveOutput {
        zeroed_body,
        field_mut_body,
        field_names_body,
        redactable_generics,
        default_generics,
        zeroed_by_default: options.use_default,
    })
}

fn zeroed_fields(plans: &[FieldPlan]) -> TokenStream {
    let redactable = crate_path("Redactable");
    let inits = plans.iter().map(|plan| {
        let FieldPlan { member, ty, .. } = plan;
        if plan.is_addressable() {
            quote_spanned! {ty.span()=> #member: <#ty as #redactable>::zeroed() }
        } else {
            quote! { #member: ::core::default::Default::default() }
        }
    });
    quote! { Self { #(#inits),* } }
}
