//! Derive macro for `redact-path`.
//!
//! This crate generates the field lookup behind `#[derive(Redactable)]`. It:
//! - reads `#[redact(...)]` attributes on containers and fields
//! - emits `Redactable` and `Record` implementations that expose each field
//!   under its path segment
//!
//! It does **not** walk paths. The walker lives in the main `redact-path`
//! crate and calls the generated code at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input};

mod container;
mod derive_enum;
mod derive_struct;
mod generics;
mod rename;
mod strategy;
mod transform;

use container::parse_container_options;
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::{add_default_bounds, add_redactable_bounds, add_self_default_bound};

/// Derives `redact_path::Redactable` and `redact_path::Record` for structs and
/// enums.
///
/// Every field becomes addressable by a path segment. Walking a path into
/// the type looks the segment up among these names; a path that ends at the
/// type resets the whole value to its zero value.
///
/// # Container Attributes
///
/// - `#[redact(rename_all = "...")]`: converts field names to another case
///   (`camelCase`, `PascalCase`, `SCREAMING_SNAKE_CASE`, ...).
/// - `#[redact(default)]`: the zero value is `Default::default()` instead of
///   every field zeroed. Enums always use `Default`.
///
/// # Field Attributes
///
/// - **No annotation**: the field is addressable under its name. Its type must
///   implement `Redactable`.
/// - `#[redact(rename = "Name")]`: the field is addressable as `Name`.
/// - `#[redact(skip)]`: the field is not addressable and is zeroed with
///   `Default::default()`. Use this for foreign types that don't implement
///   `Redactable`.
///
/// Tuple fields are addressed by index (`"0"`, `"1"`, ...). For an enum, the
/// active variant's fields are the addressable ones.
///
/// Unions and enums without variants are rejected at compile time, as are two
/// fields sharing a segment.
///
/// # Example
///
/// ```ignore
/// use redact_path::{Redactable, redact};
///
/// #[derive(Redactable)]
/// #[redact(rename_all = "PascalCase")]
/// struct Login {
///     user: String,
///     password: String,
///     #[redact(skip)]
///     attempts: u32,
/// }
///
/// let mut login = Login { user: "john".into(), password: "letmein".into(), attempts: 3 };
/// redact(&["Password"], &mut login)?;
/// assert_eq!(login.password, "");
/// ```
#[proc_macro_derive(Redactable, attributes(redact))]
pub fn derive_redactable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the redact-path crate root.
///
/// Handles crate renaming (e.g., `my_redact = { package = "redact-path" }`).
/// Inside the crate itself the root is still `::redact_path`, which resolves
/// through `extern crate self as redact_path`.
fn crate_root() -> TokenStream {
    match crate_name("redact-path") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::redact_path },
    }
}

/// Returns the token stream for an item in the redact-path crate.
fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

/// Generated bodies plus the generics they need bounded.
struct DeriveOutput {
    zeroed_body: TokenStream,
    field_mut_body: TokenStream,
    field_names_body: TokenStream,
    redactable_generics: Vec<Ident>,
    default_generics: Vec<Ident>,
    zeroed_by_default: bool,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let options = parse_container_options(&attrs)?;

    let output = match data {
        Data::Struct(data) => derive_struct(data, &options, &generics)?,
        Data::Enum(data) => derive_enum(&ident, data, &options, &generics)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span,
                "`Redactable` cannot be derived for unions",
            ));
        }
    };

    let DeriveOutput {
        zeroed_body,
        field_mut_body,
        field_names_body,
        redactable_generics,
        default_generics,
        zeroed_by_default,
    } = output;

    let crate_root = crate_root();

    let record_generics = add_redactable_bounds(generics.clone(), &redactable_generics);
    let mut redactable_impl_generics = add_default_bounds(record_generics.clone(), &default_generics);
    if zeroed_by_default && !generics.params.is_empty() {
        redactable_impl_generics = add_self_default_bound(redactable_impl_generics);
    }

    let (_, ty_generics, _) = generics.split_for_impl();
    let (impl_generics, _, where_clause) = redactable_impl_generics.split_for_impl();
    let (record_impl_generics, _, record_where_clause) = record_generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #crate_root::Redactable for #ident #ty_generics #where_clause {
            fn reset(&mut self) {
                *self = <Self as #crate_root::Redactable>::zeroed();
            }

            fn shape(&mut self) -> #crate_root::Shape<'_> {
                #crate_root::Shape::Record(self)
            }

            fn zeroed() -> Self {
                #zeroed_body
            }
        }

        impl #record_impl_generics #crate_root::Record for #ident #ty_generics #record_where_clause {
            #[allow(clippy::match_single_binding)]
            fn field_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<&mut dyn #crate_root::Redactable> {
                #field_mut_body
            }

            fn field_names(&self) -> &'static [&'static str] {
                #field_names_body
            }
        }
    })
}
