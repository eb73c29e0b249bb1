//! Shared field planning for struct and enum derivation.
//!
//! Every field becomes a [`FieldPlan`]: the member used to access it, the
//! binding used in patterns, and the path segment that addresses it (or none
//! for skipped fields). Generic parameters are collected on the way so the
//! impl can be bounded.

use std::collections::HashSet;

use proc_macro2::Ident;
use quote::format_ident;
use syn::{Fields, LitStr, Member, Result, Type, ext::IdentExt, spanned::Spanned};

use crate::{
    container::ContainerOptions,
    generics::collect_generics_from_type,
    strategy::{Strategy, parse_field_strategy},
};

/// Accumulated generics while planning fields.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) options: &'a ContainerOptions,
    /// Generics used by addressable fields; bounded by `Redactable`.
    pub(crate) redactable_generics: &'a mut Vec<Ident>,
    /// Generics used by skipped fields; bounded by `Default`.
    pub(crate) default_generics: &'a mut Vec<Ident>,
}

/// How one field is accessed and addressed.
pub(crate) struct FieldPlan {
    pub(crate) member: Member,
    pub(crate) binding: Ident,
    pub(crate) ty: Type,
    /// Path segment addressing the field; `None` when skipped.
    pub(crate) name: Option<LitStr>,
}

impl FieldPlan {
    pub(crate) fn is_addressable(&self) -> bool {
        self.name.is_some()
    }
}

/// Plans the fields of a struct or enum variant.
///
/// ## Naming Rules
///
/// | Field                         | Segment                                   |
/// |-------------------------------|-------------------------------------------|
/// | named, no attribute           | field name, converted by `rename_all`     |
/// | `#[redact(rename = "n")]`     | `n`                                       |
/// | unnamed                       | index (`"0"`, `"1"`, ...)                 |
/// | `#[redact(skip)]`             | none                                      |
pub(crate) fn plan_fields(ctx: &mut DeriveContext<'_>, fields: &Fields) -> Result<Vec<FieldPlan>> {
    let mut plans = Vec::with_capacity(fields.len());
    let mut seen = HashSet::new();

    for (index, field) in fields.iter().enumerate() {
        let span = field.span();
        let strategy = parse_field_strategy(&field.attrs)?;
        let (member, binding, default_name) = match &field.ident {
            Some(ident) => {
                let unraw = ident.unraw().to_string();
                let name = ctx
                    .options
                    .rename_all
                    .map_or_else(|| unraw.clone(), |rule| rule.apply(&unraw));
                (
                    Member::Named(ident.clone()),
                    format_ident!("__field_{}", unraw),
                    name,
                )
            }
            None => (
                Member::Unnamed(index.into()),
                format_ident!("__field_{}", index),
                index.to_string(),
            ),
        };

        let name = match strategy {
            Strategy::Skip => {
                collect_generics_from_type(&field.ty, ctx.generics, ctx.default_generics);
                None
            }
            Strategy::Walk(rename) => {
                collect_generics_from_type(&field.ty, ctx.generics, ctx.redactable_generics);
                let name = rename.unwrap_or_else(|| LitStr::new(&default_name, span));
                if !seen.insert(name.value()) {
                    return Err(syn::Error::new(
                        name.span(),
                        format!("duplicate path segment `{}`", name.value()),
                    ));
                }
                Some(name)
            }
        };

        plans.push(FieldPlan {
            member,
            binding,
            ty: field.ty.clone(),
            name,
        });
    }

    Ok(plans)
}
