//! Provide tools for parsing `#[ns(...)]` attributes.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;

use syn::Attribute;
use syn::parse::ParseStream;

/// Runs `parse` on the content of every `#[ns(...)]` attribute in `attrs`.
fn parse_ns_attrs(
    attrs: &[Attribute],
    mut parse: impl FnMut(ParseStream) -> syn::Result<()>,
) -> syn::Result<()> {
    for attr in attrs {
        if attr.path().is_ident(crate::NS_ATTRIBUTE_NAME) {
            attr.parse_args_with(&mut parse)?;
        }
    }
    Ok(())
}

/// Parses a comma separated list, calling `item` once per entry.
fn parse_list(
    input: ParseStream,
    mut item: impl FnMut(ParseStream) -> syn::Result<()>,
) -> syn::Result<()> {
    while !input.is_empty() {
        item(input)?;
        if input.is_empty() {
            break;
        }
        input.parse::<syn::Token![,]>()?;
    }
    Ok(())
}
