use proc_macro2::Span;
use syn::{Attribute, Ident};

/// The `#[ns(...)]` attributes of the type.
///
/// - `#[ns(display)]`: render through `Display`.
/// - `#[ns(resolve_self)]`: delegate to the type's `ResolveSelf` implementation.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub display: Option<Span>,
    pub resolve_self: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        super::parse_ns_attrs(attrs, |input| {
            super::parse_list(input, |input| {
                let ident: Ident = input.parse()?;
                match ident.to_string().as_str() {
                    "display" => this.display = Some(ident.span()),
                    "resolve_self" => this.resolve_self = Some(ident.span()),
                    _ => {
                        return Err(syn::Error::new(
                            ident.span(),
                            "unknown type attribute, expected `display` or `resolve_self`",
                        ));
                    }
                }
                Ok(())
            })
        })?;
        Ok(this)
    }
}
