use proc_macro2::Span;
use syn::parse::ParseStream;
use syn::{Attribute, Ident, LitStr, Token};

/// The `#[ns(...)]` attributes of one field.
///
/// - `#[ns("name")]`, `#[ns(rename = "name")]`: visible as `name`.
/// - `#[ns("-")]`, `#[ns(flatten)]`: transparent.
/// - `#[ns(embed)]`: embedded, transparent unless renamed.
/// - `#[ns(skip)]`: not part of the namespace.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub tag: Option<LitStr>,
    pub embed: Option<Span>,
    pub skip: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        super::parse_ns_attrs(attrs, |input| {
            super::parse_list(input, |input| this.parse_item(input))
        })?;
        Ok(this)
    }

    fn parse_item(&mut self, input: ParseStream) -> syn::Result<()> {
        if input.peek(LitStr) {
            return self.set_tag(input.parse()?);
        }

        let ident: Ident = input.parse()?;
        match ident.to_string().as_str() {
            "rename" => {
                input.parse::<Token![=]>()?;
                self.set_tag(input.parse()?)
            }
            "flatten" => self.set_tag(LitStr::new("-", ident.span())),
            "embed" => {
                self.embed = Some(ident.span());
                Ok(())
            }
            "skip" => {
                self.skip = Some(ident.span());
                Ok(())
            }
            _ => Err(syn::Error::new(
                ident.span(),
                "unknown field attribute, expected a name, `rename`, `flatten`, `embed` or `skip`",
            )),
        }
    }

    fn set_tag(&mut self, tag: LitStr) -> syn::Result<()> {
        if self.tag.is_some() {
            return Err(syn::Error::new(tag.span(), "the field name is set more than once"));
        }
        self.tag = Some(tag);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use syn::{Attribute, parse_quote};

    use super::FieldAttributes;

    fn parse(attrs: Vec<Attribute>) -> syn::Result<FieldAttributes> {
        FieldAttributes::parse_attrs(&attrs)
    }

    #[test]
    fn tags() {
        let attrs = parse(parse_quote!(#[ns("address")])).unwrap();
        assert_eq!(attrs.tag.unwrap().value(), "address");

        let attrs = parse(parse_quote!(#[ns(rename = "x", embed)])).unwrap();
        assert_eq!(attrs.tag.unwrap().value(), "x");
        assert!(attrs.embed.is_some());

        let attrs = parse(parse_quote!(#[ns(flatten)] #[ns(skip)])).unwrap();
        assert_eq!(attrs.tag.unwrap().value(), "-");
        assert!(attrs.skip.is_some());

        let attrs = parse(parse_quote!(#[serde(rename = "x")])).unwrap();
        assert!(attrs.tag.is_none());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(parse_quote!(#[ns("a", "b")])).is_err());
        assert!(parse(parse_quote!(#[ns(unknown)])).is_err());
    }
}
