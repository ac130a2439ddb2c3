use proc_macro2::TokenStream;
use proc_macro2::TokenTree;
use syn::Ident;

#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// Returns `true` if any identifier in `tokens`, at any depth, is one of `idents`.
pub(crate) fn mentions_any(tokens: TokenStream, idents: &[&Ident]) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => idents.iter().any(|param| **param == ident),
        TokenTree::Group(group) => mentions_any(group.stream(), idents),
        TokenTree::Punct(_) | TokenTree::Literal(_) => false,
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::Ident;

    use super::mentions_any;

    #[test]
    fn finds_nested_params() {
        let t: Ident = syn::parse_quote!(T);
        assert!(mentions_any(quote!(Option<Box<T>>), &[&t]));
        assert!(mentions_any(quote!([T; 4]), &[&t]));
        assert!(!mentions_any(quote!(Option<Tail>), &[&t]));
    }
}
