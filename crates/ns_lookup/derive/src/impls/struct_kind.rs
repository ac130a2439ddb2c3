use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use ns_macro_utils::full_path::{OptionFP, SendFP, SyncFP};

use crate::derive_data::NamespaceStruct;

/// Implement `Namespace` and `Record` for a struct with named fields.
pub(crate) fn impl_struct(info: &NamespaceStruct) -> TokenStream {
    let ns_lookup_path = info.ns_lookup_path();
    let namespace_ = crate::path::namespace_(ns_lookup_path);
    let record_ = crate::path::record_(ns_lookup_path);
    let ns_ref_ = crate::path::ns_ref_(ns_lookup_path);
    let field_info_ = crate::path::field_info_(ns_lookup_path);
    let path_collector_ = crate::path::path_collector_(ns_lookup_path);
    let macro_exports_ = crate::path::macro_exports_(ns_lookup_path);

    let ast = info.ast();
    let ident = &ast.ident;
    let (impl_generics, ty_generics, _) = ast.generics.split_for_impl();
    let where_clause = get_where_clause(info);

    // field table
    let field_infos = info.fields().iter().map(|field| {
        let name = field.ident.to_string();
        let mut tokens = quote!(#field_info_::new(#name));
        if let Some(tag) = &field.attrs.tag {
            tokens = quote!(#tokens.with_tag(#tag));
        }
        if field.attrs.embed.is_some() {
            tokens = quote!(#tokens.embedded());
        }
        tokens
    });

    let field_arms = info.fields().iter().enumerate().map(|(index, field)| {
        let member = field.ident;
        quote! {
            #index => #OptionFP::Some(&self.#member as &dyn #namespace_),
        }
    });

    let type_names_tokens = if info.fields().is_empty() {
        crate::utils::empty()
    } else {
        let field_type_names = info.fields().iter().enumerate().map(|(index, field)| {
            let ty = field.ty;
            quote! {
                #macro_exports_::field_type_names::<#ty>(&__NS_FIELDS[#index], collector);
            }
        });
        quote! {
            fn type_names(collector: &mut #path_collector_) {
                collector.with_type::<Self>(|collector| {
                    #(#field_type_names)*
                });
            }
        }
    };

    let display_tokens = if info.attrs().display.is_some() {
        quote! {
            #[inline]
            fn display_text(&self) -> #OptionFP<#macro_exports_::String> {
                #macro_exports_::display_text(self)
            }
        }
    } else {
        crate::utils::empty()
    };

    let resolve_self_tokens = if info.attrs().resolve_self.is_some() {
        let resolve_self_ = crate::path::resolve_self_(ns_lookup_path);
        quote! {
            #[inline]
            fn as_resolve_self(&self) -> #OptionFP<&dyn #resolve_self_> {
                #OptionFP::Some(self)
            }
        }
    } else {
        crate::utils::empty()
    };

    quote! {
        const _: () = {
            static __NS_FIELDS: &[#field_info_] = &[#(#field_infos),*];

            impl #impl_generics #namespace_ for #ident #ty_generics #where_clause {
                #[inline]
                fn ns_ref(&self) -> #ns_ref_<'_> {
                    #ns_ref_::Record(self)
                }

                #display_tokens

                #resolve_self_tokens

                #type_names_tokens
            }

            impl #impl_generics #record_ for #ident #ty_generics #where_clause {
                #[inline]
                fn field_infos(&self) -> &'static [#field_info_] {
                    __NS_FIELDS
                }

                fn field_at(&self, index: usize) -> #OptionFP<&dyn #namespace_> {
                    match index {
                        #(#field_arms)*
                        _ => #OptionFP::None,
                    }
                }
            }
        };
    }
}

/// The user's where clause, plus:
///
/// - `T: Send + Sync + 'static` for every type parameter `T`.
/// - `F: Namespace` for every field type `F` that mentions a type parameter.
fn get_where_clause(info: &NamespaceStruct) -> TokenStream {
    let namespace_ = crate::path::namespace_(info.ns_lookup_path());
    let params = info.type_params();

    if params.is_empty() {
        return info
            .ast()
            .generics
            .where_clause
            .as_ref()
            .map(ToTokens::to_token_stream)
            .unwrap_or_default();
    }

    let existing = info
        .ast()
        .generics
        .where_clause
        .as_ref()
        .map(|clause| clause.predicates.iter().collect::<Vec<_>>())
        .unwrap_or_default();

    let param_bounds = params.iter().map(|param| {
        quote!(#param: #SendFP + #SyncFP + 'static)
    });

    let field_bounds = info
        .fields()
        .iter()
        .filter(|field| crate::utils::mentions_any(field.ty.to_token_stream(), &params))
        .map(|field| {
            let ty = field.ty;
            quote!(#ty: #namespace_)
        });

    quote! {
        where #(#existing,)* #(#param_bounds,)* #(#field_bounds,)*
    }
}
