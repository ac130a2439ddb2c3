//! This independent module is used to provide the required paths.
//! So as to minimize changes when the `ns_lookup` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `ns_lookup` crate.
///
/// 1. For crates that depend on `ns_lookup`, `::ns_lookup` is returned.
/// 2. For crates that depend on `ns_core`, `::ns_core::lookup` is returned.
/// 3. For other situations, `::ns_lookup` is returned, but this may be incorrect.
///
/// Reading the manifest is relatively expensive,
/// so the path is obtained once per derive and passed around.
pub(crate) fn ns_lookup() -> syn::Path {
    ns_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("ns_lookup"))
}

// -----------------------------------------------------------------------------
// Items

#[inline]
pub(crate) fn namespace_(ns_lookup_path: &syn::Path) -> TokenStream {
    quote! {
        #ns_lookup_path::Namespace
    }
}

#[inline]
pub(crate) fn record_(ns_lookup_path: &syn::Path) -> TokenStream {
    quote! {
        #ns_lookup_path::ops::Record
    }
}

#[inline]
pub(crate) fn ns_ref_(ns_lookup_path: &syn::Path) -> TokenStream {
    quote! {
        #ns_lookup_path::ops::NsRef
    }
}

#[inline]
pub(crate) fn field_info_(ns_lookup_path: &syn::Path) -> TokenStream {
    quote! {
        #ns_lookup_path::info::FieldInfo
    }
}

#[inline]
pub(crate) fn path_collector_(ns_lookup_path: &syn::Path) -> TokenStream {
    quote! {
        #ns_lookup_path::access::PathCollector
    }
}

#[inline]
pub(crate) fn resolve_self_(ns_lookup_path: &syn::Path) -> TokenStream {
    quote! {
        #ns_lookup_path::access::ResolveSelf
    }
}

#[inline(always)]
pub(crate) fn macro_exports_(ns_lookup_path: &syn::Path) -> TokenStream {
    quote! {
        #ns_lookup_path::__macro_exports
    }
}
