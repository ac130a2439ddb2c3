//! See following macros:
//!
//! - [`Namespace`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static NS_ATTRIBUTE_NAME: &str = "ns";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Namespace Derivation
///
/// `#[derive(Namespace)]` implements `Namespace` and `Record` for a struct
/// with named fields, so that its fields can be resolved by name.
///
/// Every field type must implement `Namespace`, unless the field is skipped.
///
/// ## Field Attributes
///
/// By default a field is visible under its declared name.
///
/// ```rust, ignore
/// #[derive(Namespace)]
/// struct Foo {
///     // visible as `address`, never as `addr`.
///     #[ns("address")]
///     addr: String,
///     // the same, with an explicit key.
///     #[ns(rename = "port-number")]
///     port: u16,
///     // transparent: the fields of `Limits` are visible directly in `Foo`.
///     #[ns("-")]
///     limits: Limits,
///     // the same.
///     #[ns(flatten)]
///     more: More,
///     // an embedded field, transparent unless it is also renamed.
///     #[ns(embed)]
///     base: Base,
///     // never matched, suggested or enumerated. The type needs no `Namespace`.
///     #[ns(skip)]
///     cache: Cache,
/// }
/// ```
///
/// ## Type Attributes
///
/// - `#[ns(display)]`: render the value through its `Display` implementation
///   instead of the generic `{field: value, ..}` form.
/// - `#[ns(resolve_self)]`: hand the remaining path to the type's own
///   `ResolveSelf` implementation, which must be provided by hand.
///
/// ```rust, ignore
/// #[derive(Namespace)]
/// #[ns(display, resolve_self)]
/// struct Registry { /* ... */ }
///
/// impl Display for Registry { /* ... */ }
/// impl ResolveSelf for Registry { /* ... */ }
/// ```
///
/// ## Limitations
///
/// Only structs with named fields and without lifetime parameters are supported.
#[proc_macro_derive(Namespace, attributes(ns))]
pub fn derive_namespace(input: TokenStream) -> TokenStream {
    use crate::derive_data::NamespaceStruct;

    let ast = parse_macro_input!(input as DeriveInput);

    match NamespaceStruct::from_ast(&ast) {
        Ok(info) => impls::impl_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
