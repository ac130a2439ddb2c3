#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Derived code names this crate as `ns_lookup`, which must also resolve
// inside the crate itself (unit tests derive on local types).
extern crate self as ns_lookup;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod namespace;
mod value;

pub mod access;
pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use access::{NamespaceAccess, names, resolve, resolve_delimited};
pub use namespace::Namespace;
pub use ns_lookup_derive as derive;
pub use value::{Value, is_numeric};
