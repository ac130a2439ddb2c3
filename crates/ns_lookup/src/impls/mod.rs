//! Provide [`Namespace`](crate::Namespace) implementations for common types.
//!
//! ## Implemented Menu
//!
//! - scalars:
//!     - `i8`-`i64`, `isize`, `u8`-`u64`, `usize`, `f32`, `f64`
//!     - `bool`, `char`
//!     - `String`, `&'static str`, `Box<str>`, `Arc<str>`, `Cow<'static, str>`
//! - boxed layers:
//!     - `Option<T>`, `Box<T>`, `Arc<T>`, `Box<dyn Namespace>`
//! - mappings, keyed by any of the string types above, or by an integer,
//!   `bool` or `char` (never matched by name):
//!     - `std::collections::HashMap`, `BTreeMap`
//!     - `hashbrown::HashMap`, including `ns_utils::hash::HashMap`
//! - opaque:
//!     - `Vec<T>`, rendered through `Debug`
//! - serde_json: ("json" feature)
//!     - `serde_json::Value`, `serde_json::Map<String, Value>`

// -----------------------------------------------------------------------------
// Modules

mod boxed;
mod map;
mod native;
mod seq;

#[cfg(feature = "json")]
mod json;
