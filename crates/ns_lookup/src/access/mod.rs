//! Provide path resolution, path enumeration and name suggestions.
//!
//! - [`resolve`]: follows a path of names from a root value to a leaf.
//! - [`resolve_delimited`]: the same with a `'.'` separated path.
//! - [`names`]: every path that [`resolve`] accepts in a value.
//! - [`suggest`]: the visible names closest to a misspelled one,
//!   as reported by [`NotFoundError::suggestions`].
//!
//! # Naming rules
//!
//! Record fields are visible under their declared name unless a tag says
//! otherwise, see [`NamingRule`](crate::info::NamingRule):
//!
//! ```
//! use ns_lookup::{derive::Namespace, resolve, names};
//!
//! #[derive(Namespace)]
//! struct Base {
//!     id: u64,
//! }
//!
//! #[derive(Namespace)]
//! struct User {
//!     #[ns(embed)]
//!     base: Base,
//!     #[ns("display-name")]
//!     name: String,
//!     #[ns(skip)]
//!     password: String,
//! }
//!
//! let user = User {
//!     base: Base { id: 7 },
//!     name: "ada".into(),
//!     password: "hunter2".into(),
//! };
//!
//! // `base` is transparent, its fields are visible one level up.
//! assert_eq!(resolve(&user, &["id"]).unwrap().as_int(), Ok(7));
//! assert!(resolve(&user, &["base", "id"]).is_err());
//! // renamed fields are only visible under the new name.
//! assert!(resolve(&user, &["name"]).is_err());
//! // skipped fields are not visible at all.
//! assert!(resolve(&user, &["password"]).is_err());
//!
//! assert_eq!(names(&user), [["id"], ["display-name"]]);
//! ```
//!
//! # Self-describing values
//!
//! A value may take over resolution and enumeration below itself by
//! implementing [`ResolveSelf`] and returning it from
//! [`Namespace::as_resolve_self`](crate::Namespace::as_resolve_self).

// -----------------------------------------------------------------------------
// Modules

mod error;
mod hook;
mod names;
mod namespace_access;
mod resolve;
mod suggest;

// -----------------------------------------------------------------------------
// Exports

pub use error::{NamespaceError, NotFoundError, TypeMismatch};
pub use hook::ResolveSelf;
pub use names::{PathCollector, names};
pub use namespace_access::NamespaceAccess;
pub use resolve::{PATH_DELIMITER, resolve, resolve_delimited};
pub use suggest::{SIMILARITY_THRESHOLD, suggest};

pub(crate) use resolve::{Peeled, peel};
