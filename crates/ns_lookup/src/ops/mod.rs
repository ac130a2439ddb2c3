//! Provide the shape views that traversal runs on.
//!
//! ## Menu
//!
//! - [`NsRef`]: the closed union returned by [`Namespace::ns_ref`].
//! - [`ScalarRef`]: the scalar half of that union, split by representation.
//! - [`Record`]: For records with named fields (e.g. `A{ .. }`).
//! - [`Mapping`]: For string-keyed maps (e.g. `HashMap<String, T>`).
//!
//! Optional and boxed layers (`Option<T>`, `Box<T>`, `Arc<T>`) have no trait
//! of their own, they report [`NsRef::Boxed`] with the inner value if present.
//!
//! [`Namespace::ns_ref`]: crate::Namespace::ns_ref

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod mapping;
mod record;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{NsRef, ScalarRef};
pub use mapping::Mapping;
pub use record::{Record, RecordFieldIter};
