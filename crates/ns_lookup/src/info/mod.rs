//! Provide metadata describing values: their [`NsKind`] and, for records,
//! the per-field [`FieldInfo`] table that decides which names are visible.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod kind;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::{FieldInfo, NamingRule, TRANSPARENT_TAG};
pub use kind::NsKind;
