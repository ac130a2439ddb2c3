//! Provide the parsed form of a type deriving `Namespace`.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod namespace_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use namespace_struct::NamespaceStruct;
