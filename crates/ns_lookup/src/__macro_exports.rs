//! Items used by code generated from `#[derive(Namespace)]`.

use alloc::string::ToString;
use core::fmt::Display;

use crate::Namespace;
use crate::access::PathCollector;
use crate::info::{FieldInfo, NamingRule};

pub use alloc::string::String;

/// Describes the paths a field of type `T` contributes to its record's schema.
pub fn field_type_names<T: Namespace>(info: &FieldInfo, collector: &mut PathCollector) {
    match info.naming_rule() {
        NamingRule::Transparent => T::type_names(collector),
        NamingRule::Renamed(name) | NamingRule::Declared(name) => {
            collector.with_leaf_segment(name, T::type_names);
        }
    }
}

#[inline]
pub fn display_text<T: Display + ?Sized>(value: &T) -> Option<String> {
    Some(value.to_string())
}
