use core::fmt::Debug;

use crate::Namespace;
use crate::info::NsKind;
use crate::ops::{Mapping, Record};

// -----------------------------------------------------------------------------
// NsRef

/// An immutable enumeration of the shapes a value can take.
///
/// Each variant carries the view traversal needs for that shape.
/// Obtained from [`Namespace::ns_ref`].
///
/// # Examples
///
/// ```
/// use ns_lookup::{Namespace, info::NsKind, ops::NsRef};
///
/// let some: Option<i32> = Some(5);
/// let none: Option<i32> = None;
///
/// assert!(matches!(some.ns_ref(), NsRef::Boxed(Some(_))));
/// assert_eq!(none.ns_ref().kind(), NsKind::Nil);
/// assert_eq!(5_u8.ns_ref().kind(), NsKind::UInt);
/// ```
#[derive(Clone, Copy)]
pub enum NsRef<'a> {
    Record(&'a dyn Record),
    Mapping(&'a dyn Mapping),
    /// An optional or boxed layer, `None` when the value is absent.
    Boxed(Option<&'a dyn Namespace>),
    Scalar(ScalarRef<'a>),
}

impl NsRef<'_> {
    /// Returns the [`NsKind`] of this view.
    pub fn kind(&self) -> NsKind {
        match self {
            Self::Record(_) => NsKind::Record,
            Self::Mapping(_) => NsKind::Mapping,
            Self::Boxed(Some(_)) => NsKind::Boxed,
            Self::Boxed(None) => NsKind::Nil,
            Self::Scalar(scalar) => scalar.kind(),
        }
    }
}

// -----------------------------------------------------------------------------
// ScalarRef

/// A leaf value, split by representation.
///
/// Integers are widened to 64 bits; `f32` is kept apart so that rendering
/// prints the shortest text of the original width.
#[derive(Debug, Clone, Copy)]
pub enum ScalarRef<'a> {
    Bool(bool),
    Int(i64),
    UInt(u64),
    F32(f32),
    F64(f64),
    Char(char),
    Str(&'a str),
    /// A value with no scalar meaning, only `Debug` rendering.
    Opaque(&'a dyn Debug),
}

impl ScalarRef<'_> {
    /// Returns the [`NsKind`] of this scalar.
    pub const fn kind(&self) -> NsKind {
        match self {
            Self::Bool(_) => NsKind::Bool,
            Self::Int(_) => NsKind::Int,
            Self::UInt(_) => NsKind::UInt,
            Self::F32(_) | Self::F64(_) => NsKind::Float,
            Self::Char(_) => NsKind::Char,
            Self::Str(_) => NsKind::Str,
            Self::Opaque(_) => NsKind::Opaque,
        }
    }
}
