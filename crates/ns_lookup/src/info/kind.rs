use core::fmt;

/// A pure enumeration of the shapes a value can take during traversal.
///
/// Obtained from [`NsRef::kind`](crate::ops::NsRef::kind) or
/// [`Value::kind`](crate::Value::kind).
///
/// `Boxed` is a present optional/boxed layer, `Nil` an absent one.
/// The remaining variants split the scalar shape by representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NsKind {
    Record,
    Mapping,
    Boxed,
    Nil,
    Bool,
    Int,
    UInt,
    Float,
    Char,
    Str,
    Opaque,
}

impl NsKind {
    /// Returns `true` for the record and mapping kinds.
    #[inline]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Record | Self::Mapping)
    }

    /// Returns the lowercase name used in error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::Mapping => "mapping",
            Self::Boxed => "boxed",
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::Char => "char",
            Self::Str => "string",
            Self::Opaque => "opaque",
        }
    }
}

impl fmt::Display for NsKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
