use alloc::vec::Vec;
use core::fmt::Debug;

use crate::Namespace;
use crate::ops::{NsRef, ScalarRef};

/// Sequences are not addressable by name, they are leaves rendered through `Debug`.
impl<T: Namespace + Debug> Namespace for Vec<T> {
    #[inline]
    fn ns_ref(&self) -> NsRef<'_> {
        NsRef::Scalar(ScalarRef::Opaque(self))
    }
}
