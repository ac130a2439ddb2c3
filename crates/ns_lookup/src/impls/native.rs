use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;

use crate::Namespace;
use crate::ops::{NsRef, ScalarRef};

macro_rules! impl_scalar {
    ($variant:ident as $wide:ty: $($ty:ty),+ $(,)?) => {
        $(
            impl Namespace for $ty {
                #[inline]
                fn ns_ref(&self) -> NsRef<'_> {
                    NsRef::Scalar(ScalarRef::$variant(*self as $wide))
                }
            }
        )+
    };
}

impl_scalar!(Int as i64: i8, i16, i32, i64, isize);
impl_scalar!(UInt as u64: u8, u16, u32, u64, usize);
impl_scalar!(F32 as f32: f32);
impl_scalar!(F64 as f64: f64);

impl Namespace for bool {
    #[inline]
    fn ns_ref(&self) -> NsRef<'_> {
        NsRef::Scalar(ScalarRef::Bool(*self))
    }
}

impl Namespace for char {
    #[inline]
    fn ns_ref(&self) -> NsRef<'_> {
        NsRef::Scalar(ScalarRef::Char(*self))
    }
}

macro_rules! impl_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Namespace for $ty {
                #[inline]
                fn ns_ref(&self) -> NsRef<'_> {
                    NsRef::Scalar(ScalarRef::Str(self))
                }
            }
        )+
    };
}

impl_str!(String, &'static str, Box<str>, Arc<str>, Cow<'static, str>);

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;

    use crate::Namespace;
    use crate::info::NsKind;

    #[test]
    fn scalar_kinds() {
        assert_eq!((-1_isize).ns_kind(), NsKind::Int);
        assert_eq!(1_usize.ns_kind(), NsKind::UInt);
        assert_eq!(1.5_f32.ns_kind(), NsKind::Float);
        assert_eq!(true.ns_kind(), NsKind::Bool);
        assert_eq!('x'.ns_kind(), NsKind::Char);
        assert_eq!(Cow::<'static, str>::Borrowed("x").ns_kind(), NsKind::Str);
    }
}
