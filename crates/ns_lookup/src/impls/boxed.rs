use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;

use crate::Namespace;
use crate::access::{PathCollector, ResolveSelf};
use crate::ops::NsRef;

impl<T: Namespace> Namespace for Option<T> {
    #[inline]
    fn ns_ref(&self) -> NsRef<'_> {
        NsRef::Boxed(self.as_ref().map(Namespace::as_namespace))
    }

    fn absent_names(&self, collector: &mut PathCollector) {
        if self.is_none() {
            T::type_names(collector);
        }
    }

    #[inline]
    fn type_names(collector: &mut PathCollector) {
        T::type_names(collector);
    }
}

macro_rules! impl_pointer {
    ($($ptr:ident),+) => {
        $(
            impl<T: Namespace> Namespace for $ptr<T> {
                #[inline]
                fn ns_ref(&self) -> NsRef<'_> {
                    NsRef::Boxed(Some(&**self))
                }

                #[inline]
                fn type_names(collector: &mut PathCollector) {
                    T::type_names(collector);
                }
            }
        )+
    };
}

impl_pointer!(Box, Arc);

/// A type-erased value is looked through like any other box, but keeps the
/// capabilities of the value inside.
impl Namespace for Box<dyn Namespace> {
    #[inline]
    fn ns_ref(&self) -> NsRef<'_> {
        NsRef::Boxed(Some(&**self))
    }

    #[inline]
    fn as_resolve_self(&self) -> Option<&dyn ResolveSelf> {
        (**self).as_resolve_self()
    }

    #[inline]
    fn display_text(&self) -> Option<String> {
        (**self).display_text()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::sync::Arc;

    use crate::info::NsKind;
    use crate::ops::NsRef;
    use crate::{Namespace, Value};

    #[test]
    fn boxed_layers() {
        let nested: Option<Box<Arc<u8>>> = Some(Box::new(Arc::new(3)));
        assert_eq!(nested.ns_kind(), NsKind::Boxed);
        assert_eq!(Value::new(&nested).kind(), NsKind::UInt);

        let erased: Box<dyn Namespace> = Box::new(None::<i32>);
        let NsRef::Boxed(Some(inner)) = erased.ns_ref() else {
            panic!("a boxed value is always present");
        };
        assert_eq!(inner.ns_kind(), NsKind::Nil);
        assert!(Value::new(&erased).is_nil());
    }
}
