use alloc::string::String;
use core::any::{Any, TypeId};

use crate::access::{PathCollector, ResolveSelf};
use crate::info::NsKind;
use crate::ops::NsRef;

// -----------------------------------------------------------------------------
// Namespace

/// The shape inspection capability that path lookup runs on.
///
/// A value implementing `Namespace` reports its shape through [`ns_ref`],
/// a closed union of record, mapping, boxed and scalar views.
/// Resolution, enumeration and suggestions are all written against that union.
///
/// # Implementation Guide
///
/// Records should use [the derive macro](crate::derive::Namespace).
/// Containers and scalars of `core`/`alloc`/`std` are implemented in [`impls`].
///
/// A manual implementation only needs [`ns_ref`]:
///
/// ```
/// use ns_lookup::{Namespace, ops::{NsRef, ScalarRef}};
///
/// struct Celsius(f64);
///
/// impl Namespace for Celsius {
///     fn ns_ref(&self) -> NsRef<'_> {
///         NsRef::Scalar(ScalarRef::F64(self.0))
///     }
/// }
///
/// let celsius = Celsius(21.5);
/// let value = ns_lookup::Value::new(&celsius);
/// assert_eq!(value.as_float().unwrap(), 21.5);
/// ```
///
/// The other methods are optional capabilities:
///
/// - [`as_resolve_self`]: the value resolves and enumerates its own sub-paths.
/// - [`display_text`]: the value renders itself as text.
/// - [`absent_names`] / [`type_names`]: the paths an absent value of this type
///   would expose, used by enumeration.
///
/// [`ns_ref`]: Namespace::ns_ref
/// [`impls`]: crate::impls
/// [`as_resolve_self`]: Namespace::as_resolve_self
/// [`display_text`]: Namespace::display_text
/// [`absent_names`]: Namespace::absent_names
/// [`type_names`]: Namespace::type_names
pub trait Namespace: Send + Sync + Any {
    /// Casts this type to a `&dyn Namespace`.
    #[inline(always)]
    fn as_namespace(&self) -> &dyn Namespace
    where
        Self: Sized,
    {
        self
    }

    /// Returns an immutable view of the shape of this value.
    fn ns_ref(&self) -> NsRef<'_>;

    /// Returns the [`NsKind`] of this value, without looking through boxes.
    #[inline]
    fn ns_kind(&self) -> NsKind {
        self.ns_ref().kind()
    }

    /// Returns the self-describing resolution hook, if this value has one.
    ///
    /// When present, generic traversal stops at this value and the remaining
    /// path is handed to [`ResolveSelf::resolve_self`].
    #[inline]
    fn as_resolve_self(&self) -> Option<&dyn ResolveSelf> {
        None
    }

    /// Returns the text form of this value, if it can display itself.
    ///
    /// Takes precedence over the generic rendering of [`Value::as_string`](crate::Value::as_string).
    #[inline]
    fn display_text(&self) -> Option<String> {
        None
    }

    /// Collects the paths a populated value would expose, when this value is absent.
    ///
    /// Only optional types override this, forwarding to the inner [`type_names`](Namespace::type_names).
    #[inline]
    fn absent_names(&self, _collector: &mut PathCollector) {}

    /// Collects the paths a zero-valued instance of this type exposes.
    ///
    /// Records emit their fields, wrappers forward to the wrapped type,
    /// everything else emits nothing.
    #[inline]
    fn type_names(_collector: &mut PathCollector)
    where
        Self: Sized,
    {
    }
}

impl dyn Namespace {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Namespace>(&self) -> bool {
        let any: &dyn Any = self;
        any.type_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Namespace>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::Namespace;
    use crate::info::NsKind;

    #[test]
    fn downcast_through_dyn() {
        let value: Box<dyn Namespace> = Box::new(String::from("MyValue"));
        assert!(value.is::<String>());
        assert!(!value.is::<i32>());
        assert_eq!(value.downcast_ref::<String>().unwrap(), "MyValue");
        assert_eq!(value.ns_kind(), NsKind::Boxed);
        assert_eq!((*value).ns_kind(), NsKind::Str);
    }
}
