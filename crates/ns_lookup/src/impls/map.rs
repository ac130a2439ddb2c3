use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use core::borrow::Borrow;
use core::hash::BuildHasher;

use crate::Namespace;
use crate::ops::{Mapping, NsRef};

type StdHashMap<K, V, S> = std::collections::HashMap<K, V, S>;
type HashbrownMap<K, V, S> = ns_utils::hash::hashbrown::HashMap<K, V, S>;

// -----------------------------------------------------------------------------
// String keys

macro_rules! impl_string_keyed {
    (hashed $map:ident: $($key:ty),+ $(,)?) => {
        $(
            impl<V, S> Namespace for $map<$key, V, S>
            where
                V: Namespace,
                S: BuildHasher + Send + Sync + 'static,
            {
                #[inline]
                fn ns_ref(&self) -> NsRef<'_> {
                    NsRef::Mapping(self)
                }
            }

            impl<V, S> Mapping for $map<$key, V, S>
            where
                V: Namespace,
                S: BuildHasher + Send + Sync + 'static,
            {
                impl_string_keyed!(@body $key);
            }
        )+
    };
    (ordered $map:ident: $($key:ty),+ $(,)?) => {
        $(
            impl<V: Namespace> Namespace for $map<$key, V> {
                #[inline]
                fn ns_ref(&self) -> NsRef<'_> {
                    NsRef::Mapping(self)
                }
            }

            impl<V: Namespace> Mapping for $map<$key, V> {
                impl_string_keyed!(@body $key);
            }
        )+
    };
    (@body $key:ty) => {
        #[inline]
        fn get(&self, key: &str) -> Option<&dyn Namespace> {
            Self::get(self, key).map(|value| value as &dyn Namespace)
        }

        fn iter_entries(&self) -> Box<dyn Iterator<Item = (&str, &dyn Namespace)> + '_> {
            Box::new(Self::iter(self).map(|(key, value)| {
                (<$key as Borrow<str>>::borrow(key), value as &dyn Namespace)
            }))
        }
    };
}

impl_string_keyed!(hashed StdHashMap: String, &'static str, Box<str>, Arc<str>, Cow<'static, str>);
impl_string_keyed!(hashed HashbrownMap: String, &'static str, Box<str>, Arc<str>, Cow<'static, str>);
impl_string_keyed!(ordered BTreeMap: String, &'static str, Box<str>, Arc<str>, Cow<'static, str>);

// -----------------------------------------------------------------------------
// Other keys

// Maps keyed by anything but strings have the mapping shape, but no names.
macro_rules! impl_unnamed_keyed {
    (hashed $map:ident: $($key:ty),+ $(,)?) => {
        $(
            impl<V, S> Namespace for $map<$key, V, S>
            where
                V: Namespace,
                S: BuildHasher + Send + Sync + 'static,
            {
                #[inline]
                fn ns_ref(&self) -> NsRef<'_> {
                    NsRef::Mapping(self)
                }
            }

            impl<V, S> Mapping for $map<$key, V, S>
            where
                V: Namespace,
                S: BuildHasher + Send + Sync + 'static,
            {
                impl_unnamed_keyed!(@body);
            }
        )+
    };
    (ordered $map:ident: $($key:ty),+ $(,)?) => {
        $(
            impl<V: Namespace> Namespace for $map<$key, V> {
                #[inline]
                fn ns_ref(&self) -> NsRef<'_> {
                    NsRef::Mapping(self)
                }
            }

            impl<V: Namespace> Mapping for $map<$key, V> {
                impl_unnamed_keyed!(@body);
            }
        )+
    };
    (@body) => {
        #[inline]
        fn get(&self, _key: &str) -> Option<&dyn Namespace> {
            None
        }

        #[inline]
        fn iter_entries(&self) -> Box<dyn Iterator<Item = (&str, &dyn Namespace)> + '_> {
            Box::new(core::iter::empty())
        }
    };
}

impl_unnamed_keyed!(hashed StdHashMap: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool, char);
impl_unnamed_keyed!(hashed HashbrownMap: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool, char);
impl_unnamed_keyed!(ordered BTreeMap: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool, char);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::sync::Arc;

    use ns_utils::hash::HashMap;

    use crate::access::NamespaceError;
    use crate::info::NsKind;
    use crate::{Namespace, Value, names, resolve};

    #[test]
    fn string_keys() {
        let mut map: HashMap<Arc<str>, i32> = HashMap::default();
        map.insert(Arc::from("Key"), 5);
        assert_eq!(resolve(&map, &["Key"]).unwrap().as_int(), Ok(5));
        assert_eq!(map.ns_kind(), NsKind::Mapping);
    }

    #[test]
    fn integer_keys_never_match() {
        let map = BTreeMap::from([(1_u32, String::from("one"))]);
        assert_eq!(map.ns_kind(), NsKind::Mapping);
        assert!(matches!(
            resolve(&map, &["1"]),
            Err(NamespaceError::NotFound(_))
        ));
        assert!(names(&map).is_empty());
        assert_eq!(Value::new(&map).as_string(), "{}");
    }

    #[test]
    fn mapping_renders_sorted() {
        let map = std::collections::HashMap::from([("b", 2_i32), ("a", 1)]);
        assert_eq!(Value::new(&map).as_string(), "{a: 1, b: 2}");
    }
}
