use alloc::string::String;
use alloc::vec::Vec;

use crate::Value;
use crate::access::NamespaceError;

/// A value that resolves and enumerates its own sub-paths.
///
/// Exposed through [`Namespace::as_resolve_self`](crate::Namespace::as_resolve_self).
/// When traversal reaches a value with this capability, the rest of the path
/// is handed over and the result is returned as is, generic record and
/// mapping handling no longer applies below it.
///
/// # Examples
///
/// ```
/// use ns_lookup::{Namespace, Value, resolve, names};
/// use ns_lookup::access::{NamespaceError, NotFoundError, ResolveSelf};
/// use ns_lookup::ops::{NsRef, ScalarRef};
///
/// /// Every path resolves to its own last segment.
/// struct Echo;
///
/// impl Namespace for Echo {
///     fn ns_ref(&self) -> NsRef<'_> {
///         NsRef::Scalar(ScalarRef::Opaque(&"echo"))
///     }
///     fn as_resolve_self(&self) -> Option<&dyn ResolveSelf> {
///         Some(self)
///     }
/// }
///
/// impl ResolveSelf for Echo {
///     fn resolve_self(&self, path: &[&str]) -> Result<Value<'_>, NamespaceError> {
///         match *path {
///             ["a"] => Ok(Value::new(&"a")),
///             ["b"] => Ok(Value::new(&"b")),
///             _ => Err(NotFoundError::new(path[0], Vec::new(), Vec::new()).into()),
///         }
///     }
///
///     fn names_self(&self, prefix: &[String]) -> Vec<Vec<String>> {
///         ["a", "b"]
///             .into_iter()
///             .map(|name| prefix.iter().cloned().chain([name.to_string()]).collect())
///             .collect()
///     }
/// }
///
/// assert_eq!(resolve(&Echo, &["b"]).unwrap().as_string(), "b");
/// assert_eq!(names(&Echo), [["a"], ["b"]]);
/// ```
pub trait ResolveSelf {
    /// Resolves the remaining, non-empty `path` below this value.
    fn resolve_self(&self, path: &[&str]) -> Result<Value<'_>, NamespaceError>;

    /// Returns every path below this value, each starting with `prefix`.
    fn names_self(&self, prefix: &[String]) -> Vec<Vec<String>>;
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::ResolveSelf;
    use crate::access::{NamespaceError, NotFoundError};
    use crate::derive::Namespace;
    use crate::{Value, names, resolve};

    /// Exposes its entries by key instead of its fields.
    #[derive(Namespace)]
    #[ns(resolve_self)]
    struct Registry {
        entries: BTreeMap<String, u32>,
    }

    impl ResolveSelf for Registry {
        fn resolve_self(&self, path: &[&str]) -> Result<Value<'_>, NamespaceError> {
            match path {
                [key] => self
                    .entries
                    .get(*key)
                    .map(|value| Value::new(value))
                    .ok_or_else(|| NotFoundError::new(*key, Vec::new(), Vec::new()).into()),
                _ => Err(NotFoundError::new(path[0], Vec::new(), Vec::new()).into()),
            }
        }

        fn names_self(&self, prefix: &[String]) -> Vec<Vec<String>> {
            self.entries
                .keys()
                .map(|key| {
                    let mut path = prefix.to_vec();
                    path.push(key.clone());
                    path
                })
                .collect()
        }
    }

    #[test]
    fn derived_hook_takes_over() {
        let registry = Registry {
            entries: BTreeMap::from([(String::from("a"), 1), (String::from("b"), 2)]),
        };
        assert_eq!(resolve(&registry, &["b"]).unwrap().as_int(), Ok(2));
        assert!(resolve(&registry, &["entries"]).is_err());
        assert!(resolve(&registry, &["a", "deeper"]).is_err());

        let root = BTreeMap::from([("reg", registry)]);
        assert_eq!(names(&root), [["reg", "a"], ["reg", "b"]]);
    }
}
