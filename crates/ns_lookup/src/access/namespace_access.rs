use alloc::string::String;
use alloc::vec::Vec;

use crate::access::{NamespaceError, names, resolve, resolve_delimited};
use crate::{Namespace, Value};

/// Method-call forms of [`resolve`], [`resolve_delimited`] and [`names`].
///
/// Implemented for every [`Namespace`] type and for `dyn Namespace`.
///
/// ```
/// use ns_lookup::{NamespaceAccess, derive::Namespace};
///
/// #[derive(Namespace)]
/// struct Limits {
///     #[ns("max-conn")]
///     max_connections: u32,
/// }
///
/// let limits = Limits { max_connections: 64 };
///
/// assert_eq!(limits.lookup(&["max-conn"]).unwrap().as_int(), Ok(64));
/// assert_eq!(limits.lookup_delimited("max-conn").unwrap().as_float(), Ok(64.0));
/// assert_eq!(limits.namespace_names(), [["max-conn"]]);
/// ```
pub trait NamespaceAccess {
    /// Resolves `path` inside this value. See [`resolve`].
    fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Result<Value<'_>, NamespaceError>;

    /// Resolves a `'.'` separated path inside this value. See [`resolve_delimited`].
    fn lookup_delimited(&self, path: &str) -> Result<Value<'_>, NamespaceError>;

    /// Returns every path this value exposes. See [`names`].
    fn namespace_names(&self) -> Vec<Vec<String>>;
}

impl<T: Namespace> NamespaceAccess for T {
    #[inline]
    fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Result<Value<'_>, NamespaceError> {
        resolve(self, path)
    }

    #[inline]
    fn lookup_delimited(&self, path: &str) -> Result<Value<'_>, NamespaceError> {
        resolve_delimited(self, path)
    }

    #[inline]
    fn namespace_names(&self) -> Vec<Vec<String>> {
        names(self)
    }
}

impl NamespaceAccess for dyn Namespace {
    #[inline]
    fn lookup<S: AsRef<str>>(&self, path: &[S]) -> Result<Value<'_>, NamespaceError> {
        resolve(self, path)
    }

    #[inline]
    fn lookup_delimited(&self, path: &str) -> Result<Value<'_>, NamespaceError> {
        resolve_delimited(self, path)
    }

    #[inline]
    fn namespace_names(&self) -> Vec<Vec<String>> {
        names(self)
    }
}
