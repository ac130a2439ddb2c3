use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use thiserror::Error;

use crate::info::NsKind;

// -----------------------------------------------------------------------------
// NamespaceError

/// An error returned from a failed path resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NamespaceError {
    /// The path had no segments.
    #[error("no namespace provided")]
    NoPath,

    /// The root value was absent.
    #[error("cannot resolve a path in a nil value")]
    NilRoot,

    /// A segment could not be matched.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

impl NamespaceError {
    /// Returns the [`NotFoundError`] payload, if this is a missing name.
    #[inline]
    pub fn as_not_found(&self) -> Option<&NotFoundError> {
        match self {
            Self::NotFound(err) => Some(err),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// NotFoundError

/// A segment that matched nothing at its level.
///
/// Carries the failing segment, the full path that was attempted and the
/// closest visible names at the level where matching failed.
///
/// ```
/// use ns_lookup::access::NotFoundError;
///
/// let err = NotFoundError::new("Key", vec!["Key".into()], vec!["Keyy".into()]);
/// assert_eq!(
///     err.to_string(),
///     r#"name "Key" not found in object (did you mean "Keyy"?)"#,
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("name {segment:?} not found in object{}", DidYouMean(.suggestions))]
pub struct NotFoundError {
    segment: String,
    path: Vec<String>,
    suggestions: Vec<String>,
}

impl NotFoundError {
    /// Creates a new [`NotFoundError`].
    #[inline]
    pub fn new(segment: impl Into<String>, path: Vec<String>, suggestions: Vec<String>) -> Self {
        Self {
            segment: segment.into(),
            path,
            suggestions,
        }
    }

    /// Returns the segment that failed to match.
    #[inline]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Returns the full path that was attempted.
    #[inline]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Returns the closest visible names, best first. May be empty.
    #[inline]
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

struct DidYouMean<'a>(&'a [String]);

impl fmt::Display for DidYouMean<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.0.split_first() else {
            return Ok(());
        };
        write!(f, " (did you mean {first:?}")?;
        for name in rest {
            write!(f, ", {name:?}")?;
        }
        f.write_char('?')?;
        f.write_char(')')
    }
}

// -----------------------------------------------------------------------------
// TypeMismatch

/// A scalar extraction requested a kind the value cannot provide.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot read {actual} value as {requested}")]
pub struct TypeMismatch {
    /// The kind the caller asked for.
    pub requested: NsKind,
    /// The kind of the value, looked through boxed layers.
    pub actual: NsKind,
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{NamespaceError, NotFoundError, TypeMismatch};
    use crate::info::NsKind;

    #[test]
    fn not_found_message() {
        let err = NotFoundError::new("Key", vec!["Key".into()], Vec::new());
        assert_eq!(err.to_string(), r#"name "Key" not found in object"#);

        let err = NotFoundError::new(
            "nme",
            vec!["user".into(), "nme".into()],
            vec!["name".into(), "nice".into()],
        );
        assert_eq!(
            err.to_string(),
            r#"name "nme" not found in object (did you mean "name", "nice"?)"#,
        );

        let err = NamespaceError::from(err);
        assert_eq!(err.as_not_found().unwrap().path(), ["user", "nme"]);
    }

    #[test]
    fn plain_messages() {
        assert_eq!(NamespaceError::NoPath.to_string(), "no namespace provided");
        assert!(NamespaceError::NilRoot.as_not_found().is_none());

        let err = TypeMismatch {
            requested: NsKind::Int,
            actual: NsKind::Str,
        };
        assert_eq!(err.to_string(), "cannot read string value as int");
    }
}
