use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::Namespace;
use crate::access::TypeMismatch;
use crate::info::NsKind;
use crate::ops::{NsRef, ScalarRef};

// -----------------------------------------------------------------------------
// Value

/// A resolved value, with scalar extraction.
///
/// Returned by [`resolve`](crate::resolve). Boxed and optional layers are
/// looked through by every method, an absent layer has the
/// [`Nil`](NsKind::Nil) kind.
///
/// Extraction never panics: [`as_float`] and [`as_int`] return a
/// [`TypeMismatch`] for non-numeric values, [`as_string`] always succeeds.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use ns_lookup::{info::NsKind, resolve};
///
/// let map = HashMap::from([("Key", 1234.5_f64)]);
/// let value = resolve(&map, &["Key"]).unwrap();
///
/// assert_eq!(value.kind(), NsKind::Float);
/// assert_eq!(value.as_int(), Ok(1234));
/// assert_eq!(value.as_float(), Ok(1234.5));
/// assert_eq!(value.as_string(), "1234.5");
/// assert_eq!(value.downcast_ref::<f64>(), Some(&1234.5));
/// ```
///
/// [`as_float`]: Value::as_float
/// [`as_int`]: Value::as_int
/// [`as_string`]: Value::as_string
#[derive(Clone, Copy)]
pub struct Value<'a> {
    inner: &'a dyn Namespace,
}

impl<'a> Value<'a> {
    /// Wraps a value.
    #[inline(always)]
    pub const fn new(inner: &'a dyn Namespace) -> Self {
        Self { inner }
    }

    /// Returns the wrapped value as it was resolved.
    #[inline(always)]
    pub const fn get(self) -> &'a dyn Namespace {
        self.inner
    }

    /// Looks through boxed layers, `None` if one is absent.
    fn peeled(self) -> Option<&'a dyn Namespace> {
        let mut value = self.inner;
        loop {
            match value.ns_ref() {
                NsRef::Boxed(Some(inner)) => value = inner,
                NsRef::Boxed(None) => return None,
                _ => return Some(value),
            }
        }
    }

    fn scalar(self) -> Option<ScalarRef<'a>> {
        match self.peeled()?.ns_ref() {
            NsRef::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    #[cold]
    fn mismatch(self, requested: NsKind) -> TypeMismatch {
        TypeMismatch {
            requested,
            actual: self.kind(),
        }
    }

    /// Returns the kind of the value, looked through boxed layers.
    #[inline]
    pub fn kind(self) -> NsKind {
        self.peeled().map_or(NsKind::Nil, |value| value.ns_kind())
    }

    /// Returns `true` if the value, or one of its boxed layers, is absent.
    #[inline]
    pub fn is_nil(self) -> bool {
        self.peeled().is_none()
    }

    /// Returns `true` if [`as_float`](Value::as_float) and
    /// [`as_int`](Value::as_int) succeed for this value.
    #[inline]
    pub fn is_numeric(self) -> bool {
        is_numeric(self.kind())
    }

    /// Reads a numeric value as `f64`, widening integers.
    pub fn as_float(self) -> Result<f64, TypeMismatch> {
        match self.scalar() {
            Some(ScalarRef::Int(v)) => Ok(v as f64),
            Some(ScalarRef::UInt(v)) => Ok(v as f64),
            Some(ScalarRef::F32(v)) => Ok(f64::from(v)),
            Some(ScalarRef::F64(v)) => Ok(v),
            _ => Err(self.mismatch(NsKind::Float)),
        }
    }

    /// Reads a numeric value as `i64`.
    ///
    /// Floats are truncated toward zero, saturating at the bounds of `i64`
    /// (`NaN` reads as `0`). Unsigned values above `i64::MAX` saturate.
    pub fn as_int(self) -> Result<i64, TypeMismatch> {
        match self.scalar() {
            Some(ScalarRef::Int(v)) => Ok(v),
            Some(ScalarRef::UInt(v)) => Ok(i64::try_from(v).unwrap_or(i64::MAX)),
            Some(ScalarRef::F32(v)) => Ok(v as i64),
            Some(ScalarRef::F64(v)) => Ok(v as i64),
            _ => Err(self.mismatch(NsKind::Int)),
        }
    }

    /// Renders the value as text.
    ///
    /// A value that displays itself (see [`Namespace::display_text`]) is
    /// rendered that way. Otherwise strings are returned as is, numbers in
    /// base 10 without exponent, booleans as `true`/`false`. Records render as
    /// `{field: value, ..}` in declaration order under their visible names
    /// (transparent fields under their declared name), mappings as `{key: value, ..}`
    /// with sorted keys, absent values as `<nil>` and opaque values through
    /// their `Debug` output.
    #[inline]
    pub fn as_string(self) -> String {
        self.to_string()
    }

    /// Downcasts the value, or one of its boxed layers, to type `T`.
    pub fn downcast_ref<T: Namespace>(self) -> Option<&'a T> {
        let mut value = self.inner;
        loop {
            if let Some(found) = value.downcast_ref::<T>() {
                return Some(found);
            }
            match value.ns_ref() {
                NsRef::Boxed(Some(inner)) => value = inner,
                _ => return None,
            }
        }
    }
}

/// Returns `true` for the kinds that [`Value::as_float`] and
/// [`Value::as_int`] accept.
#[inline]
pub const fn is_numeric(kind: NsKind) -> bool {
    matches!(kind, NsKind::Int | NsKind::UInt | NsKind::Float)
}

// -----------------------------------------------------------------------------
// Rendering

fn render(value: &dyn Namespace, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(text) = value.display_text() {
        return f.write_str(&text);
    }

    match value.ns_ref() {
        NsRef::Scalar(scalar) => match scalar {
            ScalarRef::Bool(v) => write!(f, "{v}"),
            ScalarRef::Int(v) => write!(f, "{v}"),
            ScalarRef::UInt(v) => write!(f, "{v}"),
            ScalarRef::F32(v) => write!(f, "{v}"),
            ScalarRef::F64(v) => write!(f, "{v}"),
            ScalarRef::Char(v) => write!(f, "{v}"),
            ScalarRef::Str(v) => f.write_str(v),
            ScalarRef::Opaque(v) => write!(f, "{v:?}"),
        },
        NsRef::Boxed(Some(inner)) => render(inner, f),
        NsRef::Boxed(None) => f.write_str("<nil>"),
        NsRef::Record(record) => {
            let fields = record
                .iter_fields()
                .filter(|(info, _)| !info.is_hidden())
                .map(|(info, field)| {
                    let name = info.naming_rule().visible_name().unwrap_or(info.name());
                    (name, field)
                });
            render_entries(fields, f)
        }
        NsRef::Mapping(mapping) => {
            let mut entries: Vec<_> = mapping.iter_entries().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            render_entries(entries, f)
        }
    }
}

fn render_entries<'a>(
    entries: impl IntoIterator<Item = (&'a str, &'a dyn Namespace)>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.write_str("{")?;
    for (index, (name, value)) in entries.into_iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{name}: ")?;
        render(value, f)?;
    }
    f.write_str("}")
}

impl fmt::Display for Value<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.inner, f)
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("kind", &self.kind())
            .field("text", &self.as_string())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
