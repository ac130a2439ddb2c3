use alloc::boxed::Box;
use alloc::string::{String, ToString};

use serde_json::{Map, Value};

use crate::Namespace;
use crate::ops::{Mapping, NsRef, ScalarRef};

/// Objects are mappings, `null` is an absent value, arrays are opaque
/// leaves rendered as JSON text.
impl Namespace for Value {
    fn ns_ref(&self) -> NsRef<'_> {
        match self {
            Value::Null => NsRef::Boxed(None),
            Value::Bool(v) => NsRef::Scalar(ScalarRef::Bool(*v)),
            Value::Number(number) => {
                let scalar = if let Some(v) = number.as_i64() {
                    ScalarRef::Int(v)
                } else if let Some(v) = number.as_u64() {
                    ScalarRef::UInt(v)
                } else {
                    ScalarRef::F64(number.as_f64().unwrap_or(f64::NAN))
                };
                NsRef::Scalar(scalar)
            }
            Value::String(v) => NsRef::Scalar(ScalarRef::Str(v)),
            Value::Array(items) => NsRef::Scalar(ScalarRef::Opaque(items)),
            Value::Object(map) => NsRef::Mapping(map),
        }
    }

    fn display_text(&self) -> Option<String> {
        match self {
            Value::Array(_) => Some(self.to_string()),
            _ => None,
        }
    }
}

impl Namespace for Map<String, Value> {
    #[inline]
    fn ns_ref(&self) -> NsRef<'_> {
        NsRef::Mapping(self)
    }
}

impl Mapping for Map<String, Value> {
    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Namespace> {
        Self::get(self, key).map(|value| value as &dyn Namespace)
    }

    fn iter_entries(&self) -> Box<dyn Iterator<Item = (&str, &dyn Namespace)> + '_> {
        Box::new(Self::iter(self).map(|(key, value)| (key.as_str(), value as &dyn Namespace)))
    }
}

// -----------------------------------------------------------------------------
// Tests
