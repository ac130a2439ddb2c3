use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::access::{NamespaceError, NotFoundError, ResolveSelf, suggest};
use crate::info::NamingRule;
use crate::ops::NsRef;
use crate::{Namespace, Value};

// -----------------------------------------------------------------------------
// Peel

/// A value after looking through its boxed layers.
pub(crate) enum Peeled<'a> {
    /// A layer exposes its own resolution hook.
    Hook(&'a dyn ResolveSelf),
    /// The first layer that is not boxed.
    Value(&'a dyn Namespace),
    /// An absent layer.
    Nil,
}

/// Looks through any number of boxed layers, stopping early at a hook.
pub(crate) fn peel(mut value: &dyn Namespace) -> Peeled<'_> {
    loop {
        if let Some(hook) = value.as_resolve_self() {
            return Peeled::Hook(hook);
        }
        match value.ns_ref() {
            NsRef::Boxed(Some(inner)) => value = inner,
            NsRef::Boxed(None) => return Peeled::Nil,
            _ => return Peeled::Value(value),
        }
    }
}

// -----------------------------------------------------------------------------
// Resolve

/// Resolves `path` inside `root`, one segment per level.
///
/// Each segment is matched against the names visible at the current level:
/// renamed and declared record fields, the names inside transparent fields,
/// and the string keys of mappings. Boxed and optional layers are looked
/// through. A value with a [`ResolveSelf`] hook receives the remaining path.
///
/// # Errors
///
/// - [`NamespaceError::NoPath`] if `path` is empty.
/// - [`NamespaceError::NilRoot`] if `root` is absent.
/// - [`NamespaceError::NotFound`] if a segment matches nothing, carrying the
///   closest visible names.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use ns_lookup::resolve;
///
/// let inner = HashMap::from([("SecondaryKey", "MyValue")]);
/// let root = HashMap::from([("PrimaryKey", inner)]);
///
/// let value = resolve(&root, &["PrimaryKey", "SecondaryKey"]).unwrap();
/// assert_eq!(value.as_string(), "MyValue");
/// ```
pub fn resolve<'a, S: AsRef<str>>(
    root: &'a dyn Namespace,
    path: &[S],
) -> Result<Value<'a>, NamespaceError> {
    if path.is_empty() {
        return Err(NamespaceError::NoPath);
    }
    if matches!(peel(root), Peeled::Nil) {
        return Err(NamespaceError::NilRoot);
    }

    let segments: Vec<&str> = path.iter().map(AsRef::as_ref).collect();
    let mut current = root;

    for (depth, &segment) in segments.iter().enumerate() {
        let rest = &segments[depth..];
        let level = match peel(current) {
            Peeled::Hook(hook) => {
                log::trace!("delegating {rest:?} to a resolution hook");
                return hook.resolve_self(rest);
            }
            Peeled::Value(value) => Some(value),
            Peeled::Nil => None,
        };

        let mut claimed = None;
        let found = match level {
            Some(value) => lookup(value, rest, &mut claimed),
            None => None,
        };

        current = match found {
            Some(Found::Field(field)) => match field.ns_ref() {
                NsRef::Boxed(Some(inner)) => inner,
                _ => field,
            },
            Some(Found::Resolved(value)) => return Ok(value),
            None => return Err(claimed.unwrap_or_else(|| not_found(level, segment, &segments))),
        };
    }

    Ok(Value::new(current))
}

/// The outcome of matching one segment.
enum Found<'a> {
    /// The segment named a field or key, traversal continues below it.
    Field(&'a dyn Namespace),
    /// A hook behind a transparent field resolved the whole remaining path.
    Resolved(Value<'a>),
}

/// Matches the first segment of `rest` against the names visible in `value`.
///
/// Fields are scanned in declaration order, the first match wins. A hook
/// behind a transparent field receives all of `rest`. When it fails on a
/// name it exposes, its error is kept in `claimed` and the scan goes on.
fn lookup<'a>(
    value: &'a dyn Namespace,
    rest: &[&str],
    claimed: &mut Option<NamespaceError>,
) -> Option<Found<'a>> {
    let segment = rest[0];
    match value.ns_ref() {
        NsRef::Record(record) => {
            for (info, field) in record.iter_fields() {
                if info.is_hidden() {
                    continue;
                }
                match info.naming_rule() {
                    NamingRule::Transparent => {
                        if let Some(found) = lookup_transparent(field, rest, claimed) {
                            return Some(found);
                        }
                    }
                    rule => {
                        if rule.visible_name() == Some(segment) {
                            return Some(Found::Field(field));
                        }
                    }
                }
            }
            None
        }
        NsRef::Mapping(mapping) => mapping.get(segment).map(Found::Field),
        NsRef::Boxed(_) | NsRef::Scalar(_) => None,
    }
}

fn lookup_transparent<'a>(
    field: &'a dyn Namespace,
    rest: &[&str],
    claimed: &mut Option<NamespaceError>,
) -> Option<Found<'a>> {
    match peel(field) {
        Peeled::Hook(hook) => {
            log::trace!("delegating {rest:?} to a transparent resolution hook");
            match hook.resolve_self(rest) {
                Ok(value) => Some(Found::Resolved(value)),
                Err(err) => {
                    if claimed.is_none() && exposes(hook, rest[0]) {
                        *claimed = Some(err);
                    }
                    None
                }
            }
        }
        Peeled::Value(value) => lookup(value, rest, claimed),
        Peeled::Nil => None,
    }
}

/// Returns `true` if `name` starts one of the paths of `hook`.
#[cold]
fn exposes(hook: &dyn ResolveSelf, name: &str) -> bool {
    hook.names_self(&[])
        .iter()
        .any(|path| path.first().is_some_and(|first| first == name))
}

#[cold]
fn not_found(level: Option<&dyn Namespace>, segment: &str, path: &[&str]) -> NamespaceError {
    let suggestions = level
        .map(|value| suggest(value, segment))
        .unwrap_or_default();

    log::debug!("name {segment:?} not found in {path:?}, suggesting {suggestions:?}");

    let path: Vec<String> = path.iter().map(ToString::to_string).collect();
    NotFoundError::new(segment, path, suggestions).into()
}

// -----------------------------------------------------------------------------
// Resolve delimited

/// The separator accepted by [`resolve_delimited`].
pub const PATH_DELIMITER: char = '.';

/// Splits `path` on `'.'` and [`resolve`]s the segments.
///
/// An empty string is an empty path.
///
/// ```
/// use ns_lookup::{access::NamespaceError, resolve_delimited};
/// use std::collections::BTreeMap;
///
/// let root = BTreeMap::from([("a", BTreeMap::from([("b", 1_u8)]))]);
///
/// assert_eq!(resolve_delimited(&root, "a.b").unwrap().as_int(), Ok(1));
/// assert_eq!(resolve_delimited(&root, "").unwrap_err(), NamespaceError::NoPath);
/// ```
pub fn resolve_delimited<'a>(
    root: &'a dyn Namespace,
    path: &str,
) -> Result<Value<'a>, NamespaceError> {
    if path.is_empty() {
        return Err(NamespaceError::NoPath);
    }
    let segments: Vec<&str> = path.split(PATH_DELIMITER).collect();
    resolve(root, &segments)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use crate::access::{NamespaceError, ResolveSelf};
    use crate::derive::Namespace;
    use crate::info::{FieldInfo, NsKind};
    use crate::ops::{NsRef, Record};
    use crate::{NamespaceAccess, Value, resolve, resolve_delimited};

    #[derive(Namespace)]
    struct Inner {
        #[ns("Key")]
        key: String,
    }

    #[derive(Namespace)]
    struct Embedding {
        #[ns(embed)]
        inner: Inner,
        #[ns("Other")]
        other: i32,
    }

    #[derive(Namespace)]
    struct Leaf {
        #[ns("Value")]
        value: String,
    }

    #[derive(Namespace)]
    struct Renaming {
        #[ns("rename")]
        leaf: Leaf,
    }

    fn not_found(result: Result<Value<'_>, NamespaceError>) -> (String, Vec<String>) {
        match result {
            Err(NamespaceError::NotFound(err)) => (err.segment().into(), err.suggestions().to_vec()),
            other => panic!("expected a missing name, got {other:?}"),
        }
    }

    #[test]
    fn nested_mapping() {
        let inner = HashMap::from([(String::from("SecondaryKey"), String::from("MyValue"))]);
        let root = HashMap::from([(String::from("PrimaryKey"), inner)]);

        let value = resolve(&root, &["PrimaryKey", "SecondaryKey"]).unwrap();
        assert_eq!(value.as_string(), "MyValue");
    }

    #[test]
    fn embedded_record_is_transparent() {
        let root = Embedding {
            inner: Inner { key: "Value".into() },
            other: 1,
        };
        assert_eq!(resolve(&root, &["Key"]).unwrap().as_string(), "Value");
        assert!(resolve(&root, &["inner", "Key"]).is_err());
        assert_eq!(resolve(&root, &["Other"]).unwrap().as_int(), Ok(1));
    }

    #[test]
    fn renamed_field() {
        let root = Renaming {
            leaf: Leaf { value: "Value".into() },
        };
        assert_eq!(resolve(&root, &["rename", "Value"]).unwrap().as_string(), "Value");

        let (segment, _) = not_found(resolve(&root, &["Value"]));
        assert_eq!(segment, "Value");
        let (segment, _) = not_found(resolve(&root, &["leaf", "Value"]));
        assert_eq!(segment, "leaf");
    }

    #[test]
    fn float_leaf() {
        let root = HashMap::from([("Key", 1234.5_f64)]);
        let value = resolve(&root, &["Key"]).unwrap();
        assert_eq!(value.as_int(), Ok(1234));
        assert_eq!(value.as_float(), Ok(1234.5));
    }

    #[test]
    fn suggestions_on_failure() {
        let root = HashMap::from([("Keyy", "x")]);
        let (segment, suggestions) = not_found(resolve(&root, &["Key"]));
        assert_eq!(segment, "Key");
        assert_eq!(suggestions, ["Keyy"]);

        let err = resolve(&root, &["Key"]).unwrap_err();
        let err = err.as_not_found().unwrap();
        assert_eq!(err.path(), ["Key"]);
    }

    #[test]
    fn suggestions_see_through_transparent_fields() {
        let root = Embedding {
            inner: Inner { key: "Value".into() },
            other: 1,
        };
        let (_, suggestions) = not_found(resolve(&root, &["key"]));
        assert_eq!(suggestions[0], "Key");
        assert!(!suggestions.iter().any(|name| name == "inner"));
    }

    #[test]
    fn empty_path_and_nil_root() {
        let root = HashMap::from([("a", 1_i32)]);
        let empty: [&str; 0] = [];
        assert_eq!(resolve(&root, &empty).unwrap_err(), NamespaceError::NoPath);
        assert_eq!(resolve_delimited(&root, "").unwrap_err(), NamespaceError::NoPath);

        let nil: Option<Box<Option<Inner>>> = Some(Box::new(None));
        assert_eq!(resolve(&nil, &["Key"]).unwrap_err(), NamespaceError::NilRoot);
        assert_eq!(resolve(&nil, &empty).unwrap_err(), NamespaceError::NoPath);
    }

    #[test]
    fn boxed_layers_are_looked_through() {
        let root = BTreeMap::from([(
            "a",
            Some(Box::new(Inner { key: "deep".into() })),
        )]);
        assert_eq!(resolve(&root, &["a", "Key"]).unwrap().as_string(), "deep");

        let absent: BTreeMap<&str, Option<Inner>> = BTreeMap::from([("a", None)]);
        let leaf = resolve(&absent, &["a"]).unwrap();
        assert!(leaf.is_nil());
        assert_eq!(leaf.as_string(), "<nil>");

        let (segment, suggestions) = not_found(resolve(&absent, &["a", "Key"]));
        assert_eq!(segment, "Key");
        assert!(suggestions.is_empty());
    }

    #[test]
    fn scalar_has_no_names() {
        let root = BTreeMap::from([("a", 1_u8)]);
        let (segment, _) = not_found(resolve_delimited(&root, "a.b"));
        assert_eq!(segment, "b");
    }

    #[test]
    fn first_declared_name_wins() {
        #[derive(Namespace)]
        struct Twice {
            #[ns("x")]
            first: i32,
            #[ns("x")]
            second: i32,
        }

        let root = Twice { first: 1, second: 2 };
        assert_eq!(root.lookup(&["x"]).unwrap().as_int(), Ok(1));
    }

    #[test]
    fn dyn_access() {
        let root: Box<dyn crate::Namespace> = Box::new(Renaming {
            leaf: Leaf { value: "v".into() },
        });
        assert_eq!(root.lookup_delimited("rename.Value").unwrap().as_string(), "v");
        assert_eq!(root.as_ref().lookup(&["rename"]).unwrap().kind(), NsKind::Record);
    }

    // A hand-written record with a hidden field and a hook.

    struct Settings {
        visible: u32,
        secret: String,
        dynamic: Dynamic,
    }

    static SETTINGS_FIELDS: &[FieldInfo] = &[
        FieldInfo::new("visible"),
        FieldInfo::new("secret").hidden(),
        FieldInfo::new("dynamic").with_tag("-"),
    ];

    impl crate::Namespace for Settings {
        fn ns_ref(&self) -> NsRef<'_> {
            NsRef::Record(self)
        }
    }

    impl Record for Settings {
        fn field_infos(&self) -> &'static [FieldInfo] {
            SETTINGS_FIELDS
        }

        fn field_at(&self, index: usize) -> Option<&dyn crate::Namespace> {
            match index {
                0 => Some(&self.visible),
                1 => Some(&self.secret),
                2 => Some(&self.dynamic),
                _ => None,
            }
        }
    }

    /// Resolves `env.<name>` to the name itself.
    struct Dynamic {
        names: [&'static str; 2],
    }

    impl crate::Namespace for Dynamic {
        fn ns_ref(&self) -> NsRef<'_> {
            NsRef::Scalar(crate::ops::ScalarRef::Opaque(&self.names))
        }

        fn as_resolve_self(&self) -> Option<&dyn ResolveSelf> {
            Some(self)
        }
    }

    impl ResolveSelf for Dynamic {
        fn resolve_self(&self, path: &[&str]) -> Result<Value<'_>, NamespaceError> {
            self.names
                .iter()
                .find(|name| **name == path[0])
                .map(|name| Value::new(name))
                .ok_or_else(|| {
                    crate::access::NotFoundError::new(path[0], Vec::new(), Vec::new()).into()
                })
        }

        fn names_self(&self, prefix: &[String]) -> Vec<Vec<String>> {
            self.names
                .iter()
                .map(|name| {
                    let mut path = prefix.to_vec();
                    path.push(String::from(*name));
                    path
                })
                .collect()
        }
    }

    fn settings() -> Settings {
        Settings {
            visible: 3,
            secret: "hunter2".into(),
            dynamic: Dynamic {
                names: ["alpha", "beta"],
            },
        }
    }

    #[test]
    fn hidden_fields_never_match() {
        let root = settings();
        assert_eq!(resolve(&root, &["visible"]).unwrap().as_int(), Ok(3));

        let (_, suggestions) = not_found(resolve(&root, &["secret"]));
        assert!(!suggestions.iter().any(|name| name == "secret"));
        assert!(!Value::new(&root).as_string().contains("hunter2"));
    }

    #[test]
    fn hook_behind_transparent_field() {
        let root = settings();
        assert_eq!(resolve(&root, &["beta"]).unwrap().as_string(), "beta");

        let (_, suggestions) = not_found(resolve(&root, &["alpah"]));
        assert_eq!(suggestions, ["alpha"]);
    }

    #[test]
    fn hook_receives_the_remaining_path() {
        let root = BTreeMap::from([(
            "env",
            Dynamic {
                names: ["alpha", "beta"],
            },
        )]);
        assert_eq!(resolve(&root, &["env", "alpha"]).unwrap().as_string(), "alpha");
        let (segment, _) = not_found(resolve(&root, &["env", "gamma"]));
        assert_eq!(segment, "gamma");
    }

    /// Exposes `group.member` pairs two levels deep.
    #[derive(Namespace)]
    #[ns(resolve_self)]
    struct Groups {
        admins: u32,
    }

    impl ResolveSelf for Groups {
        fn resolve_self(&self, path: &[&str]) -> Result<Value<'_>, NamespaceError> {
            match path {
                ["staff", "admins"] => Ok(Value::new(&self.admins)),
                ["staff", member, ..] => {
                    Err(crate::access::NotFoundError::new(*member, Vec::new(), Vec::new()).into())
                }
                [group, ..] => {
                    Err(crate::access::NotFoundError::new(*group, Vec::new(), Vec::new()).into())
                }
                [] => Err(NamespaceError::NoPath),
            }
        }

        fn names_self(&self, prefix: &[String]) -> Vec<Vec<String>> {
            let mut path = prefix.to_vec();
            path.extend([String::from("staff"), String::from("admins")]);
            alloc::vec![path]
        }
    }

    #[derive(Namespace)]
    struct Directory {
        #[ns("-")]
        groups: Groups,
        owner: String,
    }

    fn directory() -> Directory {
        Directory {
            groups: Groups { admins: 2 },
            owner: "root".into(),
        }
    }

    #[test]
    fn transparent_hook_receives_the_remaining_path() {
        let root = directory();
        let paths = crate::names(&root);
        assert_eq!(paths, [["staff", "admins"].as_slice(), ["owner"].as_slice()]);
        for path in &paths {
            assert!(resolve(&root, path).is_ok(), "{path:?} does not resolve");
        }
        assert_eq!(resolve(&root, &["staff", "admins"]).unwrap().as_int(), Ok(2));
        assert_eq!(resolve(&root, &["owner"]).unwrap().as_string(), "root");
    }

    #[test]
    fn transparent_hook_reports_its_own_failure() {
        let root = directory();

        let (segment, _) = not_found(resolve(&root, &["staff", "guests"]));
        assert_eq!(segment, "guests");

        let (segment, suggestions) = not_found(resolve(&root, &["staf"]));
        assert_eq!(segment, "staf");
        assert_eq!(suggestions, ["staff"]);
    }
}
