use alloc::string::String;
use alloc::vec::Vec;
use core::any::TypeId;

use crate::Namespace;
use crate::access::{Peeled, peel};
use crate::info::NamingRule;
use crate::ops::NsRef;

// -----------------------------------------------------------------------------
// PathCollector

/// An accumulator of paths, used by enumeration.
///
/// Keeps the prefix of the value being visited and the paths emitted so far.
/// Passed to [`Namespace::absent_names`] and [`Namespace::type_names`]
/// so that types can describe the paths they would expose.
pub struct PathCollector {
    prefix: Vec<String>,
    paths: Vec<Vec<String>>,
    visiting: Vec<TypeId>,
    cut: bool,
}

impl PathCollector {
    /// Creates an empty collector with an empty prefix.
    #[inline]
    pub const fn new() -> Self {
        Self {
            prefix: Vec::new(),
            paths: Vec::new(),
            visiting: Vec::new(),
            cut: false,
        }
    }

    /// Returns the prefix of the value being visited.
    #[inline]
    pub fn prefix(&self) -> &[String] {
        &self.prefix
    }

    /// Returns the number of paths emitted so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Emits the current prefix as a complete path.
    #[inline]
    pub fn emit(&mut self) {
        self.paths.push(self.prefix.clone());
    }

    /// Emits already complete paths.
    #[inline]
    pub fn extend(&mut self, paths: impl IntoIterator<Item = Vec<String>>) {
        self.paths.extend(paths);
    }

    /// Runs `func` with `segment` appended to the prefix.
    pub fn with_segment(&mut self, segment: &str, func: impl FnOnce(&mut Self)) {
        self.prefix.push(String::from(segment));
        func(self);
        self.prefix.pop();
    }

    /// Runs `func` with `segment` appended to the prefix, and emits the
    /// prefix itself if `func` emitted nothing.
    ///
    /// Nothing is emitted when `func` stopped at a recursive type, see
    /// [`with_type`](PathCollector::with_type).
    pub fn with_leaf_segment(&mut self, segment: &str, func: impl FnOnce(&mut Self)) {
        self.with_segment(segment, |collector| {
            let before = collector.len();
            let outer_cut = core::mem::replace(&mut collector.cut, false);
            func(collector);
            if collector.len() == before && !collector.cut {
                collector.emit();
            }
            collector.cut = outer_cut;
        });
    }

    /// Runs `func` unless a value of type `T` is already being described
    /// further up the prefix.
    ///
    /// Keeps the schema of recursive types such as
    /// `struct Node { next: Option<Box<Node>> }` finite. The prefix where
    /// the walk stops is incomplete and is not emitted as a path.
    pub fn with_type<T: 'static>(&mut self, func: impl FnOnce(&mut Self)) {
        let id = TypeId::of::<T>();
        if self.visiting.contains(&id) {
            self.cut = true;
            return;
        }
        self.visiting.push(id);
        func(self);
        self.visiting.pop();
    }

    #[inline]
    fn finish(self) -> Vec<Vec<String>> {
        self.paths
    }
}

// -----------------------------------------------------------------------------
// Names

/// Returns every path that [`resolve`](crate::resolve) accepts in `root`.
///
/// Record fields come in declaration order, mapping keys in sorted order.
/// A named field or a mapping key whose value exposes no deeper names is
/// a path of its own. Absent optional fields report the paths a populated
/// value would expose.
///
/// ```
/// use std::collections::BTreeMap;
/// use ns_lookup::names;
///
/// let root = BTreeMap::from([
///     ("b", BTreeMap::from([("y", 2), ("x", 1)])),
///     ("a", BTreeMap::from([("z", 3)])),
/// ]);
///
/// assert_eq!(names(&root), [["a", "z"], ["b", "x"], ["b", "y"]]);
/// assert!(names(&5_i32).is_empty());
/// ```
pub fn names(root: &dyn Namespace) -> Vec<Vec<String>> {
    let mut collector = PathCollector::new();
    collect(root, &mut collector);
    collector.finish()
}

fn collect(value: &dyn Namespace, collector: &mut PathCollector) {
    if let Some(hook) = value.as_resolve_self() {
        let paths = hook.names_self(collector.prefix());
        collector.extend(paths);
        return;
    }

    match value.ns_ref() {
        NsRef::Record(record) => {
            for (info, field) in record.iter_fields() {
                if info.is_hidden() {
                    continue;
                }
                match info.naming_rule() {
                    NamingRule::Transparent => collect(field, collector),
                    NamingRule::Renamed(name) | NamingRule::Declared(name) => {
                        collector.with_leaf_segment(name, |collector| collect(field, collector));
                    }
                }
            }
        }
        NsRef::Mapping(mapping) => {
            let mut entries: Vec<_> = mapping.iter_entries().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            for (key, entry) in entries {
                if is_branch(entry) {
                    collector.with_segment(key, |collector| collect(entry, collector));
                } else {
                    collector.with_segment(key, PathCollector::emit);
                }
            }
        }
        NsRef::Boxed(Some(inner)) => collect(inner, collector),
        NsRef::Boxed(None) => value.absent_names(collector),
        NsRef::Scalar(_) => {}
    }
}

fn is_branch(value: &dyn Namespace) -> bool {
    match peel(value) {
        Peeled::Hook(_) => true,
        Peeled::Value(value) => value.ns_kind().is_container(),
        Peeled::Nil => false,
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::derive::Namespace;
    use crate::{NamespaceAccess, names, resolve};

    #[derive(Namespace)]
    struct B {
        #[ns("B")]
        b: String,
    }

    #[derive(Namespace)]
    struct Root {
        #[ns("A")]
        a: B,
        #[ns("C")]
        c: String,
    }

    #[derive(Namespace)]
    struct Server {
        host: String,
        port: u16,
    }

    #[derive(Namespace)]
    struct Config {
        #[ns(flatten)]
        server: Server,
        #[ns("db")]
        database: BTreeMap<String, Option<String>>,
        backup: Option<Server>,
        #[ns(skip)]
        #[allow(dead_code)]
        token: String,
    }

    #[derive(Namespace)]
    struct Node {
        value: i32,
        next: Option<Box<Node>>,
    }

    #[test]
    fn declaration_order() {
        let root = Root {
            a: B { b: "x".into() },
            c: "y".into(),
        };
        assert_eq!(names(&root), [["A", "B"].as_slice(), ["C"].as_slice()]);
    }

    #[derive(Namespace)]
    struct Plain {
        b: String,
    }

    #[derive(Namespace)]
    struct PlainRoot {
        a: Plain,
        c: String,
    }

    #[test]
    fn untagged_fields_use_declared_names() {
        let root = PlainRoot {
            a: Plain { b: "x".into() },
            c: "y".into(),
        };
        assert_eq!(names(&root), [["a", "b"].as_slice(), ["c"].as_slice()]);
        assert_eq!(resolve(&root, &["a", "b"]).unwrap().as_string(), "x");
    }

    #[test]
    fn transparent_skipped_and_absent() {
        let config = Config {
            server: Server {
                host: "localhost".into(),
                port: 80,
            },
            database: BTreeMap::from([
                (String::from("user"), Some(String::from("admin"))),
                (String::from("pass"), None),
            ]),
            backup: None,
            token: "secret".into(),
        };

        let expected: [&[&str]; 6] = [
            &["host"],
            &["port"],
            &["db", "pass"],
            &["db", "user"],
            &["backup", "host"],
            &["backup", "port"],
        ];
        assert_eq!(config.namespace_names(), expected);
    }

    #[test]
    fn recursive_schema_is_finite() {
        let node = Node {
            value: 1,
            next: Some(Box::new(Node {
                value: 2,
                next: None,
            })),
        };
        let expected: [&[&str]; 3] = [
            &["value"],
            &["next", "value"],
            &["next", "next", "value"],
        ];
        assert_eq!(names(&node), expected);
    }

    #[derive(Namespace)]
    struct Chain {
        next: Option<Box<Chain>>,
    }

    #[test]
    fn recursion_cut_is_not_a_leaf() {
        let end = Chain { next: None };
        assert_eq!(names(&end), [["next"]]);
        assert!(resolve(&end, &["next"]).unwrap().is_nil());

        let two = Chain {
            next: Some(Box::new(Chain { next: None })),
        };
        assert_eq!(names(&two), [["next", "next"]]);
    }

    #[test]
    fn every_present_path_resolves() {
        let root = BTreeMap::from([
            ("plain", BTreeMap::from([("leaf", 1_i32)])),
            ("empty", BTreeMap::new()),
        ]);
        let paths: Vec<Vec<String>> = names(&root);
        assert!(!paths.is_empty());
        for path in &paths {
            assert!(resolve(&root, path).is_ok(), "{path:?} does not resolve");
        }

        let config = Root {
            a: B { b: "x".into() },
            c: "y".into(),
        };
        for path in names(&config) {
            let value = resolve(&config, &path).unwrap();
            assert!(!value.as_string().is_empty());
        }
    }
}
