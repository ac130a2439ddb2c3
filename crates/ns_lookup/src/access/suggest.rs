use alloc::string::{String, ToString};
use alloc::vec::Vec;

use ns_utils::hash::HashSet;

use crate::Namespace;
use crate::access::{Peeled, peel};
use crate::info::NamingRule;
use crate::ops::NsRef;

/// The minimum Jaro-Winkler similarity for a name to be suggested.
///
/// Names containing the failed segment as a subsequence are suggested
/// regardless of their similarity.
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Returns the names visible in `value` that are close to `segment`, best first.
///
/// Candidates are the names a lookup at this level would match, including
/// those inside transparent fields. Comparison ignores case. An exact match
/// comes first, the others follow by descending similarity, then by name.
/// An empty segment has no close names.
///
/// ```
/// use std::collections::HashMap;
/// use ns_lookup::access::suggest;
///
/// let map = HashMap::from([("Keyy", 1), ("key", 2), ("Other", 3)]);
/// assert_eq!(suggest(&map, "Key"), ["key", "Keyy"]);
/// assert!(suggest(&7_i32, "Key").is_empty());
/// ```
pub fn suggest(value: &dyn Namespace, segment: &str) -> Vec<String> {
    if segment.is_empty() {
        return Vec::new();
    }
    let mut candidates = Vec::new();
    collect_candidates(value, &mut candidates);
    rank(segment, &candidates)
}

fn collect_candidates(value: &dyn Namespace, out: &mut Vec<String>) {
    match value.ns_ref() {
        NsRef::Record(record) => {
            for (info, field) in record.iter_fields() {
                if info.is_hidden() {
                    continue;
                }
                match info.naming_rule() {
                    NamingRule::Transparent => collect_transparent(field, out),
                    rule => out.extend(rule.visible_name().map(String::from)),
                }
            }
        }
        NsRef::Mapping(mapping) => {
            out.extend(mapping.iter_entries().map(|(key, _)| key.to_string()));
        }
        NsRef::Boxed(_) | NsRef::Scalar(_) => {}
    }
}

fn collect_transparent(field: &dyn Namespace, out: &mut Vec<String>) {
    match peel(field) {
        Peeled::Hook(hook) => {
            let names = hook.names_self(&[]);
            out.extend(names.into_iter().filter_map(|path| path.into_iter().next()));
        }
        Peeled::Value(value) => collect_candidates(value, out),
        Peeled::Nil => {}
    }
}

fn rank(segment: &str, candidates: &[String]) -> Vec<String> {
    let needle = segment.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::default();

    let mut ranked: Vec<(bool, f64, &str)> = Vec::new();
    for candidate in candidates {
        if !seen.insert(candidate.as_str()) {
            continue;
        }
        let haystack = candidate.to_lowercase();
        let exact = haystack == needle;
        let score = strsim::jaro_winkler(&needle, &haystack);
        if exact || score >= SIMILARITY_THRESHOLD || is_subsequence(&needle, &haystack) {
            ranked.push((exact, score, candidate.as_str()));
        }
    }

    ranked.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| b.1.total_cmp(&a.1))
            .then_with(|| a.2.cmp(b.2))
    });
    ranked.into_iter().map(|(_, _, name)| name.to_string()).collect()
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|c| rest.any(|h| h == c))
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use alloc::collections::BTreeMap;

    use super::{is_subsequence, rank, suggest};
    use crate::access::NamespaceError;
    use crate::resolve_delimited;

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| String::from(*name)).collect()
    }

    #[test]
    fn subsequence() {
        assert!(is_subsequence("key", "keyy"));
        assert!(is_subsequence("srv", "server"));
        assert!(is_subsequence("", "anything"));
        assert!(!is_subsequence("yek", "key"));
    }

    #[test]
    fn exact_match_first() {
        let ranked = rank("NAME", &owned(&["names", "Name", "other"]));
        assert_eq!(ranked, ["Name", "names"]);
    }

    #[test]
    fn duplicates_removed_and_unrelated_dropped() {
        let ranked = rank("port", &owned(&["port", "port", "prt", "address"]));
        assert_eq!(ranked[0], "port");
        assert_eq!(ranked.iter().filter(|name| *name == "port").count(), 1);
        assert!(!ranked.iter().any(|name| name == "address"));
    }

    #[test]
    fn empty_candidates() {
        assert!(rank("anything", &[]).is_empty());
    }

    #[test]
    fn empty_segment_suggests_nothing() {
        let root = BTreeMap::from([("alpha", 1_i32), ("beta", 2), ("gamma", 3)]);
        assert!(suggest(&root, "").is_empty());

        let Err(NamespaceError::NotFound(err)) = resolve_delimited(&root, ".alpha") else {
            panic!("an empty segment matches nothing");
        };
        assert_eq!(err.segment(), "");
        assert!(err.suggestions().is_empty());
    }
}
