use alloc::boxed::Box;

use crate::Namespace;

/// A map addressed by string keys.
///
/// Maps whose keys are not strings still implement this trait so that they
/// report the [`Mapping`](crate::info::NsKind::Mapping) shape,
/// but their [`get`](Mapping::get) never matches and
/// [`iter_entries`](Mapping::iter_entries) yields nothing.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use ns_lookup::ops::Mapping;
///
/// let map = BTreeMap::from([("b".to_string(), 2_i32), ("a".to_string(), 1)]);
///
/// assert!(map.get("a").is_some());
/// assert!(Mapping::get(&map, "c").is_none());
/// assert_eq!(map.iter_entries().count(), 2);
/// ```
pub trait Mapping: Namespace {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<&dyn Namespace>;

    /// Returns an iterator over the string-keyed entries, in no particular order.
    fn iter_entries(&self) -> Box<dyn Iterator<Item = (&str, &dyn Namespace)> + '_>;
}
