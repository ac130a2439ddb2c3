//! Provide `FixedHasher`, based on `foldhash` crate.
//!
//! Provide stable hash results through a fixed hash seed.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

/// A fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x6E73_5F6C_6F6F_6B75);

/// A fixed hasher provided hash results that only related on the input.
///
/// A type alias for [`foldhash::fast::FoldHasher`] .
///
/// Which can be created through [`FixedHashState::build_hasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Fixed Hash State based upon a random but fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use ns_utils::hash::FixedHashState;
///
/// let hash = |s: &str| {
///     let mut hasher = FixedHashState.build_hasher();
///     s.hash(&mut hasher);
///     hasher.finish()
/// };
///
/// assert_eq!(hash("PrimaryKey"), hash("PrimaryKey"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::hash::BuildHasher;

    use super::FixedHashState;
    use crate::hash::HashSet;

    #[test]
    fn fixed_state_is_deterministic() {
        let a = FixedHashState.hash_one("Key");
        let b = FixedHashState.hash_one("Key");
        assert_eq!(a, b);
        assert_ne!(a, FixedHashState.hash_one("Keyy"));
    }

    #[test]
    fn set_deduplicates_names() {
        let mut set: HashSet<&str> = HashSet::default();
        assert!(set.insert("Key"));
        assert!(!set.insert("Key"));
        assert_eq!(set.len(), 1);
    }
}
