//! Fast hashing aliases.
//!
//! Graph-internal maps are keyed by small integer ids, where a fast
//! non-cryptographic hasher wins over SipHash.

/// A `HashMap` using `ahash` for hashing.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// A `HashSet` using `ahash` for hashing.
pub type FxHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;
