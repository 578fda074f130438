//! Hash-maps and hash-sets used throughout the crate.

pub use hashbrown::hash_map::Entry;

/// Hashmap using [`hashbrown::HashMap`]
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V>;

/// Hashset using [`hashbrown::HashSet`]
pub type HashSet<K> = hashbrown::hash_set::HashSet<K>;
