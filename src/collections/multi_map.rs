use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};

/// An ordered map that allows any number of values per key.
///
/// Keys iterate in ascending order. Values under the same key iterate in the order they were
/// inserted.
#[derive(Clone, PartialEq, Eq)]
pub struct MultiMap<K, V> {
    entries: BTreeMap<K, Vec<V>>,
    len: usize,
}

impl<K: Ord, V> MultiMap<K, V> {
    pub const fn new() -> MultiMap<K, V> {
        MultiMap {
            entries: BTreeMap::new(),
            len: 0,
        }
    }

    /// The total number of values, counting every value under a shared key.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `value` after any values already stored under `key` and returns a reference to it.
    pub fn insert(&mut self, key: K, value: V) -> &V {
        let values = self.entries.entry(key).or_default();
        values.push(value);
        self.len += 1;
        // SAFETY: A value was pushed on the line above.
        unsafe { values.last().unwrap_unchecked() }
    }

    /// All entries stored under `key`, in insertion order.
    pub fn equal_range<Q>(&self, key: &Q) -> impl Iterator<Item = (&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries
            .get_key_value(key)
            .into_iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key, value)))
    }

    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get(key).map_or(0, Vec::len)
    }

    /// Removes and returns every value stored under `key`.
    pub fn remove_all<Q>(&mut self, key: &Q) -> Vec<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = self.entries.remove(key).unwrap_or_default();
        self.len -= removed.len();
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key, value)))
    }
}

impl<K: Ord, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        MultiMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MultiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = MultiMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Ord + Debug, V: Debug> Debug for MultiMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
