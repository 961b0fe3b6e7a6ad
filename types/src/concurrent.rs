//! Thread-safe hash-backed set.

use std::fmt;
use std::hash::Hash;

use dashmap::DashMap;

/// A set stored as the key set of a sharded concurrent hash map.
///
/// Safe for arbitrary concurrent use. Iteration is weakly consistent: it
/// reflects some state of the set during traversal and never fails on
/// concurrent mutation, but elements inserted or removed mid-iteration may
/// or may not be seen.
pub struct ConcurrentSet<T: Eq + Hash>(DashMap<T, ()>);

impl<T: Eq + Hash> ConcurrentSet<T> {
    pub fn new() -> Self { Self(DashMap::new()) }

    pub fn with_capacity(capacity: usize) -> Self { Self(DashMap::with_capacity(capacity)) }

    /// Inserts `value`, returning true iff it was not already present.
    pub fn insert(&self, value: T) -> bool { self.0.insert(value, ()).is_none() }

    /// Removes `value`, returning true iff it was present.
    pub fn remove(&self, value: &T) -> bool { self.0.remove(value).is_some() }

    pub fn contains(&self, value: &T) -> bool { self.0.contains_key(value) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn clear(&self) { self.0.clear() }
}

impl<T: Eq + Hash + Clone> ConcurrentSet<T> {
    /// Weakly consistent iteration over cloned elements.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ { self.0.iter().map(|entry| entry.key().clone()) }
}

impl<T: Eq + Hash> Default for ConcurrentSet<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Eq + Hash> FromIterator<T> for ConcurrentSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<T: Eq + Hash> Extend<T> for ConcurrentSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Eq + Hash + fmt::Debug + Clone> fmt::Debug for ConcurrentSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.debug_set().entries(self.iter()).finish() }
}
