use std::sync::Arc;

use dashmap::DashMap;

/// An external string-to-string mapping that keyed properties persist into.
///
/// Implementations must be safe for concurrent access; the keyed property
/// variant performs no synchronization of its own.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str) -> Option<String>;
}

/// In-memory [`KeyValueStore`] backed by a sharded concurrent hash map.
///
/// Cloning yields another handle to the same map, so a store can be shared
/// between properties and the code that populates it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(Arc<DashMap<String, String>>);

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> { self.0.get(key).map(|entry| entry.value().clone()) }

    fn set(&self, key: &str, value: String) { self.0.insert(key.to_owned(), value); }

    fn remove(&self, key: &str) -> Option<String> { self.0.remove(key).map(|(_, value)| value) }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let store = Self::new();
        for (key, value) in iter {
            store.0.insert(key.into(), value.into());
        }
        store
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Option<String> { (**self).get(key) }

    fn set(&self, key: &str, value: String) { (**self).set(key, value) }

    fn remove(&self, key: &str) -> Option<String> { (**self).remove(key) }
}
