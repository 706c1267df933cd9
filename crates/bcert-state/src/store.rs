//! # Generic In-Memory Store
//!
//! Thread-safe, cloneable key-value map keyed by [`CertificateId`].
//!
//! All operations are synchronous (the lock is `parking_lot`, not
//! `tokio::sync`) because no caller holds it across an `.await`.
//! `parking_lot::RwLock` does not poison, so a panicking writer cannot
//! wedge the store for every later request.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use bcert_core::CertificateId;

/// Cloneable handle to a shared map. Clones share the same data.
#[derive(Debug)]
pub struct Store<T: Clone + Send + Sync> {
    data: Arc<RwLock<HashMap<CertificateId, T>>>,
}

impl<T: Clone + Send + Sync> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: Clone + Send + Sync> Store<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a record, returning the previous value if the key existed.
    pub fn insert(&self, id: CertificateId, value: T) -> Option<T> {
        self.data.write().insert(id, value)
    }

    /// Retrieve a copy of a record.
    pub fn get(&self, id: &CertificateId) -> Option<T> {
        self.data.read().get(id).cloned()
    }

    /// Run `f` against a record under a single write lock.
    ///
    /// Returns `None` if the record doesn't exist. Lookup and mutation are
    /// one critical section, so no other writer can interleave.
    pub fn update<R>(&self, id: &CertificateId, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.data.write().get_mut(id).map(f)
    }

    /// Check if a record exists.
    pub fn contains(&self, id: &CertificateId) -> bool {
        self.data.read().contains_key(id)
    }

    /// Return the number of records.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + Send + Sync> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_and_overwrite() {
        let store: Store<&'static str> = Store::new();
        let id = CertificateId::new();
        assert!(store.insert(id, "first").is_none());
        assert_eq!(store.insert(id, "second"), Some("first"));
        assert_eq!(store.get(&id), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_missing_returns_none() {
        let store: Store<u32> = Store::new();
        assert!(store.update(&CertificateId::new(), |v| *v += 1).is_none());
    }

    #[test]
    fn update_mutates_in_place() {
        let store: Store<u32> = Store::new();
        let id = CertificateId::new();
        store.insert(id, 1);
        assert_eq!(store.update(&id, |v| std::mem::replace(v, 5)), Some(1));
        assert_eq!(store.get(&id), Some(5));
    }

    #[test]
    fn clones_share_data() {
        let a: Store<u32> = Store::default();
        let b = a.clone();
        let id = CertificateId::new();
        a.insert(id, 7);
        assert!(b.contains(&id));
        assert!(!b.is_empty());
    }
}
