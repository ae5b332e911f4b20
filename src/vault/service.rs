use crate::vault::error::VaultError;
use crate::vault::models::{PasswordEntry, PasswordList};
use crate::vault::ports::{KeyValueStore, ListCodec};
use std::sync::Arc;

pub const DEFAULT_STORAGE_KEY: &str = "passwords";

/// The password list living under a single key of a [`KeyValueStore`].
///
/// Every mutation is a full read-modify-write of that key. Nothing guards
/// against a second process writing the same key in between.
pub struct PasswordStore {
    store: Arc<dyn KeyValueStore>,
    codec: Arc<dyn ListCodec>,
    key: String,
}

impl PasswordStore {
    pub fn new(store: Arc<dyn KeyValueStore>, codec: Arc<dyn ListCodec>) -> Self {
        Self::with_key(store, codec, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(
        store: Arc<dyn KeyValueStore>,
        codec: Arc<dyn ListCodec>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            store,
            codec,
            key: key.into(),
        }
    }

    /// Current list. Missing key, unreadable storage and malformed data all
    /// read as an empty list.
    pub fn load(&self) -> PasswordList {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "storage read failed, using empty list");
                return Vec::new();
            }
        };
        match self.codec.decode(&raw) {
            Ok(entries) => {
                tracing::debug!(key = %self.key, count = entries.len(), "loaded password list");
                entries
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "stored list is malformed, using empty list");
                Vec::new()
            }
        }
    }

    /// Overwrite the key with `entries`.
    pub fn save(&self, entries: &[PasswordEntry]) -> Result<(), VaultError> {
        let encoded = self.codec.encode(entries)?;
        self.store.set_item(&self.key, &encoded)?;
        tracing::debug!(key = %self.key, count = entries.len(), bytes = encoded.len(), "saved password list");
        Ok(())
    }

    pub fn add(&self, entry: PasswordEntry) -> Result<(), VaultError> {
        let mut entries = self.load();
        entries.push(entry);
        self.save(&entries)?;
        tracing::debug!(position = entries.len() - 1, "appended entry");
        Ok(())
    }

    /// Remove the entry at `index`, returning it. Out of range leaves storage untouched.
    pub fn remove_at(&self, index: usize) -> Result<PasswordEntry, VaultError> {
        let mut entries = self.load();
        if index >= entries.len() {
            return Err(VaultError::IndexOutOfRange {
                index,
                len: entries.len(),
            });
        }
        let removed = entries.remove(index);
        self.save(&entries)?;
        tracing::debug!(position = index, remaining = entries.len(), "removed entry");
        Ok(removed)
    }

    /// Like [`remove_at`](Self::remove_at), but only if the entry at `index`
    /// is still `expected`. Covers the gap between showing an entry and deleting it.
    pub fn remove_confirmed(
        &self,
        index: usize,
        expected: &PasswordEntry,
    ) -> Result<PasswordEntry, VaultError> {
        let mut entries = self.load();
        match entries.get(index) {
            None => {
                return Err(VaultError::IndexOutOfRange {
                    index,
                    len: entries.len(),
                })
            }
            Some(current) if current != expected => {
                tracing::debug!(position = index, "entry changed before delete");
                return Err(VaultError::EntryChanged { index });
            }
            Some(_) => {}
        }
        let removed = entries.remove(index);
        self.save(&entries)?;
        tracing::debug!(position = index, remaining = entries.len(), "removed confirmed entry");
        Ok(removed)
    }

    pub fn get(&self, index: usize) -> Result<PasswordEntry, VaultError> {
        let mut entries = self.load();
        if index >= entries.len() {
            return Err(VaultError::IndexOutOfRange {
                index,
                len: entries.len(),
            });
        }
        Ok(entries.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::store::MemoryKeyValueStore;
    use crate::vault::codec::JsonCodec;

    fn store() -> (Arc<MemoryKeyValueStore>, PasswordStore) {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let svc = PasswordStore::new(kv.clone(), Arc::new(JsonCodec));
        (kv, svc)
    }

    #[test]
    fn missing_key_loads_empty() {
        let (_, svc) = store();
        assert!(svc.load().is_empty());
    }

    #[test]
    fn malformed_value_loads_empty() {
        let (kv, svc) = store();
        kv.set_item("passwords", "{not json").unwrap();
        assert!(svc.load().is_empty());
    }

    #[test]
    fn out_of_range_remove_keeps_storage() {
        let (kv, svc) = store();
        svc.add(PasswordEntry::new("a.com", "u1", "pw1")).unwrap();
        let before = kv.get_item("passwords").unwrap();

        let err = svc.remove_at(3).unwrap_err();
        assert!(matches!(err, VaultError::IndexOutOfRange { index: 3, len: 1 }));
        assert_eq!(kv.get_item("passwords").unwrap(), before);
    }

    #[test]
    fn remove_confirmed_refuses_a_changed_row() {
        let (kv, svc) = store();
        let a = PasswordEntry::new("a.com", "u1", "pw1");
        svc.add(a.clone()).unwrap();
        let shown = svc.get(0).unwrap();

        // Someone else rewrites the list between confirm and delete
        svc.save(&[PasswordEntry::new("b.com", "u2", "pw22")]).unwrap();
        let before = kv.get_item("passwords").unwrap();
        let err = svc.remove_confirmed(0, &shown).unwrap_err();
        assert!(matches!(err, VaultError::EntryChanged { index: 0 }));
        assert_eq!(kv.get_item("passwords").unwrap(), before);

        svc.save(&[a.clone()]).unwrap();
        assert_eq!(svc.remove_confirmed(0, &shown).unwrap(), a);
        assert!(svc.load().is_empty());
    }

    #[test]
    fn custom_key_is_isolated() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let a = PasswordStore::with_key(kv.clone(), Arc::new(JsonCodec), "work");
        let b = PasswordStore::new(kv.clone(), Arc::new(JsonCodec));
        a.add(PasswordEntry::new("a.com", "u1", "pw1")).unwrap();
        assert_eq!(a.load().len(), 1);
        assert!(b.load().is_empty());
    }
}
