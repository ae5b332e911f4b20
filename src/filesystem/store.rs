use crate::filesystem::secure::atomic_write_secure;
use crate::vault::error::VaultError;
use crate::vault::ports::KeyValueStore;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

type Namespace = BTreeMap<String, String>;

fn check_quota(ns: &Namespace, limit: Option<usize>) -> Result<(), VaultError> {
    let Some(limit) = limit else {
        return Ok(());
    };
    // Browsers count keys and values; do the same.
    let needed: usize = ns.iter().map(|(k, v)| k.len() + v.len()).sum();
    if needed > limit {
        return Err(VaultError::QuotaExceeded { needed, limit });
    }
    Ok(())
}

/// Key-value namespace persisted as one JSON object file:
/// `{"passwords": "[{\"website\":...}]"}`.
pub struct FileKeyValueStore {
    path: PathBuf,
    quota: Option<usize>,
}

impl FileKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path, quota: None }
    }

    /// Limit total stored bytes (keys + values), like a browser origin's storage quota.
    pub fn new_with_quota(path: PathBuf, quota: Option<usize>) -> Self {
        Self { path, quota }
    }

    fn read_namespace(&self) -> Result<Namespace, VaultError> {
        if !self.path.exists() {
            return Ok(Namespace::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Namespace::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_namespace(&self, ns: &Namespace) -> Result<(), VaultError> {
        check_quota(ns, self.quota)?;
        let s = serde_json::to_string_pretty(ns)?;
        atomic_write_secure(&self.path, s.as_bytes())
            .map_err(|e| VaultError::Storage(format!("{e:#}")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, VaultError> {
        Ok(self.read_namespace()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), VaultError> {
        // Refuse to write over a document we could not read.
        let mut ns = self.read_namespace().map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "storage file unreadable, refusing write");
            VaultError::Storage(format!("cannot read {}: {e}", self.path.display()))
        })?;
        ns.insert(key.to_string(), value.to_string());
        self.write_namespace(&ns)
    }
}

/// Process-local store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    items: Mutex<Namespace>,
    quota: Option<usize>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(limit: usize) -> Self {
        Self {
            items: Mutex::new(Namespace::new()),
            quota: Some(limit),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Namespace>, VaultError> {
        self.items
            .lock()
            .map_err(|_| VaultError::Storage("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, VaultError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), VaultError> {
        let mut guard = self.lock()?;
        let mut next = guard.clone();
        next.insert(key.to_string(), value.to_string());
        check_quota(&next, self.quota)?;
        *guard = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_quota_rejects_and_keeps_previous_value() {
        let kv = MemoryKeyValueStore::with_quota(16);
        kv.set_item("k", "small").unwrap();
        let err = kv.set_item("k", "this value is far too long").unwrap_err();
        assert!(matches!(err, VaultError::QuotaExceeded { limit: 16, .. }));
        assert_eq!(kv.get_item("k").unwrap().as_deref(), Some("small"));
    }
}
