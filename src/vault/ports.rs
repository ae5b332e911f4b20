use super::error::VaultError;
use super::models::PasswordEntry;

/// Persistent string key-value storage, the shape of a browser's `localStorage`.
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when the key has never been written.
    fn get_item(&self, key: &str) -> Result<Option<String>, VaultError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), VaultError>;
}

pub trait ListCodec: Send + Sync {
    fn encode(&self, entries: &[PasswordEntry]) -> Result<String, VaultError>;
    fn decode(&self, data: &str) -> Result<Vec<PasswordEntry>, VaultError>;
}
