use crate::vault::error::VaultError;
use crate::vault::models::PasswordEntry;
use crate::vault::ports::ListCodec;

/// `JSON.stringify`-compatible encoding: a compact array of
/// `{"website","username","password"}` objects.
pub struct JsonCodec;

impl ListCodec for JsonCodec {
    fn encode(&self, entries: &[PasswordEntry]) -> Result<String, VaultError> {
        Ok(serde_json::to_string(entries)?)
    }

    fn decode(&self, data: &str) -> Result<Vec<PasswordEntry>, VaultError> {
        Ok(serde_json::from_str(data)?)
    }
}
