use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("storage quota exceeded: {needed} bytes needed, limit is {limit}")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("no entry at position {index} (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("entry at position {index} changed since it was confirmed; nothing deleted")]
    EntryChanged { index: usize },

    #[error("stored list is malformed: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
