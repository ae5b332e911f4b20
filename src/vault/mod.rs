pub mod codec;
pub mod error;
pub mod handlers;
pub mod models;
pub mod ports;
pub mod service;

pub use error::VaultError;
pub use models::{EntryField, PasswordEntry, PasswordList};
pub use service::PasswordStore;
