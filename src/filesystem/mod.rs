pub mod clipboard;
pub mod secure;
pub mod store;
