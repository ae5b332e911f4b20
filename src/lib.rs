//! Passdeck: a plaintext password table kept under one key of a key-value
//! store, with HTML, text and terminal renderers.
//!
//! Not a vault. Nothing is encrypted; use it for demos only.

pub mod cli;
pub mod config;
pub mod filesystem;
pub mod logging;
pub mod site;
pub mod tui;
pub mod vault;
pub mod view;
