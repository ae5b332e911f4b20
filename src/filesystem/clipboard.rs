use crate::vault::models::{EntryField, PasswordEntry};
use anyhow::{anyhow, Result};
use copypasta::{ClipboardContext, ClipboardProvider};
use std::sync::Mutex;

pub const COPY_FAILED: &str = "Copy failed";

pub trait ClipboardEngine: Send + Sync + 'static {
    fn set_contents(&self, contents: &str) -> Result<()>;
}

pub struct SystemClipboardEngine {
    ctx: Mutex<ClipboardContext>,
}

impl SystemClipboardEngine {
    pub fn new() -> Result<Self> {
        let ctx =
            ClipboardContext::new().map_err(|e| anyhow!("Failed to access clipboard: {e}"))?;
        Ok(Self {
            ctx: Mutex::new(ctx),
        })
    }
}

impl ClipboardEngine for SystemClipboardEngine {
    fn set_contents(&self, contents: &str) -> Result<()> {
        let mut guard = self
            .ctx
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?;
        guard
            .set_contents(contents.to_string())
            .map_err(|e| anyhow!("Failed to copy to clipboard: {e}"))
    }
}

/// Text a copy button puts on the clipboard: the trimmed cell text for
/// website/username, the exact stored value for passwords. Never the mask.
pub fn copy_text(entry: &PasswordEntry, field: EntryField) -> &str {
    match field {
        EntryField::Password => entry.field(field),
        _ => entry.field(field).trim(),
    }
}

/// Copy `field` of `entry` and return the toast to show. Failure is a
/// notification, never an error.
pub fn copy_field(
    engine: Option<&dyn ClipboardEngine>,
    entry: &PasswordEntry,
    field: EntryField,
) -> String {
    let text = copy_text(entry, field);
    let Some(engine) = engine else {
        return COPY_FAILED.to_string();
    };
    match engine.set_contents(text) {
        Ok(()) => format!("Copied: {text}"),
        Err(e) => {
            tracing::warn!(field = field.id_prefix(), error = %e, "clipboard write failed");
            COPY_FAILED.to_string()
        }
    }
}

/// Best-effort environment warning when clipboard is likely unavailable (SSH/headless)
pub fn environment_warning() -> Option<String> {
    let is_ssh = std::env::var("SSH_CONNECTION").is_ok() || std::env::var("SSH_TTY").is_ok();
    #[cfg(all(target_family = "unix", not(target_os = "macos")))]
    let headless = std::env::var("DISPLAY").is_err() && std::env::var("WAYLAND_DISPLAY").is_err();
    #[cfg(any(not(target_family = "unix"), target_os = "macos"))]
    let headless = false;
    if is_ssh {
        return Some(
            "Detected SSH session; clipboard may be unavailable. Consider --no-copy --echo"
                .to_string(),
        );
    }
    if headless {
        return Some("No DISPLAY/WAYLAND detected; clipboard may be unavailable.".to_string());
    }
    None
}
