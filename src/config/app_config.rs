use crate::vault::service::DEFAULT_STORAGE_KEY;
use crate::view::toast::DEFAULT_TOAST_DURATION;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("storage key must not be empty")]
    EmptyStorageKey,
    #[error("toast duration must be greater than zero")]
    ZeroToastDuration,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub storage_path: Option<String>,
    pub storage_key: Option<String>,
    pub quota_bytes: Option<usize>,
    pub toast_ms: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub storage_path: PathBuf,
    pub storage_key: String,
    pub quota_bytes: Option<usize>,
    pub toast_ms: u64,
}

impl Config {
    pub fn create(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // 1) Load config file if present
        let file_cfg = load_file_config();

        // 2) Storage path: CLI > env > config file > platform default
        let storage_path = resolve_storage_path(path, &file_cfg);

        // 3) Storage key: env > config file > "passwords"
        let storage_key = env::var("PASSDECK_STORAGE_KEY")
            .ok()
            .or(file_cfg.storage_key)
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        if storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }

        // 4) Quota: env > config file > unlimited
        let quota_bytes = env::var("PASSDECK_QUOTA_BYTES")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .or(file_cfg.quota_bytes);

        // 5) Toast duration: env > config file > 2500ms
        let toast_ms = env::var("PASSDECK_TOAST_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .or(file_cfg.toast_ms)
            .unwrap_or(DEFAULT_TOAST_DURATION.as_millis() as u64);
        if toast_ms == 0 {
            return Err(ConfigError::ZeroToastDuration);
        }

        Ok(Config {
            storage_path,
            storage_key,
            quota_bytes,
            toast_ms,
        })
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

fn resolve_storage_path(cli_path: Option<PathBuf>, file_cfg: &FileConfig) -> PathBuf {
    if let Some(p) = cli_path {
        return p;
    }
    if let Ok(p) = env::var("PASSDECK_STORAGE_PATH") {
        return PathBuf::from(p);
    }
    if let Some(p) = file_cfg.storage_path.as_ref() {
        return PathBuf::from(p);
    }
    default_storage_path()
}

fn load_file_config() -> FileConfig {
    let (_, cfg) = load_file_config_with_path();
    cfg
}

pub fn load_file_config_with_path() -> (PathBuf, FileConfig) {
    // PASSDECK_CONFIG_DIR overrides the platform config dir (used by tests)
    let cfg_dir = if let Ok(p) = env::var("PASSDECK_CONFIG_DIR") {
        PathBuf::from(p)
    } else {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    };
    let path = cfg_dir.join("passdeck").join("config.toml");
    let cfg = match std::fs::read_to_string(&path) {
        Ok(s) => toml::from_str::<FileConfig>(&s).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config file");
            FileConfig::default()
        }),
        Err(_) => FileConfig::default(),
    };
    (path, cfg)
}

fn default_storage_path() -> PathBuf {
    // Prefer platform data_dir, allow override via PASSDECK_DATA_DIR, fallback to ~/.passdeck/storage.json
    if let Ok(base) = env::var("PASSDECK_DATA_DIR") {
        return PathBuf::from(base).join("passdeck").join("storage.json");
    }
    if let Some(mut p) = dirs::data_dir() {
        p.push("passdeck");
        p.push("storage.json");
        return p;
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(&home).join(".passdeck").join("storage.json")
}
