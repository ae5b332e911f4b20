use passdeck::config::{Config, ConfigError};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const VARS: [&str; 6] = [
    "PASSDECK_STORAGE_PATH",
    "PASSDECK_STORAGE_KEY",
    "PASSDECK_QUOTA_BYTES",
    "PASSDECK_TOAST_MS",
    "PASSDECK_DATA_DIR",
    "PASSDECK_CONFIG_DIR",
];

fn isolate(root: &Path) {
    for v in VARS {
        env::remove_var(v);
    }
    env::set_var("HOME", root);
    env::set_var("PASSDECK_CONFIG_DIR", root.join("cfg"));
}

fn write_config_file(root: &Path, content: &str) {
    let dir = root.join("cfg").join("passdeck");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), content).expect("write config file");
}

#[test]
#[serial]
fn storage_path_precedence_cli_over_env_and_file() {
    let td = tempdir().unwrap();
    isolate(td.path());
    write_config_file(td.path(), "storage_path = \"/tmp/cfg_storage.json\"\n");
    env::set_var("PASSDECK_STORAGE_PATH", "/tmp/env_storage.json");

    let cli_path = PathBuf::from("/tmp/cli_storage.json");
    let cfg = Config::create(Some(cli_path.clone())).unwrap();
    assert_eq!(cfg.storage_path, cli_path);

    let cfg = Config::create(None).unwrap();
    assert_eq!(cfg.storage_path, PathBuf::from("/tmp/env_storage.json"));

    env::remove_var("PASSDECK_STORAGE_PATH");
    let cfg = Config::create(None).unwrap();
    assert_eq!(cfg.storage_path, PathBuf::from("/tmp/cfg_storage.json"));
}

#[test]
#[serial]
fn defaults_without_config() {
    let td = tempdir().unwrap();
    isolate(td.path());
    let data_root = td.path().join("data");
    env::set_var("PASSDECK_DATA_DIR", &data_root);

    let cfg = Config::create(None).unwrap();
    assert_eq!(cfg.storage_path, data_root.join("passdeck").join("storage.json"));
    assert_eq!(cfg.storage_key, "passwords");
    assert_eq!(cfg.quota_bytes, None);
    assert_eq!(cfg.toast_ms, 2500);
    assert_eq!(cfg.toast_duration().as_millis(), 2500);
}

#[test]
#[serial]
fn env_overrides_file_for_key_quota_and_toast() {
    let td = tempdir().unwrap();
    isolate(td.path());
    write_config_file(
        td.path(),
        "storage_key = \"vault\"\nquota_bytes = 1024\ntoast_ms = 1000\n",
    );
    let cfg = Config::create(None).unwrap();
    assert_eq!(cfg.storage_key, "vault");
    assert_eq!(cfg.quota_bytes, Some(1024));
    assert_eq!(cfg.toast_ms, 1000);

    env::set_var("PASSDECK_STORAGE_KEY", "other");
    env::set_var("PASSDECK_QUOTA_BYTES", "2048");
    env::set_var("PASSDECK_TOAST_MS", "500");
    let cfg = Config::create(None).unwrap();
    assert_eq!(cfg.storage_key, "other");
    assert_eq!(cfg.quota_bytes, Some(2048));
    assert_eq!(cfg.toast_ms, 500);
}

#[test]
#[serial]
fn malformed_config_file_falls_back_to_defaults() {
    let td = tempdir().unwrap();
    isolate(td.path());
    write_config_file(td.path(), "storage_key = [this is not toml");
    let cfg = Config::create(None).unwrap();
    assert_eq!(cfg.storage_key, "passwords");
}

#[test]
#[serial]
fn invalid_values_are_rejected() {
    let td = tempdir().unwrap();
    isolate(td.path());
    env::set_var("PASSDECK_TOAST_MS", "0");
    assert!(matches!(
        Config::create(None),
        Err(ConfigError::ZeroToastDuration)
    ));
    env::remove_var("PASSDECK_TOAST_MS");

    env::set_var("PASSDECK_STORAGE_KEY", "  ");
    assert!(matches!(
        Config::create(None),
        Err(ConfigError::EmptyStorageKey)
    ));
    env::remove_var("PASSDECK_STORAGE_KEY");
}
