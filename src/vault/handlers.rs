use crate::config::app_config::Config;
use crate::filesystem::clipboard::{
    copy_field, copy_text, environment_warning, ClipboardEngine, SystemClipboardEngine,
};
use crate::filesystem::store::FileKeyValueStore;
use crate::vault::codec::JsonCodec;
use crate::vault::models::{EntryField, PasswordEntry};
use crate::vault::ports::{KeyValueStore, ListCodec};
use crate::vault::service::PasswordStore;
use crate::view::{render, RevealState, MSG_DELETED, MSG_SAVED};
use anyhow::{anyhow, Result};
use inquire::{Confirm, Password, Text};
use serde_json::json;
use std::sync::Arc;
use tokio::task::spawn_blocking;

/// Build the store the CLI and TUI share from resolved config.
pub fn open_store(config: &Config) -> Arc<PasswordStore> {
    let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new_with_quota(
        config.storage_path.clone(),
        config.quota_bytes,
    ));
    let codec: Arc<dyn ListCodec> = Arc::new(JsonCodec);
    Arc::new(PasswordStore::with_key(
        store,
        codec,
        config.storage_key.clone(),
    ))
}

fn reveal_rows(len: usize, rows: &[usize]) -> Result<RevealState> {
    let mut reveal = RevealState::new(len);
    for &row in rows {
        if reveal.toggle(row).is_none() {
            return Err(anyhow!(
                "no entry at position {row} (list has {len} entries)"
            ));
        }
    }
    Ok(reveal)
}

pub struct Vault {
    service: Arc<PasswordStore>,
}

impl Vault {
    pub fn create(config: &Config) -> Self {
        Vault {
            service: open_store(config),
        }
    }

    pub fn service(&self) -> Arc<PasswordStore> {
        self.service.clone()
    }

    pub async fn handle_add(&self, opts: AddOptions) -> Result<()> {
        let website = match opts.website {
            Some(w) => w,
            None => Text::new("Website").prompt()?,
        };
        let username = match opts.username {
            Some(u) => u,
            None => Text::new("Username").prompt()?,
        };
        let password = match opts.password {
            Some(p) => p,
            None => Password::new("Password").without_confirmation().prompt()?,
        };

        let entry = PasswordEntry::new(website, username, password);
        let svc = self.service.clone();
        spawn_blocking(move || svc.add(entry))
            .await
            .map_err(|_| anyhow!("task join error"))??;
        println!("✅ {MSG_SAVED}");
        Ok(())
    }

    pub async fn handle_rm(&self, index: usize, yes: bool) -> Result<()> {
        // Load to validate the position and show what is being deleted
        let svc_get = self.service.clone();
        let entry = spawn_blocking(move || svc_get.get(index))
            .await
            .map_err(|_| anyhow!("task join error"))??;

        if !yes {
            let msg = format!(
                "Delete entry {index} ({} / {}) ?",
                entry.website, entry.username
            );
            let proceed = Confirm::new(&msg).with_default(false).prompt()?;
            if !proceed {
                println!("❎ Deletion cancelled.");
                return Ok(());
            }
        }

        let svc_rm = self.service.clone();
        spawn_blocking(move || svc_rm.remove_confirmed(index, &entry))
            .await
            .map_err(|_| anyhow!("task join error"))??;
        println!("🗑️ {MSG_DELETED}");
        Ok(())
    }

    pub async fn handle_list(&self, reveal: Vec<usize>, json_mode: bool) -> Result<()> {
        let svc = self.service.clone();
        let entries = spawn_blocking(move || svc.load())
            .await
            .map_err(|_| anyhow!("task join error"))?;
        let reveal = reveal_rows(entries.len(), &reveal)?;
        let table = render(&entries, &reveal);

        if json_mode {
            let items: Vec<serde_json::Value> = table
                .entry_rows()
                .map(|row| {
                    json!({
                        "index": row.index,
                        "website": row.website,
                        "username": row.username,
                        "password": row.password.displayed(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&items)?);
            return Ok(());
        }

        print!("{}", table.to_text());
        Ok(())
    }

    pub async fn handle_html(&self, reveal: Vec<usize>) -> Result<()> {
        let svc = self.service.clone();
        let entries = spawn_blocking(move || svc.load())
            .await
            .map_err(|_| anyhow!("task join error"))?;
        let reveal = reveal_rows(entries.len(), &reveal)?;
        print!("{}", render(&entries, &reveal).to_html());
        Ok(())
    }

    pub async fn handle_copy(
        &self,
        field: EntryField,
        index: usize,
        no_copy: bool,
        echo: bool,
    ) -> Result<()> {
        let svc = self.service.clone();
        let entry = spawn_blocking(move || svc.get(index))
            .await
            .map_err(|_| anyhow!("task join error"))??;

        if echo {
            println!("{}", copy_text(&entry, field));
        }
        if no_copy {
            return Ok(());
        }

        if let Some(warn) = environment_warning() {
            eprintln!("⚠️ {warn}");
        }
        let engine = match SystemClipboardEngine::new() {
            Ok(engine) => Some(engine),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                None
            }
        };
        let notice = copy_field(
            engine.as_ref().map(|e| e as &dyn ClipboardEngine),
            &entry,
            field,
        );
        // Notifications go to stderr so stdout stays pipe-safe
        eprintln!("{notice}");
        Ok(())
    }
}

// Options for the add command, constructed by CLI layer
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub website: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}
