#![allow(clippy::module_inception)]
use crate::cli::cli::{Cli, Commands};
use crate::config::app_config::Config;
use crate::site::contact::ContactForm;
use crate::tui;
use crate::vault::handlers::{AddOptions, Vault};
use clap::Parser;
use inquire::Text;
use std::path::PathBuf;

mod cli;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let path = cli.path.map(PathBuf::from);

    match cli.command {
        Commands::Add {
            website,
            username,
            password,
        } => {
            let config = Config::create(path)?;
            let vault = Vault::create(&config);
            vault
                .handle_add(AddOptions {
                    website,
                    username,
                    password,
                })
                .await?;
        }
        Commands::Rm { index, yes } => {
            let config = Config::create(path)?;
            let vault = Vault::create(&config);
            vault.handle_rm(index, yes).await?;
        }
        Commands::List { reveal, json } => {
            let config = Config::create(path)?;
            let vault = Vault::create(&config);
            vault.handle_list(reveal, json).await?;
        }
        Commands::Html { reveal } => {
            let config = Config::create(path)?;
            let vault = Vault::create(&config);
            vault.handle_html(reveal).await?;
        }
        Commands::Copy {
            field,
            index,
            no_copy,
            echo,
        } => {
            let config = Config::create(path)?;
            let vault = Vault::create(&config);
            vault
                .handle_copy(field.into(), index, no_copy, echo)
                .await?;
        }
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            handle_contact(name, email, subject, message)?;
        }
        Commands::Tui => {
            let config = Config::create(path)?;
            tui::launch(&config).await?;
        }
    }

    Ok(())
}

fn prompt_missing(value: Option<String>, label: &str) -> anyhow::Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Text::new(label).prompt()?),
    }
}

fn handle_contact(
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
) -> anyhow::Result<()> {
    let mut form = ContactForm::new(
        prompt_missing(name, "Name")?,
        prompt_missing(email, "Email")?,
        prompt_missing(subject, "Subject")?,
        prompt_missing(message, "Message")?,
    );
    println!("{}", form.submit());
    Ok(())
}
