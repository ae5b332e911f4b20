use clap::{Parser, Subcommand, ValueEnum};

use crate::vault::models::EntryField;

const PASSDECK_LONG_VERSION: &str = concat!(
    "version: ", env!("CARGO_PKG_VERSION"), "\n",
    "git sha: ", env!("PASSDECK_GIT_SHA"), "\n",
    "build time (UTC): ", env!("PASSDECK_BUILD_TIME"), "\n",
    "target: ", env!("PASSDECK_TARGET"), "\n",
    "features: ", env!("PASSDECK_FEATURES")
);

#[derive(Parser)]
#[command(
    name = "passdeck",
    version = env!("CARGO_PKG_VERSION"),
    long_version = PASSDECK_LONG_VERSION,
    about = "🗂️ Passdeck — a plaintext password table (demo, not for real secrets)"
)]
pub struct Cli {
    /// Storage file path override
    #[arg(long, global = true)]
    pub path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append a new entry (prompts for any field not given)
    Add {
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete the entry at a table position
    Rm {
        index: usize,
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Print the password table (passwords masked)
    List {
        /// Show the real password for this position (repeatable)
        #[arg(long)]
        reveal: Vec<usize>,
        /// Output a JSON array instead of a text table
        #[arg(long)]
        json: bool,
    },
    /// Print the table as HTML rows
    Html {
        /// Render this position revealed (repeatable)
        #[arg(long)]
        reveal: Vec<usize>,
    },
    /// Copy a field of an entry to the clipboard
    Copy {
        #[arg(value_enum)]
        field: FieldArg,
        index: usize,
        /// Do not copy to clipboard
        #[arg(long)]
        no_copy: bool,
        /// Print the value to stdout (use with --no-copy for safe piping)
        #[arg(long)]
        echo: bool,
    },
    /// Send the contact form
    Contact {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        message: Option<String>,
    },
    /// Launch the interactive Terminal UI
    Tui,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum FieldArg {
    Website,
    Username,
    Password,
}

impl From<FieldArg> for EntryField {
    fn from(f: FieldArg) -> Self {
        match f {
            FieldArg::Website => EntryField::Website,
            FieldArg::Username => EntryField::Username,
            FieldArg::Password => EntryField::Password,
        }
    }
}
