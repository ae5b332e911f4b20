use crate::vault::models::{EntryField, PasswordEntry};

pub const HEADERS: [&str; 4] = ["Website", "Username", "Password", "Delete"];
pub const EMPTY_MESSAGE: &str = "No Data to Show";

/// Same-length placeholder. Length is counted in UTF-16 code units, the way
/// the browser page measured it, so characters outside the BMP get two stars.
pub fn mask(password: &str) -> String {
    "*".repeat(password.encode_utf16().count())
}

/// Per-row masked/revealed flags. View state only: never persisted, and
/// rebuilt (all masked) whenever the list changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: Vec<bool>,
}

impl RevealState {
    pub fn new(rows: usize) -> Self {
        Self {
            revealed: vec![false; rows],
        }
    }

    pub fn reset(&mut self, rows: usize) {
        self.revealed.clear();
        self.revealed.resize(rows, false);
    }

    pub fn is_revealed(&self, row: usize) -> bool {
        self.revealed.get(row).copied().unwrap_or(false)
    }

    /// Flip `row`, returning the new state, or `None` if there is no such row.
    pub fn toggle(&mut self, row: usize) -> Option<bool> {
        let flag = self.revealed.get_mut(row)?;
        *flag = !*flag;
        Some(*flag)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct PasswordCell {
    pub masked: String,
    pub real: String,
    pub revealed: bool,
}

impl PasswordCell {
    pub fn displayed(&self) -> &str {
        if self.revealed {
            &self.real
        } else {
            &self.masked
        }
    }
}

impl std::fmt::Debug for PasswordCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCell")
            .field("masked", &self.masked)
            .field("real", &"<REDACTED>")
            .field("revealed", &self.revealed)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub index: usize,
    pub website: String,
    pub username: String,
    pub password: PasswordCell,
}

impl EntryRow {
    pub fn cell_id(&self, field: EntryField) -> String {
        format!("{}-{}", field.id_prefix(), self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Empty { message: &'static str, colspan: usize },
    Entry(EntryRow),
}

/// Structured table handed to the HTML, text and terminal renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMarkup {
    pub header: [&'static str; 4],
    pub rows: Vec<TableRow>,
}

impl TableMarkup {
    pub fn entry_rows(&self) -> impl Iterator<Item = &EntryRow> {
        self.rows.iter().filter_map(|r| match r {
            TableRow::Entry(e) => Some(e),
            TableRow::Empty { .. } => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entry_rows().next().is_none()
    }
}

pub fn render(entries: &[PasswordEntry], reveal: &RevealState) -> TableMarkup {
    let rows = if entries.is_empty() {
        vec![TableRow::Empty {
            message: EMPTY_MESSAGE,
            colspan: HEADERS.len(),
        }]
    } else {
        entries
            .iter()
            .enumerate()
            .map(|(index, e)| {
                let real = e.field(EntryField::Password).to_string();
                TableRow::Entry(EntryRow {
                    index,
                    website: e.website.clone(),
                    username: e.username.clone(),
                    password: PasswordCell {
                        masked: mask(&real),
                        real,
                        revealed: reveal.is_revealed(index),
                    },
                })
            })
            .collect()
    };
    TableMarkup {
        header: HEADERS,
        rows,
    }
}
