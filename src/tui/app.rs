use crate::filesystem::clipboard::{copy_field, ClipboardEngine};
use crate::site::navbar::NavToggle;
use crate::vault::models::{EntryField, PasswordEntry};
use crate::view::{render, RevealState, TableMarkup, Toast, MSG_HIDDEN, MSG_REVEALED};
use std::time::{Duration, Instant};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum View {
    Table,
    AddForm,
    ConfirmDelete,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormField {
    Website,
    Username,
    Password,
}

/// Entries of the hamburger menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuLink {
    Passwords,
    AddEntry,
    Quit,
}

pub const MENU_LINKS: [MenuLink; 3] = [MenuLink::Passwords, MenuLink::AddEntry, MenuLink::Quit];

impl MenuLink {
    pub fn title(self) -> &'static str {
        match self {
            MenuLink::Passwords => "Passwords",
            MenuLink::AddEntry => "Add entry",
            MenuLink::Quit => "Quit",
        }
    }
}

pub struct App {
    entries: Vec<PasswordEntry>,
    reveal: RevealState,
    pub selected: usize,
    pub view: View,
    toast: Toast,
    pub nav: NavToggle,
    pub menu_selected: usize,
    // Form state
    pub form_field: FormField,
    pub form_website: String,
    pub form_username: String,
    pub form_password: String,
}

impl App {
    pub fn new(entries: Vec<PasswordEntry>, toast_duration: Duration) -> Self {
        let reveal = RevealState::new(entries.len());
        Self {
            entries,
            reveal,
            selected: 0,
            view: View::Table,
            toast: Toast::new(toast_duration),
            nav: NavToggle::new(),
            menu_selected: 0,
            form_field: FormField::Website,
            form_website: String::new(),
            form_username: String::new(),
            form_password: String::new(),
        }
    }

    pub fn entries(&self) -> &[PasswordEntry] {
        &self.entries
    }

    pub fn table(&self) -> TableMarkup {
        render(&self.entries, &self.reveal)
    }

    pub fn next(&mut self) {
        if self.entries.is_empty() { return; }
        self.selected = (self.selected + 1).min(self.entries.len() - 1);
    }

    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Swap in a freshly loaded list. Every row goes back to masked.
    pub fn replace_entries(&mut self, new_entries: Vec<PasswordEntry>) {
        self.entries = new_entries;
        self.reveal.reset(self.entries.len());
        if self.selected >= self.entries.len() {
            self.selected = self.entries.len().saturating_sub(1);
        }
    }

    pub fn is_revealed(&self, row: usize) -> bool {
        self.reveal.is_revealed(row)
    }

    pub fn toggle_reveal(&mut self, now: Instant) {
        match self.reveal.toggle(self.selected) {
            Some(true) => self.toast(MSG_REVEALED, now),
            Some(false) => self.toast(MSG_HIDDEN, now),
            None => {}
        }
    }

    pub fn selected_entry(&self) -> Option<&PasswordEntry> {
        self.entries.get(self.selected)
    }

    pub fn copy_selected(
        &mut self,
        engine: Option<&dyn ClipboardEngine>,
        field: EntryField,
        now: Instant,
    ) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        let notice = copy_field(engine, entry, field);
        self.toast(notice, now);
    }

    pub fn toast(&mut self, msg: impl Into<String>, now: Instant) {
        self.toast.show(msg, now);
    }

    pub fn toast_message(&self) -> Option<&str> {
        self.toast.message()
    }

    pub fn tick(&mut self, now: Instant) {
        self.toast.tick(now);
    }

    // Menu (hamburger)
    pub fn toggle_menu(&mut self) {
        self.nav.click_hamburger();
        self.menu_selected = 0;
    }

    pub fn menu_next(&mut self) {
        self.menu_selected = (self.menu_selected + 1).min(MENU_LINKS.len() - 1);
    }

    pub fn menu_prev(&mut self) {
        self.menu_selected = self.menu_selected.saturating_sub(1);
    }

    /// Follow the highlighted menu link; the menu closes either way.
    pub fn follow_menu_link(&mut self) -> MenuLink {
        let link = MENU_LINKS[self.menu_selected];
        self.nav.click_link();
        match link {
            MenuLink::Passwords => self.view = View::Table,
            MenuLink::AddEntry => self.enter_add(),
            MenuLink::Quit => {}
        }
        link
    }

    // View navigation
    pub fn enter_add(&mut self) {
        self.view = View::AddForm;
        self.clear_form();
    }

    pub fn enter_confirm_delete(&mut self) {
        if self.selected_entry().is_some() {
            self.view = View::ConfirmDelete;
        }
    }

    pub fn back_to_table(&mut self) { self.view = View::Table; }

    // Form editing
    pub fn next_field(&mut self) {
        self.form_field = match self.form_field {
            FormField::Website => FormField::Username,
            FormField::Username => FormField::Password,
            FormField::Password => FormField::Website,
        };
    }
    pub fn prev_field(&mut self) {
        self.form_field = match self.form_field {
            FormField::Website => FormField::Password,
            FormField::Username => FormField::Website,
            FormField::Password => FormField::Username,
        };
    }
    pub fn update_form_char(&mut self, c: char) {
        match self.form_field {
            FormField::Website => self.form_website.push(c),
            FormField::Username => self.form_username.push(c),
            FormField::Password => self.form_password.push(c),
        }
    }
    pub fn backspace_form(&mut self) {
        match self.form_field {
            FormField::Website => { self.form_website.pop(); }
            FormField::Username => { self.form_username.pop(); }
            FormField::Password => { self.form_password.pop(); }
        }
    }

    /// Entry built from the current form input. The form keeps its text
    /// until [`App::clear_form`] is called.
    pub fn form_entry(&self) -> PasswordEntry {
        PasswordEntry::new(
            self.form_website.as_str(),
            self.form_username.as_str(),
            self.form_password.as_str(),
        )
    }

    pub fn clear_form(&mut self) {
        self.form_website.clear();
        self.form_username.clear();
        self.form_password.clear();
        self.form_field = FormField::Website;
    }
}
