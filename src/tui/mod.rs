pub mod app;
pub mod theme;
pub mod views;

use crate::config::app_config::Config;
use crate::filesystem::clipboard::{ClipboardEngine, SystemClipboardEngine};
use crate::vault::handlers::open_store;
use crate::vault::models::EntryField;
use crate::vault::service::PasswordStore;
use crate::view::{MSG_DELETED, MSG_SAVED};
use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};
use tokio::task::spawn_blocking;

use self::app::{App, MenuLink, View};
use self::views::confirm::render_confirm;
use self::views::form::render_form;
use self::views::table::render_table;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one key press. Store calls are synchronous; each key runs to
/// completion before the next is read.
pub fn dispatch(
    app: &mut App,
    key: KeyCode,
    store: &PasswordStore,
    clipboard: Option<&dyn ClipboardEngine>,
    now: Instant,
) -> Flow {
    if app.nav.is_open() {
        match key {
            KeyCode::Char('m') | KeyCode::Esc => app.toggle_menu(),
            KeyCode::Down | KeyCode::Char('j') => app.menu_next(),
            KeyCode::Up | KeyCode::Char('k') => app.menu_prev(),
            KeyCode::Enter => {
                if app.follow_menu_link() == MenuLink::Quit {
                    return Flow::Quit;
                }
            }
            _ => {}
        }
        return Flow::Continue;
    }

    match app.view {
        View::Table => match key {
            KeyCode::Char('q') => return Flow::Quit,
            KeyCode::Down | KeyCode::Char('j') => app.next(),
            KeyCode::Up | KeyCode::Char('k') => app.prev(),
            KeyCode::Char('v') => app.toggle_reveal(now),
            KeyCode::Char('w') => app.copy_selected(clipboard, EntryField::Website, now),
            KeyCode::Char('u') => app.copy_selected(clipboard, EntryField::Username, now),
            KeyCode::Char('p') | KeyCode::Enter => {
                app.copy_selected(clipboard, EntryField::Password, now)
            }
            KeyCode::Char('a') => app.enter_add(),
            KeyCode::Char('d') => app.enter_confirm_delete(),
            KeyCode::Char('m') => app.toggle_menu(),
            _ => {}
        },
        View::AddForm => match key {
            KeyCode::Esc => app.back_to_table(),
            KeyCode::Tab => app.next_field(),
            KeyCode::BackTab => app.prev_field(),
            KeyCode::Backspace => app.backspace_form(),
            KeyCode::Enter => {
                match store.add(app.form_entry()) {
                    Ok(()) => {
                        app.clear_form();
                        app.replace_entries(store.load());
                        app.back_to_table();
                        app.toast(MSG_SAVED, now);
                    }
                    Err(e) => app.toast(format!("Save failed: {e}"), now),
                }
            }
            KeyCode::Char(c) if !c.is_control() => app.update_form_char(c),
            _ => {}
        },
        View::ConfirmDelete => match key {
            KeyCode::Char('y') => {
                let result = match app.selected_entry() {
                    Some(shown) => store.remove_confirmed(app.selected, shown),
                    None => store.remove_at(app.selected),
                };
                match result {
                    Ok(_) => app.toast(MSG_DELETED, now),
                    Err(e) => app.toast(format!("Delete failed: {e}"), now),
                }
                // Reload either way so positions match storage again
                app.replace_entries(store.load());
                app.back_to_table();
            }
            KeyCode::Esc | KeyCode::Char('n') => app.back_to_table(),
            _ => {}
        },
    }
    Flow::Continue
}

pub async fn launch(config: &Config) -> Result<()> {
    let store = open_store(config);

    let svc = store.clone();
    let entries = spawn_blocking(move || svc.load())
        .await
        .map_err(|_| anyhow!("task join error"))?;

    let clipboard = match SystemClipboardEngine::new() {
        Ok(engine) => Some(engine),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable; copy keys will report failure");
            None
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(entries, config.toast_duration());
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(250);

    let res: Result<()> = loop {
        if let Err(e) = terminal.draw(|f| match app.view {
            View::Table => render_table(f, &app),
            View::AddForm => render_form(f, &app),
            View::ConfirmDelete => render_confirm(f, &app),
        }) {
            break Err(e.into());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_millis(0));

        match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(k)) if k.kind == KeyEventKind::Press => {
                    let engine = clipboard.as_ref().map(|c| c as &dyn ClipboardEngine);
                    if dispatch(&mut app, k.code, &store, engine, Instant::now()) == Flow::Quit {
                        break Ok(());
                    }
                }
                Ok(_) => {}
                Err(e) => break Err(e.into()),
            },
            Ok(false) => {}
            Err(e) => break Err(e.into()),
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick(Instant::now());
            last_tick = Instant::now();
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    terminal.show_cursor()?;

    res
}
