use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, FormField};
use crate::tui::theme::Theme;
use crate::view::table::mask;

fn field_line<'a>(label: &'a str, value: String, focused: bool, theme: &'a Theme) -> Paragraph<'a> {
    let text = format!("{label}: {value}");
    let mut p = Paragraph::new(text);
    if focused {
        p = p.style(theme.selection_style());
    } else {
        p = p.style(theme.normal_style());
    }
    p
}

pub fn render_form(f: &mut Frame, app: &App) {
    let theme = Theme::default();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(1),    // form
            Constraint::Length(1), // footer
        ])
        .split(f.area());

    f.render_widget(
        Paragraph::new("Passdeck — Add Password").style(theme.title_style()),
        chunks[0],
    );

    let block = Block::default().borders(Borders::ALL).title("Form");
    let inner_area = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner_area);

    let website = field_line(
        "Website",
        app.form_website.clone(),
        matches!(app.form_field, FormField::Website),
        &theme,
    );
    let username = field_line(
        "Username",
        app.form_username.clone(),
        matches!(app.form_field, FormField::Username),
        &theme,
    );
    // Typed password stays masked, like an <input type="password">
    let password = field_line(
        "Password",
        mask(&app.form_password),
        matches!(app.form_field, FormField::Password),
        &theme,
    );

    f.render_widget(website, inner[0]);
    f.render_widget(username, inner[1]);
    f.render_widget(password, inner[2]);

    let footer = app
        .toast_message()
        .unwrap_or("Esc=cancel  Tab/Shift-Tab=switch  Enter=save");
    f.render_widget(Paragraph::new(footer).style(theme.toast_style()), chunks[2]);
}
