use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::tui::views::menu::render_menu;
use crate::view::TableRow;

pub fn render_table(f: &mut Frame, app: &App) {
    let theme = Theme::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(3),    // table
            Constraint::Length(1), // footer/toast
        ])
        .split(f.area());

    let title = Paragraph::new("☰ m  Passdeck — Passwords").style(theme.title_style());
    f.render_widget(title, chunks[0]);

    let markup = app.table();
    let header = Row::new(markup.header.iter().map(|h| Cell::from(*h))).style(theme.header_style());
    let rows: Vec<Row> = markup
        .rows
        .iter()
        .map(|row| match row {
            TableRow::Empty { message, .. } => {
                Row::new(vec![Cell::from(*message)]).style(theme.muted_style())
            }
            TableRow::Entry(e) => {
                let style = if e.index == app.selected {
                    theme.selection_style()
                } else {
                    theme.normal_style()
                };
                Row::new(vec![
                    Cell::from(e.website.clone()),
                    Cell::from(e.username.clone()),
                    Cell::from(e.password.displayed().to_string()),
                    Cell::from(format!("🗑 {}", e.index)),
                ])
                .style(style)
            }
        })
        .collect();

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
        Constraint::Percentage(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Saved passwords"));
    f.render_widget(table, chunks[1]);

    let footer_text = app
        .toast_message()
        .unwrap_or("q=quit  a=add  v=view  w/u/p=copy  d=delete  m=menu");
    let footer = Paragraph::new(footer_text).style(theme.toast_style());
    f.render_widget(footer, chunks[2]);

    if app.nav.is_open() {
        render_menu(f, app);
    }
}
