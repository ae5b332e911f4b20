use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem};

use crate::tui::app::{App, MENU_LINKS};
use crate::tui::theme::Theme;

pub fn render_menu(f: &mut Frame, app: &App) {
    let theme = Theme::default();
    let area = f.area();
    let width = 20.min(area.width);
    let height = (MENU_LINKS.len() as u16 + 2).min(area.height);
    let rect = Rect::new(area.x, area.y + area.height.min(1), width, height);

    let items: Vec<ListItem> = MENU_LINKS
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let style = if i == app.menu_selected {
                theme.selection_style()
            } else {
                theme.normal_style()
            };
            ListItem::new(link.title()).style(style)
        })
        .collect();

    f.render_widget(Clear, rect);
    f.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title("Menu")),
        rect,
    );
}
