use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::theme::Theme;

pub fn render_confirm(f: &mut Frame, app: &App) {
    let theme = Theme::default();
    let area = f.area();
    let target = app
        .selected_entry()
        .map(|e| format!("{} / {}", e.website, e.username))
        .unwrap_or_else(|| "(none)".to_string());
    let text = format!("Delete entry {} ({target})? (y/N)", app.selected);
    let para = Paragraph::new(text).style(theme.toast_style());
    f.render_widget(para, area);
}
