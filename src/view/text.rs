use crate::view::table::{TableMarkup, TableRow};

impl TableMarkup {
    /// Plain-text table for terminals that aren't running the TUI.
    /// The Delete column becomes the row position accepted by `rm`.
    pub fn to_text(&self) -> String {
        let header = ["#", self.header[0], self.header[1], self.header[2]];
        let mut lines: Vec<[String; 4]> = vec![header.map(str::to_string)];
        let mut empty_message = None;
        for row in &self.rows {
            match row {
                TableRow::Empty { message, .. } => empty_message = Some(*message),
                TableRow::Entry(e) => lines.push([
                    e.index.to_string(),
                    e.website.clone(),
                    e.username.clone(),
                    e.password.displayed().to_string(),
                ]),
            }
        }

        let mut widths = [0usize; 4];
        for line in &lines {
            for (w, cell) in widths.iter_mut().zip(line) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for line in &lines {
            let cells: Vec<String> = line
                .iter()
                .zip(widths)
                .map(|(cell, w)| format!("{cell:<w$}"))
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }
        if let Some(message) = empty_message {
            out.push_str(message);
            out.push('\n');
        }
        out
    }
}
