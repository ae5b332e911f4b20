use crate::vault::models::EntryField;
use crate::view::table::{EntryRow, TableMarkup, TableRow};
use std::fmt::Write;

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn copy_button(row: &EntryRow, field: EntryField, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{c}""#))
        .unwrap_or_default();
    format!(
        r#"<button{class_attr} onclick="copyField('{id}')"><i class="fa-solid fa-copy"></i></button>"#,
        id = row.cell_id(field)
    )
}

fn entry_row_html(row: &EntryRow) -> String {
    let (masked_style, visible_style, eye) = if row.password.revealed {
        (
            r#" style="display: none""#,
            r#" style="display: inline""#,
            "fa-eye-slash",
        )
    } else {
        ("", "", "fa-eye")
    };
    format!(
        r#"<tr>
  <td id="{website_id}">{website}
    {website_copy}
  </td>
  <td id="{username_id}">{username}
    {username_copy}
  </td>
  <td id="{password_id}" class="password-cell" data-realpassword="{real}">
    <span class="masked"{masked_style}>{masked}</span>
    <span class="visible"{visible_style}>{real}</span>
    <button class="view-btn" onclick="togglePassword({index})"><i class="fa-solid {eye}"></i></button>
    {password_copy}
  </td>
  <td>
    <button onclick="deletePassword({index})"><i class="fa-solid fa-trash"></i></button>
  </td>
</tr>"#,
        website_id = row.cell_id(EntryField::Website),
        username_id = row.cell_id(EntryField::Username),
        password_id = row.cell_id(EntryField::Password),
        website = escape_html(&row.website),
        username = escape_html(&row.username),
        real = escape_html(&row.password.real),
        masked = row.password.masked,
        index = row.index,
        website_copy = copy_button(row, EntryField::Website, None),
        username_copy = copy_button(row, EntryField::Username, None),
        password_copy = copy_button(row, EntryField::Password, Some("copy-btn")),
    )
}

impl TableMarkup {
    /// Inner markup of the page's `<table>` element.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<tr>");
        for h in self.header {
            let _ = write!(out, "<th>{h}</th>");
        }
        out.push_str("</tr>\n");
        for row in &self.rows {
            match row {
                TableRow::Empty { message, colspan } => {
                    let _ = writeln!(out, r#"<tr><td colspan="{colspan}">{message}</td></tr>"#);
                }
                TableRow::Entry(entry) => {
                    out.push_str(&entry_row_html(entry));
                    out.push('\n');
                }
            }
        }
        out
    }
}
