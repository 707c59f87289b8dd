//! Review table for a processed session (the terminal counterpart of the
//! result grid: checkbox, row number, the five exported columns).

use crate::config::Config;
use crate::core::session::Session;
use crate::models::telop_row::HEADERS;
use crate::ui::messages::color_enabled;
use crate::utils::table::{Column, Table};

pub fn build_table(session: &Session, cfg: &Config) -> Table {
    let marker = if session.all_selected() { "[x]" } else { "[ ]" };

    let mut columns = vec![Column::left(marker), Column::right("#")];
    columns.push(Column::right(HEADERS[0]));
    columns.push(Column::left(HEADERS[1]));
    columns.push(Column::wrapped(HEADERS[2], cfg.caption_width));
    columns.push(Column::right(HEADERS[3]));
    columns.push(Column::right(HEADERS[4]));

    let mut table = Table::new(columns)
        .with_color(cfg.color && color_enabled())
        .with_separator(cfg.separator());

    for (i, row) in session.rows().iter().enumerate() {
        let selected = session.is_selected(i);
        let mut cells = vec![
            if selected { "[x]" } else { "[ ]" }.to_string(),
            (i + 1).to_string(),
        ];
        cells.extend(row.cells());
        table.add_row(cells, selected);
    }

    table
}

/// Rendered table, or a short notice when there is nothing to show.
pub fn render(session: &Session, cfg: &Config) -> String {
    if session.rows().is_empty() {
        return "No processed rows.\n".to_string();
    }

    let table = build_table(session, cfg);
    let mut out = table.render();

    let selected = session.selected().len();
    out.push_str(&format!("{} rows", table.len()));
    if selected > 0 {
        out.push_str(&format!(", {selected} selected"));
    }
    out.push('\n');
    out
}
