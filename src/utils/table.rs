//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns so Japanese captions align.

use crate::utils::formatting::{display_width, pad_left, pad_right};
use ansi_term::{Colour, Style};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
    /// Cells wider than this are wrapped onto extra lines.
    pub max_width: Option<usize>,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
            max_width: None,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            align: Align::Right,
            ..Self::left(header)
        }
    }

    pub fn wrapped(header: &str, max_width: usize) -> Self {
        Self {
            max_width: Some(max_width.max(1)),
            ..Self::left(header)
        }
    }
}

struct Row {
    cells: Vec<String>,
    highlight: bool,
}

pub struct Table {
    pub columns: Vec<Column>,
    rows: Vec<Row>,
    color: bool,
    separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            color: false,
            separator: '-',
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Missing trailing cells are rendered empty.
    pub fn add_row(&mut self, cells: Vec<String>, highlight: bool) {
        self.rows.push(Row { cells, highlight });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn cell_lines(&self, col: usize, cell: &str) -> Vec<String> {
        match self.columns[col].max_width {
            Some(max) if display_width(cell) > max => textwrap::wrap(cell, max)
                .into_iter()
                .map(|l| l.into_owned())
                .collect(),
            _ => vec![cell.to_string()],
        }
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| display_width(&c.header))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.cells.iter().enumerate().take(self.columns.len()) {
                for l in self.cell_lines(i, cell) {
                    widths[i] = widths[i].max(display_width(&l));
                }
            }
        }

        widths
    }

    fn format_line(&self, widths: &[usize], cells: &[String]) -> String {
        let parts: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                match col.align {
                    Align::Left => pad_right(cell, widths[i]),
                    Align::Right => pad_left(cell, widths[i]),
                }
            })
            .collect();
        parts.join(" ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let header_line = self.format_line(&widths, &headers);
        if self.color {
            out.push_str(&Style::new().bold().paint(header_line.as_str()).to_string());
        } else {
            out.push_str(&header_line);
        }
        out.push('\n');

        let total = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        // Rows (una riga logica può occupare più righe fisiche)
        for row in &self.rows {
            let wrapped: Vec<Vec<String>> = row
                .cells
                .iter()
                .enumerate()
                .take(self.columns.len())
                .map(|(i, c)| self.cell_lines(i, c))
                .collect();
            let height = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);

            for n in 0..height {
                let cells: Vec<String> = wrapped
                    .iter()
                    .map(|lines| lines.get(n).cloned().unwrap_or_default())
                    .collect();
                let line = self.format_line(&widths, &cells);

                if self.color && row.highlight {
                    out.push_str(&Colour::Yellow.paint(line.as_str()).to_string());
                } else {
                    out.push_str(&line);
                }
                out.push('\n');
            }
        }

        out
    }
}
