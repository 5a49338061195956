//! Column-aligned plain text tables
//!
//! Every column is as wide as its longest cell or header. Cells are padded on
//! the right and columns are separated by two spaces. Nothing is truncated or
//! wrapped, so one long value widens its whole column.

use colored::Colorize;

const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing trailing cells are rendered empty, extra cells are dropped.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Width of each column in characters
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Render header, `=` separator and rows, one line each
    ///
    /// With `styled` set the header is bold and the separator dimmed. Styling is
    /// applied after padding so alignment is unaffected.
    pub fn render(&self, styled: bool) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        let header = join_padded(&self.headers, &widths);
        let separator = widths
            .iter()
            .map(|w| "=".repeat(*w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);

        if styled {
            out.push_str(&header.bold().to_string());
            out.push('\n');
            out.push_str(&separator.dimmed().to_string());
        } else {
            out.push_str(&header);
            out.push('\n');
            out.push_str(&separator);
        }
        out.push('\n');

        for row in &self.rows {
            out.push_str(&join_padded(row, &widths));
            out.push('\n');
        }

        out
    }
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_right(cell, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

fn pad_right(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    let mut padded = String::with_capacity(cell.len() + width.saturating_sub(len));
    padded.push_str(cell);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_widths_driven_by_header() {
        let mut table = Table::new(["STATUS"]);
        table.push_row(row(&["05"]));
        table.push_row(row(&["100"]));
        assert_eq!(table.column_widths(), vec![6]);
    }

    #[test]
    fn test_widths_driven_by_cells() {
        let mut table = Table::new(["ID", "NAME"]);
        table.push_row(row(&["1", "a-very-long-name"]));
        assert_eq!(table.column_widths(), vec![2, 16]);
    }

    #[test]
    fn test_widths_count_characters_not_bytes() {
        let mut table = Table::new(["N"]);
        table.push_row(row(&["héllo"]));
        assert_eq!(table.column_widths(), vec![5]);
    }

    #[test]
    fn test_render_plain() {
        let mut table = Table::new(["A", "BBB"]);
        table.push_row(row(&["xyz", "1"]));
        table.push_row(row(&["", "22"]));

        let expected = "A    BBB\n===  ===\nxyz  1  \n     22 \n";
        assert_eq!(table.render(false), expected);
    }

    #[test]
    fn test_render_headers_only() {
        let table = Table::new(["ONE", "TWO"]);
        assert_eq!(table.render(false), "ONE  TWO\n===  ===\n");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = Table::new(["A", "B", "C"]);
        table.push_row(row(&["1"]));
        assert_eq!(table.render(false), "A  B  C\n=  =  =\n1      \n");
    }
}
