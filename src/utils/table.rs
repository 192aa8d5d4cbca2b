//! Table rendering utilities for CLI outputs.
//! Widths are terminal columns, so wide (CJK, emoji) text stays aligned.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub min_width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            min_width: 0,
        }
    }

    pub fn min(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Missing cells render empty, extra cells are dropped.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain([UnicodeWidthStr::width(col.header.as_str()), col.min_width])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let mut push_line = |cells: Vec<&str>| {
            let line: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| pad(c, *w))
                .collect();
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        };

        // Header
        push_line(self.columns.iter().map(|c| c.header.as_str()).collect());
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(rule.iter().map(String::as_str).collect());

        // Rows
        for row in &self.rows {
            push_line(
                (0..self.columns.len())
                    .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                    .collect(),
            );
        }

        out
    }
}

/// Left-align `cell` in `width` display columns.
fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(cell));
    format!("{cell}{}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_grow_to_fit_content() {
        let mut t = Table::new(vec![Column::new("ID"), Column::new("Project").min(3)]);
        t.add_row(vec!["1".into(), "Website relaunch".into()]);
        t.add_row(vec!["22".into()]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID  Project");
        assert_eq!(lines[1], "--  ----------------");
        assert_eq!(lines[2], "1   Website relaunch");
        assert_eq!(lines[3], "22");
    }

    #[test]
    fn wide_characters_keep_columns_aligned() {
        let mut t = Table::new(vec![Column::new("Project"), Column::new("Time")]);
        t.add_row(vec!["网站改版".into(), "1h 30m".into()]);
        t.add_row(vec!["Docs".into(), "0h 45m".into()]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Project   Time");
        assert_eq!(lines[1], "--------  ------");
        assert_eq!(lines[2], "网站改版  1h 30m");
        assert_eq!(lines[3], "Docs      0h 45m");
    }
}
