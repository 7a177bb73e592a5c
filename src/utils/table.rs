/// A simple text table for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: &[&str]) -> Self {
        let col_widths = headers.iter().map(|h| h.chars().count()).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row to the table; cells past the header count are dropped
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.chars().count());
            }
        }
        self.rows.push(row);
    }

    /// Render header, separator and rows, one line each
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    fn render_row(&self, row: &[String]) -> String {
        // Trailing empty cells are left out so the line doesn't end in `|`
        let filled = self
            .col_widths
            .iter()
            .enumerate()
            .rev()
            .find(|(i, _)| row.get(*i).is_some_and(|c| !c.is_empty()))
            .map_or(0, |(i, _)| i + 1);

        let cells: Vec<String> = self
            .col_widths
            .iter()
            .take(filled)
            .enumerate()
            .map(|(i, &width)| {
                let col = row.get(i).map(String::as_str).unwrap_or("");
                format!("{:<width$}", col, width = width)
            })
            .collect();
        cells.join(" | ").trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(&["Name", "Age", "City"]);
        table.add_row(vec!["Alice".into(), "30".into(), "NYC".into()]);
        table.add_row(vec!["Bob".into(), "25".into(), "LA".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name  | Age | City");
        assert_eq!(lines[1], "------+-----+-----");
        assert_eq!(lines[2], "Alice | 30  | NYC");
        assert_eq!(lines[3], "Bob   | 25  | LA");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut table = Table::new(&["A", "B"]);
        table.add_row(vec!["x".into()]);
        assert_eq!(table.render().lines().nth(2), Some("x"));
    }

    #[test]
    fn test_missing_trailing_cells_keep_alignment() {
        let mut table = Table::new(&["ID", "Device", "Timestamp"]);
        table.add_row(vec!["T2".into(), "".into(), "".into()]);
        table.add_row(vec!["T3".into(), "".into(), "noon".into()]);
        table.add_row(vec!["".into(), "".into(), "".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "T2");
        assert_eq!(lines[3], "T3 |        | noon");
        assert_eq!(lines[4], "");
    }
}
