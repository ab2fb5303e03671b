/// A simple text table for the history panel and terminal output
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

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.chars().count());
            }
        }

        self.rows.push(row);
    }

    /// Render the table, one line per row
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');
        output.push_str(&self.render_separator());

        for row in &self.rows {
            output.push('\n');
            output.push_str(&self.render_row(row));
        }

        output
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut line = String::new();
        let cols = row.len().min(self.col_widths.len());
        for (i, col) in row.iter().take(cols).enumerate() {
            let width = self.col_widths[i];
            line.push_str(&format!("{:<width$}", col, width = width));
            if i < cols - 1 {
                line.push_str(" | ");
            }
        }
        line.trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}
