//! In-memory workbook model.
//!
//! Sheets are plain grids of styled cells so their contents can be built and
//! tested without touching the xlsx writer.

use crate::config::MAX_CELL_CHARS;

/// Visual role of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Bold white on blue, centred and wrapped.
    Header,

    /// Italic on grey, centred.
    Obligation,

    /// Wrapped, top aligned; shaded when blank.
    Data,

    /// Wrapped, top aligned, never shaded.
    Wrapped,

    /// Bold section title.
    Title,

    /// No formatting.
    Plain,
}

/// Cell content.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

/// One styled cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
}

impl Cell {
    fn text_with(style: CellStyle, text: impl Into<String>) -> Self {
        Self {
            value: CellValue::Text(text.into()),
            style,
        }
    }

    #[must_use]
    pub fn header(text: impl Into<String>) -> Self {
        Self::text_with(CellStyle::Header, text)
    }

    #[must_use]
    pub fn obligation(text: impl Into<String>) -> Self {
        Self::text_with(CellStyle::Obligation, text)
    }

    #[must_use]
    pub fn data(text: impl Into<String>) -> Self {
        Self::text_with(CellStyle::Data, text)
    }

    #[must_use]
    pub fn wrapped(text: impl Into<String>) -> Self {
        Self::text_with(CellStyle::Wrapped, text)
    }

    #[must_use]
    pub fn title(text: impl Into<String>) -> Self {
        Self::text_with(CellStyle::Title, text)
    }

    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::text_with(CellStyle::Plain, text)
    }

    /// Numeric cell without formatting.
    #[must_use]
    pub fn number(n: usize) -> Self {
        // Counts are far below 2^53.
        #[allow(clippy::cast_precision_loss)]
        let n = n as f64;
        Self {
            value: CellValue::Number(n),
            style: CellStyle::Plain,
        }
    }

    /// Text content, or `None` for numeric cells.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            CellValue::Text(t) => Some(t),
            CellValue::Number(_) => None,
        }
    }

    /// Check whether the cell holds only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(&self.value, CellValue::Text(t) if t.trim().is_empty())
    }

    /// Display width in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        match &self.value {
            CellValue::Text(t) => t.chars().count(),
            CellValue::Number(n) => n.to_string().len(),
        }
    }
}

/// Prefix of `text` that fits in one cell, or `None` if it already fits.
///
/// # Examples
/// ```
/// use metadata_report::config::MAX_CELL_CHARS;
/// use metadata_report::report::truncate_to_cell;
///
/// assert_eq!(truncate_to_cell("short"), None);
/// let long = "é".repeat(MAX_CELL_CHARS + 5);
/// assert_eq!(truncate_to_cell(&long).map(|t| t.chars().count()), Some(MAX_CELL_CHARS));
/// ```
#[must_use]
pub fn truncate_to_cell(text: &str) -> Option<&str> {
    text.char_indices()
        .nth(MAX_CELL_CHARS)
        .map(|(end, _)| &text[..end])
}

/// One worksheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,

    /// First unfrozen (row, column), zero-based.
    pub freeze: Option<(u32, u16)>,

    /// Explicit column widths, zero-based column index.
    pub column_widths: Vec<(u16, f64)>,
}

impl Sheet {
    /// Create an empty sheet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Append an empty row.
    pub fn push_blank_row(&mut self) {
        self.rows.push(Vec::new());
    }

    /// Cell at zero-based (row, column).
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Text at zero-based (row, column).
    #[must_use]
    pub fn text_at(&self, row: usize, col: usize) -> Option<&str> {
        self.cell(row, col).and_then(Cell::text)
    }

    /// Set the same width for the first `count` columns.
    pub fn set_uniform_widths(&mut self, count: usize, width: f64) {
        self.column_widths = (0..count)
            .filter_map(|c| u16::try_from(c).ok())
            .map(|c| (c, width))
            .collect();
    }
}

/// An ordered set of sheets, first sheet first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkbookModel {
    pub sheets: Vec<Sheet>,
}

impl WorkbookModel {
    /// Find a sheet by name.
    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Sheet names in workbook order.
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_blank_and_width() {
        assert!(Cell::data("").is_blank());
        assert!(Cell::data("  ").is_blank());
        assert!(!Cell::data("x").is_blank());
        assert!(!Cell::number(0).is_blank());
        assert_eq!(Cell::data("café").width(), 4);
        assert_eq!(Cell::number(12).width(), 2);
    }

    #[test]
    fn test_sheet_lookup() {
        let mut sheet = Sheet::new("S");
        sheet.push_row(vec![Cell::header("A"), Cell::header("B")]);
        sheet.push_blank_row();
        sheet.push_row(vec![Cell::number(3)]);

        assert_eq!(sheet.text_at(0, 1), Some("B"));
        assert_eq!(sheet.cell(1, 0), None);
        assert_eq!(sheet.text_at(2, 0), None);
        assert_eq!(sheet.cell(2, 0).map(|c| &c.value), Some(&CellValue::Number(3.0)));
    }

    #[test]
    fn test_truncate_to_cell_at_limit() {
        let exact = "x".repeat(MAX_CELL_CHARS);
        assert_eq!(truncate_to_cell(&exact), None);

        let over = format!("{exact}yz");
        assert_eq!(truncate_to_cell(&over), Some(exact.as_str()));
    }

    #[test]
    fn test_uniform_widths() {
        let mut sheet = Sheet::new("S");
        sheet.set_uniform_widths(3, 18.0);
        assert_eq!(sheet.column_widths, vec![(0, 18.0), (1, 18.0), (2, 18.0)]);
    }
}
