/*!
 * Table preprocessing ahead of script generation.
 *
 * Turns a possibly jagged matrix of raw cell strings into a rectangular
 * block of display values plus a sparse list of per-cell font directives.
 */

use serde::Serialize;

use super::formatting::{CellFormat, TextStyle};

/// Font flags to apply to one cell, addressed 1-based as the automation
/// dialects expect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatDirective {
    pub row: usize,
    pub col: usize,
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
}

impl FormatDirective {
    fn new(row: usize, col: usize, style: TextStyle) -> Self {
        Self {
            row,
            col,
            bold: style.bold,
            italic: style.italic,
            strikethrough: style.strikethrough,
        }
    }
}

/// Rectangular table ready for bulk insertion
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TableBlock {
    /// Display values; every row holds exactly `cols` entries
    pub data: Vec<Vec<String>>,
    pub rows: usize,
    pub cols: usize,
    pub formats: Vec<FormatDirective>,
}

impl TableBlock {
    /// True when there is no cell to write
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

/// Parse every cell, pad rows to the widest row and collect format
/// directives.
///
/// A cell gets a directive when `keep_format` is set and the first run of
/// its text is styled. Later runs are ignored, so a mixed-style cell takes
/// the style of its leading run.
pub fn preprocess<R: AsRef<[S]>, S: AsRef<str>>(matrix: &[R], keep_format: bool) -> TableBlock {
    let cols = matrix
        .iter()
        .map(|row| row.as_ref().len())
        .max()
        .unwrap_or(0);

    let mut data = Vec::with_capacity(matrix.len());
    let mut formats = Vec::new();

    for (i, row) in matrix.iter().enumerate() {
        let mut clean_row = Vec::with_capacity(cols);

        for (j, raw) in row.as_ref().iter().enumerate() {
            let cell = CellFormat::parse(raw.as_ref());

            if keep_format {
                let style = cell.first_style();
                if !style.is_plain() {
                    formats.push(FormatDirective::new(i + 1, j + 1, style));
                }
            }

            clean_row.push(cell.text);
        }

        clean_row.resize(cols, String::new());
        data.push(clean_row);
    }

    TableBlock {
        rows: data.len(),
        cols,
        data,
        formats,
    }
}
