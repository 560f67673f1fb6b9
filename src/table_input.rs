/*!
 * Table extraction from clipboard or file text.
 *
 * Three shapes are accepted:
 * - a JSON array of arrays (`[["A","B"],["1","2"]]`)
 * - a Markdown pipe table with a `---` delimiter row
 * - tab-separated lines, as spreadsheets and browsers put on the clipboard
 *
 * Inline markup is left in the cell text for the cell parser.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::InputError;

/// Markdown delimiter row, e.g. `| --- | :---: |`
static DELIMITER_ROW_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)*\|?$").expect("Invalid delimiter row regex")
});

/// HTML line breaks used for multi-line Markdown cells
static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<br\s*/?>").expect("Invalid line break regex")
});

/// Text shape of the table source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    Auto,
    Json,
    Markdown,
    Tsv,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Tsv => "tsv",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for InputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "tsv" => Ok(Self::Tsv),
            _ => Err(anyhow::anyhow!("Invalid input format: {}", s)),
        }
    }
}

/// Table text parser
pub struct TableInput;

impl TableInput {
    /// Parse `text` into a row-major matrix of raw cell strings
    pub fn parse(text: &str, format: InputFormat) -> Result<Vec<Vec<String>>, InputError> {
        let format = match format {
            InputFormat::Auto => Self::detect(text),
            explicit => explicit,
        };

        let rows = match format {
            InputFormat::Json => Self::parse_json(text)?,
            InputFormat::Markdown => Self::parse_markdown(text)?,
            InputFormat::Tsv | InputFormat::Auto => Self::parse_tsv(text),
        };

        if rows.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(rows)
    }

    /// Guess the shape of `text`
    pub fn detect(text: &str) -> InputFormat {
        let trimmed = text.trim_start();
        if trimmed.starts_with('[') {
            return InputFormat::Json;
        }

        let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
        let (first, second) = (lines.next(), lines.next());
        match (first, second) {
            (Some(header), Some(delimiter))
                if header.contains('|') && DELIMITER_ROW_REGEX.is_match(delimiter) =>
            {
                InputFormat::Markdown
            }
            _ => InputFormat::Tsv,
        }
    }

    fn parse_json(text: &str) -> Result<Vec<Vec<String>>, InputError> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Array(rows) = value else {
            return Err(InputError::Shape("expected an array of rows".to_string()));
        };

        rows.into_iter()
            .enumerate()
            .map(|(i, row)| match row {
                Value::Array(cells) => cells
                    .into_iter()
                    .enumerate()
                    .map(|(j, cell)| Self::json_cell(cell, i, j))
                    .collect::<Result<Vec<String>, InputError>>(),
                _ => Err(InputError::Shape(format!("row {} is not an array", i + 1))),
            })
            .collect()
    }

    fn json_cell(cell: Value, row: usize, col: usize) -> Result<String, InputError> {
        match cell {
            Value::String(s) => Ok(s),
            Value::Null => Ok(String::new()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(InputError::Shape(format!(
                "cell at row {}, column {} is not a scalar",
                row + 1,
                col + 1
            ))),
        }
    }

    fn parse_markdown(text: &str) -> Result<Vec<Vec<String>>, InputError> {
        let mut lines = text.lines().map(str::trim).skip_while(|l| l.is_empty());

        let header = lines.next().ok_or(InputError::Empty)?;
        match lines.next() {
            Some(delimiter) if DELIMITER_ROW_REGEX.is_match(delimiter) => {}
            _ => {
                return Err(InputError::Shape(
                    "Markdown table is missing its delimiter row".to_string(),
                ));
            }
        }

        let mut rows = vec![Self::split_markdown_row(header)];
        for line in lines {
            // The table ends at the first line that is not a row.
            if line.is_empty() || !line.contains('|') {
                break;
            }
            rows.push(Self::split_markdown_row(line));
        }
        Ok(rows)
    }

    /// Split one pipe row into cells, honouring `\|` as a literal pipe
    fn split_markdown_row(line: &str) -> Vec<String> {
        let mut cells = Vec::new();
        let mut current = String::new();
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\\' if chars.peek() == Some(&'|') => {
                    current.push('|');
                    chars.next();
                }
                '|' => cells.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        cells.push(current);

        // Outer pipes produce empty edge cells.
        if line.starts_with('|') && !cells.is_empty() {
            cells.remove(0);
        }
        if line.ends_with('|') && !line.ends_with("\\|") {
            cells.pop();
        }

        cells
            .into_iter()
            .map(|cell| LINE_BREAK_REGEX.replace_all(cell.trim(), "\n").into_owned())
            .collect()
    }

    fn parse_tsv(text: &str) -> Vec<Vec<String>> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }

        lines
            .into_iter()
            .map(|line| line.split('\t').map(str::to_string).collect())
            .collect()
    }
}
