/*!
 * AppleScript rendering for Microsoft Excel on macOS.
 */

use super::{FontAttribute, Script, ScriptDialect, Statement};

const INDENT: &str = "    ";

/// Application name Excel registers with the scripting bridge
pub const EXCEL_APPLICATION: &str = "Microsoft Excel";

/// AppleScript dialect targeting one scriptable application
#[derive(Debug, Clone)]
pub struct AppleScript {
    application: String,
}

impl AppleScript {
    pub fn new(application: impl Into<String>) -> Self {
        Self {
            application: application.into(),
        }
    }

    /// Dialect for Microsoft Excel
    pub fn excel() -> Self {
        Self::new(EXCEL_APPLICATION)
    }

    fn quote(&self, text: &str) -> String {
        format!("\"{}\"", self.escape(text))
    }

    fn value_list(&self, values: &[Vec<String>]) -> String {
        let rows: Vec<String> = values
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|cell| self.quote(cell)).collect();
                format!("{{{}}}", cells.join(", "))
            })
            .collect();
        format!("{{{}}}", rows.join(", "))
    }

    fn render_statement(&self, statement: &Statement) -> Vec<String> {
        match statement {
            Statement::EnsureWorkbook => {
                vec!["if (count of workbooks) is 0 then make new workbook".to_string()]
            }
            Statement::ResolveAnchor => vec![
                "try".to_string(),
                format!("{INDENT}set startCell to active cell"),
                format!("{INDENT}if startCell is missing value then error number -1728"),
                "on error".to_string(),
                format!("{INDENT}set startCell to cell 1 of row 1 of active sheet"),
                "end try".to_string(),
            ],
            Statement::ResizeTarget { rows, cols } => vec![format!(
                "set targetRange to (get resize startCell row size {} column size {})",
                rows, cols
            )],
            Statement::BulkAssign { values } => {
                vec![format!("set value of targetRange to {}", self.value_list(values))]
            }
            Statement::BoldHeader => {
                vec!["set bold of font object of (row 1 of targetRange) to true".to_string()]
            }
            Statement::SetFont {
                row,
                col,
                attribute,
            } => {
                let property = match attribute {
                    FontAttribute::Bold => "bold",
                    FontAttribute::Italic => "italic",
                    FontAttribute::Strikethrough => "strikethrough",
                };
                vec![format!(
                    "set {} of font object of (cell {} of row {} of targetRange) to true",
                    property, col, row
                )]
            }
            Statement::SelectTarget => vec!["select targetRange".to_string()],
        }
    }
}

impl ScriptDialect for AppleScript {
    /// Backslash and double quote are backslash-escaped; any line break
    /// becomes `\r`, which Excel stores as a line break inside the cell.
    fn escape(&self, text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\\' => escaped.push_str("\\\\"),
                '"' => escaped.push_str("\\\""),
                '\t' => escaped.push_str("\\t"),
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    escaped.push_str("\\r");
                }
                '\n' => escaped.push_str("\\r"),
                _ => escaped.push(c),
            }
        }

        escaped
    }

    fn render(&self, script: &Script) -> String {
        let mut lines = vec![format!("tell application {}", self.quote(&self.application))];
        for statement in &script.statements {
            for line in self.render_statement(statement) {
                lines.push(format!("{INDENT}{line}"));
            }
        }
        lines.push("end tell".to_string());
        lines.join("\n")
    }
}
