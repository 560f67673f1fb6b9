/*!
 * Automation script model.
 *
 * A placement is described as a short list of statements that any
 * spreadsheet automation dialect can express:
 *
 * 1. make sure a workbook is open
 * 2. resolve the anchor cell (selection, or the sheet's first cell)
 * 3. size the destination range at the anchor
 * 4. write every value in one bulk assignment
 * 5. optionally bold the header row and apply per-cell font flags
 * 6. select the destination range
 *
 * [`ScriptBuilder`] produces that list from a [`TableBlock`] and a
 * [`ScriptDialect`] renders it to source text. Literal cell values only
 * reach the output through the dialect's escaping function.
 */

pub mod applescript;

pub use self::applescript::AppleScript;

use super::table::TableBlock;

/// Font attribute toggled on a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontAttribute {
    Bold,
    Italic,
    Strikethrough,
}

/// One step of a placement script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Create a workbook when none is open
    EnsureWorkbook,
    /// Use the active cell as anchor, or the first cell of the active sheet
    ResolveAnchor,
    /// Size the destination range at the anchor
    ResizeTarget { rows: usize, cols: usize },
    /// Assign the whole value matrix to the destination range at once
    BulkAssign { values: Vec<Vec<String>> },
    /// Bold the first row of the destination range
    BoldHeader,
    /// Turn on one font attribute of one cell, 1-based within the range
    SetFont {
        row: usize,
        col: usize,
        attribute: FontAttribute,
    },
    /// Select the destination range
    SelectTarget,
}

/// Ordered statements addressed to one application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub statements: Vec<Statement>,
}

impl Script {
    /// Number of statements matching `predicate`
    pub fn count(&self, predicate: impl Fn(&Statement) -> bool) -> usize {
        self.statements.iter().filter(|s| predicate(s)).count()
    }
}

/// Renders a [`Script`] in one application's scripting language
pub trait ScriptDialect {
    /// Escape text for embedding inside a string literal of this dialect
    fn escape(&self, text: &str) -> String;

    /// Render the complete script source
    fn render(&self, script: &Script) -> String;
}

/// Builds the statement list for a table placement
pub struct ScriptBuilder;

impl ScriptBuilder {
    pub fn build(block: &TableBlock, keep_format: bool) -> Script {
        let mut statements = vec![
            Statement::EnsureWorkbook,
            Statement::ResolveAnchor,
            Statement::ResizeTarget {
                rows: block.rows,
                cols: block.cols,
            },
            Statement::BulkAssign {
                values: block.data.clone(),
            },
        ];

        if keep_format {
            statements.push(Statement::BoldHeader);

            // One statement per flag; adjacent cells are never merged.
            for directive in &block.formats {
                let flags = [
                    (directive.bold, FontAttribute::Bold),
                    (directive.italic, FontAttribute::Italic),
                    (directive.strikethrough, FontAttribute::Strikethrough),
                ];
                for (enabled, attribute) in flags {
                    if enabled {
                        statements.push(Statement::SetFont {
                            row: directive.row,
                            col: directive.col,
                            attribute,
                        });
                    }
                }
            }
        }

        statements.push(Statement::SelectTarget);
        Script { statements }
    }
}

/// Build and render the placement script for `block` in one step
pub fn generate(dialect: &dyn ScriptDialect, block: &TableBlock, keep_format: bool) -> String {
    dialect.render(&ScriptBuilder::build(block, keep_format))
}
