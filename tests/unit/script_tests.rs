/*!
 * Tests for the script model and AppleScript rendering
 */

use pastemd::spreadsheet::script::{
    self, AppleScript, FontAttribute, ScriptBuilder, ScriptDialect, Statement,
};
use pastemd::spreadsheet::table::preprocess;
use crate::common;

fn is_bulk_assign(statement: &Statement) -> bool {
    matches!(statement, Statement::BulkAssign { .. })
}

fn is_set_font(statement: &Statement) -> bool {
    matches!(statement, Statement::SetFont { .. })
}

#[test]
fn test_build_withPlainTable_shouldHaveOneBulkWriteAndHeaderBold() {
    let block = preprocess(&common::matrix(&[&["A", "B"], &["1", "2"]]), true);
    let script = ScriptBuilder::build(&block, true);

    assert_eq!(script.count(is_bulk_assign), 1);
    assert_eq!(script.count(|s| *s == Statement::BoldHeader), 1);
    assert_eq!(script.count(is_set_font), 0);
    assert_eq!(script.statements.first(), Some(&Statement::EnsureWorkbook));
    assert_eq!(script.statements.last(), Some(&Statement::SelectTarget));
}

#[test]
fn test_build_withKeepFormatDisabled_shouldSkipAllFormatting() {
    let block = preprocess(&common::matrix(&[&["**A**", "B"]]), false);
    let script = ScriptBuilder::build(&block, false);

    assert_eq!(script.count(|s| *s == Statement::BoldHeader), 0);
    assert_eq!(script.count(is_set_font), 0);
    assert_eq!(script.count(is_bulk_assign), 1);
}

#[test]
fn test_build_withMultiFlagCell_shouldEmitOneStatementPerFlag() {
    let block = preprocess(&common::matrix(&[&["h"], &["***~~x~~***"]]), true);
    let script = ScriptBuilder::build(&block, true);

    let fonts: Vec<&Statement> = script.statements.iter().filter(|s| is_set_font(s)).collect();
    assert_eq!(
        fonts,
        vec![
            &Statement::SetFont { row: 2, col: 1, attribute: FontAttribute::Bold },
            &Statement::SetFont { row: 2, col: 1, attribute: FontAttribute::Italic },
            &Statement::SetFont { row: 2, col: 1, attribute: FontAttribute::Strikethrough },
        ]
    );
}

#[test]
fn test_build_withAdjacentStyledCells_shouldNotMergeStatements() {
    let block = preprocess(&common::matrix(&[&["**a**", "**b**", "**c**"]]), true);
    let script = ScriptBuilder::build(&block, true);

    assert_eq!(script.count(is_set_font), 3);
}

#[test]
fn test_build_shouldSizeRangeFromBlock() {
    let block = preprocess(&common::matrix(&[&["a", "b", "c"], &["d"]]), true);
    let script = ScriptBuilder::build(&block, true);

    assert!(script.statements.contains(&Statement::ResizeTarget { rows: 2, cols: 3 }));
}

#[test]
fn test_generate_withPlainTable_shouldContainSingleValueAssignment() {
    let block = preprocess(&common::matrix(&[&["A", "B"], &["1", "2"]]), true);
    let source = script::generate(&AppleScript::excel(), &block, true);

    assert_eq!(source.matches("set value of targetRange").count(), 1);
    assert!(source.contains("set value of targetRange to {{\"A\", \"B\"}, {\"1\", \"2\"}}"));
    assert_eq!(source.matches("row 1 of targetRange) to true").count(), 1);
    assert!(!source.contains("of (cell "));
    assert!(source.starts_with("tell application \"Microsoft Excel\""));
    assert!(source.ends_with("end tell"));
}

#[test]
fn test_generate_withQuoteAndBackslash_shouldEscapeInsideLiteral() {
    let block = preprocess(&common::matrix(&[&["say \"hi\"", "C:\\dir"]]), false);
    let source = script::generate(&AppleScript::excel(), &block, false);

    assert!(source.contains(r#"{{"say \"hi\"", "C:\\dir"}}"#));
}

#[test]
fn test_generate_withMultilineCell_shouldUseLineBreakToken() {
    let block = preprocess(&common::matrix(&[&["first\nsecond"]]), false);
    let source = script::generate(&AppleScript::excel(), &block, false);

    assert!(source.contains(r#"{{"first\rsecond"}}"#));
}

#[test]
fn test_generate_withInjectionAttempt_shouldStayInsideLiteral() {
    let payload = "\" & (do shell script \"rm -rf ~\") & \"";
    let block = preprocess(&common::matrix(&[&[payload]]), false);
    let source = script::generate(&AppleScript::excel(), &block, false);

    let escaped = AppleScript::excel().escape(payload);
    assert!(source.contains(&format!("{{{{\"{}\"}}}}", escaped)));
    assert!(!source.contains("(do shell script \"rm"));
}
