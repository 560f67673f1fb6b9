/*!
 * Tests for table text parsing
 */

use pastemd::errors::InputError;
use pastemd::table_input::{InputFormat, TableInput};
use crate::common;

#[test]
fn test_detect_withVariousShapes_shouldPickFormat() {
    assert_eq!(TableInput::detect("  [[\"a\"]]"), InputFormat::Json);
    assert_eq!(TableInput::detect(common::sample_markdown_table()), InputFormat::Markdown);
    assert_eq!(TableInput::detect("a\tb\nc\td\n"), InputFormat::Tsv);
    assert_eq!(TableInput::detect("just text"), InputFormat::Tsv);
}

#[test]
fn test_parse_withMarkdownTable_shouldKeepInlineMarkup() {
    let rows = TableInput::parse(common::sample_markdown_table(), InputFormat::Auto).unwrap();

    assert_eq!(
        rows,
        common::matrix(&[
            &["Item", "Qty", "Note"],
            &["Apples", "3", "*fresh*"],
            &["**Total**", "3", "~~none~~"],
        ])
    );
}

#[test]
fn test_parse_withMarkdownEscapesAndBreaks_shouldDecodeCells() {
    let text = "a | b\n--- | ---\nx \\| y | one<br>two<BR/>three\n\ntrailing paragraph";
    let rows = TableInput::parse(text, InputFormat::Markdown).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["x | y", "one\ntwo\nthree"]);
}

#[test]
fn test_parse_withMarkdownMissingDelimiter_shouldFail() {
    let result = TableInput::parse("| a | b |\n| c | d |", InputFormat::Markdown);
    assert!(matches!(result, Err(InputError::Shape(_))));
}

#[test]
fn test_parse_withJsonScalars_shouldStringify() {
    let rows = TableInput::parse(r#"[["A", 1, 2.5], [true, null]]"#, InputFormat::Json).unwrap();
    assert_eq!(rows, common::matrix(&[&["A", "1", "2.5"], &["true", ""]]));
}

#[test]
fn test_parse_withJsonWrongShape_shouldFail() {
    assert!(matches!(
        TableInput::parse(r#"{"a": 1}"#, InputFormat::Json),
        Err(InputError::Shape(_))
    ));
    assert!(matches!(
        TableInput::parse(r#"[["a"], "b"]"#, InputFormat::Json),
        Err(InputError::Shape(_))
    ));
    assert!(matches!(
        TableInput::parse(r#"[[{"nested": true}]]"#, InputFormat::Json),
        Err(InputError::Shape(_))
    ));
    assert!(matches!(
        TableInput::parse("[[", InputFormat::Json),
        Err(InputError::Json(_))
    ));
}

#[test]
fn test_parse_withTsv_shouldSplitOnTabsAndDropTrailingBlankLines() {
    let rows = TableInput::parse("a\tb\n\tc\n\n", InputFormat::Tsv).unwrap();
    assert_eq!(rows, common::matrix(&[&["a", "b"], &["", "c"]]));
}

#[test]
fn test_parse_withEmptyInput_shouldReportEmpty() {
    assert!(matches!(TableInput::parse("", InputFormat::Auto), Err(InputError::Empty)));
    assert!(matches!(TableInput::parse("[]", InputFormat::Auto), Err(InputError::Empty)));
}

#[test]
fn test_inputFormat_fromStr_shouldAcceptAliases() {
    assert_eq!("md".parse::<InputFormat>().unwrap(), InputFormat::Markdown);
    assert_eq!("TSV".parse::<InputFormat>().unwrap(), InputFormat::Tsv);
    assert!("csv".parse::<InputFormat>().is_err());
}
