/*!
 * Tests for error types and conversions
 */

use pastemd::errors::{AppError, InputError, PlacerError};

#[test]
fn test_placerError_unsupported_shouldDisplayMessageVerbatim() {
    let error = PlacerError::Unsupported("not available".to_string());
    assert_eq!(error.to_string(), "not available");
}

#[test]
fn test_placerError_executionFailed_shouldDisplayStatusAndStderr() {
    let error = PlacerError::ExecutionFailed {
        status: Some(1),
        stderr: "Excel is not running".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("1"));
    assert!(display.contains("Excel is not running"));
}

#[test]
fn test_placerError_launchFailed_shouldDisplayCorrectly() {
    let error = PlacerError::LaunchFailed("No such file".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Failed to launch"));
    assert!(display.contains("No such file"));
}

#[test]
fn test_inputError_fromJsonError_shouldWrap() {
    let json_error = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
    let error: InputError = json_error.into();
    assert!(error.to_string().contains("Invalid JSON table"));
}

#[test]
fn test_appError_fromPlacerError_shouldWrapCorrectly() {
    let app_error: AppError = PlacerError::EmptyTable.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Placement error"));
    assert!(display.contains("Table is empty"));
}

#[test]
fn test_appError_fromInputError_shouldWrapCorrectly() {
    let app_error: AppError = InputError::Empty.into();
    assert!(app_error.to_string().contains("Input error"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromAnyhowError_shouldWrapAsUnknown() {
    let app_error: AppError = anyhow::anyhow!("Something went wrong").into();
    let display = format!("{}", app_error);
    assert!(display.contains("Unknown error"));
    assert!(display.contains("Something went wrong"));
}
