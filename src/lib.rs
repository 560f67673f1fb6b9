/*!
 * # PasteMD - paste Markdown tables into native spreadsheets
 *
 * A Rust library that takes table data copied as Markdown, HTML-ish text
 * or TSV and inserts it into a running spreadsheet application.
 *
 * ## Features
 *
 * - Parse inline bold/italic/strikethrough markup inside cells
 * - Normalize jagged tables into rectangular blocks
 * - Generate a single batched AppleScript that writes the whole range,
 *   bolds the header row and applies per-cell font flags
 * - Uniform placement results, including for targets without automation
 * - Localized user-facing messages (Chinese and English)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `spreadsheet`: Table placement:
 *   - `spreadsheet::formatting`: Cell markup parsing
 *   - `spreadsheet::table`: Table preprocessing
 *   - `spreadsheet::script`: Script model and AppleScript rendering
 *   - `spreadsheet::placer`: Placers and the placer registry
 * - `runner`: External process execution (with a mock for tests)
 * - `table_input`: JSON / Markdown / TSV table parsing
 * - `i18n`: Message catalogues
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod i18n;
pub mod runner;
pub mod spreadsheet;
pub mod table_input;

// Re-export main types for easier usage
pub use app_config::{Config, PlacementConfig};
pub use app_controller::Controller;
pub use errors::{AppError, InputError, PlacerError};
pub use spreadsheet::{Application, PlacementResult, Placer, PlacerRegistry, Platform};
pub use table_input::{InputFormat, TableInput};
