/*!
 * Spreadsheet placement.
 *
 * - `formatting`: Inline markup parsing for a single cell
 * - `table`: Matrix normalization and format directive collection
 * - `script`: Statement model and per-dialect rendering
 * - `placer`: Placers per (platform, application) and their registry
 */

pub mod formatting;
pub mod placer;
pub mod script;
pub mod table;

// Re-export main types
pub use formatting::{CellFormat, ParsedCell, Segment, TextStyle};
pub use placer::{Application, PlacementResult, Placer, PlacerRegistry, Platform};
pub use table::{FormatDirective, TableBlock, preprocess};
