use log::{debug, warn};
use std::sync::Arc;

use super::{METHOD_APPLESCRIPT, PlacementResult, Placer};
use crate::app_config::PlacementConfig;
use crate::errors::PlacerError;
use crate::i18n::t;
use crate::runner::ProcessRunner;
use crate::spreadsheet::script::{self, AppleScript};
use crate::spreadsheet::table::preprocess;

// @module: Microsoft Excel on macOS, driven by one batched AppleScript

/// Writes the whole table with a single `osascript` round trip.
///
/// Each AppleScript call into Excel costs seconds, so values go in as one
/// range assignment and formatting follows in the same script.
#[derive(Debug)]
pub struct MacExcelPlacer {
    runner: Arc<dyn ProcessRunner>,
    executable: String,
    dialect: AppleScript,
}

impl MacExcelPlacer {
    pub fn new(runner: Arc<dyn ProcessRunner>, executable: impl Into<String>) -> Self {
        Self {
            runner,
            executable: executable.into(),
            dialect: AppleScript::excel(),
        }
    }

    /// Script that [`Placer::place`] would execute for `table`
    pub fn script_for(&self, table: &[Vec<String>], config: &PlacementConfig) -> Result<String, PlacerError> {
        let block = preprocess(table, config.keep_format);
        if block.is_empty() {
            return Err(PlacerError::EmptyTable);
        }
        debug!(
            "Prepared {}x{} block with {} styled cell(s)",
            block.rows,
            block.cols,
            block.formats.len()
        );
        Ok(script::generate(&self.dialect, &block, config.keep_format))
    }

    fn try_place(&self, table: &[Vec<String>], config: &PlacementConfig) -> Result<(), PlacerError> {
        let script = self.script_for(table, config)?;

        let output = self
            .runner
            .run(&self.executable, &["-e", script.as_str()])
            .map_err(|e| PlacerError::LaunchFailed(e.to_string()))?;

        if !output.is_success() {
            return Err(PlacerError::ExecutionFailed {
                status: output.status,
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(())
    }

    // @returns: Message shown to the user for a failed placement
    fn user_message(error: &PlacerError) -> String {
        match error {
            PlacerError::ExecutionFailed { stderr, .. } if !stderr.is_empty() => stderr.clone(),
            PlacerError::ExecutionFailed { .. } => t("placer.macos_excel.applescript_failed"),
            PlacerError::EmptyTable => t("placer.empty_table"),
            other => other.to_string(),
        }
    }
}

impl Placer for MacExcelPlacer {
    fn place(&self, table: &[Vec<String>], config: &PlacementConfig) -> PlacementResult {
        match self.try_place(table, config) {
            Ok(()) => PlacementResult::succeeded(METHOD_APPLESCRIPT),
            Err(e) => {
                warn!("Excel AppleScript insertion failed: {}", e);
                PlacementResult::failed(Some(METHOD_APPLESCRIPT), Self::user_message(&e))
            }
        }
    }
}
