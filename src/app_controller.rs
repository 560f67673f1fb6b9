use log::{info, warn};
use std::sync::Arc;

use crate::app_config::{Config, PlacementConfig};
use crate::i18n::t;
use crate::runner::{ProcessRunner, SystemRunner};
use crate::spreadsheet::placer::{Application, PlacementResult, PlacerRegistry, Platform};
use crate::table_input::{InputFormat, TableInput};

// @module: Application controller for table placement

/// Main application controller for pasting tables into spreadsheets
#[derive(Debug)]
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Placer lookup
    registry: PlacerRegistry,
    // @field: Platform used for placer lookup
    platform: Platform,
}

impl Controller {
    /// Create a controller that runs scripts on the real system
    pub fn with_config(config: Config) -> Self {
        let runner: Arc<dyn ProcessRunner> = Arc::new(SystemRunner);
        Self::with_runner(config, runner)
    }

    /// Create a controller whose built-in placers use `runner`
    pub fn with_runner(config: Config, runner: Arc<dyn ProcessRunner>) -> Self {
        let registry = PlacerRegistry::with_defaults(runner, &config.osascript_path);
        Self::with_registry(config, registry)
    }

    // @method: Create a controller with an explicit placer registry
    pub fn with_registry(config: Config, registry: PlacerRegistry) -> Self {
        Self {
            config,
            registry,
            platform: Platform::current(),
        }
    }

    /// Resolve placers as if running on `platform`
    pub fn on_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Placement options derived from the configuration
    pub fn placement_config(&self) -> PlacementConfig {
        PlacementConfig::from(&self.config)
    }

    /// Insert `table` into `application` and report the outcome
    pub fn paste_table(&self, table: &[Vec<String>], application: Application) -> PlacementResult {
        if !self.config.enable_excel {
            info!("Spreadsheet placement disabled, skipping {}", application);
            return PlacementResult::failed(None, t("workflow.excel_disabled"));
        }

        let placer = self.registry.get(self.platform, application);
        let result = placer.place(table, &self.placement_config());

        if result.success {
            info!("{} ({} rows)", t("workflow.placement_succeeded"), table.len());
        } else {
            warn!(
                "Placement into {} failed via {}: {}",
                application,
                result.method.as_deref().unwrap_or("none"),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }

        result
    }

    /// Parse `text` as a table, then insert it
    pub fn paste_text(&self, text: &str, format: InputFormat, application: Application) -> PlacementResult {
        match TableInput::parse(text, format) {
            Ok(table) => self.paste_table(&table, application),
            Err(e) => {
                warn!("Could not read table from input: {}", e);
                PlacementResult::failed(None, e.to_string())
            }
        }
    }
}
