/*!
 * Spreadsheet placers.
 *
 * A placer inserts a table into a live spreadsheet application. Every
 * placer honours the same contract, [`Placer::place`], and reports the
 * outcome as a [`PlacementResult`] instead of an error, so callers treat
 * "not supported" exactly like "attempted and failed".
 *
 * Placers are selected by (platform, application) through
 * [`PlacerRegistry`].
 */

use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::app_config::PlacementConfig;
use crate::runner::ProcessRunner;

pub mod excel;
pub mod unsupported;

pub use self::excel::MacExcelPlacer;
pub use self::unsupported::UnsupportedPlacer;

/// Method tag of the AppleScript automation path
pub const METHOD_APPLESCRIPT: &str = "applescript";

/// Method tag of placers that cannot automate their target
pub const METHOD_UNSUPPORTED: &str = "unsupported";

/// Outcome of one placement attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementResult {
    pub success: bool,
    /// Automation path that was used or attempted
    pub method: Option<String>,
    /// User-facing reason for a failure
    pub error: Option<String>,
}

impl PlacementResult {
    pub fn succeeded(method: &str) -> Self {
        Self {
            success: true,
            method: Some(method.to_string()),
            error: None,
        }
    }

    pub fn failed(method: Option<&str>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            method: method.map(str::to_string),
            error: Some(error.into()),
        }
    }

    pub fn unsupported(error: impl Into<String>) -> Self {
        Self::failed(Some(METHOD_UNSUPPORTED), error)
    }
}

/// Inserts a table into one target application
pub trait Placer: Send + Sync + Debug {
    /// Place `table` into the target application.
    ///
    /// Each call is an independent attempt: no retry, no state carried
    /// over from earlier calls.
    fn place(&self, table: &[Vec<String>], config: &PlacementConfig) -> PlacementResult;
}

/// Host operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Other,
}

impl Platform {
    /// Platform this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }
}

/// Spreadsheet application receiving the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Application {
    #[default]
    Excel,
    WpsExcel,
}

impl std::fmt::Display for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excel => write!(f, "excel"),
            Self::WpsExcel => write!(f, "wps-excel"),
        }
    }
}

impl std::str::FromStr for Application {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "excel" => Ok(Self::Excel),
            "wps-excel" | "wps_excel" | "wps" => Ok(Self::WpsExcel),
            _ => Err(anyhow::anyhow!("Invalid application: {}", s)),
        }
    }
}

/// Placer lookup keyed by (platform, application)
#[derive(Debug)]
pub struct PlacerRegistry {
    placers: HashMap<(Platform, Application), Arc<dyn Placer>>,
    fallback: Arc<dyn Placer>,
}

impl PlacerRegistry {
    /// Empty registry; every lookup resolves to the unsupported placer
    pub fn new() -> Self {
        Self {
            placers: HashMap::new(),
            fallback: Arc::new(UnsupportedPlacer::unknown_target()),
        }
    }

    /// Registry with the built-in placers, running scripts through `runner`
    pub fn with_defaults(runner: Arc<dyn ProcessRunner>, osascript_path: &str) -> Self {
        let mut registry = Self::new();
        registry.register(
            Platform::MacOs,
            Application::Excel,
            Arc::new(MacExcelPlacer::new(runner, osascript_path)),
        );
        registry.register(
            Platform::MacOs,
            Application::WpsExcel,
            Arc::new(UnsupportedPlacer::macos_wps_excel()),
        );
        registry
    }

    pub fn register(&mut self, platform: Platform, application: Application, placer: Arc<dyn Placer>) {
        self.placers.insert((platform, application), placer);
    }

    /// Placer for the combination, or the unsupported placer
    pub fn get(&self, platform: Platform, application: Application) -> Arc<dyn Placer> {
        self.placers
            .get(&(platform, application))
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.fallback))
    }
}

impl Default for PlacerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
