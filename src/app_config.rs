use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::i18n::UiLanguage;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Interface language code for user-facing messages
    #[serde(default = "default_language")]
    pub language: String,

    /// Whether table data is placed into spreadsheet applications at all
    #[serde(default = "default_true")]
    pub enable_excel: bool,

    /// Whether inline bold/italic/strikethrough markup is applied as cell formatting
    #[serde(default = "default_true")]
    pub excel_keep_format: bool,

    /// Whether the caller should notify the user about the outcome
    #[serde(default = "default_true")]
    pub notify: bool,

    /// Executable used to run AppleScript
    #[serde(default = "default_osascript_path")]
    pub osascript_path: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Options consulted by a single placement
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Apply parsed inline styles and bold the header row
    #[serde(default = "default_true")]
    pub keep_format: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self { keep_format: true }
    }
}

impl From<&Config> for PlacementConfig {
    fn from(config: &Config) -> Self {
        Self {
            keep_format: config.excel_keep_format,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_language() -> String {
    "zh".to_string()
}

fn default_osascript_path() -> String {
    "osascript".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        UiLanguage::from_code(&self.language)
            .map_err(|e| AppError::Config(e.to_string()))?;

        if self.osascript_path.trim().is_empty() {
            return Err(AppError::Config(
                "osascript_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Default location of the configuration file
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pastemd")
            .join("config.json")
    }

    /// Load the configuration from `path`, writing the defaults there first
    /// when the file does not exist yet
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {:?}", path))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", path);
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
            }
        }

        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))?;
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            enable_excel: true,
            excel_keep_format: true,
            notify: true,
            osascript_path: default_osascript_path(),
            log_level: LogLevel::default(),
        }
    }
}
