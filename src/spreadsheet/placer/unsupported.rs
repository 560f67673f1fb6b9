use log::info;

use super::{PlacementResult, Placer};
use crate::app_config::PlacementConfig;
use crate::errors::PlacerError;
use crate::i18n::t;

/// Placer for targets without an automation bridge.
///
/// Does no work and never starts a process; the result always carries the
/// `unsupported` method tag and a localized explanation.
#[derive(Debug, Clone)]
pub struct UnsupportedPlacer {
    target: &'static str,
    message_key: &'static str,
}

impl UnsupportedPlacer {
    pub fn new(target: &'static str, message_key: &'static str) -> Self {
        Self { target, message_key }
    }

    /// WPS Spreadsheets on macOS exposes no AppleScript dictionary
    pub fn macos_wps_excel() -> Self {
        Self::new("macOS WPS Spreadsheets", "placer.macos_wps_excel.not_supported")
    }

    /// Any combination nothing is registered for
    pub fn unknown_target() -> Self {
        Self::new("this target", "placer.unsupported_target")
    }
}

impl Placer for UnsupportedPlacer {
    fn place(&self, _table: &[Vec<String>], _config: &PlacementConfig) -> PlacementResult {
        let error = PlacerError::Unsupported(t(self.message_key));
        info!("Automatic insertion into {} is not supported", self.target);
        PlacementResult::unsupported(error.to_string())
    }
}
