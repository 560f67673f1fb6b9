/*!
 * User-facing message catalogues.
 *
 * Placers never build user-facing prose themselves: they ask for a message
 * by key through [`t`]. Two catalogues ship with the crate, Chinese (the
 * default) and English. Language codes are normalized through ISO 639 so
 * that `zh`, `zho`, `chi` and `zh-CN` all select the Chinese catalogue.
 */

use anyhow::{Result, anyhow};
use isolang::Language;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Languages with a built-in message catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiLanguage {
    #[default]
    Chinese,
    English,
}

impl UiLanguage {
    /// Resolve a language code (ISO 639-1, ISO 639-2/T or /B, optionally
    /// with a region suffix) to a supported catalogue
    pub fn from_code(code: &str) -> Result<Self> {
        let normalized = code.trim().to_lowercase();
        let primary = normalized
            .split(['-', '_'])
            .next()
            .unwrap_or_default();

        let language = match primary.len() {
            2 => Language::from_639_1(primary),
            3 if primary == "chi" => Some(Language::Zho),
            3 => Language::from_639_3(primary),
            0 => None,
            _ => Language::from_name(&capitalize(primary)),
        }
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))?;

        match language {
            Language::Zho => Ok(Self::Chinese),
            Language::Eng => Ok(Self::English),
            other => Err(anyhow!(
                "No message catalogue for language: {}",
                other.to_name()
            )),
        }
    }

    /// ISO 639-1 code of the catalogue
    pub fn code(&self) -> &'static str {
        match self {
            Self::Chinese => "zh",
            Self::English => "en",
        }
    }

    fn catalogue(&self) -> &'static HashMap<&'static str, &'static str> {
        match self {
            Self::Chinese => &ZH_MESSAGES,
            Self::English => &EN_MESSAGES,
        }
    }
}

// English names are stored capitalized, e.g. "Chinese"
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

static ZH_MESSAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "placer.macos_excel.applescript_failed",
            "AppleScript 插入 Excel 失败",
        ),
        (
            "placer.macos_wps_excel.not_supported",
            "macOS 版 WPS 表格暂不支持自动插入，内容已保留在剪贴板中",
        ),
        (
            "placer.unsupported_target",
            "当前平台不支持向该应用自动插入表格",
        ),
        ("placer.empty_table", "表格为空，没有可插入的内容"),
        ("workflow.excel_disabled", "Excel 表格插入已在设置中关闭"),
        ("workflow.placement_succeeded", "表格已插入"),
    ])
});

static EN_MESSAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            "placer.macos_excel.applescript_failed",
            "AppleScript insertion into Excel failed",
        ),
        (
            "placer.macos_wps_excel.not_supported",
            "WPS Spreadsheets on macOS does not support automatic insertion; the content is still on the clipboard",
        ),
        (
            "placer.unsupported_target",
            "Automatic table insertion is not supported for this application on this platform",
        ),
        ("placer.empty_table", "The table is empty; nothing to insert"),
        (
            "workflow.excel_disabled",
            "Spreadsheet insertion is disabled in the settings",
        ),
        ("workflow.placement_succeeded", "Table inserted"),
    ])
});

static CURRENT_LANGUAGE: Lazy<RwLock<UiLanguage>> =
    Lazy::new(|| RwLock::new(UiLanguage::default()));

/// Switch the active catalogue. An unknown code leaves the current
/// language untouched.
pub fn set_language(code: &str) -> Result<UiLanguage> {
    let language = UiLanguage::from_code(code)?;
    *CURRENT_LANGUAGE.write() = language;
    Ok(language)
}

/// The active catalogue
pub fn current_language() -> UiLanguage {
    *CURRENT_LANGUAGE.read()
}

/// Look up a message by key in the active catalogue.
///
/// Falls back to English, then to the key itself.
pub fn t(key: &str) -> String {
    translate(current_language(), key)
}

/// Look up a message in a specific catalogue, with the same fallback as [`t`]
pub fn translate(language: UiLanguage, key: &str) -> String {
    language
        .catalogue()
        .get(key)
        .or_else(|| EN_MESSAGES.get(key))
        .map(|message| (*message).to_string())
        .unwrap_or_else(|| key.to_string())
}
