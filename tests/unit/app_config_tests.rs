/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use pastemd::app_config::{Config, LogLevel, PlacementConfig};
use pastemd::i18n::{self, UiLanguage};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.language, "zh");
    assert!(config.enable_excel);
    assert!(config.excel_keep_format);
    assert!(config.notify);
    assert_eq!(config.osascript_path, "osascript");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation_withBadValues_shouldFail() {
    let mut config = Config::default();
    config.osascript_path = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.language = "xyz".to_string();
    assert!(config.validate().is_err());

    config.language = "en".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_deserialize_withPartialAndUnknownKeys_shouldFillDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(
        r#"{"excel_keep_format": false, "hotkey": "<ctrl>+<shift>+b", "log_level": "debug"}"#,
    )?;

    assert!(!config.excel_keep_format);
    assert!(config.enable_excel);
    assert_eq!(config.language, "zh");
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

#[test]
fn test_placementConfig_fromConfig_shouldMirrorKeepFormat() {
    let mut config = Config::default();
    assert!(PlacementConfig::from(&config).keep_format);

    config.excel_keep_format = false;
    assert!(!PlacementConfig::from(&config).keep_format);
    assert!(PlacementConfig::default().keep_format);
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("config.json");

    let config = Config::load_or_create(&path)?;
    assert!(path.exists());
    assert_eq!(config.osascript_path, "osascript");

    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded.language, config.language);
    Ok(())
}

#[test]
fn test_loadOrCreate_withExistingFile_shouldReadIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "config.json",
        r#"{"language": "en", "enable_excel": false}"#,
    )?;

    let config = Config::load_or_create(&path)?;
    assert_eq!(config.language, "en");
    assert!(!config.enable_excel);
    Ok(())
}

#[test]
fn test_loadOrCreate_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "config.json", "{not json")?;

    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}

#[test]
fn test_config_validation_withLanguage_shouldAgreeWithMessageCatalogues() {
    for code in ["zh", "zh-CN", "Chinese", "en", "eng"] {
        let mut config = Config::default();
        config.language = code.to_string();
        assert!(config.validate().is_ok(), "{:?}", code);
        assert!(UiLanguage::from_code(code).is_ok(), "{:?}", code);
    }

    let before = i18n::current_language();
    let mut config = Config::default();
    config.language = "fr".to_string();
    assert!(config.validate().is_err());
    assert!(i18n::set_language("fr").is_err());
    assert_eq!(i18n::current_language(), before);
}
