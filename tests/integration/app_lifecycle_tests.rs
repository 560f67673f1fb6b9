/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use std::sync::Arc;

use pastemd::app_config::Config;
use pastemd::runner::{MockRunner, ProcessRunner};
use pastemd::spreadsheet::placer::{Application, Platform};
use pastemd::{Controller, InputFormat};
use crate::common;

/// Test the controller initialization with a config loaded from disk
#[test]
fn test_controller_withConfigFile_shouldUseConfiguredExecutable() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "config.json",
        r#"{"osascript_path": "/usr/local/bin/osascript", "excel_keep_format": false}"#,
    )?;
    let config = Config::load_or_create(&path)?;
    config.validate()?;

    let runner = Arc::new(MockRunner::succeeding());
    let shared: Arc<dyn ProcessRunner> = runner.clone();
    let controller = Controller::with_runner(config, shared).on_platform(Platform::MacOs);

    assert!(!controller.placement_config().keep_format);

    let result = controller.paste_text("a\tb\n1\t2\n", InputFormat::Tsv, Application::Excel);
    assert!(result.success);
    assert_eq!(runner.invocations()[0].program, "/usr/local/bin/osascript");
    Ok(())
}

/// Placements are independent attempts with no state between them
#[test]
fn test_controller_withRepeatedPlacements_shouldRunEachIndependently() {
    let runner = Arc::new(MockRunner::succeeding());
    let shared: Arc<dyn ProcessRunner> = runner.clone();
    let controller = Controller::with_runner(Config::default(), shared).on_platform(Platform::MacOs);

    let first = controller.paste_table(&common::matrix(&[&["one"]]), Application::Excel);
    let second = controller.paste_table(&common::matrix(&[&["two", "three"]]), Application::Excel);

    assert_eq!(first, second);
    let invocations = runner.invocations();
    assert_eq!(invocations.len(), 2);
    assert!(invocations[0].args[1].contains("{{\"one\"}}"));
    assert!(invocations[1].args[1].contains("{{\"two\", \"three\"}}"));
}

/// The result serializes to the JSON shape printed by the CLI
#[test]
fn test_placementResult_serialize_shouldExposeAllFields() -> Result<()> {
    let runner = Arc::new(MockRunner::failing(1, "boom"));
    let shared: Arc<dyn ProcessRunner> = runner.clone();
    let controller = Controller::with_runner(Config::default(), shared).on_platform(Platform::MacOs);

    let result = controller.paste_table(&common::matrix(&[&["a"]]), Application::Excel);
    let json: serde_json::Value = serde_json::to_value(&result)?;

    assert_eq!(json["success"], false);
    assert_eq!(json["method"], "applescript");
    assert_eq!(json["error"], "boom");
    Ok(())
}
