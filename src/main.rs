// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use pastemd::app_config::{Config, LogLevel};
use pastemd::runner::SystemRunner;
use pastemd::spreadsheet::script::{self, AppleScript};
use pastemd::spreadsheet::table::preprocess;
use pastemd::{Application, Controller, InputFormat, TableInput, i18n};

/// CLI Wrapper for Application to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliApplication {
    Excel,
    WpsExcel,
}

impl From<CliApplication> for Application {
    fn from(cli_application: CliApplication) -> Self {
        match cli_application {
            CliApplication::Excel => Application::Excel,
            CliApplication::WpsExcel => Application::WpsExcel,
        }
    }
}

/// CLI Wrapper for InputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliInputFormat {
    Auto,
    Json,
    Markdown,
    Tsv,
}

impl From<CliInputFormat> for InputFormat {
    fn from(cli_format: CliInputFormat) -> Self {
        match cli_format {
            CliInputFormat::Auto => InputFormat::Auto,
            CliInputFormat::Json => InputFormat::Json,
            CliInputFormat::Markdown => InputFormat::Markdown,
            CliInputFormat::Tsv => InputFormat::Tsv,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Table file to read; `-` or nothing reads standard input
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Shape of the table text
    #[arg(long, value_enum, default_value = "auto")]
    format: CliInputFormat,

    /// Read the table from the system clipboard instead of INPUT
    #[arg(long, conflicts_with = "input")]
    clipboard: bool,

    /// Write plain values only, without header bold or cell styles
    #[arg(long)]
    no_format: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Insert a table into the running spreadsheet application
    Place {
        #[command(flatten)]
        input: InputArgs,

        /// Target application
        #[arg(short, long, value_enum, default_value = "excel")]
        app: CliApplication,
    },

    /// Print the AppleScript that `place` would run, without running it
    Script {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Generate shell completions for pastemd
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// PasteMD - paste Markdown tables into native spreadsheets
#[derive(Parser, Debug)]
#[command(name = "pastemd")]
#[command(version)]
#[command(about = "Insert Markdown/TSV/JSON tables into Excel in one batched AppleScript")]
#[command(long_about = "PasteMD reads a table, strips inline **bold**, *italic* and ~~strikethrough~~ markup
from its cells and writes the whole table into the active Excel workbook in a single
AppleScript call, applying the markup as cell formatting.

EXAMPLES:
    pastemd place table.md                 # Insert a Markdown table into Excel
    pastemd place --clipboard              # Insert the table currently on the clipboard
    pbpaste | pastemd place --format tsv   # Insert TSV from standard input
    pastemd place --no-format data.json    # Values only, no styling
    pastemd script table.md                # Show the generated AppleScript
    pastemd completions zsh > _pastemd     # Generate zsh completions

CONFIGURATION:
    Settings are read from the platform config directory (pastemd/config.json)
    unless --config is given. A default file is created when none exists.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Stderr logger with timestamps and per-level colours
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour and tag for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (colour, tag) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                colour,
                now,
                tag,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Info until the configuration says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(level) = &cli.log_level {
        log::set_max_level(LogLevel::from(level.clone()).to_level_filter());
    }

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "pastemd", &mut std::io::stdout());
            Ok(())
        }
        Commands::Script { input } => {
            let text = read_input(&input)?;
            let table = TableInput::parse(&text, input.format.clone().into())
                .context("Failed to read table")?;
            let keep_format = !input.no_format;
            let block = preprocess(&table, keep_format);
            println!("{}", script::generate(&AppleScript::excel(), &block, keep_format));
            Ok(())
        }
        Commands::Place { input, app } => {
            let config = load_config(cli.config_path, cli.log_level.is_some(), input.no_format)?;
            run_place(config, &input, app.into())
        }
    }
}

fn load_config(path: Option<PathBuf>, level_from_cli: bool, no_format: bool) -> Result<Config> {
    let path = path.unwrap_or_else(Config::default_path);
    let mut config = Config::load_or_create(&path)?;

    config.validate().context("Configuration validation failed")?;

    if no_format {
        config.excel_keep_format = false;
    }

    // The command line level wins over the configured one
    if !level_from_cli {
        log::set_max_level(config.log_level.to_level_filter());
    }

    // Already checked by validate()
    i18n::set_language(&config.language).context("Failed to select message language")?;

    debug!("Loaded configuration from {:?}", path);
    Ok(config)
}

fn run_place(config: Config, input: &InputArgs, application: Application) -> Result<()> {
    let text = read_input(input)?;
    let controller = Controller::with_runner(config, Arc::new(SystemRunner));
    let result = controller.paste_text(&text, input.format.clone().into(), application);

    println!(
        "{}",
        serde_json::to_string_pretty(&result).context("Failed to serialize placement result")?
    );

    if !result.success {
        return Err(anyhow!(
            "{}",
            result.error.unwrap_or_else(|| "placement failed".to_string())
        ));
    }
    Ok(())
}

// Helper function to read the table text from the clipboard, a file or stdin
fn read_input(input: &InputArgs) -> Result<String> {
    if input.clipboard {
        let mut clipboard = arboard::Clipboard::new().context("Failed to open the clipboard")?;
        return clipboard
            .get_text()
            .context("Clipboard does not contain text");
    }

    match &input.input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {:?}", path)),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            Ok(text)
        }
    }
}
