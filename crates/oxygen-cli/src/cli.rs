//! Argument parsing, logging bootstrap and dispatch for the `oxygen` tool.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use oxygen_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
use tracing::debug;

use crate::commands::{icons, replay, theme};
use crate::error::{CliError, CliResult};

const DEFAULT_SELECTOR: &str = ":root";

/// Parses process arguments, executes the command and returns the exit code.
#[must_use]
pub fn run() -> i32 {
    run_with_args(std::env::args_os())
}

/// Same as [`run`] with explicit arguments (the first item is the binary name).
#[must_use]
pub fn run_with_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { 2 } else { 0 };
        }
    };

    if let Err(err) = install_logging(&cli) {
        eprintln!("warning: {}", err.display_message());
    }
    debug!(command = command_label(&cli.command), "dispatching");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match dispatch(cli, &mut out) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

fn install_logging(cli: &Cli) -> CliResult<()> {
    let format = cli
        .log_format
        .parse::<LogFormat>()
        .map_err(|err| CliError::validation(err.to_string()))?;
    init_logging(&LoggingConfig {
        level: &cli.log_level,
        format,
        ..LoggingConfig::default()
    })
    .map_err(CliError::failure)
}

pub(crate) fn dispatch(cli: Cli, out: &mut impl Write) -> CliResult<()> {
    match cli.command {
        Command::Theme(args) => theme::handle_theme(&args, cli.output, out),
        Command::Icons(args) => icons::handle_icons(&args, cli.output, out),
        Command::Replay(args) => replay::handle_replay(&args, cli.output, out),
    }
}

#[derive(Parser, Debug)]
#[command(name = "oxygen", about = "Developer tooling for the Oxygen widget set")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "OXYGEN_LOG_FORMAT",
        default_value = "auto",
        help = "Log format: json, pretty or auto"
    )]
    log_format: String,
    #[arg(long, global = true, env = "OXYGEN_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Render widget CSS custom properties for a theme mode.
    Theme(ThemeArgs),
    /// List icon sets, the icons of one set, or a single icon.
    Icons(IconsArgs),
    /// Feed a recorded gesture script through a slider.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ThemeArgs {
    #[arg(long, value_enum, default_value_t = ModeArg::Both)]
    pub(crate) mode: ModeArg,
    #[arg(long, env = "OXYGEN_THEME_OVERRIDES", help = "JSON file with light/dark overrides")]
    pub(crate) overrides: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_SELECTOR)]
    pub(crate) selector: String,
}

#[derive(Args, Debug)]
pub(crate) struct IconsArgs {
    #[arg(help = "Icon set to list (all sets when omitted)")]
    pub(crate) set: Option<String>,
    #[arg(long, value_name = "SET:NAME", conflicts_with = "set", help = "Print one icon")]
    pub(crate) show: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ReplayArgs {
    #[arg(help = "JSON gesture script")]
    pub(crate) file: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModeArg {
    Light,
    Dark,
    Both,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Theme(_) => "theme",
        Command::Icons(_) => "icons",
        Command::Replay(_) => "replay",
    }
}
