// crates/ads-contract-cli/src/main.rs
// ============================================================================
// Module: Ads Contract CLI Entry Point
// Description: Command dispatcher for listing and running contract cases.
// Purpose: Run the ads contract catalog against a live service from a shell.
// Dependencies: ads-contract, clap, serde, serde_jcs, thiserror
// ============================================================================

//! ## Overview
//! `ads-contract list` prints the catalog; `ads-contract run` executes a
//! selection of cases sequentially and prints a text or canonical JSON
//! report. Exit codes: `0` when no case failed or errored, `1` otherwise, `2`
//! for configuration or usage errors.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use ads_contract::AdsClient;
use ads_contract::CaseGroup;
use ads_contract::CaseKind;
use ads_contract::ConfigOverrides;
use ads_contract::ContractCase;
use ads_contract::ContractConfig;
use ads_contract::ContractError;
use ads_contract::ContractRunner;
use ads_contract::Fixtures;
use ads_contract::config::parse_base_url;
use ads_contract::config::parse_timeout_seconds;
use ads_contract::contract_catalog;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "ads-contract", version, disable_help_subcommand = true)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the contract catalog.
    List(ListCommand),
    /// Run contract cases against the configured service.
    Run(RunCommand),
}

/// Arguments for `list`.
#[derive(Args, Debug)]
struct ListCommand {
    /// Only list cases for this endpoint group.
    #[arg(long, value_name = "GROUP", value_parser = parse_group)]
    group: Option<CaseGroup>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Arguments for `run`.
#[derive(Args, Debug)]
struct RunCommand {
    /// Service root URL (overrides `ADS_CONTRACT_BASE_URL`).
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    /// Fixture TOML file (overrides `ADS_CONTRACT_FIXTURES`).
    #[arg(long, value_name = "PATH")]
    fixtures: Option<PathBuf>,
    /// Per-request timeout in seconds (overrides `ADS_CONTRACT_TIMEOUT_SEC`).
    #[arg(long = "timeout-sec", value_name = "SECONDS")]
    timeout_sec: Option<String>,
    /// Only run cases for this endpoint group.
    #[arg(long, value_name = "GROUP", value_parser = parse_group)]
    group: Option<CaseGroup>,
    /// Only run the named case; repeatable.
    #[arg(long = "case", value_name = "NAME")]
    cases: Vec<String>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Report output formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Canonical JSON output.
    Json,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration, usage, or output failure.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`].
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

impl From<ContractError> for CliError {
    fn from(err: ContractError) -> Self {
        Self::new(err.to_string())
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

/// Exit code for configuration and usage errors.
const EXIT_CONFIG_ERROR: u8 = 2;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::List(command) => command_list(&command),
        Commands::Run(command) => command_run(&command),
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Prints the catalog.
fn command_list(command: &ListCommand) -> CliResult<ExitCode> {
    let catalog = contract_catalog(&Fixtures::default());
    let cases = select_cases(catalog, command.group, &[])?;
    match command.format {
        OutputFormat::Text => {
            for case in &cases {
                write_stdout_line(&list_line(case))?;
            }
        }
        OutputFormat::Json => write_json(&cases)?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Runs the selected cases and prints the report.
fn command_run(command: &RunCommand) -> CliResult<ExitCode> {
    let config = resolve_config(command)?;
    let catalog = contract_catalog(&config.fixtures);
    let cases = select_cases(catalog, command.group, &command.cases)?;
    let client = AdsClient::new(&config)?;
    let report = ContractRunner::new(client).run(&cases);
    match command.format {
        OutputFormat::Text => write_stdout_line(&report.to_string())?,
        OutputFormat::Json => write_json(&report)?,
    }
    Ok(if report.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates flag values and loads the rest of the configuration from the
/// environment.
fn resolve_config(command: &RunCommand) -> CliResult<ContractConfig> {
    let overrides = ConfigOverrides {
        base_url: command.base_url.as_deref().map(parse_base_url).transpose()?,
        timeout: command
            .timeout_sec
            .as_deref()
            .map(|raw| parse_timeout_seconds("--timeout-sec", raw))
            .transpose()?,
        fixtures: command.fixtures.clone(),
    };
    ContractConfig::load_with(overrides).map_err(CliError::from)
}

/// Filters the catalog by group and explicit names, keeping catalog order.
fn select_cases(
    catalog: Vec<ContractCase>,
    group: Option<CaseGroup>,
    names: &[String],
) -> CliResult<Vec<ContractCase>> {
    if let Some(unknown) =
        names.iter().find(|name| !catalog.iter().any(|case| case.name == name.as_str()))
    {
        return Err(CliError::new(format!("unknown case: {unknown}")));
    }
    let selected: Vec<ContractCase> = catalog
        .into_iter()
        .filter(|case| group.is_none_or(|group| case.group == group))
        .filter(|case| names.is_empty() || names.iter().any(|name| name == case.name))
        .collect();
    if selected.is_empty() {
        return Err(CliError::new("no cases match the selection".to_string()));
    }
    Ok(selected)
}

/// Parses a `--group` value.
fn parse_group(raw: &str) -> Result<CaseGroup, String> {
    CaseGroup::parse(raw).ok_or_else(|| {
        let labels: Vec<&str> = CaseGroup::ALL.iter().map(|group| group.as_str()).collect();
        format!("unknown group {raw}; expected one of {}", labels.join(", "))
    })
}

/// Renders one `list` line: name, group, kind, routes, and description.
fn list_line(case: &ContractCase) -> String {
    let mut routes: Vec<String> = Vec::new();
    for step in &case.steps {
        let route = step.request.endpoint.route();
        if !routes.contains(&route) {
            routes.push(route);
        }
    }
    format!(
        "{:<40} {:<18} {:<8} {:<28} {}",
        case.name,
        case.group.as_str(),
        kind_label(case),
        routes.join(", "),
        case.description
    )
}

/// Returns the list label for a case kind.
const fn kind_label(case: &ContractCase) -> &'static str {
    match case.kind {
        CaseKind::Assert => "assert",
        CaseKind::Probe => "probe",
    }
}

/// Writes a value as canonical JSON followed by a newline.
fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut bytes = serde_jcs::to_vec(value)
        .map_err(|err| CliError::new(format!("failed to encode json: {err}")))?;
    bytes.push(b'\n');
    std::io::stdout().write_all(&bytes).map_err(|err| output_error("stdout", &err))
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}").map_err(|err| output_error("stdout", &err))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output stream failure.
fn output_error(stream: &str, error: &std::io::Error) -> CliError {
    CliError::new(format!("failed to write to {stream}: {error}"))
}

/// Emits an error message to stderr and returns the configuration exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::from(EXIT_CONFIG_ERROR)
}
