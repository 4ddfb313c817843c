// ============================================================================
// text-decimal command line
// Checks each line of a file for a decimal literal, optionally summing it
// ============================================================================

use clap::Parser;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use text_decimal::prelude::*;

/// Validate decimal literals line by line, with exact text arithmetic
#[derive(Debug, Parser)]
#[command(name = "text-decimal", version, about)]
struct Cli {
    /// File to check; prompts for a filename when omitted
    path: Option<PathBuf>,

    /// Print each valid line plus -123.456
    #[arg(long)]
    sum: bool,

    /// Print each valid line plus this literal instead
    #[arg(
        long,
        value_name = "LITERAL",
        allow_hyphen_values = true,
        conflicts_with = "sum"
    )]
    addend: Option<String>,

    /// Trim padding zeros from printed sums
    #[arg(long)]
    trim: bool,

    /// Print line counts and the exact total of valid lines at the end
    #[arg(long)]
    summary: bool,
}

impl Cli {
    fn config(&self) -> CheckerConfig {
        let config = match (&self.addend, self.sum) {
            (Some(addend), _) => CheckerConfig::new().with_addend(addend.clone()),
            (None, true) => CheckerConfig::with_default_addend(),
            (None, false) => CheckerConfig::validate_only(),
        };
        config.with_trimmed_results(self.trim)
    }
}

/// Writes each report to stdout as soon as it is produced
struct PrintReportHandler {
    addend: Option<DecimalLiteral>,
}

impl PrintReportHandler {
    fn render(&self, report: &LineReport) -> String {
        match self.addend.as_ref().and_then(|a| report.sum_line(a)) {
            Some(sum_line) => format!("{}\n{}", report, sum_line),
            None => report.to_string(),
        }
    }
}

impl ReportHandler for PrintReportHandler {
    fn on_report(&self, report: &LineReport) {
        println!("{}", self.render(report));
    }
}

/// Why a run stopped early
#[derive(Debug)]
enum Failure {
    PromptFailed(io::Error),
    InvalidConfig(String),
    OpenFailed,
    ReadFailed(PathBuf, io::Error),
}

impl Failure {
    /// Process exit status: 2 for a bad addend, 1 for everything else
    fn exit_status(&self) -> u8 {
        match self {
            Failure::InvalidConfig(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::PromptFailed(e) => write!(f, "Failed to read filename: {}", e),
            Failure::InvalidConfig(e) => write!(f, "{}", e),
            Failure::OpenFailed => write!(f, "Failed to open file."),
            Failure::ReadFailed(path, e) => write!(f, "Failed to read {}: {}", path.display(), e),
        }
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

fn prompt_for_path() -> io::Result<PathBuf> {
    print!("Enter a filename: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(PathBuf::from(input.trim()))
}

/// Checker that prints to stdout, echoing the addend it actually parsed
fn build_checker(config: CheckerConfig) -> Result<LineChecker, String> {
    let checker = create_from_config(config, Arc::new(NoOpReportHandler))?;
    let handler = PrintReportHandler {
        addend: checker.addend().cloned(),
    };
    Ok(checker.with_report_handler(Arc::new(handler)))
}

fn summary_line(summary: &CheckSummary) -> String {
    format!(
        "{} lines: {} valid, {} invalid, total {}",
        summary.lines(),
        summary.valid,
        summary.invalid,
        summary.total.trimmed()
    )
}

fn run(cli: &Cli, path: &Path) -> Result<CheckSummary, Failure> {
    let checker = build_checker(cli.config()).map_err(Failure::InvalidConfig)?;

    let file = File::open(path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "cannot open input");
        Failure::OpenFailed
    })?;

    checker
        .check_reader(BufReader::new(file))
        .map_err(|e| Failure::ReadFailed(path.to_path_buf(), e))
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.path.clone() {
        Some(path) => Ok(path),
        None => prompt_for_path().map_err(Failure::PromptFailed),
    }
    .and_then(|path| run(&cli, &path));

    match result {
        Ok(summary) => {
            if cli.summary {
                println!("{}", summary_line(&summary));
            }
            ExitCode::SUCCESS
        },
        Err(failure) => {
            eprintln!("{}", failure);
            ExitCode::from(failure.exit_status())
        },
    }
}
