use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use license_report::io::http::{DEFAULT_BASE_URL, LicenseSource, SourceConfig};
use license_report::operation::{Operation, report_path, run_operation};
use license_report::{ReportError, Result, menu};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;

    let source = LicenseSource::new(SourceConfig::new(cli.base_url))?;
    let records = source.fetch_license_data()?;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            menu::run_interactive(
                &records,
                &mut stdin.lock(),
                &mut stdout.lock(),
                Path::new("."),
            )?;
            Ok(())
        }
        Command::Export(args) => {
            let path = report_path(&args.dir, &args.output);
            let summary = run_operation(&records, args.operation.into(), &path)?;
            println!(
                "[INFO]: {} data exported to {}",
                summary.operation.subject(),
                summary.path.display()
            );
            Ok(())
        }
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ReportError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Export driver's-license reports from the license service to Excel."
)]
struct Cli {
    /// Base URL of the license service.
    #[arg(long, global = true, env = "LICENSE_REPORT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Pick reports from a menu until told to stop (the default).
    Interactive,
    /// Produce a single report and exit.
    Export(ExportArgs),
}

#[derive(clap::Args)]
struct ExportArgs {
    /// Report to produce.
    #[arg(long, value_enum)]
    operation: OperationKind,

    /// Output file name, without the `.xlsx` extension.
    #[arg(long)]
    output: String,

    /// Directory the report is written to.
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OperationKind {
    Suspended,
    Valid,
    CategoryCount,
}

impl From<OperationKind> for Operation {
    fn from(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Suspended => Operation::Suspended,
            OperationKind::Valid => Operation::Valid,
            OperationKind::CategoryCount => Operation::CategoryCount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_interactive_against_local_service() {
        let cli = Cli::try_parse_from(["license-report"]).expect("arguments parsed");

        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert!(cli.command.is_none());
        assert!(matches!(
            cli.command.unwrap_or(Command::Interactive),
            Command::Interactive
        ));
    }

    #[test]
    fn base_url_flag_overrides_default() {
        let cli = Cli::try_parse_from([
            "license-report",
            "--base-url",
            "http://registry.internal:8080",
            "interactive",
        ])
        .expect("arguments parsed");

        assert_eq!(cli.base_url, "http://registry.internal:8080");
        assert!(matches!(cli.command, Some(Command::Interactive)));
    }

    #[test]
    fn base_url_is_declared_with_environment_fallback() {
        let command = <Cli as clap::CommandFactory>::command();
        let base_url = command
            .get_arguments()
            .find(|arg| arg.get_id() == "base_url")
            .expect("base_url argument");

        assert_eq!(
            base_url.get_env(),
            Some(std::ffi::OsStr::new("LICENSE_REPORT_BASE_URL"))
        );
    }

    #[test]
    fn export_maps_to_operation_and_path() {
        let cli = Cli::try_parse_from([
            "license-report",
            "export",
            "--operation",
            "category-count",
            "--output",
            "x",
        ])
        .expect("arguments parsed");

        let Some(Command::Export(args)) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(Operation::from(args.operation), Operation::CategoryCount);
        assert_eq!(report_path(&args.dir, &args.output), Path::new("./x.xlsx"));
    }

    #[test]
    fn export_rejects_unknown_operation() {
        let result = Cli::try_parse_from([
            "license-report",
            "export",
            "--operation",
            "expired",
            "--output",
            "x",
        ]);

        assert!(result.is_err());
    }
}
