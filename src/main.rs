//! dxdiag-parse: summarize a DxDiag report from the command line.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use dxdiag_parse::config::DEFAULT_REPORT_FILE;
use dxdiag_parse::decode::HttpTableUpdater;
use dxdiag_parse::report;
use dxdiag_parse::{Config, DecodeTables, DxDiagReport, ReportError};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = "dxdiag-parse",
    version,
    about = "Parses a DxDiag report file",
    after_help = "Examples:\n  dxdiag-parse\n  dxdiag-parse C:\\Users\\me\\Desktop\\DxDiag.txt --no-update\n  dxdiag-parse DxDiag.txt --json"
)]
struct Args {
    /// Name of the DxDiag file
    #[arg(default_value = DEFAULT_REPORT_FILE)]
    file: PathBuf,

    /// Print the parsed report as JSON
    #[arg(long)]
    json: bool,

    /// Skip checking for newer AMD driver decode data
    #[arg(long)]
    no_update: bool,

    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::load(args.config.as_deref())?;
    let mut tables = DecodeTables::load(&config);

    if config.update_check && !args.no_update {
        match HttpTableUpdater::new(
            config.amd_update_url.clone(),
            config.amd_table.clone(),
            Duration::from_secs(config.timeout_secs),
        ) {
            Ok(updater) => {
                if let Some(version) = tables.refresh_amd(&updater) {
                    if !args.json {
                        println!("Updated AMD driver data to version {}.", version);
                        println!();
                    }
                }
            }
            Err(e) => warn!(error = %e, "could not create HTTP client, skipping AMD table refresh"),
        }
    }

    let report = match DxDiagReport::from_path(&args.file, &tables) {
        Ok(report) => report,
        Err(ReportError::FileNotFound(_)) => {
            println!("ERROR: Specified file not found.");
            println!();
            Args::command().print_help()?;
            process::exit(1);
        }
        Err(ReportError::EncodingInvalid(_)) => {
            println!(
                "Failed to read report file {}; check report file encoding.",
                args.file.display()
            );
            process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report::text::generate(&report, VERSION));
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
