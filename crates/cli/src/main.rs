//! `tickstat` — run the microstructure report over one feed file.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tickstat_core::Config;
use tickstat_report::{Pipeline, RunSummary};
use tracing_subscriber::EnvFilter;

const USAGE: &str = r#"tickstat - per-instrument market microstructure report

USAGE:
    tickstat <INPUT> [OPTIONS]

OPTIONS:
    --output <PATH>     Report file (default: analysis.csv)
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (overrides config)
"#;

const SUCCESS_MESSAGE: &str = "Analysis completed. Check the report.";

#[derive(Debug, Default, PartialEq)]
struct Args {
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
}

/// Parsed arguments, or `None` when help was requested.
fn parse_args<I>(args: I) -> Result<Option<Args>>
where
    I: IntoIterator<Item = String>,
{
    let mut input = None;
    let mut output = None;
    let mut config = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--output" | "-o" => {
                let value = iter.next().context("--output requires a path")?;
                output = Some(PathBuf::from(value));
            }
            "--config" | "-c" => {
                let value = iter.next().context("--config requires a path")?;
                config = Some(PathBuf::from(value));
            }
            flag if flag.starts_with('-') => bail!("unknown option {flag}"),
            path => {
                if input.is_some() {
                    bail!("unexpected extra argument {path}");
                }
                input = Some(PathBuf::from(path));
            }
        }
    }

    let input = input.context("missing input file path")?;
    Ok(Some(Args { input, output, config }))
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(output) = &args.output {
        config.output.path = output.clone();
    }
    config.validate()?;
    Ok(config)
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<RunSummary> {
    let config = load_config(args)?;
    init_tracing(&config.logging.level);

    let pipeline = Pipeline::new(config);
    let summary = pipeline.run(&args.input)?;
    Ok(summary)
}

/// Line printed to stdout once the run finishes.
fn outcome_message(result: &Result<RunSummary>) -> String {
    match result {
        Ok(_) => SUCCESS_MESSAGE.to_string(),
        Err(e) => format!("Error processing the file: {e:#}"),
    }
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            eprintln!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("{e:#}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let result = run(&args);
    if let Ok(summary) = &result {
        if let Some(first) = summary.issues.first() {
            tracing::warn!(
                issues = summary.issues.len(),
                dropped_rows = summary.dropped_rows(),
                first_line = first.line(),
                "some rows or fields could not be parsed"
            );
        }
    }

    println!("{}", outcome_message(&result));
    if result.is_err() {
        std::process::exit(1);
    }
}
