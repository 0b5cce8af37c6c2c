//! End-to-end analysis run.
//!
//! read → clean → sort → group → compute → write. Each stage takes the
//! previous stage's output by value and returns a new sequence.

use crate::writer::Report;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tickstat_core::{Config, Result, Tick};
use tickstat_ingestion::{clean, group_by_instrument, read_ticks, sort_chronologically, CleaningStats, ParseIssue};
use tickstat_metrics::MetricsEngine;
use tracing::info;

/// What one run did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Data rows read from the input.
    pub rows_read: u64,
    /// Ticks produced by the parser.
    pub ticks_parsed: usize,
    /// Row and field diagnostics.
    pub issues: Vec<ParseIssue>,
    /// Survivors of each filter.
    pub cleaning: CleaningStats,
    /// Instruments in the report.
    pub instruments: usize,
    /// Report rows written (header excluded).
    pub records: usize,
    /// Where the report went.
    pub output_path: PathBuf,
    /// Wall-clock duration in milliseconds.
    pub elapsed_ms: u128,
}

impl RunSummary {
    /// Rows dropped by the parser.
    pub fn dropped_rows(&self) -> usize {
        self.issues.iter().filter(|i| i.is_row_dropped()).count()
    }
}

/// Build the report for already-parsed ticks.
pub fn build_report(ticks: Vec<Tick>, engine: &MetricsEngine) -> (Report, CleaningStats) {
    let (ticks, cleaning) = clean(ticks);
    let ticks = sort_chronologically(ticks);
    let groups = group_by_instrument(ticks);
    let report = engine.compute_all(&groups).into_iter().collect();
    (report, cleaning)
}

/// Analysis pipeline bound to a configuration.
pub struct Pipeline {
    config: Config,
    engine: MetricsEngine,
}

impl Pipeline {
    /// Create a new pipeline.
    pub fn new(config: Config) -> Self {
        let engine = MetricsEngine::new(config.metrics.workers);
        Self { config, engine }
    }

    /// Analyse `input` and write the report to the configured output path.
    pub fn run(&self, input: impl AsRef<Path>) -> Result<RunSummary> {
        let output = self.config.output.path.clone();
        self.run_to(input, output)
    }

    /// Analyse `input` and write the report to `output`.
    pub fn run_to(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<RunSummary> {
        let started = Instant::now();
        let input = input.as_ref();
        let output = output.as_ref();

        let parsed = read_ticks(input, &self.config.input)?;
        let ticks_parsed = parsed.ticks.len();

        let (report, cleaning) = build_report(parsed.ticks, &self.engine);
        report.write_file(output)?;

        let summary = RunSummary {
            rows_read: parsed.rows_read,
            ticks_parsed,
            issues: parsed.issues,
            cleaning,
            instruments: report.instruments().len(),
            records: report.len(),
            output_path: output.to_path_buf(),
            elapsed_ms: started.elapsed().as_millis(),
        };
        info!(
            input = %input.display(),
            output = %output.display(),
            rows = summary.rows_read,
            ticks = summary.ticks_parsed,
            issues = summary.issues.len(),
            kept = summary.cleaning.after_condition,
            instruments = summary.instruments,
            records = summary.records,
            elapsed_ms = summary.elapsed_ms as u64,
            "analysis complete"
        );
        Ok(summary)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
