//! Report accumulation and serialization.

use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tickstat_core::{MetricRecord, Result};
use tracing::debug;

/// Report header cells.
pub const HEADER: [&str; 3] = ["Stock Code", "Metric", "Value"];

#[derive(Serialize)]
struct ReportRow<'a> {
    stock_code: &'a str,
    metric: &'static str,
    value: &'a str,
}

/// Flat table of metric records, instrument-major.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    records: Vec<MetricRecord>,
}

impl Report {
    /// Records in output order.
    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct instruments, in report order.
    pub fn instruments(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for record in &self.records {
            if ids.last() != Some(&record.instrument_id.as_str()) {
                ids.push(&record.instrument_id);
            }
        }
        ids
    }

    /// Write header and rows to any writer.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        csv_writer.write_record(HEADER)?;
        for record in &self.records {
            csv_writer.serialize(ReportRow {
                stock_code: &record.instrument_id,
                metric: record.metric.as_str(),
                value: &record.value,
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Write the report to a file, replacing any existing one.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        self.write_to(std::io::BufWriter::new(file))?;
        debug!(path = %path.display(), rows = self.records.len(), "wrote report");
        Ok(())
    }
}

impl FromIterator<MetricRecord> for Report {
    fn from_iter<I: IntoIterator<Item = MetricRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
