//! Metrics computation engine.
//!
//! Turns each instrument group into its nine report records. Groups share
//! no state, so they can be computed on a worker pool; output order always
//! follows group order.

use crate::{
    intervals::{summarize_tick_changes, summarize_trades, IntervalSummary},
    round_number::RoundNumberEffect,
    spread,
};
use rayon::prelude::*;
use tickstat_core::{MetricName, MetricRecord};
use tickstat_ingestion::InstrumentGroup;
use tracing::{debug, warn};

/// Numeric statistics for one instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentMetrics {
    pub instrument_id: String,
    pub trades: IntervalSummary,
    pub tick_changes: IntervalSummary,
    pub mean_spread: f64,
    pub median_spread: f64,
    pub round_numbers: RoundNumberEffect,
}

impl InstrumentMetrics {
    /// Compute every statistic for a group.
    pub fn compute(group: &InstrumentGroup) -> Self {
        let (mean_spread, median_spread) = spread::mean_and_median(&group.ticks);
        Self {
            instrument_id: group.instrument_id.clone(),
            trades: summarize_trades(&group.ticks),
            tick_changes: summarize_tick_changes(&group.ticks),
            mean_spread,
            median_spread,
            round_numbers: RoundNumberEffect::compute(&group.ticks),
        }
    }

    /// Rendered value for one metric.
    pub fn value(&self, metric: MetricName) -> String {
        match metric {
            MetricName::MeanTimeBetweenTrades => format_value(self.trades.mean),
            MetricName::MedianTimeBetweenTrades => format_value(self.trades.median),
            MetricName::LongestTimeBetweenTrades => format_value(self.trades.longest),
            MetricName::MeanTimeBetweenTickChanges => format_value(self.tick_changes.mean),
            MetricName::MedianTimeBetweenTickChanges => format_value(self.tick_changes.median),
            MetricName::LongestTimeBetweenTickChanges => format_value(self.tick_changes.longest),
            MetricName::MeanBidAskSpread => format_value(self.mean_spread),
            MetricName::MedianBidAskSpread => format_value(self.median_spread),
            MetricName::RoundNumberEffect => {
                // No trades: report 0% rather than dividing by zero.
                let price = self.round_numbers.price_pct().unwrap_or(0.0);
                let volume = self.round_numbers.volume_pct().unwrap_or(0.0);
                format!("{}% / {}%", format_value(price), format_value(volume))
            }
        }
    }

    /// Report records in canonical metric order.
    pub fn to_records(&self) -> Vec<MetricRecord> {
        MetricName::ALL
            .iter()
            .map(|&metric| MetricRecord::new(self.instrument_id.clone(), metric, self.value(metric)))
            .collect()
    }
}

/// Render a value as shortest round-trip digits with at least one
/// fractional digit. Magnitudes in `[1e-3, 1e7)` (and zero) are plain
/// decimals (`100.0`, `2.5`); everything else uses `E` notation (`5.0E-4`,
/// `1.0E7`). Non-finite values are `NaN`, `Infinity` and `-Infinity`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let text = value.to_string();
        return if text.contains('.') { text } else { format!("{text}.0") };
    }

    // `{:e}` yields e.g. "5e-4" or "1.2345e7"
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => text,
    }
}

/// Computes report records for instrument groups.
pub struct MetricsEngine {
    /// Worker threads (0 = compute on the calling thread).
    workers: usize,
}

impl MetricsEngine {
    /// Create a new engine.
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    /// Records for one group.
    pub fn compute_group(&self, group: &InstrumentGroup) -> Vec<MetricRecord> {
        if group.trades().next().is_none() {
            debug!(instrument = %group.instrument_id, "group has no trades");
        }
        InstrumentMetrics::compute(group).to_records()
    }

    /// Records for every group, instrument-major in group order.
    pub fn compute_all(&self, groups: &[InstrumentGroup]) -> Vec<MetricRecord> {
        let per_group: Vec<Vec<MetricRecord>> = if self.workers > 0 && groups.len() > 1 {
            self.compute_parallel(groups)
        } else {
            groups.iter().map(|g| self.compute_group(g)).collect()
        };

        let records: Vec<MetricRecord> = per_group.into_iter().flatten().collect();
        debug!(groups = groups.len(), records = records.len(), "computed metrics");
        records
    }

    fn compute_parallel(&self, groups: &[InstrumentGroup]) -> Vec<Vec<MetricRecord>> {
        match rayon::ThreadPoolBuilder::new().num_threads(self.workers).build() {
            Ok(pool) => pool.install(|| groups.par_iter().map(|g| self.compute_group(g)).collect()),
            Err(e) => {
                warn!(error = %e, "could not build worker pool, computing sequentially");
                groups.iter().map(|g| self.compute_group(g)).collect()
            }
        }
    }
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new(0)
    }
}
