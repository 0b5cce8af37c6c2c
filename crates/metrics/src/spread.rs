//! Bid-ask spread statistics.

use crate::stats;
use tickstat_core::Tick;

/// Ask minus bid for every row quoted on both sides.
pub fn spreads(ticks: &[Tick]) -> Vec<f64> {
    ticks
        .iter()
        .filter(|t| t.has_two_sided_quote())
        .map(Tick::spread)
        .collect()
}

/// Mean and median spread; 0.0 when no row qualifies.
pub fn mean_and_median(ticks: &[Tick]) -> (f64, f64) {
    let spreads = spreads(ticks);
    (stats::mean(&spreads), stats::median(&spreads))
}
