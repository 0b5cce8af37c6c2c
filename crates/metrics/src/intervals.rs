//! Inter-trade and inter-tick-change timing.
//!
//! All differences are taken between chronologically adjacent rows of one
//! instrument group, in seconds.

use crate::stats;
use tickstat_core::{Tick, TICK_CHANGE_THRESHOLD};

/// Mean, median and longest of an interval set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntervalSummary {
    pub mean: f64,
    pub median: f64,
    pub longest: f64,
}

/// Strictly positive time gaps between consecutive trades.
///
/// Zero and negative gaps (same timestamp, day rollover) are dropped.
pub fn trade_intervals(ticks: &[Tick]) -> Vec<f64> {
    let trades: Vec<&Tick> = ticks.iter().filter(|t| t.is_trade()).collect();
    trades
        .windows(2)
        .map(|pair| pair[1].time_of_day_seconds - pair[0].time_of_day_seconds)
        .filter(|dt| *dt > 0.0)
        .collect()
}

/// Adjacent-row trade-price move counts as a tick change.
#[inline]
fn is_tick_change(prev: &Tick, next: &Tick) -> bool {
    (next.trade_price - prev.trade_price).abs() >= TICK_CHANGE_THRESHOLD
}

/// Time gaps between adjacent rows (quotes included) whose trade price
/// moved by at least the tick-change threshold. Sign is not checked.
pub fn tick_change_gaps(ticks: &[Tick]) -> Vec<f64> {
    ticks
        .windows(2)
        .filter(|pair| is_tick_change(&pair[0], &pair[1]))
        .map(|pair| pair[1].time_of_day_seconds - pair[0].time_of_day_seconds)
        .collect()
}

/// Summarise trade intervals.
pub fn summarize_trades(ticks: &[Tick]) -> IntervalSummary {
    let intervals = trade_intervals(ticks);
    IntervalSummary {
        mean: stats::mean(&intervals),
        median: stats::median(&intervals),
        longest: stats::max(&intervals),
    }
}

/// Summarise tick-change intervals.
///
/// Mean and median use only strictly positive gaps; longest is taken over
/// every gap, including zero and negative ones.
pub fn summarize_tick_changes(ticks: &[Tick]) -> IntervalSummary {
    let gaps = tick_change_gaps(ticks);
    let positive: Vec<f64> = gaps.iter().copied().filter(|dt| *dt > 0.0).collect();
    IntervalSummary {
        mean: stats::mean(&positive),
        median: stats::median(&positive),
        longest: stats::max(&gaps),
    }
}
