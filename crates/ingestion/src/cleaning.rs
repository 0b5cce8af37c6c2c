//! Removal of ticks outside continuous trading.
//!
//! Two independent filters, applied auction first:
//! - auction exclusion: `AU` condition or a crossed book (bid > ask)
//! - condition exclusion: keep only `XT` or uncoded rows
//!
//! Both preserve the relative order of surviving ticks.

use tickstat_core::{Tick, AUCTION_CONDITION, NORMAL_TRADE_CONDITION};
use tracing::debug;

/// Counts of ticks surviving each filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleaningStats {
    pub input: usize,
    pub after_auction: usize,
    pub after_condition: usize,
}

/// Tick falls in an auction or non-continuous period.
#[inline]
pub fn is_auction_period(tick: &Tick) -> bool {
    tick.condition_codes == AUCTION_CONDITION || tick.is_crossed()
}

/// Tick carries the normal-trade marker or no condition at all.
#[inline]
pub fn has_normal_condition(tick: &Tick) -> bool {
    tick.condition_codes == NORMAL_TRADE_CONDITION || tick.condition_codes.is_empty()
}

/// Drop auction-period ticks.
pub fn filter_auction_periods(ticks: Vec<Tick>) -> Vec<Tick> {
    ticks.into_iter().filter(|t| !is_auction_period(t)).collect()
}

/// Keep only normal-condition ticks.
pub fn filter_by_condition_code(ticks: Vec<Tick>) -> Vec<Tick> {
    ticks.into_iter().filter(has_normal_condition).collect()
}

/// Apply both filters in order.
pub fn clean(ticks: Vec<Tick>) -> (Vec<Tick>, CleaningStats) {
    let input = ticks.len();
    let ticks = filter_auction_periods(ticks);
    let after_auction = ticks.len();
    let ticks = filter_by_condition_code(ticks);

    let stats = CleaningStats {
        input,
        after_auction,
        after_condition: ticks.len(),
    };
    debug!(
        input = stats.input,
        after_auction = stats.after_auction,
        after_condition = stats.after_condition,
        "cleaned ticks"
    );
    (ticks, stats)
}
