//! Core data types for the tickstat pipeline.

use serde::{Deserialize, Serialize};

/// Condition code marking auction activity.
pub const AUCTION_CONDITION: &str = "AU";

/// Condition code marking a normal continuous-trading print.
pub const NORMAL_TRADE_CONDITION: &str = "XT";

/// Minimum absolute trade-price move between adjacent rows that counts as a tick change.
pub const TICK_CHANGE_THRESHOLD: f64 = 0.1;

/// Prices and volumes that are exact multiples of this are "round".
pub const ROUND_NUMBER_MODULUS: f64 = 10.0;

/// Seconds since local midnight.
pub type SecondsOfDay = f64;

/// Discriminates quote updates from trade updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateType {
    /// Best bid/ask update.
    Quote,
    /// Trade print.
    Trade,
    /// Any other venue-specific code.
    Other(i64),
}

impl UpdateType {
    #[inline]
    pub fn is_trade(self) -> bool {
        self == UpdateType::Trade
    }
}

impl From<i64> for UpdateType {
    fn from(code: i64) -> Self {
        match code {
            0 => UpdateType::Quote,
            1 => UpdateType::Trade,
            other => UpdateType::Other(other),
        }
    }
}

impl Default for UpdateType {
    fn default() -> Self {
        UpdateType::Quote
    }
}

/// One parsed market-data update (quote or trade) for an instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Venue/instrument code.
    pub instrument_id: String,
    /// Best bid price (0.0 if absent).
    pub bid_price: f64,
    /// Best ask price (0.0 if absent).
    pub ask_price: f64,
    /// Trade price (0.0 if absent).
    pub trade_price: f64,
    /// Best bid size.
    pub bid_volume: i64,
    /// Best ask size.
    pub ask_volume: i64,
    /// Trade size.
    pub trade_volume: i64,
    /// Quote or trade.
    pub update_type: UpdateType,
    /// Trading date, lexically comparable.
    pub date: String,
    /// Local exchange time.
    pub time_of_day_seconds: SecondsOfDay,
    /// Exchange condition flags; empty means normal.
    pub condition_codes: String,
}

impl Tick {
    #[inline]
    pub fn is_trade(&self) -> bool {
        self.update_type.is_trade()
    }

    /// Ask minus bid.
    #[inline]
    pub fn spread(&self) -> f64 {
        self.ask_price - self.bid_price
    }

    /// Both sides of the book are quoted.
    #[inline]
    pub fn has_two_sided_quote(&self) -> bool {
        self.bid_price > 0.0 && self.ask_price > 0.0
    }

    /// Bid above ask.
    #[inline]
    pub fn is_crossed(&self) -> bool {
        self.bid_price > self.ask_price
    }
}

/// Statistics reported per instrument, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricName {
    MeanTimeBetweenTrades,
    MedianTimeBetweenTrades,
    LongestTimeBetweenTrades,
    MeanTimeBetweenTickChanges,
    MedianTimeBetweenTickChanges,
    LongestTimeBetweenTickChanges,
    MeanBidAskSpread,
    MedianBidAskSpread,
    RoundNumberEffect,
}

impl MetricName {
    /// Canonical report order.
    pub const ALL: [MetricName; 9] = [
        MetricName::MeanTimeBetweenTrades,
        MetricName::MedianTimeBetweenTrades,
        MetricName::LongestTimeBetweenTrades,
        MetricName::MeanTimeBetweenTickChanges,
        MetricName::MedianTimeBetweenTickChanges,
        MetricName::LongestTimeBetweenTickChanges,
        MetricName::MeanBidAskSpread,
        MetricName::MedianBidAskSpread,
        MetricName::RoundNumberEffect,
    ];

    /// Label written to the report.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricName::MeanTimeBetweenTrades => "Mean Time Between Trades",
            MetricName::MedianTimeBetweenTrades => "Median Time Between Trades",
            MetricName::LongestTimeBetweenTrades => "Longest Time Between Trades",
            MetricName::MeanTimeBetweenTickChanges => "Mean Time Between Tick Changes",
            MetricName::MedianTimeBetweenTickChanges => "Median Time Between Tick Changes",
            MetricName::LongestTimeBetweenTickChanges => "Longest Time Between Tick Changes",
            MetricName::MeanBidAskSpread => "Mean Bid-Ask Spread",
            MetricName::MedianBidAskSpread => "Median Bid-Ask Spread",
            MetricName::RoundNumberEffect => "Round Number Effect",
        }
    }
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (instrument, metric, value) row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub instrument_id: String,
    pub metric: MetricName,
    pub value: String,
}

impl MetricRecord {
    pub fn new(instrument_id: impl Into<String>, metric: MetricName, value: impl Into<String>) -> Self {
        Self {
            instrument_id: instrument_id.into(),
            metric,
            value: value.into(),
        }
    }
}
