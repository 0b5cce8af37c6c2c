//! Microstructure metrics for the tickstat pipeline.
//!
//! This crate handles:
//! - Inter-trade and inter-tick-change timing
//! - Bid-ask spread statistics
//! - Round-number clustering
//! - Per-instrument report record generation

pub mod stats;
pub mod intervals;
pub mod spread;
pub mod round_number;
pub mod engine;

pub use intervals::IntervalSummary;
pub use round_number::RoundNumberEffect;
pub use engine::{format_value, InstrumentMetrics, MetricsEngine};
