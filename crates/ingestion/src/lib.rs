//! Data ingestion and normalization for the tickstat pipeline.
//!
//! This crate handles:
//! - Feed file reading and row parsing
//! - Auction and condition-code filtering
//! - Chronological ordering
//! - Grouping by instrument

pub mod parser;
pub mod source;
pub mod cleaning;
pub mod ordering;

pub use parser::{parse_row, ParseIssue, ParseOutcome};
pub use source::{read_ticks, read_ticks_from};
pub use cleaning::{clean, filter_auction_periods, filter_by_condition_code, CleaningStats};
pub use ordering::{group_by_instrument, sort_chronologically, InstrumentGroup};
