//! Raw row to `Tick` conversion.
//!
//! Rows use a fixed positional layout. Bad numeric fields are defaulted and
//! reported as [`ParseIssue`]s; rows too short to carry every column are
//! dropped and reported the same way. Neither aborts the run.

use std::fmt;
use std::str::FromStr;
use tickstat_core::{Tick, UpdateType};
use tracing::warn;

/// Column positions in a raw feed row. Positions 1, 9, 12 and 13 are unused.
pub mod columns {
    pub const INSTRUMENT_ID: usize = 0;
    pub const BID_PRICE: usize = 2;
    pub const ASK_PRICE: usize = 3;
    pub const TRADE_PRICE: usize = 4;
    pub const BID_VOLUME: usize = 5;
    pub const ASK_VOLUME: usize = 6;
    pub const TRADE_VOLUME: usize = 7;
    pub const UPDATE_TYPE: usize = 8;
    pub const DATE: usize = 10;
    pub const TIME_OF_DAY: usize = 11;
    pub const CONDITION_CODES: usize = 14;
}

/// A row must have at least this many fields.
pub const MIN_FIELDS: usize = columns::CONDITION_CODES + 1;

/// Per-row or per-field anomaly found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIssue {
    /// Row dropped: too few fields.
    MissingFields {
        line: u64,
        found: usize,
        expected: usize,
    },
    /// Field defaulted: not a number.
    InvalidField {
        line: u64,
        field: &'static str,
        raw: String,
    },
    /// Row dropped: the reader could not decode it.
    Unreadable { line: u64, reason: String },
}

impl ParseIssue {
    /// Source line the issue refers to (1-based).
    pub fn line(&self) -> u64 {
        match self {
            ParseIssue::MissingFields { line, .. }
            | ParseIssue::InvalidField { line, .. }
            | ParseIssue::Unreadable { line, .. } => *line,
        }
    }

    /// True if the whole row was dropped.
    pub fn is_row_dropped(&self) -> bool {
        !matches!(self, ParseIssue::InvalidField { .. })
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIssue::MissingFields { line, found, expected } => {
                write!(f, "line {line}: expected at least {expected} fields, found {found}")
            }
            ParseIssue::InvalidField { line, field, raw } => {
                write!(f, "line {line}: invalid {field} value {raw:?}, defaulted")
            }
            ParseIssue::Unreadable { line, reason } => {
                write!(f, "line {line}: unreadable row: {reason}")
            }
        }
    }
}

/// Ticks parsed from one input plus the anomalies seen along the way.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Parsed ticks, in input order.
    pub ticks: Vec<Tick>,
    /// Row and field diagnostics, in input order.
    pub issues: Vec<ParseIssue>,
    /// Data rows seen (header excluded).
    pub rows_read: u64,
}

impl ParseOutcome {
    /// Parse one decoded row and add its tick and issues to the outcome.
    pub fn push_row(&mut self, line: u64, fields: &[&str]) {
        self.rows_read += 1;
        if let Some(tick) = parse_row(line, fields, &mut self.issues) {
            self.ticks.push(tick);
        }
    }

    /// Count a row the reader could not decode.
    pub fn push_unreadable(&mut self, line: u64, reason: impl Into<String>) {
        self.rows_read += 1;
        self.issues.push(ParseIssue::Unreadable {
            line,
            reason: reason.into(),
        });
    }

    /// Rows that were dropped entirely.
    pub fn dropped_rows(&self) -> usize {
        self.issues.iter().filter(|i| i.is_row_dropped()).count()
    }

    /// Fields that were replaced with a default.
    pub fn defaulted_fields(&self) -> usize {
        self.issues.len() - self.dropped_rows()
    }
}

/// Parse a numeric field, ignoring surrounding whitespace. Empty means
/// absent and defaults silently; anything else that fails to parse
/// defaults and records an issue.
fn parse_numeric<T>(line: u64, field: &'static str, raw: &str, issues: &mut Vec<ParseIssue>) -> T
where
    T: FromStr + Default,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return T::default();
    }
    match trimmed.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            warn!(line, field, raw, "unparseable numeric field, using default");
            issues.push(ParseIssue::InvalidField {
                line,
                field,
                raw: raw.to_string(),
            });
            T::default()
        }
    }
}

/// Parse one raw row.
///
/// Returns `None` (and records a `MissingFields` issue) when the row is too
/// short. Otherwise always returns a tick, with unparseable numeric fields
/// defaulted.
pub fn parse_row(line: u64, fields: &[&str], issues: &mut Vec<ParseIssue>) -> Option<Tick> {
    if fields.len() < MIN_FIELDS {
        warn!(line, found = fields.len(), expected = MIN_FIELDS, "dropping short row");
        issues.push(ParseIssue::MissingFields {
            line,
            found: fields.len(),
            expected: MIN_FIELDS,
        });
        return None;
    }

    let update_code: i64 = parse_numeric(line, "update_type", fields[columns::UPDATE_TYPE], issues);

    Some(Tick {
        instrument_id: fields[columns::INSTRUMENT_ID].to_string(),
        bid_price: parse_numeric(line, "bid_price", fields[columns::BID_PRICE], issues),
        ask_price: parse_numeric(line, "ask_price", fields[columns::ASK_PRICE], issues),
        trade_price: parse_numeric(line, "trade_price", fields[columns::TRADE_PRICE], issues),
        bid_volume: parse_numeric(line, "bid_volume", fields[columns::BID_VOLUME], issues),
        ask_volume: parse_numeric(line, "ask_volume", fields[columns::ASK_VOLUME], issues),
        trade_volume: parse_numeric(line, "trade_volume", fields[columns::TRADE_VOLUME], issues),
        update_type: UpdateType::from(update_code),
        date: fields[columns::DATE].to_string(),
        time_of_day_seconds: parse_numeric(line, "time_of_day_seconds", fields[columns::TIME_OF_DAY], issues),
        condition_codes: fields[columns::CONDITION_CODES].to_string(),
    })
}
