//! Chronological ordering and per-instrument grouping.

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use tickstat_core::Tick;
use tracing::debug;

/// All ticks of one instrument, in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentGroup {
    pub instrument_id: String,
    pub ticks: Vec<Tick>,
}

impl InstrumentGroup {
    /// Trade ticks only, order preserved.
    pub fn trades(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter().filter(|t| t.is_trade())
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

/// Date first (lexical), then time of day (numeric).
pub fn chronological(a: &Tick, b: &Tick) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| OrderedFloat(a.time_of_day_seconds).cmp(&OrderedFloat(b.time_of_day_seconds)))
}

/// Stable sort into chronological order. Ties keep input order.
pub fn sort_chronologically(mut ticks: Vec<Tick>) -> Vec<Tick> {
    ticks.sort_by(chronological);
    ticks
}

/// Partition by instrument. Groups appear in order of first occurrence
/// and inherit the tick order of the input.
pub fn group_by_instrument(ticks: Vec<Tick>) -> Vec<InstrumentGroup> {
    let mut groups: IndexMap<String, Vec<Tick>> = IndexMap::new();
    for tick in ticks {
        match groups.get_mut(&tick.instrument_id) {
            Some(group) => group.push(tick),
            None => {
                groups.insert(tick.instrument_id.clone(), vec![tick]);
            }
        }
    }

    debug!(instruments = groups.len(), "grouped ticks");
    groups
        .into_iter()
        .map(|(instrument_id, ticks)| InstrumentGroup { instrument_id, ticks })
        .collect()
}
