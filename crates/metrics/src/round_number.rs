//! Round-number clustering of trade prices and volumes.

use crate::stats;
use tickstat_core::{Tick, ROUND_NUMBER_MODULUS};

/// Share of trades printed at round prices and round sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundNumberEffect {
    /// Trade rows considered.
    pub trades: usize,
    /// Trades whose price is a multiple of ten.
    pub round_prices: usize,
    /// Trades whose volume is a multiple of ten.
    pub round_volumes: usize,
}

impl RoundNumberEffect {
    /// Count round prices and volumes over the trade rows of `ticks`.
    pub fn compute(ticks: &[Tick]) -> Self {
        let mut effect = Self::default();
        for tick in ticks.iter().filter(|t| t.is_trade()) {
            effect.trades += 1;
            if tick.trade_price % ROUND_NUMBER_MODULUS == 0.0 {
                effect.round_prices += 1;
            }
            if tick.trade_volume % ROUND_NUMBER_MODULUS as i64 == 0 {
                effect.round_volumes += 1;
            }
        }
        effect
    }

    /// Percentage of trades at round prices; `None` without trades.
    pub fn price_pct(&self) -> Option<f64> {
        stats::percentage(self.round_prices, self.trades)
    }

    /// Percentage of trades with round volumes; `None` without trades.
    pub fn volume_pct(&self) -> Option<f64> {
        stats::percentage(self.round_volumes, self.trades)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickstat_core::UpdateType;

    fn make_tick(price: f64, volume: i64, update_type: UpdateType) -> Tick {
        Tick {
            instrument_id: "ABC".to_string(),
            bid_price: 0.0,
            ask_price: 0.0,
            trade_price: price,
            bid_volume: 0,
            ask_volume: 0,
            trade_volume: volume,
            update_type,
            date: "20240102".to_string(),
            time_of_day_seconds: 0.0,
            condition_codes: String::new(),
        }
    }

    #[test]
    fn test_round_prices() {
        let ticks: Vec<Tick> = [10.0, 15.0, 20.0, 23.0]
            .iter()
            .map(|&p| make_tick(p, 7, UpdateType::Trade))
            .collect();
        let effect = RoundNumberEffect::compute(&ticks);

        assert_eq!(effect.trades, 4);
        assert_eq!(effect.price_pct(), Some(50.0));
        assert_eq!(effect.volume_pct(), Some(0.0));
    }

    #[test]
    fn test_quotes_excluded() {
        let ticks = vec![
            make_tick(10.0, 100, UpdateType::Trade),
            make_tick(0.0, 0, UpdateType::Quote),
            make_tick(0.0, 0, UpdateType::Other(4)),
            make_tick(10.5, 25, UpdateType::Trade),
        ];
        let effect = RoundNumberEffect::compute(&ticks);

        assert_eq!(effect.trades, 2);
        assert_eq!(effect.price_pct(), Some(50.0));
        assert_eq!(effect.volume_pct(), Some(50.0));
    }

    #[test]
    fn test_no_trades_is_undefined() {
        let effect = RoundNumberEffect::compute(&[make_tick(0.0, 0, UpdateType::Quote)]);
        assert_eq!(effect.trades, 0);
        assert_eq!(effect.price_pct(), None);
        assert_eq!(effect.volume_pct(), None);
    }
}
