//! Market - per-good price, supply and demand
//!
//! Supply and demand are per-tick flows: `reset` zeroes both at the start of
//! every tick, then production and consumption write into them and pricing
//! reads the result.

pub mod good;
pub mod pricing;

use serde::{Deserialize, Serialize};

pub use good::Good;
pub use pricing::adjust_prices;

/// Market state of a single good
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketEntry {
    pub price: f64,
    pub supply: f64,
    pub demand: f64,
    pub base_price: f64,
}

impl MarketEntry {
    /// Entry trading at its base price with the given opening flows
    pub fn new(base_price: f64, supply: f64, demand: f64) -> Self {
        Self {
            price: base_price,
            supply,
            demand,
            base_price,
        }
    }

    /// Unmet demand, never negative
    pub fn shortage(&self) -> f64 {
        (self.demand - self.supply).max(0.0)
    }
}

/// Exactly one entry per good, indexed in catalog order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    entries: [MarketEntry; Good::COUNT],
}

impl Market {
    /// Market at base prices with `stock` supply and demand for every good
    pub fn with_stock(stock: f64) -> Self {
        Self {
            entries: Good::ALL.map(|g| MarketEntry::new(g.base_price(), stock, stock)),
        }
    }

    pub fn entry(&self, good: Good) -> &MarketEntry {
        &self.entries[good.index()]
    }

    pub fn entry_mut(&mut self, good: Good) -> &mut MarketEntry {
        &mut self.entries[good.index()]
    }

    /// Iterate entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Good, &MarketEntry)> {
        Good::ALL.into_iter().zip(self.entries.iter())
    }

    pub fn price(&self, good: Good) -> f64 {
        self.entry(good).price
    }

    pub fn supply(&self, good: Good) -> f64 {
        self.entry(good).supply
    }

    pub fn demand(&self, good: Good) -> f64 {
        self.entry(good).demand
    }

    /// Zero every supply and demand accumulator
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.supply = 0.0;
            entry.demand = 0.0;
        }
    }

    pub fn add_supply(&mut self, good: Good, amount: f64) {
        self.entry_mut(good).supply += amount;
    }

    /// Draw from supply, capped at what is there. Returns the amount drawn.
    pub fn consume_supply(&mut self, good: Good, amount: f64) -> f64 {
        if amount <= 0.0 {
            return 0.0;
        }
        let entry = self.entry_mut(good);
        let taken = amount.min(entry.supply);
        entry.supply -= taken;
        taken
    }

    pub fn add_demand(&mut self, good: Good, amount: f64) {
        self.entry_mut(good).demand += amount;
    }
}

impl Default for Market {
    fn default() -> Self {
        Self::with_stock(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_stock_uses_base_prices() {
        let market = Market::with_stock(1000.0);
        for (good, entry) in market.iter() {
            assert_eq!(entry.price, good.base_price());
            assert_eq!(entry.base_price, good.base_price());
            assert_eq!(entry.supply, 1000.0);
            assert_eq!(entry.demand, 1000.0);
        }
    }

    #[test]
    fn test_reset_zeroes_flows_keeps_prices() {
        let mut market = Market::with_stock(1000.0);
        market.entry_mut(Good::Steel).price = 40.0;

        market.reset();

        for (_, entry) in market.iter() {
            assert_eq!(entry.supply, 0.0);
            assert_eq!(entry.demand, 0.0);
        }
        assert_eq!(market.price(Good::Steel), 40.0);
    }

    #[test]
    fn test_consume_supply_caps_at_available() {
        let mut market = Market::with_stock(10.0);

        assert_eq!(market.consume_supply(Good::Coal, 4.0), 4.0);
        assert_eq!(market.supply(Good::Coal), 6.0);

        // Short supply is silently capped
        assert_eq!(market.consume_supply(Good::Coal, 100.0), 6.0);
        assert_eq!(market.supply(Good::Coal), 0.0);
    }

    #[test]
    fn test_consume_supply_ignores_non_positive() {
        let mut market = Market::with_stock(10.0);
        assert_eq!(market.consume_supply(Good::Iron, -5.0), 0.0);
        assert_eq!(market.supply(Good::Iron), 10.0);
    }

    #[test]
    fn test_entry_shortage() {
        let entry = MarketEntry::new(1.0, 3.0, 10.0);
        assert_eq!(entry.shortage(), 7.0);

        let surplus = MarketEntry::new(1.0, 10.0, 3.0);
        assert_eq!(surplus.shortage(), 0.0);
    }
}
