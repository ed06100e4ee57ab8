//! Pricing phase
//!
//! Each good's price relaxes one step toward `base_price * demand / supply`.
//! This damps toward the flow-implied price; it does not clear the market.

use crate::core::config::PricingConfig;
use crate::market::{Market, MarketEntry};

/// Target price implied by this tick's flows
pub fn target_price(entry: &MarketEntry, config: &PricingConfig) -> f64 {
    let supply = entry.supply.max(config.supply_epsilon);
    entry.base_price * (entry.demand / supply)
}

/// Price after one smoothing step, clamped to the floor
pub fn next_price(entry: &MarketEntry, config: &PricingConfig) -> f64 {
    let target = target_price(entry, config);
    let next = entry.price + config.adjust_rate * (target - entry.price);
    next.max(config.price_floor)
}

/// Nudge every price toward its flow-implied target
pub fn adjust_prices(market: &mut Market, config: &PricingConfig) {
    for good in crate::market::Good::ALL {
        let entry = market.entry_mut(good);
        entry.price = next_price(entry, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::Good;

    #[test]
    fn test_balanced_flows_hold_base_price() {
        let config = PricingConfig::default();
        let mut market = Market::with_stock(100.0);

        adjust_prices(&mut market, &config);

        for (good, entry) in market.iter() {
            assert!((entry.price - good.base_price()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_excess_demand_raises_price_by_one_step() {
        let config = PricingConfig::default();
        let mut market = Market::with_stock(0.0);
        let steel = market.entry_mut(Good::Steel);
        steel.supply = 10.0;
        steel.demand = 20.0;

        adjust_prices(&mut market, &config);

        // target = 25 * 2 = 50, step = 0.1 * (50 - 25)
        assert!((market.price(Good::Steel) - 27.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_flows_decay_toward_zero() {
        let config = PricingConfig::default();
        let mut market = Market::with_stock(0.0);

        adjust_prices(&mut market, &config);

        // demand 0 => target 0, price loses 10%
        assert!((market.price(Good::Coal) - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_supply_uses_epsilon() {
        let config = PricingConfig::default();
        let entry = MarketEntry::new(1.0, 0.0, 1.0);

        // 1.0 / 1e-3
        assert!((target_price(&entry, &config) - 1000.0).abs() < 1e-6);
        assert!(next_price(&entry, &config).is_finite());
    }

    #[test]
    fn test_price_never_below_floor() {
        let config = PricingConfig::default();
        let mut entry = MarketEntry::new(1.0, 100.0, 0.0);
        entry.price = 0.011;

        assert_eq!(next_price(&entry, &config), 0.01);
    }
}
