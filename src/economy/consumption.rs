//! Consumption phase
//!
//! Each segment spends its wage budget on its wants in listed order. A want
//! is capped by desire, affordability and remaining supply; once the budget
//! is spent the rest of the list goes unmet this tick.

use crate::core::config::ConsumptionConfig;
use crate::economy::population::PopSegment;
use crate::market::Market;

/// Buy for one segment. Returns the money it spent.
pub fn consume_segment(pop: &PopSegment, market: &mut Market, config: &ConsumptionConfig) -> f64 {
    let size = pop.size as f64;
    let income = pop.budget();
    if !(income > 0.0) {
        return 0.0;
    }
    let mut budget = income;

    for want in &pop.consumption {
        let desired = want.amount * size;
        let price = market.price(want.good);
        let divisor = if price > 0.0 { price } else { config.zero_price_fallback };
        let affordable = budget / divisor;

        let entry = market.entry_mut(want.good);
        let to_buy = desired.min(affordable).min(entry.supply).max(0.0);

        entry.supply -= to_buy;
        entry.demand += to_buy;
        budget -= to_buy * price;

        if budget <= 0.0 {
            break;
        }
    }

    income - budget
}

/// Run every segment in order. Returns total spending.
pub fn run_consumption(pops: &[PopSegment], market: &mut Market, config: &ConsumptionConfig) -> f64 {
    pops.iter()
        .map(|pop| consume_segment(pop, market, config))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SegmentId;
    use crate::market::Good;

    #[test]
    fn test_negative_budget_buys_nothing() {
        let config = ConsumptionConfig::default();
        let mut market = Market::with_stock(0.0);
        market.add_supply(Good::Grain, 100.0);
        let pop = PopSegment::new(SegmentId(0), 10_000, -2.0).with_want(Good::Grain, 0.2);

        let spent = consume_segment(&pop, &mut market, &config);

        assert_eq!(spent, 0.0);
        assert_eq!(market.supply(Good::Grain), 100.0);
        assert_eq!(market.demand(Good::Grain), 0.0);
    }

    #[test]
    fn test_desire_bound() {
        let config = ConsumptionConfig::default();
        let mut market = Market::with_stock(10_000.0);
        market.reset();
        market.add_supply(Good::Grain, 10_000.0);
        let pop = PopSegment::new(SegmentId(0), 1_000, 10.0).with_want(Good::Grain, 0.2);

        let spent = consume_segment(&pop, &mut market, &config);

        // 200 grain at price 1.0
        assert!((market.demand(Good::Grain) - 200.0).abs() < 1e-9);
        assert!((market.supply(Good::Grain) - 9_800.0).abs() < 1e-9);
        assert!((spent - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_supply_bound() {
        let config = ConsumptionConfig::default();
        let mut market = Market::with_stock(0.0);
        market.add_supply(Good::Grain, 50.0);
        let pop = PopSegment::new(SegmentId(0), 1_000, 10.0).with_want(Good::Grain, 0.2);

        consume_segment(&pop, &mut market, &config);

        assert_eq!(market.demand(Good::Grain), 50.0);
        assert_eq!(market.supply(Good::Grain), 0.0);
    }

    #[test]
    fn test_budget_bound_stops_later_wants() {
        let config = ConsumptionConfig::default();
        let mut market = Market::with_stock(0.0);
        market.add_supply(Good::Steel, 1_000.0);
        market.add_supply(Good::Grain, 1_000.0);
        // Budget 100 buys 4 steel at 25, leaving nothing for grain
        let pop = PopSegment::new(SegmentId(0), 10, 10.0)
            .with_want(Good::Steel, 10.0)
            .with_want(Good::Grain, 1.0);

        let spent = consume_segment(&pop, &mut market, &config);

        assert!((market.demand(Good::Steel) - 4.0).abs() < 1e-9);
        assert_eq!(market.demand(Good::Grain), 0.0);
        assert!((spent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_earlier_want_has_priority() {
        let config = ConsumptionConfig::default();
        let mut market = Market::with_stock(0.0);
        market.add_supply(Good::Clothing, 1_000.0);
        market.add_supply(Good::Grain, 1_000.0);
        // Budget 50: clothing first takes 5 units (50 money) at price 10
        let pop = PopSegment::new(SegmentId(0), 10, 5.0)
            .with_want(Good::Clothing, 1.0)
            .with_want(Good::Grain, 1.0);

        consume_segment(&pop, &mut market, &config);

        assert!((market.demand(Good::Clothing) - 5.0).abs() < 1e-9);
        assert_eq!(market.demand(Good::Grain), 0.0);
    }

    #[test]
    fn test_zero_price_uses_fallback_divisor() {
        let config = ConsumptionConfig::default();
        let mut market = Market::with_stock(0.0);
        market.add_supply(Good::Grain, 1_000.0);
        market.entry_mut(Good::Grain).price = 0.0;
        // Budget 30, fallback divisor 1.0 => affordable 30 despite zero price
        let pop = PopSegment::new(SegmentId(0), 10, 3.0).with_want(Good::Grain, 10.0);

        let spent = consume_segment(&pop, &mut market, &config);

        assert!((market.demand(Good::Grain) - 30.0).abs() < 1e-9);
        assert_eq!(spent, 0.0);
    }

    #[test]
    fn test_run_consumption_sums_segments() {
        let config = ConsumptionConfig::default();
        let mut market = Market::with_stock(0.0);
        market.add_supply(Good::Grain, 1_000.0);
        let pops = vec![
            PopSegment::new(SegmentId(0), 10, 1.0).with_want(Good::Grain, 1.0),
            PopSegment::new(SegmentId(1), 20, 1.0).with_want(Good::Grain, 1.0),
        ];

        let spent = run_consumption(&pops, &mut market, &config);

        assert!((spent - 30.0).abs() < 1e-9);
        assert!((market.supply(Good::Grain) - 970.0).abs() < 1e-9);
    }
}
