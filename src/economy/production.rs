//! Production phase - facilities turn market supply into new supply
//!
//! Each facility's fulfillment factor starts at `level * productivity` and is
//! capped by its scarcest input. Facilities are served in list order, so the
//! first-listed facility wins ties over a scarce input.

use serde::{Deserialize, Serialize};

use crate::economy::facility::Facility;
use crate::market::Market;

/// Outcome for a facility that produced this tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionResult {
    /// Index of the facility in the world's list
    pub facility_idx: usize,
    /// Fulfillment factor actually applied
    pub fulfillment: f64,
}

/// Bottleneck-capped fulfillment factor against current supply
pub fn fulfillment_factor(facility: &Facility, market: &Market) -> f64 {
    let level = facility.level as f64;
    let mut factor = facility.ideal_factor();

    for input in &facility.inputs {
        let needed = input.amount * level;
        let available = market.supply(input.good);
        if available < needed {
            let denominator = if needed > 0.0 { needed } else { 1.0 };
            factor = factor.min(available / denominator);
        }
    }

    factor
}

/// Run one facility against the market. Returns the factor if it produced.
pub fn produce(facility: &Facility, market: &mut Market) -> Option<f64> {
    let factor = fulfillment_factor(facility, market);
    if factor <= 0.0 {
        return None;
    }

    let scale = facility.level as f64 * factor;
    for input in &facility.inputs {
        market.consume_supply(input.good, input.amount * scale);
    }
    for output in &facility.outputs {
        market.add_supply(output.good, output.amount * scale);
    }

    Some(factor)
}

/// Run every facility in order
pub fn run_production(facilities: &[Facility], market: &mut Market) -> Vec<ProductionResult> {
    let mut results = Vec::new();

    for (i, facility) in facilities.iter().enumerate() {
        match produce(facility, market) {
            Some(fulfillment) => {
                tracing::trace!(facility = %facility.label, fulfillment, "facility produced");
                results.push(ProductionResult {
                    facility_idx: i,
                    fulfillment,
                });
            }
            None => {
                tracing::trace!(facility = %facility.label, "facility idle, inputs unavailable");
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FacilityId;
    use crate::economy::archetype::Archetype;
    use crate::market::Good;

    fn steel_mill() -> Facility {
        Facility::from_archetype(FacilityId(0), Archetype::SteelMill)
    }

    #[test]
    fn test_full_supply_reaches_ideal_output() {
        let mut market = Market::with_stock(1000.0);
        let facilities = vec![steel_mill()];

        let results = run_production(&facilities, &mut market);

        assert_eq!(results.len(), 1);
        assert!((results[0].fulfillment - 1.0).abs() < 1e-9);
        assert!((market.supply(Good::Steel) - 1004.0).abs() < 1e-9);
        assert!((market.supply(Good::Coal) - 998.0).abs() < 1e-9);
        assert!((market.supply(Good::Iron) - 997.0).abs() < 1e-9);
    }

    #[test]
    fn test_bottleneck_scales_by_scarcest_input() {
        let mut market = Market::with_stock(0.0);
        market.add_supply(Good::Coal, 100.0);
        // Needs 3 iron, only 1.5 available => factor 0.5
        market.add_supply(Good::Iron, 1.5);

        let factor = produce(&steel_mill(), &mut market);

        assert_eq!(factor, Some(0.5));
        assert!((market.supply(Good::Steel) - 2.0).abs() < 1e-9);
        assert!((market.supply(Good::Iron) - 0.0).abs() < 1e-9);
        assert!((market.supply(Good::Coal) - 99.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_input_produces_nothing() {
        let mut market = Market::with_stock(0.0);
        market.add_supply(Good::Coal, 100.0);

        assert_eq!(produce(&steel_mill(), &mut market), None);
        // Nothing drawn from the inputs that were present
        assert_eq!(market.supply(Good::Coal), 100.0);
        assert_eq!(market.supply(Good::Steel), 0.0);
    }

    #[test]
    fn test_level_multiplies_needs_and_factor() {
        let mut market = Market::with_stock(1000.0);
        let mut mill = steel_mill();
        mill.level = 2;

        let factor = produce(&mill, &mut market);

        // Ideal factor is level * productivity, applied on top of per-level amounts
        assert_eq!(factor, Some(2.0));
        assert!((market.supply(Good::Steel) - (1000.0 + 4.0 * 2.0 * 2.0)).abs() < 1e-9);
        assert!((market.supply(Good::Coal) - (1000.0 - 2.0 * 2.0 * 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_first_listed_facility_served_first() {
        let mut market = Market::with_stock(0.0);
        market.add_supply(Good::Coal, 2.0);
        market.add_supply(Good::Iron, 3.0);
        let facilities = vec![steel_mill(), Facility::from_archetype(FacilityId(1), Archetype::SteelMill)];

        let results = run_production(&facilities, &mut market);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].facility_idx, 0);
        assert!((market.supply(Good::Steel) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_amount_input_does_not_produce_nan() {
        let mut market = Market::with_stock(0.0);
        let mut mill = steel_mill();
        mill.inputs = vec![crate::economy::archetype::GoodAmount::new(Good::Coal, 0.0)];

        let factor = fulfillment_factor(&mill, &market);
        assert!(factor.is_finite());
        assert!((factor - 1.0).abs() < 1e-9);
        assert!(produce(&mill, &mut market).is_some());
    }
}
