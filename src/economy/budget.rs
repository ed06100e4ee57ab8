//! Budget ledger - tax income in, facility maintenance out
//!
//! No floor is applied: the treasury may go negative and stay there.

use serde::{Deserialize, Serialize};

use crate::economy::facility::Facility;

/// One tick's settlement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub income: f64,
    pub maintenance: f64,
    /// Treasury after settlement
    pub balance: f64,
}

/// Sum of `maintenance_cost * level` over all facilities
pub fn total_maintenance(facilities: &[Facility]) -> f64 {
    facilities.iter().map(Facility::maintenance).sum()
}

/// Apply one tick of income and maintenance to the treasury
pub fn settle(treasury: &mut f64, weekly_tax_income: f64, facilities: &[Facility]) -> LedgerEntry {
    let maintenance = total_maintenance(facilities);
    *treasury += weekly_tax_income;
    *treasury -= maintenance;

    LedgerEntry {
        income: weekly_tax_income,
        maintenance,
        balance: *treasury,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FacilityId;
    use crate::economy::archetype::Archetype;

    fn default_facilities() -> Vec<Facility> {
        vec![
            Facility::from_archetype(FacilityId(0), Archetype::SteelMill),
            Facility::from_archetype(FacilityId(1), Archetype::TextileMill),
        ]
    }

    #[test]
    fn test_total_maintenance() {
        let mut facilities = default_facilities();
        assert_eq!(total_maintenance(&facilities), 700.0);

        facilities[0].level = 2;
        assert_eq!(total_maintenance(&facilities), 1200.0);
    }

    #[test]
    fn test_settle_adds_tax_subtracts_maintenance() {
        let mut treasury = 100_000.0;
        let entry = settle(&mut treasury, 5_000.0, &default_facilities());

        assert_eq!(treasury, 104_300.0);
        assert_eq!(entry.income, 5_000.0);
        assert_eq!(entry.maintenance, 700.0);
        assert_eq!(entry.balance, 104_300.0);
    }

    #[test]
    fn test_treasury_may_go_negative() {
        let mut treasury = 100.0;
        settle(&mut treasury, 0.0, &default_facilities());
        assert_eq!(treasury, -600.0);

        // Debt keeps accumulating, no clamping
        settle(&mut treasury, 0.0, &default_facilities());
        assert_eq!(treasury, -1300.0);
    }

    #[test]
    fn test_no_facilities_no_maintenance() {
        let mut treasury = 0.0;
        settle(&mut treasury, 50.0, &[]);
        assert_eq!(treasury, 50.0);
    }
}
