//! Tradable goods

use serde::{Deserialize, Serialize};

/// A commodity in the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Good {
    Coal,
    Iron,
    Grain,
    Tools,
    Clothing,
    Steel,
}

impl Good {
    pub const COUNT: usize = 6;

    /// Every good in catalog order
    pub const ALL: [Good; Good::COUNT] = [
        Good::Coal,
        Good::Iron,
        Good::Grain,
        Good::Tools,
        Good::Clothing,
        Good::Steel,
    ];

    /// Position in catalog order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Price a good starts at and is pulled toward
    pub fn base_price(self) -> f64 {
        match self {
            Good::Coal => 5.0,
            Good::Iron => 8.0,
            Good::Grain => 1.0,
            Good::Tools => 20.0,
            Good::Clothing => 10.0,
            Good::Steel => 25.0,
        }
    }

    /// Weight the decision engine gives to producing this good
    pub fn strategic_importance(self) -> f64 {
        match self {
            Good::Steel => 2.5,
            Good::Tools => 2.0,
            Good::Iron => 1.5,
            Good::Coal | Good::Grain | Good::Clothing => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Good::Coal => "Coal",
            Good::Iron => "Iron",
            Good::Grain => "Grain",
            Good::Tools => "Tools",
            Good::Clothing => "Clothing",
            Good::Steel => "Steel",
        }
    }
}

impl std::fmt::Display for Good {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_index() {
        for (i, good) in Good::ALL.iter().enumerate() {
            assert_eq!(good.index(), i);
        }
    }

    #[test]
    fn test_strategic_importance_table() {
        assert_eq!(Good::Steel.strategic_importance(), 2.5);
        assert_eq!(Good::Tools.strategic_importance(), 2.0);
        assert_eq!(Good::Iron.strategic_importance(), 1.5);
        assert_eq!(Good::Coal.strategic_importance(), 1.0);
        assert_eq!(Good::Grain.strategic_importance(), 1.0);
        assert_eq!(Good::Clothing.strategic_importance(), 1.0);
    }

    #[test]
    fn test_base_prices_positive() {
        for good in Good::ALL {
            assert!(good.base_price() > 0.0, "{} needs a positive base price", good);
        }
    }
}
