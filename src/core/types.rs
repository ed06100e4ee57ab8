//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulation tick counter (one tick is one economic week)
pub type Tick = u64;

/// Facility identifier, assigned in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FacilityId(pub u32);

impl FacilityId {
    /// Id for the facility that will occupy slot `index`
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

impl std::fmt::Display for FacilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Population segment identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentId(pub u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facility_id_from_index() {
        assert_eq!(FacilityId::from_index(0), FacilityId(0));
        assert_eq!(FacilityId::from_index(7), FacilityId(7));
    }

    #[test]
    fn test_facility_id_display() {
        assert_eq!(FacilityId(3).to_string(), "#3");
    }
}
