//! World state - the single owner of market, facilities and population

use serde::{Deserialize, Serialize};

use crate::core::config::StartingConditions;
use crate::core::error::Result;
use crate::core::types::{FacilityId, SegmentId, Tick};
use crate::economy::archetype::Archetype;
use crate::economy::facility::Facility;
use crate::economy::population::PopSegment;
use crate::market::Market;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub market: Market,
    /// Production order: earlier facilities draw inputs first
    pub facilities: Vec<Facility>,
    pub pops: Vec<PopSegment>,
    /// May go negative
    pub treasury: f64,
    pub weekly_tax_income: f64,
    /// Starts at 0, incremented at the start of each tick
    pub current_tick: Tick,
}

impl World {
    /// Empty world around a market
    pub fn new(market: Market, treasury: f64, weekly_tax_income: f64) -> Self {
        Self {
            market,
            facilities: Vec::new(),
            pops: Vec::new(),
            treasury,
            weekly_tax_income,
            current_tick: 0,
        }
    }

    /// The reference economy: a steel mill, a textile mill and one workforce
    pub fn from_start(start: &StartingConditions) -> Result<Self> {
        let mut world = Self::new(
            Market::with_stock(start.initial_stock),
            start.treasury,
            start.weekly_tax_income,
        );

        world.spawn_facility(Archetype::SteelMill)?;
        world.spawn_facility(Archetype::TextileMill)?;

        world.pops.try_reserve(1)?;
        world
            .pops
            .push(PopSegment::workers(SegmentId(0), start.population_size, start.wage));

        Ok(world)
    }

    /// Append a level-1 facility. Returns its index.
    ///
    /// Storage is reserved before anything is written, so on error the
    /// facility list is unchanged.
    pub fn spawn_facility(&mut self, archetype: Archetype) -> Result<usize> {
        self.facilities.try_reserve(1)?;
        let index = self.facilities.len();
        self.facilities
            .push(Facility::from_archetype(FacilityId::from_index(index), archetype));
        Ok(index)
    }
}
