//! Building configuration consumed by the simulation core

use anyhow::{bail, Result};

use super::types::{Floor, DEFAULT_CAPACITY, DEFAULT_FLOORS, DEFAULT_MAX_GENERATED_GUESTS};

/// Shape of the building and its cars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingConfig {
    /// Number of floors; valid floors are `1..=floors`
    pub floors: u32,
    /// Guests a single car can carry
    pub capacity: u32,
    /// Upper bound of guests per generated hall call
    pub max_generated_guests: u32,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            floors: DEFAULT_FLOORS,
            capacity: DEFAULT_CAPACITY,
            max_generated_guests: DEFAULT_MAX_GENERATED_GUESTS,
        }
    }
}

impl BuildingConfig {
    pub fn new(floors: u32, capacity: u32) -> Self {
        Self {
            floors,
            capacity,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.floors == 0 {
            bail!("Building needs at least one floor");
        }
        if self.capacity == 0 {
            bail!("Car capacity must be at least one guest");
        }
        if self.max_generated_guests == 0 {
            bail!("Generated hall calls need at least one guest");
        }
        Ok(())
    }

    /// Number of cars for this building: one, plus one more every time the
    /// height doubles past five floors
    pub fn fleet_size(&self) -> usize {
        let fifths = (self.floors / 5).max(1);
        1 + fifths.ilog2() as usize
    }

    /// Floor where idle cars wait for new work
    pub fn home_floor(&self) -> Floor {
        (self.floors / 2).max(1)
    }

    pub fn contains(&self, floor: Floor) -> bool {
        (1..=self.floors).contains(&floor)
    }
}
