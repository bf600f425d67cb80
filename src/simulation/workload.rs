//! Randomized guest arrivals for stress-testing the dispatcher

use anyhow::Result;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::car::Car;
use super::config::BuildingConfig;
use super::demand::DemandSource;
use super::types::{Demand, Floor};

/// Generates random hall calls and drop-offs
///
/// Each call makes a random number of attempts (up to the building height),
/// each at a random floor; floors already used in the same call are skipped,
/// so no floor appears twice in one batch.
#[derive(Debug, Default)]
pub struct RandomWorkload {
    /// Optional seeded RNG for reproducible simulations
    rng: Option<StdRng>,
}

impl RandomWorkload {
    pub fn new() -> Self {
        Self { rng: None }
    }

    /// Create a workload with a seeded RNG for reproducible simulations
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    /// Get a random value in the given range, using seeded RNG if available
    fn random_range(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    fn random_floor(&mut self, config: &BuildingConfig) -> Floor {
        self.random_range(1..=config.floors)
    }
}

impl DemandSource for RandomWorkload {
    fn hall_calls(&mut self, config: &BuildingConfig) -> Result<Vec<Demand>> {
        let mut used = vec![false; config.floors as usize + 1];
        let mut calls = Vec::new();

        let attempts = self.random_range(0..=config.floors);
        for _ in 0..attempts {
            let floor = self.random_floor(config);
            if used[floor as usize] {
                continue;
            }
            used[floor as usize] = true;
            let guests = self.random_range(1..=config.max_generated_guests);
            calls.push(Demand::new(floor, guests));
        }

        Ok(calls)
    }

    fn car_calls(&mut self, car: &Car, config: &BuildingConfig) -> Result<Vec<Demand>> {
        let mut used = vec![false; config.floors as usize + 1];
        let mut calls = Vec::new();
        let mut assigned = 0;

        let attempts = self.random_range(0..=config.floors);
        for _ in 0..attempts {
            // Everyone aboard already has a destination
            if assigned >= car.load() {
                break;
            }
            let floor = self.random_floor(config);
            if used[floor as usize] {
                continue;
            }
            used[floor as usize] = true;
            let guests = self.random_range(1..=car.load() - assigned);
            calls.push(Demand::new(floor, guests));
            assigned += guests;
        }

        Ok(calls)
    }
}
