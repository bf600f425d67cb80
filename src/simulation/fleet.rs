//! The fixed set of cars serving a building
//!
//! Fleet order is the order cars are ticked and considered for hall calls,
//! so a car's id is always its index here.

use anyhow::{bail, Result};

use super::car::Car;
use super::config::BuildingConfig;
use super::types::CarId;

#[derive(Debug, Clone)]
pub struct Fleet {
    cars: Vec<Car>,
}

impl Fleet {
    /// Build a fleet sized for the building, every car idle on floor 1
    pub fn new(config: &BuildingConfig) -> Self {
        let cars = (0..config.fleet_size())
            .map(|index| Car::new(CarId(index), config))
            .collect();
        Self { cars }
    }

    /// Build a fleet from pre-placed cars
    ///
    /// Fails if the list is empty or a car's id does not match its position.
    pub fn from_cars(cars: Vec<Car>) -> Result<Self> {
        if cars.is_empty() {
            bail!("A fleet needs at least one car");
        }
        for (index, car) in cars.iter().enumerate() {
            if car.id() != CarId(index) {
                bail!("Car {} is at fleet position {}", car.id(), index);
            }
        }
        Ok(Self { cars })
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn get(&self, id: CarId) -> Option<&Car> {
        self.cars.get(id.0)
    }

    pub fn get_mut(&mut self, id: CarId) -> Option<&mut Car> {
        self.cars.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter()
    }
}
