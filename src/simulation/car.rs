//! Elevator car and its sweep state machine
//!
//! A car moves instantly: one tick takes it straight to the next floor it
//! has to service.

use std::fmt;

use log::{debug, info, warn};

use super::config::BuildingConfig;
use super::request_index::FloorRequestIndex;
use super::types::{CarId, Direction, Floor, ServiceEvent};

/// Result of a single car tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarTick {
    /// False when the car had nothing to do; this is the idle signal
    pub advanced: bool,
    pub events: Vec<ServiceEvent>,
}

impl CarTick {
    fn idle() -> Self {
        Self::default()
    }

    fn advanced(events: Vec<ServiceEvent>) -> Self {
        Self {
            advanced: true,
            events,
        }
    }
}

/// An elevator car in the simulation
#[derive(Debug, Clone)]
pub struct Car {
    id: CarId,
    current_floor: Floor,
    direction: Direction,
    capacity: u32,
    /// Guests currently aboard
    load: u32,
    home_floor: Floor,
    pickups: FloorRequestIndex,
    dropoffs: FloorRequestIndex,
    /// Shared by both indices so submission order is comparable
    next_sequence: u64,
}

impl Car {
    /// Create an empty, idle car on the ground floor
    pub fn new(id: CarId, config: &BuildingConfig) -> Self {
        Self {
            id,
            current_floor: 1,
            direction: Direction::Idle,
            capacity: config.capacity,
            load: 0,
            home_floor: config.home_floor(),
            pickups: FloorRequestIndex::new(),
            dropoffs: FloorRequestIndex::new(),
            next_sequence: 0,
        }
    }

    /// Place the car at a floor with a heading
    pub fn with_position(mut self, floor: Floor, direction: Direction) -> Self {
        self.current_floor = floor;
        self.direction = direction;
        self
    }

    /// Put guests aboard, clamped to capacity
    pub fn with_load(mut self, load: u32) -> Self {
        self.load = load.min(self.capacity);
        self
    }

    pub fn id(&self) -> CarId {
        self.id
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn load(&self) -> u32 {
        self.load
    }

    pub fn spare_capacity(&self) -> u32 {
        self.capacity - self.load
    }

    pub fn home_floor(&self) -> Floor {
        self.home_floor
    }

    pub fn pickups(&self) -> &FloorRequestIndex {
        &self.pickups
    }

    pub fn dropoffs(&self) -> &FloorRequestIndex {
        &self.dropoffs
    }

    /// Number of floors the car still has to visit for pickups or drop-offs
    pub fn outstanding_requests(&self) -> usize {
        self.pickups.len() + self.dropoffs.len()
    }

    fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    /// Accept a hall call, up to the room left in the car
    ///
    /// Returns the guests that could not be accepted; the caller is
    /// responsible for routing them elsewhere.
    pub fn admit_pickup(&mut self, floor: Floor, demand: u32) -> u32 {
        let admitted = demand.min(self.spare_capacity());
        if admitted > 0 {
            let sequence = self.next_sequence();
            self.pickups.insert(floor, admitted, sequence);
        }
        demand - admitted
    }

    /// Accept a drop-off for guests travelling in this car
    pub fn admit_dropoff(&mut self, floor: Floor, demand: u32) {
        let sequence = self.next_sequence();
        self.dropoffs.insert(floor, demand, sequence);
    }

    /// Run one step of the sweep
    ///
    /// The car keeps its heading while there is work ahead, serving whichever
    /// of the next pickup and next drop-off is closer. With nothing ahead it
    /// reverses, and with nothing at all it returns to its home floor.
    pub fn tick(&mut self) -> CarTick {
        let next_pickup = self.pickups.next_floor(self.current_floor, self.direction);
        let next_dropoff = self.dropoffs.next_floor(self.current_floor, self.direction);

        let target = match (next_pickup, next_dropoff) {
            (Some(pickup), Some(dropoff)) => {
                if self.distance_to(pickup) < self.distance_to(dropoff) {
                    pickup
                } else {
                    dropoff
                }
            }
            (Some(pickup), None) => pickup,
            (None, Some(dropoff)) => dropoff,
            (None, None) => {
                if self.outstanding_requests() == 0 {
                    return self.return_home();
                }
                self.direction = self.direction.reversed();
                debug!(
                    "Car {} reversing to {} at floor {}",
                    self.id, self.direction, self.current_floor
                );
                return CarTick::advanced(Vec::new());
            }
        };

        self.address_floor(target)
    }

    fn distance_to(&self, floor: Floor) -> u32 {
        floor.abs_diff(self.current_floor)
    }

    /// Move to a floor and complete everything pending there
    fn address_floor(&mut self, floor: Floor) -> CarTick {
        let mut events = Vec::new();
        info!("Car {} moved to floor {}", self.id, floor);

        // Drop-offs first so boarding guests see the freed room
        if let Some(request) = self.dropoffs.take(floor) {
            let guests = request.demand.min(self.load);
            self.load -= guests;
            info!("Car {} dropped off {} guests at floor {}", self.id, guests, floor);
            events.push(ServiceEvent::DroppedOff {
                car: self.id,
                floor,
                guests,
            });
        }

        if let Some(request) = self.pickups.take(floor) {
            let guests = request.demand.min(self.spare_capacity());
            self.load += guests;
            info!("Car {} picked up {} guests at floor {}", self.id, guests, floor);
            events.push(ServiceEvent::PickedUp {
                car: self.id,
                floor,
                guests,
            });

            let remainder = request.demand - guests;
            if remainder > 0 {
                warn!(
                    "Car {} is full, leaving {} guests at floor {}",
                    self.id, remainder, floor
                );
                events.push(ServiceEvent::Deferred {
                    car: self.id,
                    floor,
                    guests: remainder,
                });
            }
        }

        self.direction = Direction::between(self.current_floor, floor);
        self.current_floor = floor;

        CarTick::advanced(events)
    }

    fn return_home(&mut self) -> CarTick {
        if self.current_floor == self.home_floor {
            self.direction = Direction::Idle;
            return CarTick::idle();
        }

        info!(
            "Car {} returning to home floor {}",
            self.id, self.home_floor
        );
        self.current_floor = self.home_floor;
        self.direction = Direction::Idle;
        CarTick::advanced(Vec::new())
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Car {} State:", self.id)?;
        writeln!(f, "-----------------------------")?;
        writeln!(
            f,
            "Current Floor: {} ({})",
            self.current_floor, self.direction
        )?;
        writeln!(f, "Load: {}/{}", self.load, self.capacity)?;
        writeln!(f, "Pickups: {}", self.pickups)?;
        writeln!(f, "Dropoffs: {}", self.dropoffs)?;
        writeln!(f, "-----------------------------")
    }
}
