//! Core types for the elevator simulation
//!
//! Plain data shared by the request index, the cars and the dispatcher.

use std::fmt;

/// A floor number in the building, 1-based
pub type Floor = u32;

/// A wrapper type for car IDs
/// The wrapped value is the car's index in the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarId(pub usize);

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of travel of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Down,
    #[default]
    Idle,
    Up,
}

impl Direction {
    /// Direction pointing from one floor towards another
    pub fn between(from: Floor, to: Floor) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less => Direction::Down,
            std::cmp::Ordering::Equal => Direction::Idle,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
            Direction::Up => Direction::Down,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Down => "down",
            Direction::Idle => "idle",
            Direction::Up => "up",
        };
        f.write_str(label)
    }
}

/// Guests waiting at (or heading to) a floor
///
/// Used for hall calls before they are bound to a car, for car calls
/// produced by a demand source, and for deferred remainders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demand {
    pub floor: Floor,
    pub guests: u32,
}

impl Demand {
    pub fn new(floor: Floor, guests: u32) -> Self {
        Self { floor, guests }
    }
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Floor: {} | Guests: {}", self.floor, self.guests)
    }
}

/// Something a car did while servicing a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceEvent {
    /// Guests boarded at a pickup floor
    PickedUp { car: CarId, floor: Floor, guests: u32 },
    /// Guests left the car at a drop-off floor
    DroppedOff { car: CarId, floor: Floor, guests: u32 },
    /// Guests at a pickup floor that did not fit and must be re-routed
    Deferred { car: CarId, floor: Floor, guests: u32 },
}

/// Default building height
pub const DEFAULT_FLOORS: u32 = 30;

/// Default number of guests one car can carry
pub const DEFAULT_CAPACITY: u32 = 30;

/// Default upper bound of guests per generated hall call
pub const DEFAULT_MAX_GENERATED_GUESTS: u32 = 40;

/// Default pause between ticks in the driver, in milliseconds
pub const DEFAULT_TICK_DELAY_MS: u64 = 1000;
