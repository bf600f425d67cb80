//! Floor-ordered index of outstanding requests
//!
//! Each car keeps two of these, one for pickups and one for drop-offs.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

use super::types::{Direction, Floor};

/// An outstanding request at a single floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorRequest {
    pub floor: Floor,
    /// Submission order, only consulted when the car is idle
    pub sequence: u64,
    pub demand: u32,
}

/// Requests keyed by floor, at most one entry per floor
#[derive(Debug, Clone, Default)]
pub struct FloorRequestIndex {
    requests: BTreeMap<Floor, FloorRequest>,
}

impl FloorRequestIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add demand at a floor
    ///
    /// A second request for a floor that is already pending is merged into
    /// the existing entry: the demand accumulates and the original sequence
    /// is kept. Returns `true` if a new entry was created.
    pub fn insert(&mut self, floor: Floor, demand: u32, sequence: u64) -> bool {
        match self.requests.get_mut(&floor) {
            Some(existing) => {
                existing.demand = existing.demand.saturating_add(demand);
                false
            }
            None => {
                self.requests.insert(
                    floor,
                    FloorRequest {
                        floor,
                        sequence,
                        demand,
                    },
                );
                true
            }
        }
    }

    /// Mark the request at a floor as serviced
    pub fn remove(&mut self, floor: Floor) -> bool {
        self.requests.remove(&floor).is_some()
    }

    /// Remove and return the request at a floor
    pub fn take(&mut self, floor: Floor) -> Option<FloorRequest> {
        self.requests.remove(&floor)
    }

    pub fn get(&self, floor: Floor) -> Option<&FloorRequest> {
        self.requests.get(&floor)
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.requests.contains_key(&floor)
    }

    /// Next floor to visit from `current` when travelling in `direction`
    ///
    /// Going up this is the lowest pending floor at or above `current`,
    /// going down the highest pending floor at or below it. An idle car
    /// gets the earliest submitted request regardless of position.
    pub fn next_floor(&self, current: Floor, direction: Direction) -> Option<Floor> {
        match direction {
            Direction::Up => self
                .requests
                .range((Bound::Included(current), Bound::Unbounded))
                .next()
                .map(|(floor, _)| *floor),
            Direction::Down => self
                .requests
                .range((Bound::Unbounded, Bound::Included(current)))
                .next_back()
                .map(|(floor, _)| *floor),
            Direction::Idle => self
                .requests
                .values()
                .min_by_key(|request| request.sequence)
                .map(|request| request.floor),
        }
    }

    /// Requests in ascending floor order
    pub fn iter(&self) -> impl Iterator<Item = &FloorRequest> {
        self.requests.values()
    }

    pub fn total_demand(&self) -> u64 {
        self.requests.values().map(|r| u64::from(r.demand)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }
}

impl fmt::Display for FloorRequestIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, request) in self.requests.values().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "Floor: {} | Guests: {}", request.floor, request.demand)?;
        }
        f.write_str("]")
    }
}
