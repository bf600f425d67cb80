//! Fleet orchestration and hall call assignment

use std::collections::VecDeque;
use std::fmt;

use anyhow::{Context, Result};
use log::{debug, warn};

use super::car::Car;
use super::config::BuildingConfig;
use super::demand::DemandSource;
use super::fleet::Fleet;
use super::stats::DispatchStats;
use super::types::{CarId, Demand, Direction, Floor, ServiceEvent};

/// What happened during one dispatcher tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// 1-based tick counter
    pub tick: u64,
    /// Events from every car, in fleet order
    pub events: Vec<ServiceEvent>,
    /// Cars that had nothing to do and were offered new demand
    pub idle_cars: Vec<CarId>,
}

/// Owns the fleet and routes hall calls to cars
pub struct Dispatcher {
    fleet: Fleet,
    /// Hall calls waiting to be routed, oldest first
    pending: VecDeque<Demand>,
    config: BuildingConfig,
    stats: DispatchStats,
}

impl Dispatcher {
    pub fn new(fleet: Fleet, config: BuildingConfig) -> Self {
        Self {
            fleet,
            pending: VecDeque::new(),
            config,
            stats: DispatchStats::default(),
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.fleet.get(id)
    }

    pub fn pending(&self) -> &VecDeque<Demand> {
        &self.pending
    }

    pub fn pending_guests(&self) -> u64 {
        self.pending.iter().map(|call| u64::from(call.guests)).sum()
    }

    pub fn stats(&self) -> &DispatchStats {
        &self.stats
    }

    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    /// Pick the car that should serve a hall call at `floor`
    ///
    /// Cars already heading towards the floor (or standing idle) win over
    /// cars heading away, then the nearest car wins, then the car with the
    /// fewest outstanding requests. Remaining ties go to the car earliest
    /// in the fleet. Full cars are only considered when every car is full.
    pub fn select_car(&self, floor: Floor) -> Option<CarId> {
        self.fleet
            .iter()
            .min_by_key(|car| {
                let heading = Direction::between(car.current_floor(), floor);
                let matches = car.direction() == Direction::Idle || car.direction() == heading;
                (
                    car.spare_capacity() == 0,
                    !matches,
                    floor.abs_diff(car.current_floor()),
                    car.outstanding_requests(),
                )
            })
            .map(|car| car.id())
    }

    /// Assign a hall call to the best car
    ///
    /// Guests that do not fit in the chosen car go to the back of the
    /// pending queue. Returns the car that received the call, or `None` if
    /// no guests were admitted anywhere.
    pub fn route_pickup(&mut self, floor: Floor, demand: u32) -> Option<CarId> {
        debug_assert!(self.config.contains(floor), "floor {} outside building", floor);
        self.stats.hall_calls_routed += 1;

        let Some(id) = self.select_car(floor) else {
            self.pending.push_back(Demand::new(floor, demand));
            return None;
        };
        let car = self.fleet.get_mut(id)?;

        let remainder = car.admit_pickup(floor, demand);
        debug!(
            "Hall call at floor {} ({} guests) assigned to car {}",
            floor,
            demand - remainder,
            id
        );

        if remainder > 0 {
            warn!(
                "Car {} has no room for {} guests from floor {}, requeueing",
                id, remainder, floor
            );
            self.pending.push_back(Demand::new(floor, remainder));
        }

        (remainder < demand).then_some(id)
    }

    /// Give a drop-off to the car carrying those guests
    pub fn route_dropoff(&mut self, car: CarId, floor: Floor, demand: u32) -> Result<()> {
        debug_assert!(self.config.contains(floor), "floor {} outside building", floor);
        let target = self
            .fleet
            .get_mut(car)
            .with_context(|| format!("Car {} not found", car))?;
        target.admit_dropoff(floor, demand);
        self.stats.car_calls_routed += 1;
        debug!("Drop-off at floor {} ({} guests) for car {}", floor, demand, car);
        Ok(())
    }

    /// Queue a hall call for the next drain
    pub fn enqueue_pickup(&mut self, call: Demand) {
        self.pending.push_back(call);
    }

    /// Route every hall call that is queued right now, oldest first
    ///
    /// Calls requeued while draining stay in the queue for the next drain.
    pub fn drain_pending(&mut self) {
        let queued = self.pending.len();
        if queued > 0 {
            debug!("Draining {} queued hall calls", queued);
        }

        for _ in 0..queued {
            let Some(call) = self.pending.pop_front() else {
                break;
            };
            self.route_pickup(call.floor, call.guests);
        }
    }

    /// Advance every car by one step
    ///
    /// Cars are ticked in fleet order. Whenever a car reports it has nothing
    /// to do, `source` is asked for drop-offs for that car and for new hall
    /// calls, and the pending queue is drained before the next car moves.
    pub fn tick<S: DemandSource + ?Sized>(&mut self, source: &mut S) -> Result<TickReport> {
        self.stats.ticks += 1;
        let mut report = TickReport {
            tick: self.stats.ticks,
            ..TickReport::default()
        };

        for index in 0..self.fleet.len() {
            let id = CarId(index);
            let Some(car) = self.fleet.get_mut(id) else {
                continue;
            };
            let outcome = car.tick();

            for event in &outcome.events {
                self.stats.record(event);
                if let ServiceEvent::Deferred { floor, guests, .. } = *event {
                    self.pending.push_back(Demand::new(floor, guests));
                }
            }
            report.events.extend(outcome.events);

            if !outcome.advanced {
                self.stats.idle_car_ticks += 1;
                report.idle_cars.push(id);
                self.resupply(id, source)?;
            }
        }

        Ok(report)
    }

    /// Fetch new work for an idle car and route everything waiting
    fn resupply<S: DemandSource + ?Sized>(&mut self, id: CarId, source: &mut S) -> Result<()> {
        let config = self.config;

        let car = self
            .fleet
            .get(id)
            .with_context(|| format!("Car {} not found", id))?;
        let car_calls = source
            .car_calls(car, &config)
            .with_context(|| format!("Failed to get drop-offs for car {}", id))?;
        for call in car_calls {
            self.route_dropoff(id, call.floor, call.guests)?;
        }

        let hall_calls = source
            .hall_calls(&config)
            .context("Failed to get hall calls")?;
        for call in hall_calls {
            self.enqueue_pickup(call);
        }

        self.drain_pending();
        Ok(())
    }
}

impl fmt::Display for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for car in self.fleet.iter() {
            write!(f, "{}", car)?;
        }
        writeln!(f, "Dispatcher Request Queue:")?;
        for call in &self.pending {
            writeln!(f, "  {}", call)?;
        }
        Ok(())
    }
}
