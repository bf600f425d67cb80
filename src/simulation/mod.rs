//! Elevator dispatch simulation
//!
//! This module contains the dispatch and scheduling core: the per-car sweep,
//! the floor-ordered request index, and the dispatcher that assigns hall
//! calls across the fleet. Demand arrives through the `DemandSource` trait,
//! either generated randomly or typed in at the console.

mod car;
mod config;
mod demand;
mod dispatcher;
mod fleet;
mod prompt;
mod request_index;
mod stats;
mod types;
mod workload;

pub use car::{Car, CarTick};
pub use config::BuildingConfig;
pub use demand::DemandSource;
pub use dispatcher::{Dispatcher, TickReport};
pub use fleet::Fleet;
pub use prompt::{ConsolePrompt, MAX_PROMPT_ATTEMPTS};
pub use request_index::{FloorRequest, FloorRequestIndex};
pub use stats::DispatchStats;
pub use types::{
    CarId, Demand, Direction, Floor, ServiceEvent, DEFAULT_CAPACITY, DEFAULT_FLOORS,
    DEFAULT_MAX_GENERATED_GUESTS, DEFAULT_TICK_DELAY_MS,
};
pub use workload::RandomWorkload;
