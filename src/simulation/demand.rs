//! Where new pickup and drop-off demand comes from

use anyhow::Result;

use super::car::Car;
use super::config::BuildingConfig;
use super::types::Demand;

/// Supplier of new requests, asked whenever a car runs out of work
///
/// Implementations must only return floors inside the building and at least
/// one guest per request.
pub trait DemandSource {
    /// New hall calls, not yet bound to any car
    fn hall_calls(&mut self, config: &BuildingConfig) -> Result<Vec<Demand>>;

    /// Drop-offs for the guests riding in `car`
    fn car_calls(&mut self, car: &Car, config: &BuildingConfig) -> Result<Vec<Demand>>;
}
