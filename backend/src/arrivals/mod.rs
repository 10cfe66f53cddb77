//! Arrival generation for deterministic customer creation.
//!
//! Each arriving customer draws a service demand from the configured
//! uniform range (the reference scenario uses [1,6], one die roll per
//! customer). All generation is deterministic given the RNG seed: same
//! seed + same config → same customers.

use serde::{Deserialize, Serialize};

use crate::models::customer::Customer;
use crate::rng::RngManager;

/// Configuration for customer arrivals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalConfig {
    /// Minimum service demand in ticks (inclusive, must be >= 1)
    pub demand_min: u32,

    /// Maximum service demand in ticks (inclusive)
    pub demand_max: u32,
}

impl Default for ArrivalConfig {
    /// The reference scenario's uniform demand in [1,6]
    fn default() -> Self {
        Self {
            demand_min: 1,
            demand_max: 6,
        }
    }
}

/// Generator producing customers with sequential ids and random demand.
#[derive(Debug, Clone)]
pub struct ArrivalGenerator {
    /// Demand range configuration
    config: ArrivalConfig,

    /// Next customer id counter
    next_customer_id: usize,
}

impl ArrivalGenerator {
    /// Create a new arrival generator.
    ///
    /// The configuration is assumed valid; `Simulation::new` validates it
    /// before construction.
    pub fn new(config: ArrivalConfig) -> Self {
        debug_assert!(config.demand_min >= 1 && config.demand_min <= config.demand_max);
        Self {
            config,
            next_customer_id: 0,
        }
    }

    /// Generate the next arriving customer at the given tick.
    ///
    /// Draws one demand value from the injected RNG and assigns the next
    /// sequential customer id.
    pub fn next_customer(&mut self, arrival_tick: usize, rng: &mut RngManager) -> Customer {
        let demand = rng.range(self.config.demand_min as i64, self.config.demand_max as i64 + 1);

        let id = self.next_customer_id;
        self.next_customer_id += 1;

        Customer::new(id, demand as u32, arrival_tick)
    }

    /// Number of customers generated so far
    pub fn generated(&self) -> usize {
        self.next_customer_id
    }
}
