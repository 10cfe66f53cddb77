//! Customer model
//!
//! Represents one arriving entity with a randomized service demand.
//! A customer moves through three states:
//! - **waiting**: sitting in a station's FIFO queue
//! - **in service**: occupying the station's single service slot, consuming
//!   one unit of demand per tick
//! - **finished**: demand fully consumed; statistics fields frozen
//!
//! Mutation only happens inside the `CheckoutStation` that holds the
//! customer. Once finished, a customer is effectively immutable.

use serde::{Deserialize, Serialize};

/// A single customer moving through a checkout station
///
/// # Example
/// ```
/// use checkout_sim_core::Customer;
///
/// let customer = Customer::new(0, 3, 10); // id 0, demand 3, arrived tick 10
/// assert_eq!(customer.service_demand(), 3);
/// assert_eq!(customer.remaining_demand(), 3);
/// assert_eq!(customer.arrival_tick(), 10);
/// assert!(customer.completion_tick().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer identifier (monotonic per arrival generator)
    id: usize,

    /// Number of ticks required to complete service, drawn uniformly
    /// in [1,6] at arrival
    service_demand: u32,

    /// Demand still to be consumed; decremented once per tick in service
    remaining_demand: u32,

    /// Tick at which the customer entered the system
    arrival_tick: usize,

    /// Tick at which the customer was promoted into service
    service_start_tick: Option<usize>,

    /// Tick at which the customer finished service
    completion_tick: Option<usize>,

    /// Ticks spent waiting in the queue before promotion
    wait_ticks: usize,
}

impl Customer {
    /// Create a new customer at arrival time
    ///
    /// # Panics
    /// Panics if `service_demand` is zero; every customer needs at least
    /// one tick of service.
    pub fn new(id: usize, service_demand: u32, arrival_tick: usize) -> Self {
        assert!(service_demand >= 1, "service_demand must be at least 1");
        Self {
            id,
            service_demand,
            remaining_demand: service_demand,
            arrival_tick,
            service_start_tick: None,
            completion_tick: None,
            wait_ticks: 0,
        }
    }

    /// Unique customer id
    pub fn id(&self) -> usize {
        self.id
    }

    /// Total service demand drawn at arrival
    pub fn service_demand(&self) -> u32 {
        self.service_demand
    }

    /// Demand still to be consumed
    pub fn remaining_demand(&self) -> u32 {
        self.remaining_demand
    }

    /// Tick at which the customer arrived
    pub fn arrival_tick(&self) -> usize {
        self.arrival_tick
    }

    /// Tick at which service began, if promoted
    pub fn service_start_tick(&self) -> Option<usize> {
        self.service_start_tick
    }

    /// Tick at which service completed, if finished
    pub fn completion_tick(&self) -> Option<usize> {
        self.completion_tick
    }

    /// Ticks spent waiting in the queue before promotion
    pub fn wait_ticks(&self) -> usize {
        self.wait_ticks
    }

    /// Total time in the system (completion - arrival), if finished
    pub fn total_ticks(&self) -> Option<usize> {
        self.completion_tick.map(|done| done - self.arrival_tick)
    }

    /// Whether all demand has been consumed
    pub fn is_done(&self) -> bool {
        self.remaining_demand == 0
    }

    /// Mark the customer as promoted into service at `tick`
    ///
    /// Records the service start and the wait time accumulated in the queue.
    pub(crate) fn begin_service(&mut self, tick: usize) {
        debug_assert!(self.service_start_tick.is_none(), "promoted twice");
        self.service_start_tick = Some(tick);
        self.wait_ticks = tick - self.arrival_tick;
    }

    /// Consume one tick of service demand
    pub(crate) fn consume(&mut self) {
        debug_assert!(self.remaining_demand > 0, "consume past zero demand");
        self.remaining_demand -= 1;
    }

    /// Mark the customer as finished at `tick`
    pub(crate) fn complete(&mut self, tick: usize) {
        debug_assert!(self.is_done(), "completed with demand remaining");
        self.completion_tick = Some(tick);
    }
}
