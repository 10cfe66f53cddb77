//! Checkout Simulator Core
//!
//! Deterministic simulation of customers arriving at a bank of checkout
//! stations, choosing a queue under a load-balancing strategy, being
//! served, and leaving. Statistics are aggregated per round.
//!
//! # Architecture
//!
//! - **core**: tick clock
//! - **models**: domain types (Customer, CheckoutStation, Event)
//! - **policy**: queue selection strategies (single choice, power-of-two)
//! - **arrivals**: deterministic customer generation
//! - **sim**: main simulation loop, round statistics, display snapshot
//! - **rng**: deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded xorshift64*, passed explicitly)
//! 2. Customers are conserved: enqueued = waiting + in service + completed
//! 3. Within a station, customers finish in arrival order (FIFO)
//! 4. A promoted customer starts consuming demand the tick after promotion

// Module declarations
pub mod arrivals;
pub mod core;
pub mod models;
pub mod policy;
pub mod rng;
pub mod sim;

// Re-exports for convenience
pub use arrivals::{ArrivalConfig, ArrivalGenerator};
pub use crate::core::time::TickClock;
pub use models::{
    customer::Customer,
    event::{Event, EventLog},
    station::{CheckoutStation, ServiceTransition},
};
pub use policy::{PowerOfTwoChoices, SelectionStrategy, SingleChoice, StrategyConfig};
pub use rng::RngManager;
pub use sim::{
    CustomerSnapshot, RoundStats, Simulation, SimulationConfig, SimulationError,
    SimulationSnapshot, StationRoundStats, StationSnapshot, TickResult,
};
