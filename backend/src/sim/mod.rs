//! Simulation engine - main tick loop and statistics
//!
//! The `Simulation` owns the fixed set of checkout stations and advances
//! every station by one tick per step. See `engine.rs` for the loop and
//! `snapshot.rs` for the read-only display view.

pub mod engine;
pub mod snapshot;

// Re-export main types for convenience
pub use engine::{
    RoundStats, Simulation, SimulationConfig, SimulationError, StationRoundStats, TickResult,
};
pub use snapshot::{CustomerSnapshot, SimulationSnapshot, StationSnapshot};
