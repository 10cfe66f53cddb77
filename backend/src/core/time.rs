//! Time management for the simulation
//!
//! The simulation operates in discrete ticks. One tick advances every
//! checkout station's service state by one unit. This module provides
//! deterministic tick advancement.

use serde::{Deserialize, Serialize};

/// Monotonic tick counter driving the simulation
///
/// # Example
/// ```
/// use checkout_sim_core::TickClock;
///
/// let mut clock = TickClock::new();
/// assert_eq!(clock.current_tick(), 0);
///
/// clock.advance();
/// assert_eq!(clock.current_tick(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickClock {
    /// Total ticks elapsed since simulation start
    current_tick: usize,
}

impl TickClock {
    /// Create a new clock at tick 0
    pub fn new() -> Self {
        Self { current_tick: 0 }
    }

    /// Advance time by one tick
    pub fn advance(&mut self) {
        self.current_tick += 1;
    }

    /// Get the current tick (total ticks since start)
    pub fn current_tick(&self) -> usize {
        self.current_tick
    }
}
