//! Queue selection strategies
//!
//! An arriving customer must pick one checkout station. The decision is
//! strategic: a smarter pick keeps queue lengths balanced across stations.
//!
//! # Strategy interface
//!
//! All strategies implement the `SelectionStrategy` trait:
//!
//! ```rust
//! use checkout_sim_core::policy::SelectionStrategy;
//! use checkout_sim_core::{CheckoutStation, RngManager};
//!
//! struct AlwaysFirst;
//!
//! impl SelectionStrategy for AlwaysFirst {
//!     fn choose_line(&mut self, _stations: &[CheckoutStation], _rng: &mut RngManager) -> usize {
//!         0
//!     }
//! }
//! ```
//!
//! Available strategies:
//! 1. **SingleChoice**: pick one station uniformly at random (baseline)
//! 2. **PowerOfTwoChoices**: sample two distinct stations, join the shorter
//!
//! Strategies read current queue lengths only and never mutate station
//! state; all randomness comes from the injected `RngManager`.

use crate::models::station::CheckoutStation;
use crate::rng::RngManager;

mod power_of_two;
mod single_choice;

pub use power_of_two::PowerOfTwoChoices;
pub use single_choice::SingleChoice;

/// Capability of picking a station index for an arriving customer
pub trait SelectionStrategy {
    /// Choose a station index in `[0, stations.len())`
    ///
    /// `stations` must be non-empty. The returned index is validated by the
    /// simulation; an out-of-range index is a fatal strategy bug.
    fn choose_line(&mut self, stations: &[CheckoutStation], rng: &mut RngManager) -> usize;
}

/// Strategy selection for a simulation run
///
/// Determines which queue-selection algorithm arriving customers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyConfig {
    /// Pick one station uniformly at random (baseline)
    SingleChoice,

    /// Sample two distinct stations, join the one with the smaller load
    PowerOfTwo,
}

impl StrategyConfig {
    /// Instantiate the configured strategy
    pub fn build(&self) -> Box<dyn SelectionStrategy> {
        match self {
            StrategyConfig::SingleChoice => Box::new(SingleChoice),
            StrategyConfig::PowerOfTwo => Box::new(PowerOfTwoChoices),
        }
    }
}
