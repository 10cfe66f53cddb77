//! Single-choice strategy
//!
//! Baseline strategy: pick one station uniformly at random, ignoring queue
//! lengths entirely. Used as the comparison point for the power-of-two
//! load-balance property.

use super::SelectionStrategy;
use crate::models::station::CheckoutStation;
use crate::rng::RngManager;

/// Uniformly random station choice
pub struct SingleChoice;

impl SelectionStrategy for SingleChoice {
    fn choose_line(&mut self, stations: &[CheckoutStation], rng: &mut RngManager) -> usize {
        assert!(!stations.is_empty(), "cannot choose among zero stations");
        rng.range(0, stations.len() as i64) as usize
    }
}
