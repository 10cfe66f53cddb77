//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random number
//! generation. All randomness in the simulator (service demand draws and
//! station-index draws) MUST go through this module, and the generator is
//! always passed explicitly rather than held in global state.

mod xorshift;

pub use xorshift::RngManager;
