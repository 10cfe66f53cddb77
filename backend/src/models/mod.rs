//! Domain models for the checkout simulator

pub mod customer;
pub mod event;
pub mod station;

// Re-exports
pub use customer::Customer;
pub use event::{Event, EventLog};
pub use station::{CheckoutStation, ServiceTransition};
