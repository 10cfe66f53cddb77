//! Event logging for simulation replay and auditing.
//!
//! Every significant state change is captured as an `Event`:
//! - **Arrival**: a customer entered a station's queue
//! - **ServiceStart**: a customer was promoted into service
//! - **Completion**: a customer finished service
//!
//! Events are logged in the order they occur; within one tick, stations are
//! processed in index order, so the log is a deterministic total order over
//! finished events and can back ordering assertions in tests.

use serde::{Deserialize, Serialize};

/// Simulation event capturing a state change.
///
/// All events include a tick number for temporal ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A customer entered a station's queue
    Arrival {
        tick: usize,
        station: usize,
        customer_id: usize,
        service_demand: u32,
    },

    /// A customer was promoted from the queue into service
    ServiceStart {
        tick: usize,
        station: usize,
        customer_id: usize,
    },

    /// A customer finished service and moved to the finished list
    Completion {
        tick: usize,
        station: usize,
        customer_id: usize,
    },
}

impl Event {
    /// Tick at which the event occurred
    pub fn tick(&self) -> usize {
        match self {
            Event::Arrival { tick, .. }
            | Event::ServiceStart { tick, .. }
            | Event::Completion { tick, .. } => *tick,
        }
    }

    /// Station index the event occurred at
    pub fn station(&self) -> usize {
        match self {
            Event::Arrival { station, .. }
            | Event::ServiceStart { station, .. }
            | Event::Completion { station, .. } => *station,
        }
    }

    /// Customer the event concerns
    pub fn customer_id(&self) -> usize {
        match self {
            Event::Arrival { customer_id, .. }
            | Event::ServiceStart { customer_id, .. }
            | Event::Completion { customer_id, .. } => *customer_id,
        }
    }
}

/// Append-only log of simulation events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of logged events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in log order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Iterate events in log order
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }
}
