//! Read-only snapshot of simulation state for display collaborators
//!
//! A display reads station positions, queue contents and the in-service
//! occupant, and must never mutate simulation state. Instead of handing out
//! references into live state, `Simulation::snapshot()` produces a detached
//! copy the view can hold across a repaint.

use serde::{Deserialize, Serialize};

use crate::models::customer::Customer;
use crate::models::station::CheckoutStation;

/// View of one customer, as a display needs it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub id: usize,
    pub service_demand: u32,
    pub remaining_demand: u32,
    pub arrival_tick: usize,
}

impl From<&Customer> for CustomerSnapshot {
    fn from(customer: &Customer) -> Self {
        CustomerSnapshot {
            id: customer.id(),
            service_demand: customer.service_demand(),
            remaining_demand: customer.remaining_demand(),
            arrival_tick: customer.arrival_tick(),
        }
    }
}

/// View of one station: position, waiting customers, service occupant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationSnapshot {
    /// Fixed display position (x, y)
    pub position: (i32, i32),

    /// Waiting customers in queue order
    pub queue: Vec<CustomerSnapshot>,

    /// Customer currently in service, if any
    pub in_service: Option<CustomerSnapshot>,

    /// Customers finished in the current round
    pub finished_count: usize,
}

impl From<&CheckoutStation> for StationSnapshot {
    fn from(station: &CheckoutStation) -> Self {
        StationSnapshot {
            position: station.position(),
            queue: station.queued().map(CustomerSnapshot::from).collect(),
            in_service: station.in_service().map(CustomerSnapshot::from),
            finished_count: station.finished().len(),
        }
    }
}

/// Complete display view of the simulation at one tick
///
/// Stations appear in index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    /// Tick at which the snapshot was taken
    pub tick: usize,

    /// Per-station views
    pub stations: Vec<StationSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_snapshot_captures_queue_order() {
        let mut station = CheckoutStation::new((50, 480));
        station.enqueue(Customer::new(0, 2, 0));
        station.enqueue(Customer::new(1, 4, 0));
        station.tick(0); // promote customer 0

        let snapshot = StationSnapshot::from(&station);
        assert_eq!(snapshot.position, (50, 480));
        assert_eq!(snapshot.in_service.as_ref().map(|c| c.id), Some(0));
        assert_eq!(snapshot.queue.len(), 1);
        assert_eq!(snapshot.queue[0].id, 1);
        assert_eq!(snapshot.finished_count, 0);
    }
}
