//! Checkout station model
//!
//! A station owns one FIFO queue of waiting customers plus at most one
//! customer in service. Each tick it advances service by one unit and
//! records completed customers for the current statistics round.
//!
//! # Tick ordering
//!
//! `tick()` first consumes demand for the customer in service (moving it to
//! `finished` if its demand hits zero), and only then promotes the head of
//! the queue into the freed slot. A promoted customer therefore begins
//! consuming demand on the following tick, which gives a minimum service
//! duration of one tick and lets a successor be promoted in the same tick
//! its predecessor completes.

use std::collections::VecDeque;

use crate::models::customer::Customer;

/// What happened inside a station during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceTransition {
    /// Customer id promoted from the queue into service this tick
    pub promoted: Option<usize>,

    /// Customer id that finished service this tick
    pub completed: Option<usize>,
}

/// A checkout station: FIFO queue + single service slot + finished list
///
/// # Example
/// ```
/// use checkout_sim_core::{CheckoutStation, Customer};
///
/// let mut station = CheckoutStation::new((50, 480));
/// station.enqueue(Customer::new(0, 1, 0));
/// assert_eq!(station.queue_length(), 1);
///
/// let transition = station.tick(0); // promoted, not yet consuming
/// assert_eq!(transition.promoted, Some(0));
/// assert_eq!(station.queue_length(), 0);
/// assert_eq!(station.load(), 1);
///
/// let transition = station.tick(1); // demand 1 consumed, done
/// assert_eq!(transition.completed, Some(0));
/// assert_eq!(station.finished().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CheckoutStation {
    /// Fixed 2-D coordinate, consumed only by display snapshots
    position: (i32, i32),

    /// Waiting customers, insertion order = arrival order
    queue: VecDeque<Customer>,

    /// Customer currently being served, if any
    in_service: Option<Customer>,

    /// Customers completed in the current round, cleared at round boundary
    finished: Vec<Customer>,
}

impl CheckoutStation {
    /// Create an empty station at the given display position
    pub fn new(position: (i32, i32)) -> Self {
        Self {
            position,
            queue: VecDeque::new(),
            in_service: None,
            finished: Vec::new(),
        }
    }

    /// Append a customer to the tail of the queue
    ///
    /// Has no immediate effect on the service slot; promotion happens in
    /// `tick()`.
    pub fn enqueue(&mut self, customer: Customer) {
        self.queue.push_back(customer);
    }

    /// Advance service by one tick
    ///
    /// Order of operations:
    /// 1. If a customer is in service, consume one unit of demand. If its
    ///    demand reaches zero, stamp `completion_tick` and move it to
    ///    `finished`.
    /// 2. If the service slot is empty and the queue is non-empty, promote
    ///    the head of the queue, stamping `service_start_tick` and
    ///    `wait_ticks`. The promoted customer is not decremented this tick.
    ///
    /// A tick on an idle station with an empty queue is a no-op.
    pub fn tick(&mut self, current_tick: usize) -> ServiceTransition {
        let mut transition = ServiceTransition::default();

        if let Some(customer) = self.in_service.as_mut() {
            customer.consume();
        }

        if self.in_service.as_ref().is_some_and(Customer::is_done) {
            if let Some(mut done) = self.in_service.take() {
                done.complete(current_tick);
                transition.completed = Some(done.id());
                self.finished.push(done);
            }
        }

        if self.in_service.is_none() {
            if let Some(mut next) = self.queue.pop_front() {
                next.begin_service(current_tick);
                transition.promoted = Some(next.id());
                self.in_service = Some(next);
            }
        }

        transition
    }

    /// Number of waiting customers (excludes the service slot)
    pub fn queue_length(&self) -> usize {
        self.queue.len()
    }

    /// Waiting customers plus the service slot, the measure compared by
    /// the power-of-two-choices strategy
    pub fn load(&self) -> usize {
        self.queue.len() + usize::from(self.in_service.is_some())
    }

    /// Fixed display position
    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    /// Waiting customers in queue order
    pub fn queued(&self) -> impl Iterator<Item = &Customer> {
        self.queue.iter()
    }

    /// Customer currently in service, if any
    pub fn in_service(&self) -> Option<&Customer> {
        self.in_service.as_ref()
    }

    /// Customers completed in the current round
    pub fn finished(&self) -> &[Customer] {
        &self.finished
    }

    /// Clear the finished list at a round boundary
    ///
    /// Queue and in-service state persist; rounds are a reporting window,
    /// not a simulation restart.
    pub fn clear_finished(&mut self) {
        self.finished.clear();
    }
}
