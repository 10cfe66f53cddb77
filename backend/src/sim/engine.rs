//! Simulation engine
//!
//! Main loop integrating all components:
//! - Customer arrivals (deterministic generation)
//! - Queue selection (strategy decides the station)
//! - Service progression (every station advances one tick per step)
//! - Round statistics (finished counts, mean wait, mean total time)
//! - Event logging (complete simulation history)
//!
//! # Architecture
//!
//! The driver processes one arrival at a time:
//!
//! ```text
//! For each arrival:
//! 1. Draw a customer (service demand from the seeded RNG)
//! 2. Ask the selection strategy for a station index
//! 3. Enqueue the customer at that station
//! 4. Step: tick every station in index order, advance the clock
//! ```
//!
//! At a round boundary the driver takes a statistics snapshot and resets
//! the round (finished lists only; queues and service slots persist).
//!
//! # Determinism
//!
//! All randomness is via a seeded xorshift64* `RngManager` owned by the
//! simulation and threaded into arrival generation and strategy calls.
//! Same seed + same config = identical results.
//!
//! # Example
//!
//! ```rust
//! use checkout_sim_core::{Simulation, SimulationConfig, StrategyConfig};
//!
//! let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
//! let mut strategy = StrategyConfig::PowerOfTwo.build();
//!
//! for _ in 0..99 {
//!     sim.arrive(strategy.as_mut()).unwrap();
//!     sim.step();
//! }
//!
//! let stats = sim.statistics_snapshot();
//! println!("finished this round: {}", stats.total_finished());
//! sim.reset_round();
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arrivals::{ArrivalConfig, ArrivalGenerator};
use crate::core::time::TickClock;
use crate::models::customer::Customer;
use crate::models::event::{Event, EventLog};
use crate::models::station::CheckoutStation;
use crate::policy::SelectionStrategy;
use crate::rng::RngManager;

use super::snapshot::{SimulationSnapshot, StationSnapshot};

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete simulation configuration
///
/// The defaults reproduce the reference scenario layout: 5 stations spaced
/// 100 units apart on a baseline at y = 480, uniform demand in [1,6].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of checkout stations (fixed for the lifetime of a run)
    pub num_stations: usize,

    /// Horizontal spacing between station positions (display units)
    pub station_spacing: i32,

    /// Vertical baseline all stations sit on (display units)
    pub station_baseline: i32,

    /// RNG seed for deterministic simulation
    pub rng_seed: u64,

    /// Service-demand generation configuration
    pub arrival_config: ArrivalConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_stations: 5,
            station_spacing: 100,
            station_baseline: 480,
            rng_seed: 12345,
            arrival_config: ArrivalConfig::default(),
        }
    }
}

/// Result of a single simulation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickResult {
    /// Tick that was executed
    pub tick: usize,

    /// Customers that finished service this tick (across all stations)
    pub num_completions: usize,

    /// Customers waiting in queues after this tick
    pub num_waiting: usize,

    /// Occupied service slots after this tick
    pub num_in_service: usize,
}

/// Per-station statistics for one reporting round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRoundStats {
    /// Station index
    pub station: usize,

    /// Customers that finished at this station this round
    pub finished: usize,

    /// Mean ticks spent waiting in the queue (0.0 if none finished)
    pub mean_wait_ticks: f64,

    /// Mean ticks from arrival to completion (0.0 if none finished)
    pub mean_total_ticks: f64,
}

/// Statistics snapshot for the current round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundStats {
    /// Tick at which the snapshot was taken
    pub tick: usize,

    /// Per-station statistics, in station index order
    pub stations: Vec<StationRoundStats>,
}

impl RoundStats {
    /// Total customers finished across all stations this round
    pub fn total_finished(&self) -> usize {
        self.stations.iter().map(|s| s.finished).sum()
    }
}

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A selection strategy returned an index outside the station set.
    /// This is a strategy bug and is never clamped or recovered.
    #[error("station index {index} out of range (have {num_stations} stations)")]
    StationIndexOutOfRange { index: usize, num_stations: usize },
}

// ============================================================================
// Simulation
// ============================================================================

/// Main simulation owning the station set and the tick loop
///
/// The simulation exclusively owns all stations; external code never
/// mutates a queue or service slot directly. The only mutating entry
/// points are `arrive`/`enqueue_customer` (adds one customer to a chosen
/// station) and `step` (advances every station by one tick).
#[derive(Debug)]
pub struct Simulation {
    /// Fixed ordered station set; indices are the stable identity used by
    /// selection strategies
    stations: Vec<CheckoutStation>,

    /// Monotonic tick counter
    clock: TickClock,

    /// Deterministic RNG (demand draws and strategy index draws)
    rng: RngManager,

    /// Customer generator with sequential ids
    arrivals: ArrivalGenerator,

    /// Event log (all simulation events)
    event_log: EventLog,

    /// Customers ever enqueued (conservation accounting)
    total_enqueued: usize,

    /// Customers ever completed, across all rounds
    total_completed: usize,
}

impl Simulation {
    /// Create a new simulation from configuration
    ///
    /// Station positions follow the reference layout:
    /// `x = index * spacing + spacing / 2`, `y = baseline`.
    ///
    /// # Returns
    ///
    /// * `Ok(Simulation)` - successfully initialized simulation
    /// * `Err(SimulationError::InvalidConfig)` - validation failed; the
    ///   simulation never starts in an invalid state
    ///
    /// # Example
    ///
    /// ```rust
    /// use checkout_sim_core::{Simulation, SimulationConfig};
    ///
    /// let sim = Simulation::new(SimulationConfig {
    ///     num_stations: 5,
    ///     rng_seed: 42,
    ///     ..SimulationConfig::default()
    /// }).unwrap();
    ///
    /// assert_eq!(sim.num_stations(), 5);
    /// assert_eq!(sim.current_tick(), 0);
    /// ```
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let spacing = config.station_spacing;
        let stations: Vec<CheckoutStation> = (0..config.num_stations)
            .map(|i| {
                let x = i as i32 * spacing + spacing / 2;
                CheckoutStation::new((x, config.station_baseline))
            })
            .collect();

        Ok(Self {
            stations,
            clock: TickClock::new(),
            rng: RngManager::new(config.rng_seed),
            arrivals: ArrivalGenerator::new(config.arrival_config),
            event_log: EventLog::new(),
            total_enqueued: 0,
            total_completed: 0,
        })
    }

    /// Validate configuration
    fn validate_config(config: &SimulationConfig) -> Result<(), SimulationError> {
        if config.num_stations == 0 {
            return Err(SimulationError::InvalidConfig(
                "num_stations must be > 0".to_string(),
            ));
        }

        if config.station_spacing <= 0 {
            return Err(SimulationError::InvalidConfig(
                "station_spacing must be positive".to_string(),
            ));
        }

        if config.station_baseline < 0 {
            return Err(SimulationError::InvalidConfig(
                "station_baseline must be non-negative".to_string(),
            ));
        }

        let arrivals = &config.arrival_config;
        if arrivals.demand_min < 1 {
            return Err(SimulationError::InvalidConfig(
                "demand_min must be at least 1".to_string(),
            ));
        }
        if arrivals.demand_min > arrivals.demand_max {
            return Err(SimulationError::InvalidConfig(format!(
                "demand range is empty: [{}, {}]",
                arrivals.demand_min, arrivals.demand_max
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get current tick number
    pub fn current_tick(&self) -> usize {
        self.clock.current_tick()
    }

    /// Number of checkout stations
    pub fn num_stations(&self) -> usize {
        self.stations.len()
    }

    /// Read-only view of the station set, in index order
    pub fn stations(&self) -> &[CheckoutStation] {
        &self.stations
    }

    /// Get reference to the event log
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Customers ever enqueued
    pub fn total_enqueued(&self) -> usize {
        self.total_enqueued
    }

    /// Customers ever completed, across all rounds
    pub fn total_completed(&self) -> usize {
        self.total_completed
    }

    /// Customers currently waiting in queues
    pub fn num_waiting(&self) -> usize {
        self.stations.iter().map(CheckoutStation::queue_length).sum()
    }

    /// Occupied service slots
    pub fn num_in_service(&self) -> usize {
        self.stations
            .iter()
            .filter(|s| s.in_service().is_some())
            .count()
    }

    // ========================================================================
    // Arrivals
    // ========================================================================

    /// Process one customer arrival
    ///
    /// Draws the customer's service demand, asks the strategy for a station
    /// index against the current station set, and enqueues the customer
    /// there. Demand and index draws share the simulation's seeded RNG.
    ///
    /// # Returns
    ///
    /// The chosen station index, or `StationIndexOutOfRange` if the
    /// strategy misbehaved.
    pub fn arrive(
        &mut self,
        strategy: &mut dyn SelectionStrategy,
    ) -> Result<usize, SimulationError> {
        let tick = self.clock.current_tick();
        let customer = self.arrivals.next_customer(tick, &mut self.rng);
        let index = strategy.choose_line(&self.stations, &mut self.rng);
        self.enqueue_customer(index, customer)?;
        Ok(index)
    }

    /// Enqueue an externally constructed customer at a station
    ///
    /// This is the only mutating path into a station's queue. Rejects an
    /// out-of-range index rather than clamping, to surface strategy bugs
    /// immediately.
    pub fn enqueue_customer(
        &mut self,
        index: usize,
        customer: Customer,
    ) -> Result<(), SimulationError> {
        if index >= self.stations.len() {
            return Err(SimulationError::StationIndexOutOfRange {
                index,
                num_stations: self.stations.len(),
            });
        }

        self.event_log.log(Event::Arrival {
            tick: customer.arrival_tick(),
            station: index,
            customer_id: customer.id(),
            service_demand: customer.service_demand(),
        });

        self.total_enqueued += 1;
        self.stations[index].enqueue(customer);
        Ok(())
    }

    // ========================================================================
    // Tick Loop
    // ========================================================================

    /// Execute one simulation step
    ///
    /// Ticks every station in index order at the current tick value, then
    /// advances the clock. Index order makes the sequence of completion
    /// events a deterministic total order when several stations finish a
    /// customer on the same tick.
    pub fn step(&mut self) -> TickResult {
        let tick = self.clock.current_tick();
        let mut num_completions = 0;

        for (index, station) in self.stations.iter_mut().enumerate() {
            let transition = station.tick(tick);

            if let Some(customer_id) = transition.completed {
                num_completions += 1;
                self.event_log.log(Event::Completion {
                    tick,
                    station: index,
                    customer_id,
                });
            }
            if let Some(customer_id) = transition.promoted {
                self.event_log.log(Event::ServiceStart {
                    tick,
                    station: index,
                    customer_id,
                });
            }
        }

        self.total_completed += num_completions;
        self.clock.advance();

        TickResult {
            tick,
            num_completions,
            num_waiting: self.num_waiting(),
            num_in_service: self.num_in_service(),
        }
    }

    // ========================================================================
    // Rounds and Reporting
    // ========================================================================

    /// Compute per-station statistics for the current round
    ///
    /// Does not mutate state. A station with no finished customers this
    /// round reports means of 0.0.
    pub fn statistics_snapshot(&self) -> RoundStats {
        let stations = self
            .stations
            .iter()
            .enumerate()
            .map(|(index, station)| {
                let finished = station.finished();
                let count = finished.len();

                let (mean_wait_ticks, mean_total_ticks) = if count == 0 {
                    (0.0, 0.0)
                } else {
                    let wait_sum: usize = finished.iter().map(Customer::wait_ticks).sum();
                    let total_sum: usize = finished
                        .iter()
                        .map(|c| c.total_ticks().unwrap_or(0))
                        .sum();
                    (
                        wait_sum as f64 / count as f64,
                        total_sum as f64 / count as f64,
                    )
                };

                StationRoundStats {
                    station: index,
                    finished: count,
                    mean_wait_ticks,
                    mean_total_ticks,
                }
            })
            .collect();

        RoundStats {
            tick: self.clock.current_tick(),
            stations,
        }
    }

    /// Start a new statistics round
    ///
    /// Clears every station's finished list. Queues and in-service
    /// customers persist across round boundaries.
    pub fn reset_round(&mut self) {
        for station in &mut self.stations {
            station.clear_finished();
        }
    }

    /// Take a read-only snapshot for a display collaborator
    ///
    /// Captures station positions, queue contents and service occupants
    /// without exposing any mutable access to simulation internals.
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            tick: self.clock.current_tick(),
            stations: self.stations.iter().map(StationSnapshot::from).collect(),
        }
    }
}
