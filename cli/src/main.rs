//! Driver for the checkout simulator.
//!
//! Runs the reference scenario (5 stations, 10 rounds of 99 arrivals,
//! uniform service demand in [1,6]) and prints per-station statistics
//! after each round. Seed, strategy and scenario sizes are configurable
//! from the command line; the same seed always reproduces the same
//! numbers.

use checkout_sim_core::{RoundStats, Simulation, SimulationConfig, StrategyConfig};

const USAGE: &str = "\
usage: checkout-sim [options]

options:
  --seed <u64>        RNG seed (default 12345)
  --strategy <name>   queue selection: pick2 | single (default pick2)
  --stations <n>      number of checkout stations (default 5)
  --rounds <n>        number of statistics rounds (default 10)
  --arrivals <n>      customer arrivals per round (default 99)
  --json              emit round statistics as JSON lines
  --help              show this message";

struct Options {
    seed: u64,
    strategy: StrategyConfig,
    stations: usize,
    rounds: usize,
    arrivals_per_round: usize,
    json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: 12345,
            strategy: StrategyConfig::PowerOfTwo,
            stations: 5,
            rounds: 10,
            arrivals_per_round: 99,
            json: false,
        }
    }
}

impl Options {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut opts = Options::default();
        let mut args = args;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => opts.seed = next_value(&mut args, "--seed")?,
                "--stations" => opts.stations = next_value(&mut args, "--stations")?,
                "--rounds" => opts.rounds = next_value(&mut args, "--rounds")?,
                "--arrivals" => {
                    opts.arrivals_per_round = next_value(&mut args, "--arrivals")?;
                }
                "--strategy" => {
                    let name = args
                        .next()
                        .ok_or_else(|| "--strategy requires a value".to_string())?;
                    opts.strategy = match name.as_str() {
                        "pick2" | "power-of-two" => StrategyConfig::PowerOfTwo,
                        "single" => StrategyConfig::SingleChoice,
                        other => return Err(format!("unknown strategy: {other}")),
                    };
                }
                "--json" => opts.json = true,
                "--help" | "-h" => return Err(USAGE.to_string()),
                other => return Err(format!("unknown argument: {other}\n\n{USAGE}")),
            }
        }

        Ok(opts)
    }
}

fn next_value<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<T, String> {
    let value = args
        .next()
        .ok_or_else(|| format!("{flag} requires a value"))?;
    value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}

fn print_round(round: usize, stats: &RoundStats) {
    println!("Round {} (tick {})", round + 1, stats.tick);
    for station in &stats.stations {
        println!(
            "  station {}: finished {:3}  mean wait {:6.2}  mean total {:6.2}",
            station.station, station.finished, station.mean_wait_ticks, station.mean_total_ticks
        );
    }
    println!("  total finished: {}", stats.total_finished());
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options::parse(std::env::args().skip(1))?;

    let config = SimulationConfig {
        num_stations: opts.stations,
        rng_seed: opts.seed,
        ..SimulationConfig::default()
    };

    let mut sim = Simulation::new(config)?;
    let mut strategy = opts.strategy.build();

    for round in 0..opts.rounds {
        for _ in 0..opts.arrivals_per_round {
            sim.arrive(strategy.as_mut())?;
            sim.step();
        }

        let stats = sim.statistics_snapshot();
        if opts.json {
            println!("{}", serde_json::to_string(&stats)?);
        } else {
            print_round(round, &stats);
        }
        sim.reset_round();
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
