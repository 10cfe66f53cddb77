//! Core building blocks: deterministic time advancement.

pub mod time;

pub use time::TickClock;
