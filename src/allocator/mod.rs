//! Shift allocation and coverage statistics.
//!
//! # Algorithm
//!
//! `ShiftAllocator` is a greedy, load-balanced, location-priority
//! heuristic: slot by slot, candidates with the fewest shifts so far are
//! handed out in contiguous blocks to locations in list order. It is
//! deterministic but not optimal.
//!
//! # Statistics
//!
//! `RosterStats` reports per-worker assignment counts, assigned versus
//! required positions, and the fill rate, for one location or summed
//! over all locations.
//!
//! All operations are pure: no I/O, no shared state, safe to call from
//! many threads at once.

mod greedy;
mod stats;

pub use greedy::{allocate, ShiftAllocator};
pub use stats::{aggregate_stats, roster_stats, RosterStats};
