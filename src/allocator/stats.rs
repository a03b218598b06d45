//! Roster coverage statistics.
//!
//! Summarizes how well a roster covers its staffing requirement.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Per-worker count | Slots each worker is assigned to |
//! | Total assigned | Sum of assigned workers over all slots |
//! | Total required | Sum of capacity over all slots |
//! | Fill rate | 100 × assigned / required (0 if nothing required) |
//!
//! Aggregate statistics sum the same metrics over every location of a
//! multi-location roster.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Capacity, MultiLocationRoster, Roster, WorkerName};

/// Coverage statistics for one roster or a set of rosters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterStats {
    /// Slots assigned per worker.
    pub per_worker_count: BTreeMap<WorkerName, u32>,
    /// Assigned workers summed over all slots.
    pub total_assigned: u32,
    /// Capacity summed over all slots.
    pub total_required: u32,
    /// Percentage of required capacity covered (0.0..=100.0).
    pub fill_rate: f64,
}

impl RosterStats {
    /// Computes statistics for a single location's roster.
    pub fn calculate(roster: &Roster, capacity: &Capacity) -> Self {
        let mut stats = Self::default();
        stats.accumulate(roster, capacity);
        stats.finish()
    }

    /// Computes statistics summed over every location.
    ///
    /// Equivalent to counting all per-location contributions together.
    /// A worker assigned at two locations (in different slots) is
    /// counted at both.
    pub fn aggregate(multi: &MultiLocationRoster, capacity: &Capacity) -> Self {
        let mut stats = Self::default();
        for (_, roster) in multi.iter() {
            stats.accumulate(roster, capacity);
        }
        stats.finish()
    }

    fn accumulate(&mut self, roster: &Roster, capacity: &Capacity) {
        for (slot, assigned) in roster.iter() {
            self.total_required += capacity.for_slot(slot);
            self.total_assigned += assigned.len() as u32;
            for worker in assigned {
                *self.per_worker_count.entry(worker.clone()).or_insert(0) += 1;
            }
        }
    }

    fn finish(mut self) -> Self {
        self.fill_rate = if self.total_required > 0 {
            100.0 * self.total_assigned as f64 / self.total_required as f64
        } else {
            0.0
        };
        self
    }

    /// Slots assigned to a worker (0 if never assigned).
    pub fn count_for(&self, worker: &WorkerName) -> u32 {
        self.per_worker_count.get(worker).copied().unwrap_or(0)
    }

    /// Required positions left unfilled.
    pub fn shortfall(&self) -> u32 {
        self.total_required.saturating_sub(self.total_assigned)
    }

    /// Whether every required position is filled.
    pub fn is_fully_staffed(&self) -> bool {
        self.total_assigned >= self.total_required
    }

    /// Whether the fill rate reaches a minimum percentage.
    pub fn meets_fill_rate(&self, min_percent: f64) -> bool {
        self.fill_rate >= min_percent
    }
}

/// Statistics for one roster under standard capacity.
pub fn roster_stats(roster: &Roster) -> RosterStats {
    RosterStats::calculate(roster, &Capacity::default())
}

/// Statistics over all locations under standard capacity.
pub fn aggregate_stats(multi: &MultiLocationRoster) -> RosterStats {
    RosterStats::aggregate(multi, &Capacity::default())
}
