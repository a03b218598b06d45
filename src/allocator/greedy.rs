//! Greedy load-balanced shift allocator.
//!
//! # Algorithm
//!
//! For each slot of the week, in canonical order:
//! 1. Take the slot's candidates, dropping anyone already placed in this
//!    slot (and repeated names).
//! 2. Stable-sort by shifts assigned so far this run, ascending. Ties
//!    keep availability order.
//! 3. Walk locations in priority order; each takes the next
//!    `capacity` candidates from the front of the sorted pool as one
//!    contiguous block.
//!
//! An earlier location is always filled (or the pool exhausted) before
//! a later one receives anyone for the same slot. Balance is pursued
//! only across workers, through the running shift count. The result is
//! greedy, not optimal.
//!
//! # Complexity
//! O(S * c log c) where S = slots per week, c = candidates per slot.

use std::collections::HashMap;
use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::models::{
    AvailabilityTable, Capacity, LocationId, MultiLocationRoster, Roster, Slot, SlotGrid,
    WorkerName,
};

/// Greedy shift allocator.
///
/// Stateless between calls: every [`allocate`](Self::allocate) builds its
/// own tracking state, so one allocator can serve concurrent callers.
///
/// # Example
///
/// ```
/// use shift_roster::allocator::ShiftAllocator;
/// use shift_roster::models::{AvailabilityTable, Day, LocationId, Slot, SlotType};
///
/// let monday_morning = Slot::new(Day::Monday, SlotType::Morning);
/// let availability = AvailabilityTable::new()
///     .with_candidate(monday_morning, "w1")
///     .with_candidate(monday_morning, "w2")
///     .with_candidate(monday_morning, "w3");
/// let locations = vec![LocationId::from("A"), LocationId::from("B")];
///
/// let roster = ShiftAllocator::new().allocate(&availability, &locations);
/// assert_eq!(roster.get(&locations[0]).unwrap().assigned(monday_morning).len(), 2);
/// assert_eq!(roster.get(&locations[1]).unwrap().assigned(monday_morning).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftAllocator {
    capacity: Capacity,
}

impl ShiftAllocator {
    /// Creates an allocator with standard capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-slot capacity.
    pub fn with_capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }

    /// Capacity this allocator fills to.
    pub fn capacity(&self) -> &Capacity {
        &self.capacity
    }

    /// Assigns candidates to locations for every slot of the week.
    ///
    /// Never fails. Missing candidates leave slots under-filled; an empty
    /// location list yields an empty roster set. A location id listed
    /// more than once is kept only at its first position.
    pub fn allocate(
        &self,
        availability: &AvailabilityTable,
        locations: &[LocationId],
    ) -> MultiLocationRoster {
        let locations = distinct_locations(locations);
        let mut rosters = vec![Roster::new(); locations.len()];

        let workers = availability.workers();
        let index: HashMap<&WorkerName, usize> =
            workers.iter().enumerate().map(|(i, &w)| (w, i)).collect();
        let mut tracker = AssignmentTracker::new(workers.len());
        let mut counter = ShiftCounter::new(workers.len());

        for slot in Slot::all() {
            let required = self.capacity.for_slot(slot) as usize;

            let mut seen = HashSet::new();
            let mut pool: Vec<usize> = availability
                .candidates(slot)
                .iter()
                .filter_map(|w| index.get(w).copied())
                .filter(|&i| tracker.location_of(i, slot).is_none() && seen.insert(i))
                .collect();

            // Stable: equal counts keep availability order.
            pool.sort_by_key(|&i| counter.get(i));

            let mut pool = pool.into_iter();
            for (loc, roster) in rosters.iter_mut().enumerate() {
                let block: Vec<usize> = pool.by_ref().take(required).collect();
                for &i in &block {
                    tracker.mark(i, slot, loc);
                    counter.increment(i);
                }

                if block.len() < required {
                    trace!(
                        slot = %slot,
                        location = %locations[loc],
                        assigned = block.len(),
                        required,
                        "slot under-filled"
                    );
                }

                roster.set_assigned(slot, block.iter().map(|&i| workers[i].clone()).collect());
            }
        }

        let result: MultiLocationRoster = locations.into_iter().cloned().zip(rosters).collect();
        debug!(
            locations = result.len(),
            workers = workers.len(),
            assignments = result.assignment_count(),
            "roster allocated"
        );
        result
    }
}

/// Allocates with standard capacity.
///
/// See [`ShiftAllocator::allocate`].
pub fn allocate(availability: &AvailabilityTable, locations: &[LocationId]) -> MultiLocationRoster {
    ShiftAllocator::new().allocate(availability, locations)
}

/// Location list with repeats removed, first occurrence wins.
fn distinct_locations(locations: &[LocationId]) -> Vec<&LocationId> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(locations.len());
    for location in locations {
        if seen.insert(location) {
            out.push(location);
        } else {
            warn!(location = %location, "duplicate location id ignored");
        }
    }
    out
}

/// Location each worker holds per slot during one run.
struct AssignmentTracker {
    cells: Vec<SlotGrid<Option<usize>>>,
}

impl AssignmentTracker {
    fn new(workers: usize) -> Self {
        Self {
            cells: vec![SlotGrid::default(); workers],
        }
    }

    fn location_of(&self, worker: usize, slot: Slot) -> Option<usize> {
        *self.cells[worker].get(slot)
    }

    fn mark(&mut self, worker: usize, slot: Slot, location: usize) {
        self.cells[worker].set(slot, Some(location));
    }
}

/// Shifts assigned to each worker so far in one run.
struct ShiftCounter(Vec<u32>);

impl ShiftCounter {
    fn new(workers: usize) -> Self {
        Self(vec![0; workers])
    }

    #[inline]
    fn get(&self, worker: usize) -> u32 {
        self.0[worker]
    }

    fn increment(&mut self, worker: usize) {
        self.0[worker] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, SlotType};

    fn loc(id: &str) -> LocationId {
        LocationId::from(id)
    }

    fn names(roster: &Roster, slot: Slot) -> Vec<&str> {
        roster.assigned(slot).iter().map(|w| w.as_str()).collect()
    }

    fn mon_am() -> Slot {
        Slot::new(Day::Monday, SlotType::Morning)
    }

    fn mon_midday() -> Slot {
        Slot::new(Day::Monday, SlotType::Midday)
    }

    /// Worker `i` is available wherever `(i + slot) % 3 != 0`.
    fn patterned_availability(workers: usize) -> AvailabilityTable {
        let mut table = AvailabilityTable::new();
        for (s, slot) in Slot::all().enumerate() {
            for i in 0..workers {
                if (i + s) % 3 != 0 {
                    table.add(slot, format!("w{i}"));
                }
            }
        }
        table
    }

    #[test]
    fn test_contiguous_blocks_by_location_priority() {
        let availability = AvailabilityTable::new()
            .with_candidate(mon_am(), "w1")
            .with_candidate(mon_am(), "w2")
            .with_candidate(mon_am(), "w3");
        let locations = vec![loc("A"), loc("B")];

        let multi = allocate(&availability, &locations);
        assert_eq!(names(multi.get(&loc("A")).unwrap(), mon_am()), vec!["w1", "w2"]);
        assert_eq!(names(multi.get(&loc("B")).unwrap(), mon_am()), vec!["w3"]);
        assert_eq!(multi.assignment_count(), 3);
    }

    #[test]
    fn test_empty_availability() {
        let locations = vec![loc("A"), loc("B")];
        let multi = allocate(&AvailabilityTable::new(), &locations);

        assert_eq!(multi.len(), 2);
        for (_, roster) in multi.iter() {
            for (_, assigned) in roster.iter() {
                assert!(assigned.is_empty());
            }
        }
    }

    #[test]
    fn test_no_locations() {
        let availability = AvailabilityTable::new().with_candidate(mon_am(), "w1");
        let multi = allocate(&availability, &[]);
        assert!(multi.is_empty());
    }

    #[test]
    fn test_fewer_shifts_go_first() {
        // a and b both work Monday morning; at midday c has fewer shifts than a.
        let availability = AvailabilityTable::new()
            .with_candidate(mon_am(), "a")
            .with_candidate(mon_am(), "b")
            .with_candidate(mon_midday(), "a")
            .with_candidate(mon_midday(), "c");
        let locations = vec![loc("A")];

        let multi = allocate(&availability, &locations);
        let roster = multi.get(&loc("A")).unwrap();
        assert_eq!(names(roster, mon_am()), vec!["a", "b"]);
        assert_eq!(names(roster, mon_midday()), vec!["c"]);
    }

    #[test]
    fn test_ties_keep_availability_order() {
        let availability = AvailabilityTable::new()
            .with_candidate(mon_midday(), "zed")
            .with_candidate(mon_midday(), "amy");
        let multi = allocate(&availability, &[loc("A")]);
        assert_eq!(names(multi.get(&loc("A")).unwrap(), mon_midday()), vec!["zed"]);
    }

    #[test]
    fn test_repeated_candidate_not_double_booked() {
        let availability = AvailabilityTable::new()
            .with_candidate(mon_am(), "a")
            .with_candidate(mon_am(), "a")
            .with_candidate(mon_am(), "b");
        let locations = vec![loc("A"), loc("B")];

        let multi = allocate(&availability, &locations);
        assert_eq!(names(multi.get(&loc("A")).unwrap(), mon_am()), vec!["a", "b"]);
        assert!(multi.get(&loc("B")).unwrap().assigned(mon_am()).is_empty());
    }

    #[test]
    fn test_duplicate_location_collapsed() {
        let availability = AvailabilityTable::new()
            .with_candidate(mon_midday(), "a")
            .with_candidate(mon_midday(), "b")
            .with_candidate(mon_midday(), "c");
        let locations = vec![loc("A"), loc("A"), loc("B")];

        let multi = allocate(&availability, &locations);
        let ids: Vec<&str> = multi.locations().map(|l| l.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(names(multi.get(&loc("A")).unwrap(), mon_midday()), vec!["a"]);
        assert_eq!(names(multi.get(&loc("B")).unwrap(), mon_midday()), vec!["b"]);
    }

    #[test]
    fn test_custom_capacity() {
        let capacity = Capacity::uniform(3).unwrap();
        let availability = AvailabilityTable::new()
            .with_candidate(mon_midday(), "a")
            .with_candidate(mon_midday(), "b")
            .with_candidate(mon_midday(), "c")
            .with_candidate(mon_midday(), "d");

        let allocator = ShiftAllocator::new().with_capacity(capacity);
        let multi = allocator.allocate(&availability, &[loc("A"), loc("B")]);
        assert_eq!(multi.get(&loc("A")).unwrap().assigned(mon_midday()).len(), 3);
        assert_eq!(names(multi.get(&loc("B")).unwrap(), mon_midday()), vec!["d"]);
    }

    #[test]
    fn test_no_double_booking_and_capacity_respected() {
        let availability = patterned_availability(10);
        let locations = vec![loc("A"), loc("B"), loc("C")];
        let capacity = Capacity::default();

        let multi = allocate(&availability, &locations);
        for slot in Slot::all() {
            let mut seen = HashSet::new();
            for (_, roster) in multi.iter() {
                let assigned = roster.assigned(slot);
                assert!(assigned.len() <= capacity.for_slot(slot) as usize);
                for w in assigned {
                    assert!(seen.insert(w.clone()), "{w} double-booked at {slot}");
                    assert!(availability.candidates(slot).contains(w));
                }
            }
        }
    }

    #[test]
    fn test_location_priority_with_ample_pool() {
        // 10 workers, at least 6 available per slot; 2 locations need at most 4.
        let availability = patterned_availability(10);
        let locations = vec![loc("A"), loc("B")];
        let capacity = Capacity::default();

        let multi = allocate(&availability, &locations);
        for slot in Slot::all() {
            for (_, roster) in multi.iter() {
                assert_eq!(roster.assigned(slot).len(), capacity.for_slot(slot) as usize);
            }
        }
    }

    #[test]
    fn test_earlier_location_filled_first_when_short() {
        let availability = patterned_availability(2);
        let locations = vec![loc("A"), loc("B")];
        let capacity = Capacity::default();

        let multi = allocate(&availability, &locations);
        let a = multi.get(&loc("A")).unwrap();
        let b = multi.get(&loc("B")).unwrap();
        for slot in Slot::all() {
            if !b.assigned(slot).is_empty() {
                assert_eq!(a.assigned(slot).len(), capacity.for_slot(slot) as usize);
            }
        }
    }

    #[test]
    fn test_load_balanced_when_equally_available() {
        let mut availability = AvailabilityTable::new();
        for slot in Slot::all() {
            for w in ["w1", "w2", "w3", "w4"] {
                availability.add(slot, w);
            }
        }

        let multi = allocate(&availability, &[loc("A")]);
        let roster = multi.get(&loc("A")).unwrap();

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for (_, assigned) in roster.iter() {
            for w in assigned {
                *counts.entry(w.as_str()).or_default() += 1;
            }
        }
        let max = counts.values().max().copied().unwrap();
        let min = counts.values().min().copied().unwrap();
        assert_eq!(counts.len(), 4);
        assert!(max - min <= 1);
        assert_eq!(counts.values().sum::<u32>(), Capacity::default().per_week());
    }

    #[test]
    fn test_deterministic() {
        let availability = patterned_availability(7);
        let locations = vec![loc("A"), loc("B")];
        assert_eq!(
            allocate(&availability, &locations),
            allocate(&availability, &locations)
        );
    }
}
