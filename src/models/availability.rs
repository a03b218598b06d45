//! Volunteered availability.
//!
//! Workers submit a yes/no preference for every slot of the week. The
//! availability table collapses those submissions into one candidate
//! list per slot. Candidate order is significant: it is the tie-break
//! when the allocator ranks workers with equal shift counts.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Slot, SlotGrid, WorkerName};

/// One worker's slot preferences for a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerPreferences {
    /// Worker submitting the preferences.
    pub worker: WorkerName,
    /// `true` where the worker wants the slot.
    pub wants: SlotGrid<bool>,
}

impl WorkerPreferences {
    /// Creates an empty submission (no slots requested).
    pub fn new(worker: impl Into<WorkerName>) -> Self {
        Self {
            worker: worker.into(),
            wants: SlotGrid::default(),
        }
    }

    /// Requests a slot.
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.wants.set(slot, true);
        self
    }

    /// Flips the preference for a slot.
    pub fn toggle(&mut self, slot: Slot) {
        let cell = self.wants.get_mut(slot);
        *cell = !*cell;
    }

    /// Whether the worker wants a slot.
    pub fn wants(&self, slot: Slot) -> bool {
        *self.wants.get(slot)
    }

    /// Number of slots requested.
    pub fn registration_count(&self) -> usize {
        self.wants.iter().filter(|(_, w)| **w).count()
    }
}

/// Candidate workers per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityTable {
    candidates: SlotGrid<Vec<WorkerName>>,
}

impl AvailabilityTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapses per-worker submissions into candidate lists.
    ///
    /// Within each slot, candidates appear in submission order.
    pub fn from_preferences<'a>(
        submissions: impl IntoIterator<Item = &'a WorkerPreferences>,
    ) -> Self {
        let mut table = Self::new();
        for prefs in submissions {
            for (slot, &wants) in prefs.wants.iter() {
                if wants {
                    table.add(slot, prefs.worker.clone());
                }
            }
        }
        table
    }

    /// Appends a candidate to a slot.
    pub fn add(&mut self, slot: Slot, worker: impl Into<WorkerName>) {
        self.candidates.get_mut(slot).push(worker.into());
    }

    /// Builder form of [`add`](Self::add).
    pub fn with_candidate(mut self, slot: Slot, worker: impl Into<WorkerName>) -> Self {
        self.add(slot, worker);
        self
    }

    /// Candidates for a slot, in insertion order. Empty if none.
    pub fn candidates(&self, slot: Slot) -> &[WorkerName] {
        self.candidates.get(slot)
    }

    /// Iterates `(slot, candidates)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &[WorkerName])> {
        self.candidates.iter().map(|(slot, c)| (slot, c.as_slice()))
    }

    /// Distinct workers, in order of first appearance.
    pub fn workers(&self) -> Vec<&WorkerName> {
        let mut seen = HashSet::new();
        self.candidates
            .iter()
            .flat_map(|(_, c)| c.iter())
            .filter(|w| seen.insert(*w))
            .collect()
    }

    /// Whether no slot has any candidate.
    pub fn is_empty(&self) -> bool {
        self.candidates.iter().all(|(_, c)| c.is_empty())
    }

    /// Total number of (slot, candidate) entries.
    pub fn entry_count(&self) -> usize {
        self.candidates.iter().map(|(_, c)| c.len()).sum()
    }

    /// Withdraws a worker from every slot. Returns the number of entries removed.
    pub fn remove_worker(&mut self, worker: &WorkerName) -> usize {
        let mut removed = 0;
        for list in self.candidates.values_mut() {
            let before = list.len();
            list.retain(|w| w != worker);
            removed += before - list.len();
        }
        removed
    }
}
