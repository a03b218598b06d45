//! Roster (solution) model.
//!
//! A roster lists the workers assigned to each slot of the week at one
//! location. A multi-location roster holds one roster per location, in
//! location priority order.

use serde::{Deserialize, Serialize};

use super::{Capacity, LocationId, Slot, SlotGrid, WorkerName};

/// Assigned workers per slot at one location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    assigned: SlotGrid<Vec<WorkerName>>,
}

/// A slot staffed below its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub slot: Slot,
    /// Workers required by capacity.
    pub required: u32,
    /// Workers actually assigned.
    pub assigned: u32,
}

impl Shortfall {
    /// Number of missing workers.
    #[inline]
    pub fn missing(&self) -> u32 {
        self.required - self.assigned
    }
}

impl Roster {
    /// Creates a roster with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Workers assigned to a slot.
    pub fn assigned(&self, slot: Slot) -> &[WorkerName] {
        self.assigned.get(slot)
    }

    /// Replaces the assignment for a slot.
    pub fn set_assigned(&mut self, slot: Slot, workers: Vec<WorkerName>) {
        self.assigned.set(slot, workers);
    }

    /// Iterates `(slot, assigned)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &[WorkerName])> {
        self.assigned.iter().map(|(slot, w)| (slot, w.as_slice()))
    }

    /// Total number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assigned.iter().map(|(_, w)| w.len()).sum()
    }

    /// Whether a worker is assigned to a slot.
    pub fn is_assigned(&self, slot: Slot, worker: &WorkerName) -> bool {
        self.assigned(slot).contains(worker)
    }

    /// Shortfall at a slot, if it is under-filled.
    pub fn shortfall(&self, slot: Slot, capacity: &Capacity) -> Option<Shortfall> {
        let required = capacity.for_slot(slot);
        let assigned = self.assigned(slot).len() as u32;
        (assigned < required).then_some(Shortfall {
            slot,
            required,
            assigned,
        })
    }

    /// All under-filled slots, in canonical order.
    pub fn shortfalls(&self, capacity: &Capacity) -> Vec<Shortfall> {
        Slot::all()
            .filter_map(|slot| self.shortfall(slot, capacity))
            .collect()
    }

    /// Removes a worker from every slot. Returns the number of assignments removed.
    pub fn remove_worker(&mut self, worker: &WorkerName) -> usize {
        let mut removed = 0;
        for list in self.assigned.values_mut() {
            let before = list.len();
            list.retain(|w| w != worker);
            removed += before - list.len();
        }
        removed
    }
}

/// One location's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRoster {
    pub location: LocationId,
    pub roster: Roster,
}

/// Rosters for every location, in location priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiLocationRoster {
    entries: Vec<LocationRoster>,
}

impl FromIterator<(LocationId, Roster)> for MultiLocationRoster {
    fn from_iter<I: IntoIterator<Item = (LocationId, Roster)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(location, roster)| LocationRoster { location, roster })
                .collect(),
        }
    }
}

impl MultiLocationRoster {
    /// Creates an empty roster set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty roster for each location.
    pub fn empty_for<'a>(locations: impl IntoIterator<Item = &'a LocationId>) -> Self {
        Self {
            entries: locations
                .into_iter()
                .map(|location| LocationRoster {
                    location: location.clone(),
                    roster: Roster::new(),
                })
                .collect(),
        }
    }

    /// Roster for a location.
    pub fn get(&self, location: &LocationId) -> Option<&Roster> {
        self.entries
            .iter()
            .find(|e| &e.location == location)
            .map(|e| &e.roster)
    }

    /// Mutable roster for a location.
    pub fn get_mut(&mut self, location: &LocationId) -> Option<&mut Roster> {
        self.entries
            .iter_mut()
            .find(|e| &e.location == location)
            .map(|e| &mut e.roster)
    }

    /// Iterates `(location, roster)` in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&LocationId, &Roster)> {
        self.entries.iter().map(|e| (&e.location, &e.roster))
    }

    /// Location ids in priority order.
    pub fn locations(&self) -> impl Iterator<Item = &LocationId> {
        self.entries.iter().map(|e| &e.location)
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no locations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total assignments across all locations.
    pub fn assignment_count(&self) -> usize {
        self.entries.iter().map(|e| e.roster.assignment_count()).sum()
    }

    /// Location a worker is assigned to for a slot, if any.
    pub fn location_of(&self, slot: Slot, worker: &WorkerName) -> Option<&LocationId> {
        self.entries
            .iter()
            .find(|e| e.roster.is_assigned(slot, worker))
            .map(|e| &e.location)
    }

    /// Removes a worker from every location. Returns the number of assignments removed.
    pub fn remove_worker(&mut self, worker: &WorkerName) -> usize {
        self.entries
            .iter_mut()
            .map(|e| e.roster.remove_worker(worker))
            .sum()
    }

    /// Drops a location's roster, returning it if present.
    pub fn remove_location(&mut self, location: &LocationId) -> Option<Roster> {
        let pos = self.entries.iter().position(|e| &e.location == location)?;
        Some(self.entries.remove(pos).roster)
    }

    /// Serializes to pretty-printed JSON for export.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a roster set previously produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, SlotType};

    fn names(list: &[&str]) -> Vec<WorkerName> {
        list.iter().map(|&n| WorkerName::from(n)).collect()
    }

    #[test]
    fn test_new_roster_is_empty() {
        let roster = Roster::new();
        assert_eq!(roster.assignment_count(), 0);
        for (_, assigned) in roster.iter() {
            assert!(assigned.is_empty());
        }
    }

    #[test]
    fn test_shortfalls() {
        let mut roster = Roster::new();
        let mon_am = Slot::new(Day::Monday, SlotType::Morning);
        roster.set_assigned(mon_am, names(&["alice"]));

        let capacity = Capacity::default();
        let sf = roster.shortfall(mon_am, &capacity).unwrap();
        assert_eq!(sf.required, 2);
        assert_eq!(sf.assigned, 1);
        assert_eq!(sf.missing(), 1);

        // Every slot is short: 27 empty + Monday morning.
        assert_eq!(roster.shortfalls(&capacity).len(), Slot::COUNT);

        roster.set_assigned(mon_am, names(&["alice", "bob"]));
        assert!(roster.shortfall(mon_am, &capacity).is_none());
        assert_eq!(roster.shortfalls(&capacity).len(), Slot::COUNT - 1);
    }

    #[test]
    fn test_multi_lookup_and_removal() {
        let a = LocationId::from("A");
        let b = LocationId::from("B");
        let mut multi = MultiLocationRoster::empty_for([&a, &b]);
        let slot = Slot::new(Day::Friday, SlotType::Evening);

        multi.get_mut(&b).unwrap().set_assigned(slot, names(&["carol"]));
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.location_of(slot, &"carol".into()), Some(&b));
        assert_eq!(multi.location_of(slot, &"dave".into()), None);

        assert_eq!(multi.remove_worker(&"carol".into()), 1);
        assert_eq!(multi.assignment_count(), 0);

        assert!(multi.remove_location(&a).is_some());
        assert!(multi.get(&a).is_none());
        let remaining: Vec<&LocationId> = multi.locations().collect();
        assert_eq!(remaining, vec![&b]);
    }

    #[test]
    fn test_json_export() {
        let a = LocationId::from("store-1");
        let mut multi = MultiLocationRoster::empty_for([&a]);
        multi
            .get_mut(&a)
            .unwrap()
            .set_assigned(Slot::new(Day::Monday, SlotType::Morning), names(&["alice", "bob"]));

        let json = multi.to_json().unwrap();
        assert!(json.contains("\"store-1\""));
        assert!(json.contains("\"alice\""));

        let parsed = MultiLocationRoster::from_json(&json).unwrap();
        assert_eq!(parsed, multi);
    }
}
