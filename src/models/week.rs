//! Weekly time structure.
//!
//! The roster week is a closed 7 × 4 grid: seven days, each split into
//! four slot types. Both sets are fixed at compile time, so every table
//! keyed by (day, slot type) is a dense array indexed by enum ordinals
//! rather than a dynamic map. A cell always exists; "no entry" is simply
//! the cell's default value.
//!
//! # Canonical Order
//! Days in calendar order (Monday first); within a day, slot types in
//! chronological order (Morning first). All iteration in this crate
//! follows this order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the roster week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Number of days in the week.
    pub const COUNT: usize = 7;

    /// All days in calendar order.
    pub const ALL: [Day; Self::COUNT] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Ordinal position (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Part of the day a shift covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SlotType {
    Morning,
    Midday,
    Afternoon,
    Evening,
}

impl SlotType {
    /// Number of slot types per day.
    pub const COUNT: usize = 4;

    /// All slot types in chronological order.
    pub const ALL: [SlotType; Self::COUNT] = [
        SlotType::Morning,
        SlotType::Midday,
        SlotType::Afternoon,
        SlotType::Evening,
    ];

    /// Ordinal position (Morning = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            SlotType::Morning => "Morning",
            SlotType::Midday => "Midday",
            SlotType::Afternoon => "Afternoon",
            SlotType::Evening => "Evening",
        }
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One (day, slot type) pair: the unit of coverage requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub day: Day,
    pub slot_type: SlotType,
}

impl Slot {
    /// Number of slots in a week.
    pub const COUNT: usize = Day::COUNT * SlotType::COUNT;

    /// Creates a slot.
    pub fn new(day: Day, slot_type: SlotType) -> Self {
        Self { day, slot_type }
    }

    /// Iterates every slot of the week in canonical order.
    pub fn all() -> impl Iterator<Item = Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| SlotType::ALL.into_iter().map(move |st| Slot::new(day, st)))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.slot_type)
    }
}

/// Dense per-slot table.
///
/// Stores exactly one `T` per slot of the week. Serialized as a
/// 7-element array of 4-element arrays (days outer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGrid<T> {
    cells: [[T; SlotType::COUNT]; Day::COUNT],
}

impl<T: Default> Default for SlotGrid<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> SlotGrid<T> {
    /// Builds a grid by evaluating `f` for each slot.
    pub fn from_fn(mut f: impl FnMut(Slot) -> T) -> Self {
        Self {
            cells: std::array::from_fn(|d| {
                std::array::from_fn(|s| f(Slot::new(Day::ALL[d], SlotType::ALL[s])))
            }),
        }
    }

    /// Cell for a slot.
    #[inline]
    pub fn get(&self, slot: Slot) -> &T {
        &self.cells[slot.day.index()][slot.slot_type.index()]
    }

    /// Mutable cell for a slot.
    #[inline]
    pub fn get_mut(&mut self, slot: Slot) -> &mut T {
        &mut self.cells[slot.day.index()][slot.slot_type.index()]
    }

    /// Replaces the cell for a slot.
    pub fn set(&mut self, slot: Slot, value: T) {
        *self.get_mut(slot) = value;
    }

    /// Iterates `(slot, cell)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &T)> {
        Slot::all().map(move |slot| (slot, self.get(slot)))
    }

    /// Iterates cells mutably in canonical order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut().flat_map(|row| row.iter_mut())
    }

    /// Builds a new grid by transforming every cell.
    pub fn map<U>(&self, mut f: impl FnMut(Slot, &T) -> U) -> SlotGrid<U> {
        SlotGrid::from_fn(|slot| f(slot, self.get(slot)))
    }
}
