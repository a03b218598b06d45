//! Rostering domain models.
//!
//! Provides the data types exchanged with the allocator: the fixed
//! weekly slot structure, staffing capacity, volunteered availability,
//! and the produced rosters.
//!
//! # Domain Mappings
//!
//! | shift-roster | Retail | Healthcare | Events |
//! |--------------|--------|------------|--------|
//! | Location | Store | Ward | Venue |
//! | Worker | Clerk | Nurse | Volunteer |
//! | Slot | Shift | Duty period | Session |
//! | Capacity | Staffing level | Minimum cover | Crew size |

mod availability;
mod capacity;
mod names;
mod roster;
mod week;

pub use availability::{AvailabilityTable, WorkerPreferences};
pub use capacity::Capacity;
pub use names::{LocationId, WorkerName};
pub use roster::{LocationRoster, MultiLocationRoster, Roster, Shortfall};
pub use week::{Day, Slot, SlotGrid, SlotType};
