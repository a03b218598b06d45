//! Multi-location shift rostering.
//!
//! Turns a week of volunteered availability into a roster per location
//! and reports how well the roster covers its staffing requirement.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `SlotType`, `Slot`, `SlotGrid`,
//!   `Capacity`, `AvailabilityTable`, `Roster`, `MultiLocationRoster`
//! - **`allocator`**: Greedy load-balanced allocation and coverage
//!   statistics (`ShiftAllocator`, `RosterStats`)
//! - **`validation`**: Input integrity checks (duplicate locations,
//!   repeated candidates, unknown workers)
//! - **`payroll`**: Hours and pay from a finished roster
//! - **`config`**: TOML-loaded capacity and pay settings
//!
//! # Architecture
//!
//! Data flows one way: availability → allocator → rosters → statistics.
//! Every operation is a pure function of its inputs. Staff records,
//! persistence, and presentation belong to the caller.
//!
//! # Example
//!
//! ```
//! use shift_roster::allocator::{aggregate_stats, allocate};
//! use shift_roster::models::{AvailabilityTable, LocationId, Slot};
//!
//! let mut availability = AvailabilityTable::new();
//! for slot in Slot::all() {
//!     availability.add(slot, "alice");
//!     availability.add(slot, "bob");
//! }
//! let locations = vec![LocationId::from("downtown"), LocationId::from("airport")];
//!
//! let roster = allocate(&availability, &locations);
//! let stats = aggregate_stats(&roster);
//! assert_eq!(stats.total_required, 70);
//! assert_eq!(stats.total_assigned, 56);
//! ```

pub mod allocator;
pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
