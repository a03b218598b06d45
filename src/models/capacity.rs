//! Per-slot staffing requirements.
//!
//! Capacity is the number of workers required in each slot type. It is
//! the same for every day of the week and every location, and must be
//! the same for every allocation and statistics call in a deployment.

use serde::{Deserialize, Serialize};

use super::{Slot, SlotType};
use crate::error::{ConfigError, ConfigResult};

/// Workers required per slot type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CapacityTable", into = "CapacityTable")]
pub struct Capacity {
    required: [u32; SlotType::COUNT],
}

impl Capacity {
    /// Standard staffing: two in the morning, one in every other slot.
    pub const STANDARD: Capacity = Capacity {
        required: [2, 1, 1, 1],
    };

    /// Creates a capacity table, indexed in `SlotType::ALL` order.
    ///
    /// Every slot type must require at least one worker.
    pub fn new(required: [u32; SlotType::COUNT]) -> ConfigResult<Self> {
        for st in SlotType::ALL {
            if required[st.index()] == 0 {
                return Err(ConfigError::ZeroCapacity(st));
            }
        }
        Ok(Self { required })
    }

    /// Same requirement for every slot type.
    pub fn uniform(required: u32) -> ConfigResult<Self> {
        Self::new([required; SlotType::COUNT])
    }

    /// Workers required for a slot type.
    #[inline]
    pub fn get(&self, slot_type: SlotType) -> u32 {
        self.required[slot_type.index()]
    }

    /// Workers required for a slot.
    #[inline]
    pub fn for_slot(&self, slot: Slot) -> u32 {
        self.get(slot.slot_type)
    }

    /// Workers required across one full week at one location.
    pub fn per_week(&self) -> u32 {
        Slot::all().map(|slot| self.for_slot(slot)).sum()
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Named-field form used in config files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CapacityTable {
    morning: u32,
    midday: u32,
    afternoon: u32,
    evening: u32,
}

impl TryFrom<CapacityTable> for Capacity {
    type Error = ConfigError;

    fn try_from(t: CapacityTable) -> ConfigResult<Self> {
        Capacity::new([t.morning, t.midday, t.afternoon, t.evening])
    }
}

impl From<Capacity> for CapacityTable {
    fn from(c: Capacity) -> Self {
        Self {
            morning: c.get(SlotType::Morning),
            midday: c.get(SlotType::Midday),
            afternoon: c.get(SlotType::Afternoon),
            evening: c.get(SlotType::Evening),
        }
    }
}
