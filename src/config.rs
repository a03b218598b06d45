//! Roster configuration file.
//!
//! Capacity and pay settings are deployment constants. They are read
//! once from TOML and passed to every allocation and statistics call.
//!
//! ```toml
//! [capacity]
//! morning = 2
//! midday = 1
//! afternoon = 1
//! evening = 1
//!
//! [payroll]
//! slot_hours = [4, 4, 4, 4]
//! base_rate = 50000.0
//! ```
//!
//! Missing sections fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use tracing::debug;

use crate::allocator::ShiftAllocator;
use crate::error::ConfigResult;
use crate::models::Capacity;
use crate::payroll::PayrollPolicy;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub capacity: Capacity,
    pub payroll: PayrollPolicy,
}

impl RosterConfig {
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded roster config");
        Ok(config)
    }

    pub fn from_toml_str(toml_str: &str) -> ConfigResult<Self> {
        let config: RosterConfig = toml::from_str(toml_str)?;
        config.payroll.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Allocator configured with this capacity.
    pub fn allocator(&self) -> ShiftAllocator {
        ShiftAllocator::new().with_capacity(self.capacity)
    }
}
