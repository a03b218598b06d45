//! Pay computation from a finished roster.
//!
//! Each assigned slot is worth a fixed number of hours for its slot
//! type. Pay is `hours × base_rate × coefficient`, where the
//! coefficient is a per-worker multiplier supplied by the caller.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::models::{MultiLocationRoster, SlotType, WorkerName};

/// Hours and base rate used to price assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollPolicy {
    /// Hours per slot, indexed in `SlotType::ALL` order.
    pub slot_hours: [u32; SlotType::COUNT],
    /// Pay per hour before the worker's coefficient.
    pub base_rate: f64,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            slot_hours: [4; SlotType::COUNT],
            base_rate: 50_000.0,
        }
    }
}

/// A worker's pay multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerRate {
    pub worker: WorkerName,
    pub coefficient: f64,
}

impl WorkerRate {
    /// Creates a rate entry.
    pub fn new(worker: impl Into<WorkerName>, coefficient: f64) -> Self {
        Self {
            worker: worker.into(),
            coefficient,
        }
    }
}

/// One worker's pay for the week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayLine {
    pub worker: WorkerName,
    pub coefficient: f64,
    pub hours: u32,
    pub pay: f64,
}

/// Pay for every listed worker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payroll {
    /// Lines sorted by pay, highest first.
    pub lines: Vec<PayLine>,
    pub total: f64,
}

impl PayrollPolicy {
    /// Creates a policy with the given base rate and 4-hour slots.
    pub fn new(base_rate: f64) -> ConfigResult<Self> {
        let policy = Self {
            base_rate,
            ..Self::default()
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Sets the hours for one slot type.
    pub fn with_slot_hours(mut self, slot_type: SlotType, hours: u32) -> Self {
        self.slot_hours[slot_type.index()] = hours;
        self
    }

    /// Rejects negative or non-finite base rates.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.base_rate.is_finite() || self.base_rate < 0.0 {
            return Err(ConfigError::InvalidBaseRate(self.base_rate));
        }
        Ok(())
    }

    /// Hours for one slot of a slot type.
    #[inline]
    pub fn hours(&self, slot_type: SlotType) -> u32 {
        self.slot_hours[slot_type.index()]
    }

    /// Hours a worker is rostered for, across all locations.
    pub fn hours_for(&self, multi: &MultiLocationRoster, worker: &WorkerName) -> u32 {
        multi
            .iter()
            .flat_map(|(_, roster)| roster.iter())
            .filter(|(_, assigned)| assigned.contains(worker))
            .map(|(slot, _)| self.hours(slot.slot_type))
            .sum()
    }

    /// Computes pay for each listed worker.
    ///
    /// Workers not on the roster get a zero line. Ties in pay are
    /// ordered by name.
    pub fn compute(&self, multi: &MultiLocationRoster, rates: &[WorkerRate]) -> Payroll {
        let mut lines: Vec<PayLine> = rates
            .iter()
            .map(|rate| {
                let hours = self.hours_for(multi, &rate.worker);
                PayLine {
                    worker: rate.worker.clone(),
                    coefficient: rate.coefficient,
                    hours,
                    pay: hours as f64 * self.base_rate * rate.coefficient,
                }
            })
            .collect();

        lines.sort_by(|a, b| {
            b.pay
                .total_cmp(&a.pay)
                .then_with(|| a.worker.cmp(&b.worker))
        });
        let total = lines.iter().map(|l| l.pay).sum();

        Payroll { lines, total }
    }
}
