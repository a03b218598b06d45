//! Input validation for allocation calls.
//!
//! The allocator never fails: it tolerates repeated names and repeated
//! locations by ignoring the repeats. Callers that want to surface such
//! configuration problems run these checks first. Detects:
//! - Duplicate or blank location IDs
//! - Blank worker names
//! - A worker listed twice for the same slot
//! - Workers missing from the caller's staff list

use std::collections::HashSet;

use crate::models::{AvailabilityTable, LocationId, WorkerName};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A location appears more than once in the location list.
    DuplicateLocation,
    /// A location id is empty.
    BlankLocation,
    /// A worker name is empty.
    BlankWorker,
    /// A worker is listed more than once for one slot.
    DuplicateCandidate,
    /// A worker is not in the staff list.
    UnknownWorker,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the inputs of an allocation call.
///
/// Checks:
/// 1. No duplicate location IDs
/// 2. No blank location IDs
/// 3. No blank worker names
/// 4. No worker listed twice for the same slot
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(availability: &AvailabilityTable, locations: &[LocationId]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut location_ids = HashSet::new();
    for location in locations {
        if location.is_blank() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankLocation,
                "Location list contains a blank location ID",
            ));
        } else if !location_ids.insert(location) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLocation,
                format!("Duplicate location ID: {location}"),
            ));
        }
    }

    for (slot, candidates) in availability.iter() {
        let mut seen = HashSet::new();
        for worker in candidates {
            if worker.is_blank() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BlankWorker,
                    format!("Blank worker name in {slot}"),
                ));
            } else if !seen.insert(worker) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateCandidate,
                    format!("Worker '{worker}' listed more than once in {slot}"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that every candidate is a known staff member.
///
/// Staff records are keyed by id in the calling layer; `staff` is the
/// list of names those ids resolved to for this call.
pub fn validate_known_workers(availability: &AvailabilityTable, staff: &[WorkerName]) -> ValidationResult {
    let known: HashSet<&WorkerName> = staff.iter().collect();
    let errors: Vec<ValidationError> = availability
        .workers()
        .into_iter()
        .filter(|w| !known.contains(w))
        .map(|w| {
            ValidationError::new(
                ValidationErrorKind::UnknownWorker,
                format!("Worker '{w}' is not in the staff list"),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
