// Copyright 2025 Cowboy AI, LLC.

//! Household business rules
//!
//! Age gates are specifications over a person's age in years; the name rule
//! is an invariant checked when a person is created.

use crate::errors::DomainError;
use crate::formal_domain::{DomainConcept, Invariant, Specification};
use crate::person::Person;

/// Minimum age at which a person may hold a job.
pub const WORKING_AGE: u32 = 16;

/// Minimum age at which a person may take a spouse.
pub const MARRIAGE_AGE: u32 = 18;

/// A family may add children once some member is older than this.
pub const PARENT_AGE_FLOOR: u32 = 21;

/// Satisfied by ages greater than or equal to the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumAge(pub u32);

impl DomainConcept for MinimumAge {}

impl Specification<u32> for MinimumAge {
    fn is_satisfied_by(&self, age: &u32) -> bool {
        *age >= self.0
    }
}

/// Satisfied by ages strictly greater than the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OlderThan(pub u32);

impl DomainConcept for OlderThan {}

impl Specification<u32> for OlderThan {
    fn is_satisfied_by(&self, age: &u32) -> bool {
        *age > self.0
    }
}

/// Who may hold a job.
pub fn employment_eligibility() -> MinimumAge {
    MinimumAge(WORKING_AGE)
}

/// Who may take a spouse.
pub fn marriage_eligibility() -> MinimumAge {
    MinimumAge(MARRIAGE_AGE)
}

/// Which members qualify a family to add a child.
pub fn parent_eligibility() -> OlderThan {
    OlderThan(PARENT_AGE_FLOOR)
}

/// A person must carry a first name, a last name, or both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameRequired;

impl DomainConcept for NameRequired {}

impl Invariant for NameRequired {
    type Target = Person;

    fn check(&self, person: &Person) -> Result<(), DomainError> {
        if person.first_name().is_none() && person.last_name().is_none() {
            return Err(DomainError::InvariantViolation(self.description().to_string()));
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "at least one name must be provided"
    }
}
