// Copyright 2025 Cowboy AI, LLC.

//! Formal domain structure
//!
//! Every household concept carries one of these marker traits:
//! - **Objects**: ValueObject (Money, Compensation), entities (Job, Person)
//!   and aggregates (Family)
//! - **Rules**: Invariant (must always hold) and Specification (a predicate
//!   a candidate may or may not satisfy)

use std::fmt::Debug;
use std::marker::PhantomData;

use crate::errors::DomainError;

// ============================================================================
// MARKER TRAITS
// ============================================================================

/// Root trait for all domain concepts
pub trait DomainConcept: 'static {}

/// Value Objects are immutable and compared by value
///
/// # Properties
/// - Immutable after creation
/// - No identity beyond their attributes
/// - Compared by structural equality
pub trait ValueObject: DomainConcept + Clone + PartialEq + Debug {}

// ============================================================================
// VALIDATION AND INVARIANTS
// ============================================================================

/// Domain invariant that must always hold
pub trait Invariant: DomainConcept {
    /// The type this invariant validates
    type Target;

    /// Check if the invariant holds
    fn check(&self, target: &Self::Target) -> Result<(), DomainError>;

    /// Get a description of this invariant
    fn description(&self) -> &str;
}

/// Specification pattern for eligibility rules
pub trait Specification<T>: DomainConcept {
    /// Check if the specification is satisfied
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// Combine with another specification using AND
    fn and<S: Specification<T>>(self, other: S) -> AndSpecification<T, Self, S>
    where
        Self: Sized,
    {
        AndSpecification {
            left: self,
            right: other,
            _phantom: PhantomData,
        }
    }

    /// Negate this specification
    fn not(self) -> NotSpecification<T, Self>
    where
        Self: Sized,
    {
        NotSpecification {
            spec: self,
            _phantom: PhantomData,
        }
    }
}

/// AND combination of specifications
pub struct AndSpecification<T, L, R> {
    left: L,
    right: R,
    _phantom: PhantomData<T>,
}

impl<T, L, R> DomainConcept for AndSpecification<T, L, R>
where
    T: 'static,
    L: Specification<T>,
    R: Specification<T>,
{
}

impl<T, L, R> Specification<T> for AndSpecification<T, L, R>
where
    T: 'static,
    L: Specification<T>,
    R: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) && self.right.is_satisfied_by(candidate)
    }
}

/// NOT specification
pub struct NotSpecification<T, S> {
    spec: S,
    _phantom: PhantomData<T>,
}

impl<T, S> DomainConcept for NotSpecification<T, S>
where
    T: 'static,
    S: Specification<T>,
{
}

impl<T, S> Specification<T> for NotSpecification<T, S>
where
    T: 'static,
    S: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.spec.is_satisfied_by(candidate)
    }
}
