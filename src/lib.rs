// Copyright 2025 Cowboy AI, LLC.

//! # Household Domain
//!
//! An in-memory domain model of money, jobs, people and families, built from
//! Domain-Driven Design building blocks:
//! - **Value Objects**: [`Money`] with fixed-table currency conversion, and a
//!   job's [`Compensation`]
//! - **Entities**: [`Job`] and [`Person`], mutated through guarded operations
//! - **Aggregates**: [`Family`], which owns its members and totals their income
//! - **Rules**: age gates and the name invariant as specifications
//!
//! ## Design Principles
//!
//! 1. **Type Safety**: Phantom-typed IDs keep person and family identities apart
//! 2. **Immutability**: Money is never mutated; arithmetic returns new values
//! 3. **Guarded Mutation**: Age-gated setters report whether they applied and
//!    never fail
//! 4. **Single-threaded**: People are shared through `Rc<RefCell<_>>`; spouses
//!    hold each other until the family is dissolved
//!
//! ```rust
//! use household_domain::{Compensation, Family, Job, Person};
//!
//! let ted = Person::new(Some("Ted"), Some("Neward"), 45).into_ref();
//! let charlotte = Person::new(Some("Charlotte"), Some("Neward"), 39).into_ref();
//! ted.borrow_mut().set_job(Some(Job::new("Guest Lecturer", Compensation::Hourly(10.0))));
//!
//! let mut family = Family::new(ted, charlotte);
//! assert!(family.have_child(Person::new(Some("Kid"), None, 1).into_ref()));
//! assert_eq!(family.household_income(), 20_000);
//! ```

#![warn(missing_docs)]

mod entity;
mod errors;
mod family;
mod formal_domain;
mod job;
mod person;
pub mod domain;

pub use domain::{FixedRates, Money, RateProvider, RateTable};
pub use entity::{AggregateRoot, DomainEntity, Entity, EntityId};
pub use errors::{DomainError, DomainResult};
pub use family::Family;
pub use formal_domain::{
    AndSpecification, DomainConcept, Invariant, NotSpecification, Specification, ValueObject,
};
pub use job::{Compensation, Job, DEFAULT_HOURS_PER_YEAR};
pub use person::{Person, PersonRef};

// Re-export marker types
pub mod markers {
    //! Marker types for phantom type parameters
    pub use crate::entity::{FamilyMarker, PersonMarker};
}
