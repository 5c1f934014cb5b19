// Copyright 2025 Cowboy AI, LLC.

//! Family aggregate
//!
//! A family starts with two spouses and grows as children are added. Members
//! are never removed. The founding spouses are linked to each other directly,
//! without the age check that [`Person::set_spouse`](crate::Person::set_spouse)
//! applies. Spouses hold each other strongly; [`Family::dissolve`] unlinks the
//! founding couple so they can be released.

use std::rc::Rc;

use tracing::debug;

use crate::domain::rules::parent_eligibility;
use crate::entity::{AggregateRoot, DomainEntity, Entity, EntityId, FamilyMarker};
use crate::formal_domain::{DomainConcept, Specification};
use crate::job::Job;
use crate::person::PersonRef;

/// Family aggregate - ordered members, founding spouses first
#[derive(Debug)]
pub struct Family {
    entity: Entity<FamilyMarker>,
    version: u64,
    members: Vec<PersonRef>,
}

impl Family {
    /// Found a family, marrying `spouse1` and `spouse2` to each other.
    ///
    /// # Panics
    ///
    /// Panics if either spouse is currently borrowed elsewhere.
    pub fn new(spouse1: PersonRef, spouse2: PersonRef) -> Self {
        link(&spouse1, &spouse2);
        link(&spouse2, &spouse1);

        Self {
            entity: Entity::new(),
            version: 0,
            members: vec![spouse1, spouse2],
        }
    }

    /// Members in the order they joined
    pub fn members(&self) -> &[PersonRef] {
        &self.members
    }

    /// Whether `person` is a member of this family
    pub fn contains(&self, person: &PersonRef) -> bool {
        self.members.iter().any(|m| Rc::ptr_eq(m, person))
    }

    /// Add a child. Returns `false`, leaving the family unchanged, unless some
    /// member is older than the parent age floor.
    ///
    /// # Panics
    ///
    /// Panics if a member is currently mutably borrowed.
    pub fn have_child(&mut self, child: PersonRef) -> bool {
        let eligible = parent_eligibility();
        if !self.members.iter().any(|m| eligible.is_satisfied_by(&m.borrow().age())) {
            debug!(family = %self.entity.id, "child refused: no member old enough");
            return false;
        }
        self.members.push(child);
        self.increment_version();
        true
    }

    /// Combined yearly income of all members; members without a job add 0.
    ///
    /// # Panics
    ///
    /// Panics if a member is currently mutably borrowed.
    pub fn household_income(&self) -> i64 {
        self.members
            .iter()
            .map(|m| m.borrow().job().map(Job::calculate_income).unwrap_or(0))
            .sum()
    }

    /// Break the founding spouses' links to each other and hand back the
    /// members. Links to anyone else are left alone.
    pub fn dissolve(self) -> Vec<PersonRef> {
        if let [first, second, ..] = self.members.as_slice() {
            unlink(first, second);
            unlink(second, first);
        }
        self.members
    }
}

fn link(person: &PersonRef, spouse: &PersonRef) {
    let spouse_id = spouse.borrow().id();
    person
        .borrow_mut()
        .link_spouse(spouse_id, Rc::clone(spouse));
}

fn unlink(person: &PersonRef, spouse: &PersonRef) {
    let spouse_id = spouse.borrow().id();
    let mut person = person.borrow_mut();
    if person.spouse_id() == Some(spouse_id) {
        person.unlink_spouse();
    }
}

impl AggregateRoot for Family {
    type Id = EntityId<FamilyMarker>;

    fn id(&self) -> Self::Id {
        self.entity.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn increment_version(&mut self) {
        self.version += 1;
        self.entity.touch();
    }
}

impl DomainConcept for Family {}
