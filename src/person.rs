// Copyright 2025 Cowboy AI, LLC.

//! Person entity
//!
//! A Person owns at most one [`Job`] and may be married to another Person.
//! The spouse is held through a shared handle, so a married couple keeps each
//! other alive until one side is unlinked. Job and spouse changes are
//! age-gated and refused silently for people who are too young.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::SystemTime;

use tracing::debug;

use crate::domain::rules::{employment_eligibility, marriage_eligibility, NameRequired};
use crate::entity::{DomainEntity, Entity, EntityId, PersonMarker};
use crate::errors::DomainResult;
use crate::formal_domain::{DomainConcept, Invariant, Specification};
use crate::job::Job;

/// Shared handle to a person, as held by families and spouses.
pub type PersonRef = Rc<RefCell<Person>>;

/// Link to a spouse; the ID is kept so identity checks need no borrow
#[derive(Clone)]
struct SpouseLink {
    id: EntityId<PersonMarker>,
    person: PersonRef,
}

// spouses point at each other, so only the ID is printed
impl fmt::Debug for SpouseLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpouseLink").field("id", &self.id).finish()
    }
}

/// An individual with an optional job and an optional spouse
#[derive(Debug)]
pub struct Person {
    /// Core entity data
    entity: Entity<PersonMarker>,
    first_name: Option<String>,
    last_name: Option<String>,
    age: u32,
    job: Option<Job>,
    spouse: Option<SpouseLink>,
}

impl Person {
    /// Create a person.
    ///
    /// # Panics
    ///
    /// Panics if both `first_name` and `last_name` are `None`. Use
    /// [`Person::try_new`] to get the violation back as an error instead.
    pub fn new(first_name: Option<&str>, last_name: Option<&str>, age: u32) -> Self {
        match Self::try_new(first_name, last_name, age) {
            Ok(person) => person,
            Err(err) => panic!("cannot create person: {err}"),
        }
    }

    /// Create a person, failing if neither name is given.
    pub fn try_new(
        first_name: Option<&str>,
        last_name: Option<&str>,
        age: u32,
    ) -> DomainResult<Self> {
        let person = Self {
            entity: Entity::new(),
            first_name: first_name.map(str::to_string),
            last_name: last_name.map(str::to_string),
            age,
            job: None,
            spouse: None,
        };
        NameRequired.check(&person)?;
        Ok(person)
    }

    /// Wrap this person in a shared handle
    pub fn into_ref(self) -> PersonRef {
        Rc::new(RefCell::new(self))
    }

    /// First name, if any
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Last name, if any
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Age in years
    pub fn age(&self) -> u32 {
        self.age
    }

    /// When this person last changed
    pub fn updated_at(&self) -> SystemTime {
        self.entity.updated_at
    }

    /// Current job, if any
    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    /// Mutable access to the current job, e.g. to apply a raise
    pub fn job_mut(&mut self) -> Option<&mut Job> {
        self.job.as_mut()
    }

    /// Replace the job. Returns `false`, leaving the current job in place, if
    /// this person is below working age.
    pub fn set_job(&mut self, job: Option<Job>) -> bool {
        if !employment_eligibility().is_satisfied_by(&self.age) {
            debug!(person = %self.id(), age = self.age, "job change refused");
            return false;
        }
        self.job = job;
        self.entity.touch();
        true
    }

    /// The current spouse, if any
    pub fn spouse(&self) -> Option<PersonRef> {
        self.spouse.as_ref().map(|link| Rc::clone(&link.person))
    }

    /// The current spouse's ID, if any
    pub fn spouse_id(&self) -> Option<EntityId<PersonMarker>> {
        self.spouse.as_ref().map(|link| link.id)
    }

    /// Whether `other` is this person's current spouse
    pub fn is_spouse_of(&self, other: &Person) -> bool {
        self.spouse_id() == Some(other.id())
    }

    /// Replace the spouse. Returns `false`, leaving the current spouse in
    /// place, if this person is below marriage age.
    ///
    /// Only this side of the relation changes.
    ///
    /// # Panics
    ///
    /// Panics if `spouse` is someone other than this person and is currently
    /// mutably borrowed.
    pub fn set_spouse(&mut self, spouse: Option<&PersonRef>) -> bool {
        if !marriage_eligibility().is_satisfied_by(&self.age) {
            debug!(person = %self.id(), age = self.age, "spouse change refused");
            return false;
        }
        self.spouse = spouse.map(|other| SpouseLink {
            id: self.id_of(other),
            person: Rc::clone(other),
        });
        self.entity.touch();
        true
    }

    /// Set the spouse without the age check.
    pub(crate) fn link_spouse(
        &mut self,
        id: EntityId<PersonMarker>,
        spouse: PersonRef,
    ) {
        self.spouse = Some(SpouseLink { id, person: spouse });
        self.entity.touch();
    }

    /// Drop the spouse without the age check, handing the link back.
    pub(crate) fn unlink_spouse(&mut self) -> Option<PersonRef> {
        let link = self.spouse.take()?;
        self.entity.touch();
        Some(link.person)
    }

    /// One-line summary, with absent values shown as `nil`.
    ///
    /// # Panics
    ///
    /// Panics if the spouse is someone other than this person and is
    /// currently mutably borrowed.
    pub fn describe(&self) -> String {
        format!(
            "[Person: firstName:{} lastName:{} age:{} job:{} spouse:{}]",
            self.first_name().unwrap_or("nil"),
            self.last_name().unwrap_or("nil"),
            self.age,
            self.job().map(Job::title).unwrap_or("nil"),
            self.spouse_first_name().as_deref().unwrap_or("nil"),
        )
    }

    fn spouse_first_name(&self) -> Option<String> {
        let spouse = self.spouse()?;
        // married to oneself: the cell may already be borrowed by our caller
        if std::ptr::eq(spouse.as_ptr().cast_const(), self) {
            return self.first_name.clone();
        }
        let spouse = spouse.borrow();
        spouse.first_name.clone()
    }

    fn id_of(&self, other: &PersonRef) -> EntityId<PersonMarker> {
        if std::ptr::eq(other.as_ptr().cast_const(), self) {
            self.id()
        } else {
            other.borrow().id()
        }
    }
}

impl DomainEntity for Person {
    type IdType = PersonMarker;

    fn id(&self) -> EntityId<PersonMarker> {
        self.entity.id
    }
}

impl DomainConcept for Person {}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
