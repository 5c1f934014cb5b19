// Copyright 2025 Cowboy AI, LLC.

//! Entity types with identity and lifecycle

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::time::SystemTime;
use uuid::Uuid;

/// A generic entity with a typed ID
///
/// Entities are domain objects with identity that persists across time.
/// They have a lifecycle with creation and update timestamps.
///
/// # Examples
///
/// ```rust
/// use household_domain::{Entity, EntityId};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct Household;
///
/// let household = Entity::<Household>::new();
/// assert_eq!(household.created_at, household.updated_at);
///
/// let id = EntityId::<Household>::new();
/// let household = Entity::with_id(id);
/// assert_eq!(household.id, id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity<T> {
    /// The unique identifier for this entity
    pub id: EntityId<T>,
    /// When this entity was created
    pub created_at: SystemTime,
    /// When this entity was last updated
    pub updated_at: SystemTime,
}

impl<T> Entity<T> {
    /// Create a new entity with a generated ID
    pub fn new() -> Self {
        Self::with_id(EntityId::new())
    }

    /// Create an entity with a specific ID
    pub fn with_id(id: EntityId<T>) -> Self {
        let now = SystemTime::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the entity's timestamp
    pub fn touch(&mut self) {
        self.updated_at = SystemTime::now();
    }
}

impl<T> Default for Entity<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A typed entity ID using phantom types for type safety
///
/// The phantom type parameter keeps a person's ID from being mistaken for a
/// family's ID at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId<T> {
    id: Uuid,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> EntityId<T> {
    /// Create a new random entity ID
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Create an entity ID from a UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.id
    }
}

impl<T> fmt::Display for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> Default for EntityId<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Marker trait for aggregate roots
///
/// Aggregate roots are the entry points for modifying aggregates.
/// All changes to entities within an aggregate must go through the root.
pub trait AggregateRoot: Sized {
    /// The type of ID for this aggregate
    type Id: Copy + Eq;

    /// Get the aggregate's ID
    fn id(&self) -> Self::Id;

    /// Get the aggregate's version
    fn version(&self) -> u64;

    /// Increment the version
    fn increment_version(&mut self);
}

/// Entity with a typed identity
pub trait DomainEntity: Sized {
    /// The marker type for this entity
    type IdType;

    /// Get the entity's ID
    fn id(&self) -> EntityId<Self::IdType>;
}

/// Marker type for Person IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonMarker;

/// Marker type for Family IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FamilyMarker;
