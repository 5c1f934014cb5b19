// Copyright 2025 Cowboy AI, LLC.

//! Household value objects and business rules

pub mod rules;
pub mod value_objects;

pub use rules::{
    MinimumAge, NameRequired, OlderThan, MARRIAGE_AGE, PARENT_AGE_FLOOR, WORKING_AGE,
};
pub use value_objects::{FixedRates, Money, RateProvider, RateTable, NEUTRAL_RATE};
