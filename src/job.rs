// Copyright 2025 Cowboy AI, LLC.

//! Job entity and its compensation
//!
//! A job is paid either by the hour or by a fixed yearly salary. Raises mutate
//! the compensation in place and keep no history.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::formal_domain::{DomainConcept, ValueObject};

/// Hours worked in a year when none are given.
pub const DEFAULT_HOURS_PER_YEAR: u32 = 2000;

/// How a job pays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum Compensation {
    /// Paid per hour worked
    Hourly(f64),
    /// Fixed yearly amount
    Salary(i64),
}

impl DomainConcept for Compensation {}
impl ValueObject for Compensation {}

/// A job title with its compensation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Job {
    title: String,
    compensation: Compensation,
}

impl Job {
    /// Create a job
    pub fn new(title: impl Into<String>, compensation: Compensation) -> Self {
        Self {
            title: title.into(),
            compensation,
        }
    }

    /// Job title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current compensation
    pub fn compensation(&self) -> Compensation {
        self.compensation
    }

    /// Yearly income over [`DEFAULT_HOURS_PER_YEAR`].
    pub fn calculate_income(&self) -> i64 {
        self.calculate_income_for(DEFAULT_HOURS_PER_YEAR)
    }

    /// Yearly income over the given hours.
    ///
    /// Hourly pay is truncated toward zero. A salary ignores `hours`.
    pub fn calculate_income_for(&self, hours: u32) -> i64 {
        match self.compensation {
            Compensation::Hourly(rate) => (f64::from(hours) * rate) as i64,
            Compensation::Salary(amount) => amount,
        }
    }

    /// Raise by a whole amount.
    pub fn raise_by_integer_amount(&mut self, delta: i64) {
        self.compensation = match self.compensation {
            Compensation::Hourly(rate) => Compensation::Hourly(rate + delta as f64),
            Compensation::Salary(amount) => Compensation::Salary(amount + delta),
        };
    }

    /// Raise by a fractional amount; a salary only takes the whole part.
    pub fn raise_by_float_amount(&mut self, delta: f64) {
        self.compensation = match self.compensation {
            Compensation::Hourly(rate) => Compensation::Hourly(rate + delta),
            Compensation::Salary(amount) => Compensation::Salary(amount + delta as i64),
        };
    }

    /// Raise by a fraction of current pay (0.1 is 10%). Salaries truncate.
    pub fn raise_by_percent(&mut self, fraction: f64) {
        self.compensation = match self.compensation {
            Compensation::Hourly(rate) => Compensation::Hourly(rate * (1.0 + fraction)),
            Compensation::Salary(amount) => {
                Compensation::Salary((amount as f64 * (1.0 + fraction)) as i64)
            }
        };
    }
}

impl DomainConcept for Job {}
