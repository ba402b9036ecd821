//! Time-tracking value objects.
//!
//! All float arithmetic in the crate is confined to this module so the
//! saturation rules live in one place.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated non-negative duration in hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(f64);

impl Hours {
    /// Zero hours.
    pub const ZERO: Self = Self(0.0);

    /// Creates a validated hour value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidHours`] when the value is negative,
    /// NaN, or infinite.
    pub fn new(value: f64) -> Result<Self, TaskDomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(TaskDomainError::InvalidHours(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying number of hours.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Adds two durations, clamping at the largest finite value.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "Hour accumulation is the one sanctioned float operation"
    )]
    pub fn saturating_add(self, other: Self) -> Self {
        Self((self.0 + other.0).min(f64::MAX))
    }

    /// Subtracts a duration, clamping at zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "Remaining-time derivation is the one sanctioned float operation"
    )]
    pub fn saturating_sub(self, other: Self) -> Self {
        Self((self.0 - other.0).max(0.0))
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Effort bookkeeping for a task that carries an estimate.
///
/// Tasks without an estimate never construct this type, which is how the
/// "no estimate, no time tracking" rule is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeTracking {
    estimate: Hours,
    spent: Hours,
}

impl TimeTracking {
    /// Creates time tracking from an estimate and hours already spent.
    #[must_use]
    pub const fn new(estimate: Hours, spent: Hours) -> Self {
        Self { estimate, spent }
    }

    /// Returns the estimated effort.
    #[must_use]
    pub const fn estimate(&self) -> Hours {
        self.estimate
    }

    /// Returns the hours spent so far.
    #[must_use]
    pub const fn spent(&self) -> Hours {
        self.spent
    }

    /// Returns the remaining effort, never negative.
    #[must_use]
    pub fn remaining(&self) -> Hours {
        self.estimate.saturating_sub(self.spent)
    }

    /// Accumulates additional spent hours.
    pub fn add_spent(&mut self, hours: Hours) {
        self.spent = self.spent.saturating_add(hours);
    }

    /// Resets the spent accumulator to zero.
    pub const fn reset_spent(&mut self) {
        self.spent = Hours::ZERO;
    }
}
