//! Due-date value object merging date-only and full-timestamp views.
//!
//! The task-list service only tracks the day a task is due; the document
//! store may hold a time-of-day for the same task. The merged value keeps
//! the distinction explicit so consumers never mistake a defaulted midnight
//! for a real deadline time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// When a task is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DueDate {
    /// Date-only deadline, as supplied by the task-list service.
    Day(NaiveDate),
    /// Full deadline with a time-of-day merged in from the document store.
    Moment(NaiveDateTime),
}

impl DueDate {
    /// Returns the calendar day of the deadline.
    #[must_use]
    pub const fn day(&self) -> NaiveDate {
        match self {
            Self::Day(day) => *day,
            Self::Moment(moment) => moment.date(),
        }
    }

    /// Returns the time-of-day portion, when one is known.
    #[must_use]
    pub const fn time(&self) -> Option<NaiveTime> {
        match self {
            Self::Day(_) => None,
            Self::Moment(moment) => Some(moment.time()),
        }
    }

    /// Splices a time-of-day onto the deadline's day.
    ///
    /// The day portion is preserved in both variants; an existing
    /// time-of-day is replaced.
    #[must_use]
    pub const fn merge_time(self, time: NaiveTime) -> Self {
        Self::Moment(self.day().and_time(time))
    }
}

impl From<NaiveDate> for DueDate {
    fn from(day: NaiveDate) -> Self {
        Self::Day(day)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(day) => write!(f, "{}", day.format("%Y-%m-%d")),
            Self::Moment(moment) => write!(f, "{}", moment.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}
