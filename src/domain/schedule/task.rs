//! ScheduledTask value object - one row of a project work schedule.
//!
//! Tasks carry a planned window, an optional actual window, and a
//! reported physical progress percentage. All date fields are optional
//! because schedules are routinely drafted before dates are committed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TaskId, ValidationError};

/// A single schedulable unit of work.
///
/// `progress_pct` is the physically-verified completion figure reported
/// from the field, not a value derived from dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    #[serde(default)]
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub planned_start: Option<NaiveDate>,
    #[serde(default)]
    pub planned_end: Option<NaiveDate>,
    #[serde(default)]
    pub actual_start: Option<NaiveDate>,
    #[serde(default)]
    pub actual_end: Option<NaiveDate>,
    #[serde(default)]
    pub progress_pct: f64,
}

impl ScheduledTask {
    /// Planned duration in days, end date exclusive.
    ///
    /// A task planned Mon-Fri spans 4 days. Returns None when either
    /// planned date is missing.
    pub fn planned_duration_days(&self) -> Option<i64> {
        match (self.planned_start, self.planned_end) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }

    /// Aggregation weight: planned duration clamped to at least one day.
    ///
    /// Undated tasks weigh one day so they still count toward overall
    /// progress instead of vanishing from the average.
    pub fn weight(&self) -> f64 {
        self.planned_duration_days().map_or(1, |d| d.max(1)) as f64
    }

    /// Start date for field reality: actual when recorded, else planned.
    pub fn effective_start(&self) -> Option<NaiveDate> {
        self.actual_start.or(self.planned_start)
    }

    /// End date for field reality: actual when recorded, else planned.
    pub fn effective_end(&self) -> Option<NaiveDate> {
        self.actual_end.or(self.planned_end)
    }

    /// Returns true when both planned dates are present.
    pub fn has_planned_window(&self) -> bool {
        self.planned_start.is_some() && self.planned_end.is_some()
    }

    /// Returns true when reported progress has reached 100%.
    pub fn is_complete(&self) -> bool {
        self.progress_pct >= 100.0
    }

    /// Validates a task record at the input boundary.
    ///
    /// # Errors
    /// - Empty name
    /// - Non-finite or out-of-range (0-100) progress
    /// - Planned or actual window with start after end
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !self.progress_pct.is_finite() {
            return Err(ValidationError::non_finite("progress_pct"));
        }
        if !(0.0..=100.0).contains(&self.progress_pct) {
            return Err(ValidationError::out_of_range(
                "progress_pct",
                0.0,
                100.0,
                self.progress_pct,
            ));
        }
        if let (Some(start), Some(end)) = (self.planned_start, self.planned_end) {
            if start > end {
                return Err(ValidationError::inverted_dates("planned", start, end));
            }
        }
        if let (Some(start), Some(end)) = (self.actual_start, self.actual_end) {
            if start > end {
                return Err(ValidationError::inverted_dates("actual", start, end));
            }
        }
        Ok(())
    }
}
