//! GetProgressCurveHandler - Query handler for S-curve generation.
//!
//! Loads a project's schedule, validates it at the boundary, and runs
//! the pure curve generator at the requested resolution.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::reporting::{SCurvePoint, ScheduleCurve};
use crate::domain::schedule::ScheduledTask;
use crate::ports::ScheduleReader;

/// Span beyond which `Auto` resolution switches to weekly buckets.
pub const DEFAULT_WEEKLY_THRESHOLD_DAYS: i64 = 365;

/// Time resolution of the requested curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveResolution {
    /// One point per calendar day.
    Daily,
    /// One point per ISO week.
    Weekly,
    /// Daily for short schedules, weekly past the configured threshold.
    Auto,
}

/// Query to generate a project's progress curve.
#[derive(Debug, Clone)]
pub struct GetProgressCurveQuery {
    /// The project whose schedule to chart.
    pub project_id: ProjectId,
    /// Requested resolution.
    pub resolution: CurveResolution,
}

/// Result of a successful curve query.
pub type GetProgressCurveResult = Vec<SCurvePoint>;

/// Handler for generating progress curves.
pub struct GetProgressCurveHandler {
    schedule_reader: Arc<dyn ScheduleReader>,
    weekly_threshold_days: i64,
}

impl GetProgressCurveHandler {
    /// Creates a handler with the default auto-resolution threshold.
    pub fn new(schedule_reader: Arc<dyn ScheduleReader>) -> Self {
        Self::with_weekly_threshold(schedule_reader, DEFAULT_WEEKLY_THRESHOLD_DAYS)
    }

    /// Creates a handler with an explicit threshold, e.g. from configuration.
    pub fn with_weekly_threshold(
        schedule_reader: Arc<dyn ScheduleReader>,
        weekly_threshold_days: i64,
    ) -> Self {
        Self {
            schedule_reader,
            weekly_threshold_days,
        }
    }

    pub async fn handle(
        &self,
        query: GetProgressCurveQuery,
    ) -> Result<GetProgressCurveResult, DomainError> {
        let tasks = self.schedule_reader.tasks(&query.project_id).await?;
        for task in &tasks {
            task.validate()?;
        }

        let weekly = match query.resolution {
            CurveResolution::Daily => false,
            CurveResolution::Weekly => true,
            CurveResolution::Auto => Self::span_days(&tasks) > self.weekly_threshold_days,
        };
        let points = if weekly {
            ScheduleCurve::weekly(&tasks)
        } else {
            ScheduleCurve::daily(&tasks)
        };

        debug!(
            project_id = %query.project_id,
            weekly,
            points = points.len(),
            "Generated progress curve"
        );

        Ok(points)
    }

    /// Planned span of the schedule in days, 0 when nothing is dated.
    fn span_days(tasks: &[ScheduledTask]) -> i64 {
        let windowed = tasks.iter().filter(|t| t.has_planned_window());
        let start = windowed.clone().filter_map(|t| t.planned_start).min();
        let end = windowed.filter_map(|t| t.planned_end).max();
        match (start, end) {
            (Some(start), Some(end)) => (end - start).num_days(),
            _ => 0,
        }
    }
}
