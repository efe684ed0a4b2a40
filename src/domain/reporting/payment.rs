//! Payment-period reconstruction - estado de pago figures from a schedule.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::foundation::{round2, TaskId};
use crate::domain::schedule::{ProgressAggregator, ScheduledTask};

/// A task line as it appears on a payment certificate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub id: TaskId,
    pub name: String,
    pub progress_pct: f64,
    pub actual_end: Option<NaiveDate>,
}

impl TaskSummary {
    fn from_task(task: &ScheduledTask) -> Self {
        Self {
            id: task.id,
            name: task.name.clone(),
            progress_pct: task.progress_pct,
            actual_end: task.actual_end,
        }
    }
}

/// Progress figures and task classification for one payment period.
///
/// Immutable once generated; regenerating for the same period and the
/// same schedule state yields the same figures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPeriodReport {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub report_date: DateTime<Utc>,
    pub progress_at_period_start: f64,
    pub progress_at_period_end: f64,
    pub progress_during_period: f64,
    pub tasks_finished_in_period: Vec<TaskSummary>,
    pub tasks_in_progress: Vec<TaskSummary>,
    pub tasks_finished_undated: Vec<TaskSummary>,
    pub notes: String,
}

/// Reconstructs project state at payment-period boundaries.
///
/// Progress at a boundary date is a what-if snapshot: tasks whose
/// effective window ended before the date count as done, tasks not yet
/// started count as zero, tasks mid-flight keep their currently
/// reported progress. The same snapshot rule runs at both boundaries,
/// so reports for past periods are regenerable and adjacent periods
/// chain without gaps.
pub struct PaymentPeriodReconstructor;

impl PaymentPeriodReconstructor {
    /// Generates the payment report for `[period_start, period_end]`.
    ///
    /// Callers are expected to pass a non-inverted window; an inverted
    /// one degenerates to a report with no finished-in-period tasks
    /// rather than failing.
    ///
    /// # Edge Cases
    /// - Empty schedule: zero figures, empty task lists
    /// - Complete task without an actual end date: listed under
    ///   `tasks_finished_undated`, never attributed to the period
    pub fn generate(
        tasks: &[ScheduledTask],
        period_start: NaiveDate,
        period_end: NaiveDate,
        notes: impl Into<String>,
    ) -> PaymentPeriodReport {
        let progress_at_period_start = Self::progress_at(tasks, period_start);
        let progress_at_period_end = Self::progress_at(tasks, period_end);

        let tasks_finished_in_period = tasks
            .iter()
            .filter(|t| {
                t.is_complete()
                    && t.actual_end
                        .is_some_and(|end| period_start <= end && end <= period_end)
            })
            .map(TaskSummary::from_task)
            .collect();
        let tasks_in_progress = tasks
            .iter()
            .filter(|t| t.progress_pct > 0.0 && t.progress_pct < 100.0)
            .map(TaskSummary::from_task)
            .collect();
        let tasks_finished_undated = tasks
            .iter()
            .filter(|t| t.is_complete() && t.actual_end.is_none())
            .map(TaskSummary::from_task)
            .collect();

        PaymentPeriodReport {
            period_start,
            period_end,
            report_date: Utc::now(),
            progress_at_period_start,
            progress_at_period_end,
            progress_during_period: round2(progress_at_period_end - progress_at_period_start),
            tasks_finished_in_period,
            tasks_in_progress,
            tasks_finished_undated,
            notes: notes.into(),
        }
    }

    /// Overall weighted progress as it stood on a given date.
    pub fn progress_at(tasks: &[ScheduledTask], date: NaiveDate) -> f64 {
        let simulated = Self::simulate_at(tasks, date);
        round2(ProgressAggregator::weighted_progress(&simulated))
    }

    /// Rewrites each task's progress to its state on `date`.
    ///
    /// Effective dates (actual when recorded, else planned) drive the
    /// snapshot; a task with no dates at all keeps its reported figure.
    fn simulate_at(tasks: &[ScheduledTask], date: NaiveDate) -> Vec<ScheduledTask> {
        tasks
            .iter()
            .map(|task| {
                let mut simulated = task.clone();
                if task.effective_end().is_some_and(|end| end < date) {
                    simulated.progress_pct = 100.0;
                } else if task.effective_start().is_some_and(|start| start > date) {
                    simulated.progress_pct = 0.0;
                }
                simulated
            })
            .collect()
    }
}
