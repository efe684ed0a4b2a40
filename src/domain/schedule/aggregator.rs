//! Weighted physical-progress aggregation over a task schedule.

use super::task::ScheduledTask;

/// Calculator for overall physical progress of a task set.
///
/// Longer tasks move the needle more: each task is weighted by its
/// planned duration in days, floored at one day, so a three-month
/// structural phase is not averaged 1:1 against a one-day punch-list
/// item.
pub struct ProgressAggregator;

impl ProgressAggregator {
    /// Computes overall progress (0-100) as a duration-weighted mean of
    /// each task's reported `progress_pct`.
    ///
    /// Returns an unrounded figure; presentation layers round as they
    /// see fit.
    ///
    /// # Edge Cases
    /// - Empty task list: Returns 0.0
    /// - All tasks undated: every weight is 1, so this is a plain mean
    pub fn weighted_progress(tasks: &[ScheduledTask]) -> f64 {
        Self::weighted_mean(tasks, |t| t.progress_pct)
    }

    /// Duration-weighted mean of an arbitrary per-task value.
    ///
    /// This is the single aggregation rule of the crate; the curve and
    /// payment-report generators both go through it so their figures
    /// are always mutually consistent.
    pub fn weighted_mean(tasks: &[ScheduledTask], value: impl Fn(&ScheduledTask) -> f64) -> f64 {
        if tasks.is_empty() {
            return 0.0;
        }

        let total_weight: f64 = tasks.iter().map(ScheduledTask::weight).sum();
        let weighted_sum: f64 = tasks.iter().map(|t| value(t) * t.weight()).sum();

        weighted_sum / total_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::domain::foundation::TaskId;

    fn task_with(progress_pct: f64, duration_days: i64) -> ScheduledTask {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        ScheduledTask {
            id: TaskId::new(),
            name: format!("Partida {duration_days}d"),
            planned_start: Some(start),
            planned_end: Some(start + chrono::Duration::days(duration_days)),
            actual_start: None,
            actual_end: None,
            progress_pct,
        }
    }

    fn undated_task(progress_pct: f64) -> ScheduledTask {
        ScheduledTask {
            id: TaskId::new(),
            name: "Sin fechas".to_string(),
            planned_start: None,
            planned_end: None,
            actual_start: None,
            actual_end: None,
            progress_pct,
        }
    }

    #[test]
    fn empty_schedule_is_zero() {
        assert_eq!(ProgressAggregator::weighted_progress(&[]), 0.0);
    }

    #[test]
    fn single_task_returns_its_progress() {
        let tasks = vec![task_with(37.5, 10)];
        assert_eq!(ProgressAggregator::weighted_progress(&tasks), 37.5);
    }

    #[test]
    fn durations_weight_the_mean() {
        // Weights 1, 2, 1 with progress 100, 50, 0: (100 + 100 + 0) / 4
        let tasks = vec![
            task_with(100.0, 1),
            task_with(50.0, 2),
            task_with(0.0, 1),
        ];
        assert_eq!(ProgressAggregator::weighted_progress(&tasks), 50.0);
    }

    #[test]
    fn long_task_dominates_short_task() {
        let tasks = vec![task_with(0.0, 90), task_with(100.0, 10)];
        assert_eq!(ProgressAggregator::weighted_progress(&tasks), 10.0);
    }

    #[test]
    fn undated_tasks_weigh_one_day() {
        let tasks = vec![undated_task(100.0), undated_task(0.0)];
        assert_eq!(ProgressAggregator::weighted_progress(&tasks), 50.0);
    }

    #[test]
    fn mix_of_dated_and_undated() {
        // Weights 3 and 1: (60×3 + 100×1) / 4 = 70
        let tasks = vec![task_with(60.0, 3), undated_task(100.0)];
        assert_eq!(ProgressAggregator::weighted_progress(&tasks), 70.0);
    }

    #[test]
    fn all_complete_is_one_hundred() {
        let tasks = vec![task_with(100.0, 5), task_with(100.0, 20), undated_task(100.0)];
        assert_eq!(ProgressAggregator::weighted_progress(&tasks), 100.0);
    }

    #[test]
    fn weighted_mean_accepts_custom_value() {
        let tasks = vec![task_with(10.0, 1), task_with(90.0, 1)];
        let doubled = ProgressAggregator::weighted_mean(&tasks, |t| t.progress_pct * 2.0);
        assert_eq!(doubled, 100.0);
    }
}
