//! S-curve generation - planned vs actual cumulative progress over time.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::domain::foundation::round2;
use crate::domain::schedule::{ProgressAggregator, ScheduledTask};

/// One sample of a progress curve, chart-ready.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SCurvePoint {
    pub date: NaiveDate,
    pub planned_cumulative_pct: f64,
    pub actual_cumulative_pct: f64,
}

/// Generator for planned-vs-actual progress curves over a schedule.
///
/// The planned series assumes each task advances linearly across its
/// planned window. The actual series ramps across the recorded actual
/// window up to the task's reported progress; tasks with no actual
/// dates are assumed on plan.
pub struct ScheduleCurve;

impl ScheduleCurve {
    /// Daily curve spanning the union of all planned windows.
    ///
    /// Only tasks with both planned dates participate; everything else
    /// has no position on the time axis. Both series are weighted the
    /// same way overall progress is, so the curve's end state agrees
    /// with [`ProgressAggregator::weighted_progress`] over the same
    /// tasks.
    ///
    /// # Edge Cases
    /// - No task has both planned dates: Returns an empty curve
    /// - All tasks planned on one day: single point, planned 100%
    pub fn daily(tasks: &[ScheduledTask]) -> Vec<SCurvePoint> {
        let windowed: Vec<ScheduledTask> = tasks
            .iter()
            .filter(|t| t.has_planned_window())
            .cloned()
            .collect();

        let span = windowed.iter().filter_map(|t| t.planned_start).min().zip(
            windowed.iter().filter_map(|t| t.planned_end).max(),
        );
        let Some((span_start, span_end)) = span else {
            return Vec::new();
        };

        let mut points = Vec::new();
        let mut day = span_start;
        while day <= span_end {
            let planned =
                ProgressAggregator::weighted_mean(&windowed, |t| Self::planned_pct_at(t, day));
            let actual =
                ProgressAggregator::weighted_mean(&windowed, |t| Self::actual_pct_at(t, day));
            points.push(SCurvePoint {
                date: day,
                planned_cumulative_pct: round2(planned),
                actual_cumulative_pct: round2(actual),
            });
            day = day + Duration::days(1);
        }
        points
    }

    /// Weekly curve: daily points bucketed by ISO week and averaged.
    ///
    /// Each point is dated at its week's Monday and carries the mean of
    /// that week's daily values. Preferred over [`Self::daily`] for
    /// schedules spanning more than a few months.
    pub fn weekly(tasks: &[ScheduledTask]) -> Vec<SCurvePoint> {
        let mut buckets: Vec<(NaiveDate, f64, f64, u32)> = Vec::new();
        for point in Self::daily(tasks) {
            let monday =
                point.date - Duration::days(i64::from(point.date.weekday().num_days_from_monday()));
            match buckets.last_mut() {
                Some((week, planned, actual, days)) if *week == monday => {
                    *planned += point.planned_cumulative_pct;
                    *actual += point.actual_cumulative_pct;
                    *days += 1;
                }
                _ => buckets.push((
                    monday,
                    point.planned_cumulative_pct,
                    point.actual_cumulative_pct,
                    1,
                )),
            }
        }

        buckets
            .into_iter()
            .map(|(week, planned, actual, days)| SCurvePoint {
                date: week,
                planned_cumulative_pct: round2(planned / f64::from(days)),
                actual_cumulative_pct: round2(actual / f64::from(days)),
            })
            .collect()
    }

    /// Planned completion of one task on a date: linear across the
    /// planned window, 0 before, 100 on and after the end date.
    fn planned_pct_at(task: &ScheduledTask, date: NaiveDate) -> f64 {
        match (task.planned_start, task.planned_end) {
            (Some(start), Some(end)) => Self::linear_ramp(date, start, end, 100.0),
            _ => 0.0,
        }
    }

    /// Actual completion of one task on a date.
    ///
    /// With both actual dates recorded, ramps linearly across them up
    /// to the reported progress and holds there afterwards. Without
    /// them, falls back to the planned ramp.
    fn actual_pct_at(task: &ScheduledTask, date: NaiveDate) -> f64 {
        match (task.actual_start, task.actual_end) {
            (Some(start), Some(end)) => Self::linear_ramp(date, start, end, task.progress_pct),
            _ => Self::planned_pct_at(task, date),
        }
    }

    fn linear_ramp(date: NaiveDate, start: NaiveDate, end: NaiveDate, ceiling: f64) -> f64 {
        if date >= end {
            return ceiling;
        }
        if date <= start {
            return 0.0;
        }
        let elapsed = (date - start).num_days() as f64;
        let duration = (end - start).num_days() as f64;
        elapsed / duration * ceiling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TaskId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn planned_task(name: &str, start: NaiveDate, end: NaiveDate) -> ScheduledTask {
        ScheduledTask {
            id: TaskId::new(),
            name: name.to_string(),
            planned_start: Some(start),
            planned_end: Some(end),
            actual_start: None,
            actual_end: None,
            progress_pct: 0.0,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Daily curve tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn empty_schedule_gives_empty_curve() {
        assert!(ScheduleCurve::daily(&[]).is_empty());
    }

    #[test]
    fn undated_tasks_give_empty_curve() {
        let mut t = planned_task("Sin fechas", date(2026, 1, 1), date(2026, 1, 5));
        t.planned_start = None;
        t.planned_end = None;
        assert!(ScheduleCurve::daily(&[t]).is_empty());
    }

    #[test]
    fn single_task_ramps_linearly() {
        let tasks = vec![planned_task(
            "Excavación",
            date(2026, 1, 1),
            date(2026, 1, 5),
        )];
        let curve = ScheduleCurve::daily(&tasks);

        assert_eq!(curve.len(), 5);
        let planned: Vec<f64> = curve.iter().map(|p| p.planned_cumulative_pct).collect();
        assert_eq!(planned, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn actual_defaults_to_planned_without_actual_dates() {
        let mut task = planned_task("Excavación", date(2026, 1, 1), date(2026, 1, 5));
        task.progress_pct = 80.0;
        let curve = ScheduleCurve::daily(&[task]);

        for point in &curve {
            assert_eq!(point.actual_cumulative_pct, point.planned_cumulative_pct);
        }
    }

    #[test]
    fn actual_ramp_scales_to_reported_progress() {
        let mut task = planned_task("Hormigonado", date(2026, 1, 1), date(2026, 1, 5));
        task.actual_start = Some(date(2026, 1, 1));
        task.actual_end = Some(date(2026, 1, 5));
        task.progress_pct = 50.0;

        let curve = ScheduleCurve::daily(&[task]);
        let actual: Vec<f64> = curve.iter().map(|p| p.actual_cumulative_pct).collect();
        assert_eq!(actual, vec![0.0, 12.5, 25.0, 37.5, 50.0]);
    }

    #[test]
    fn late_actual_start_shows_lag_against_plan() {
        let mut task = planned_task("Moldajes", date(2026, 1, 1), date(2026, 1, 5));
        task.actual_start = Some(date(2026, 1, 3));
        task.actual_end = Some(date(2026, 1, 7));
        task.progress_pct = 100.0;

        let curve = ScheduleCurve::daily(&[task]);
        // Span stays the planned window; actual ramp starts two days late.
        assert_eq!(curve.len(), 5);
        assert_eq!(curve[2].date, date(2026, 1, 3));
        assert_eq!(curve[2].actual_cumulative_pct, 0.0);
        assert_eq!(curve[4].actual_cumulative_pct, 50.0);
        assert_eq!(curve[4].planned_cumulative_pct, 100.0);
    }

    #[test]
    fn multi_task_curve_weights_by_duration() {
        // 1-day task complete at Jan 2, 3-day task running Jan 2-5.
        let tasks = vec![
            planned_task("Trazado", date(2026, 1, 1), date(2026, 1, 2)),
            planned_task("Excavación", date(2026, 1, 2), date(2026, 1, 5)),
        ];
        let curve = ScheduleCurve::daily(&tasks);

        assert_eq!(curve.len(), 5);
        // Jan 2: first task 100 (weight 1), second 0 (weight 3).
        assert_eq!(curve[1].planned_cumulative_pct, 25.0);
        // Jan 5: both complete.
        assert_eq!(curve[4].planned_cumulative_pct, 100.0);
    }

    #[test]
    fn planned_curve_is_monotonic_and_ends_at_100() {
        let tasks = vec![
            planned_task("A", date(2026, 2, 1), date(2026, 2, 15)),
            planned_task("B", date(2026, 2, 10), date(2026, 3, 7)),
            planned_task("C", date(2026, 2, 20), date(2026, 2, 21)),
        ];
        let curve = ScheduleCurve::daily(&tasks);

        for pair in curve.windows(2) {
            assert!(pair[1].planned_cumulative_pct >= pair[0].planned_cumulative_pct);
        }
        let last = curve.last().unwrap();
        assert!((last.planned_cumulative_pct - 100.0).abs() < 0.01);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let tasks = vec![
            planned_task("A", date(2026, 1, 1), date(2026, 1, 20)),
            planned_task("B", date(2026, 1, 10), date(2026, 2, 3)),
        ];
        assert_eq!(ScheduleCurve::daily(&tasks), ScheduleCurve::daily(&tasks));
    }

    #[test]
    fn single_day_schedule_yields_one_complete_point() {
        let tasks = vec![planned_task("Hito", date(2026, 1, 10), date(2026, 1, 10))];
        let curve = ScheduleCurve::daily(&tasks);

        assert_eq!(curve.len(), 1);
        assert_eq!(curve[0].planned_cumulative_pct, 100.0);
    }

    // ───────────────────────────────────────────────────────────────
    // Weekly curve tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn weekly_buckets_carry_the_weeks_mean() {
        // Two full ISO weeks plus a lone Monday: 2026-01-05 is a Monday.
        let tasks = vec![planned_task(
            "Obra gruesa",
            date(2026, 1, 5),
            date(2026, 1, 19),
        )];
        let weekly = ScheduleCurve::weekly(&tasks);

        assert_eq!(weekly.len(), 3);
        assert_eq!(weekly[0].date, date(2026, 1, 5));
        assert_eq!(weekly[1].date, date(2026, 1, 12));
        assert_eq!(weekly[2].date, date(2026, 1, 19));

        // Week means of the daily ramp 0, 100/14, 200/14, …
        assert_eq!(weekly[0].planned_cumulative_pct, 21.43);
        assert_eq!(weekly[1].planned_cumulative_pct, 71.43);
        assert_eq!(weekly[2].planned_cumulative_pct, 100.0);
    }

    #[test]
    fn weekly_points_date_at_monday_even_for_midweek_span() {
        // 2026-01-01 is a Thursday; its ISO week starts 2025-12-29.
        let tasks = vec![planned_task(
            "Instalación de faenas",
            date(2026, 1, 1),
            date(2026, 1, 4),
        )];
        let weekly = ScheduleCurve::weekly(&tasks);

        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].date, date(2025, 12, 29));
    }

    #[test]
    fn weekly_of_empty_schedule_is_empty() {
        assert!(ScheduleCurve::weekly(&[]).is_empty());
    }

    // ───────────────────────────────────────────────────────────────
    // Serialization tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn points_serialize_camel_case() {
        let point = SCurvePoint {
            date: date(2026, 1, 1),
            planned_cumulative_pct: 12.5,
            actual_cumulative_pct: 10.0,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["date"], "2026-01-01");
        assert_eq!(json["plannedCumulativePct"], 12.5);
        assert_eq!(json["actualCumulativePct"], 10.0);
    }
}
