//! GeneratePaymentReportHandler - Query handler for payment certificates.
//!
//! Loads a project's schedule, validates it at the boundary, and runs
//! the pure period reconstructor over the requested window.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::foundation::{DomainError, ProjectId, ValidationError};
use crate::domain::reporting::{PaymentPeriodReconstructor, PaymentPeriodReport};
use crate::ports::ScheduleReader;

/// Query to generate one payment-period report for a project.
#[derive(Debug, Clone)]
pub struct GeneratePaymentReportQuery {
    /// The project whose schedule backs the certificate.
    pub project_id: ProjectId,
    /// First day of the reporting period, inclusive.
    pub period_start: NaiveDate,
    /// Last day of the reporting period, inclusive.
    pub period_end: NaiveDate,
    /// Free-form notes printed on the certificate.
    pub notes: String,
}

/// Result of a successful report query.
pub type GeneratePaymentReportResult = PaymentPeriodReport;

/// Handler for generating payment-period reports.
pub struct GeneratePaymentReportHandler {
    schedule_reader: Arc<dyn ScheduleReader>,
}

impl GeneratePaymentReportHandler {
    pub fn new(schedule_reader: Arc<dyn ScheduleReader>) -> Self {
        Self { schedule_reader }
    }

    pub async fn handle(
        &self,
        query: GeneratePaymentReportQuery,
    ) -> Result<GeneratePaymentReportResult, DomainError> {
        // The reconstructor itself tolerates an inverted window; reject
        // it here so callers get an error instead of an empty report.
        if query.period_start > query.period_end {
            return Err(ValidationError::inverted_dates(
                "period",
                query.period_start,
                query.period_end,
            )
            .into());
        }

        let tasks = self.schedule_reader.tasks(&query.project_id).await?;
        for task in &tasks {
            task.validate()?;
        }

        let report = PaymentPeriodReconstructor::generate(
            &tasks,
            query.period_start,
            query.period_end,
            query.notes,
        );

        debug!(
            project_id = %query.project_id,
            period_start = %report.period_start,
            period_end = %report.period_end,
            progress_during_period = report.progress_during_period,
            "Generated payment-period report"
        );

        Ok(report)
    }
}
