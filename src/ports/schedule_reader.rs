use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId};
use crate::domain::schedule::ScheduledTask;

/// Read-only port supplying the task schedule of a project.
#[async_trait]
pub trait ScheduleReader: Send + Sync {
    /// Loads every scheduled task of a project.
    ///
    /// A known project with no tasks yields an empty list; an unknown
    /// project is an error.
    async fn tasks(&self, project_id: &ProjectId) -> Result<Vec<ScheduledTask>, ScheduleError>;
}

/// Errors that can occur while reading schedule data
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    #[error("Invalid task data: {0}")]
    InvalidData(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<ScheduleError> for DomainError {
    fn from(err: ScheduleError) -> Self {
        let code = match &err {
            ScheduleError::ProjectNotFound(_) => ErrorCode::ProjectNotFound,
            ScheduleError::InvalidData(_) => ErrorCode::ValidationFailed,
            ScheduleError::Storage(_) => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}
