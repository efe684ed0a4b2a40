//! In-memory schedule reader implementation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::ProjectId;
use crate::domain::schedule::ScheduledTask;
use crate::ports::{ScheduleError, ScheduleReader};

/// In-memory [`ScheduleReader`] backed by a `RwLock<HashMap>`.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
pub struct InMemoryScheduleReader {
    schedules: RwLock<HashMap<ProjectId, Vec<ScheduledTask>>>,
}

impl InMemoryScheduleReader {
    /// Creates an empty reader.
    pub fn new() -> Self {
        Self {
            schedules: RwLock::new(HashMap::new()),
        }
    }

    /// Stores a project's task list, replacing any previous one.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn insert(&self, project_id: ProjectId, tasks: Vec<ScheduledTask>) {
        self.schedules
            .write()
            .expect("InMemoryScheduleReader: schedules write lock poisoned")
            .insert(project_id, tasks);
    }
}

impl Default for InMemoryScheduleReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleReader for InMemoryScheduleReader {
    async fn tasks(&self, project_id: &ProjectId) -> Result<Vec<ScheduledTask>, ScheduleError> {
        let schedules = self
            .schedules
            .read()
            .expect("InMemoryScheduleReader: schedules lock poisoned");
        schedules
            .get(project_id)
            .cloned()
            .ok_or(ScheduleError::ProjectNotFound(*project_id))
    }
}
