//! Schedule reporting configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Knobs for the progress-curve handlers.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Planned span in days beyond which auto-resolution curves switch
    /// from daily to weekly buckets
    #[serde(default = "default_weekly_threshold_days")]
    pub weekly_threshold_days: i64,
}

impl ScheduleConfig {
    /// Validate schedule configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.weekly_threshold_days < 1 {
            return Err(ValidationError::InvalidWeeklyThreshold);
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            weekly_threshold_days: default_weekly_threshold_days(),
        }
    }
}

fn default_weekly_threshold_days() -> i64 {
    365
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_defaults() {
        let config = ScheduleConfig::default();
        assert_eq!(config.weekly_threshold_days, 365);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_threshold() {
        let config = ScheduleConfig {
            weekly_threshold_days: 0,
        };
        assert!(config.validate().is_err());
    }
}
