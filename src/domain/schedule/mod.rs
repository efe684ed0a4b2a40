//! Work schedules: task records and physical-progress aggregation.

mod aggregator;
mod task;

pub use aggregator::ProgressAggregator;
pub use task::ScheduledTask;
