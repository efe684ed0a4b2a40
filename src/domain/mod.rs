//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (money, rounding, IDs, errors)
//! - `costing` - Quote cost input model and the price rollup engine
//! - `schedule` - Task schedule model and physical-progress aggregation
//! - `reporting` - Pure domain services for S-curves and payment periods

pub mod costing;
pub mod foundation;
pub mod reporting;
pub mod schedule;
