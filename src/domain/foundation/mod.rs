//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the costing and progress domain.

mod errors;
mod ids;
mod money;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ProjectId, QuoteId, TaskId};
pub use money::{round2, round_whole, Money};
