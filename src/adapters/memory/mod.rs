//! In-memory adapters for every port.
//!
//! Deterministic, dependency-free implementations used by the test
//! suite and by embedding callers that keep their data in process.

mod catalog;
mod quotes;
mod schedule;

pub use catalog::InMemoryCatalogStore;
pub use quotes::InMemoryQuoteReader;
pub use schedule::InMemoryScheduleReader;
