//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory implementations of every port

pub mod memory;

pub use memory::{InMemoryCatalogStore, InMemoryQuoteReader, InMemoryScheduleReader};
