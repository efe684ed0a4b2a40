//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Read Ports
//!
//! - `QuoteReader` - Supplies the cost input of a quote
//! - `ScheduleReader` - Supplies the task schedule of a project
//!
//! ## Repository Ports
//!
//! - `CatalogStore` - Reference-rate catalog for default prices

mod catalog_store;
mod quote_reader;
mod schedule_reader;

pub use catalog_store::{CatalogError, CatalogRate, CatalogStore};
pub use quote_reader::{QuoteError, QuoteReader};
pub use schedule_reader::{ScheduleError, ScheduleReader};
