//! Costeo - Quotation costing and physical-progress engine
//!
//! This crate prices construction quotes through a deterministic rollup
//! cascade and reconstructs project progress over time (S-curves and
//! payment-period reports) from a task schedule.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
