//! Catalog ingestion and collaborator stand-ins for Craverank.
//!
//! Responsibilities:
//! - Deserialize catalog files into validated domain types.
//! - Provide a built-in sample catalog for demos and tests.
//! - Simulate the external weather feed the engine consumes.
//!
//! Boundaries:
//! - Domain rules live in `craverank-core`; this crate only adapts
//!   serialized records into those types and surfaces validation failures.

#![forbid(unsafe_code)]

mod error;
mod records;
mod sample;
mod weather;

pub use error::CatalogError;
pub use records::{load_catalog, parse_catalog};
pub use sample::sample_catalog;
pub use weather::SimulatedWeatherFeed;
