//! A small built-in catalog for demos and tests.

use craverank_core::Catalog;

use crate::{CatalogError, parse_catalog};

/// Embedded demo catalog: five Mumbai venues with typical menus.
const SAMPLE_JSON: &str = include_str!("sample.json");

/// Parse the embedded sample catalog.
///
/// The data goes through the same validation path as an external catalog
/// file, so it doubles as a fixture for the ingestion layer.
///
/// # Errors
/// Returns [`CatalogError`] if the embedded document ever drifts out of
/// sync with the domain invariants.
pub fn sample_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog(SAMPLE_JSON)
}
