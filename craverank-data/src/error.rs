//! Errors raised while loading a catalog.

use camino::Utf8PathBuf;
use craverank_core::{DishError, VenueError};
use thiserror::Error;

/// Errors returned by the catalog loading functions.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    #[error("failed to read catalog file at {path}")]
    Read {
        /// Requested catalog path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The catalog document was not valid JSON.
    #[error("failed to parse catalog JSON")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A venue record failed domain validation.
    #[error("invalid venue record '{id}'")]
    InvalidVenue {
        /// Identifier of the offending venue.
        id: String,
        /// Underlying validation failure.
        #[source]
        source: VenueError,
    },
    /// A dish record failed domain validation.
    #[error("invalid dish record '{id}'")]
    InvalidDish {
        /// Identifier of the offending dish.
        id: String,
        /// Underlying validation failure.
        #[source]
        source: DishError,
    },
}
