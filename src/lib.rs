//! Facade crate for the Craverank recommendation engine.
//!
//! Re-exports the core domain types, the rule-based scorer, and the catalog
//! ingestion helpers, and provides the [`RecommendationSession`] state
//! machine that ties context changes to recomputed rankings.
//!
//! # Examples
//!
//! ```
//! use craverank::{Mood, RecommendationSession, sample_catalog};
//!
//! # fn main() -> Result<(), craverank::CatalogError> {
//! let mut session = RecommendationSession::new(sample_catalog()?);
//! session.set_mood(Mood::Hungry);
//! assert!(!session.top_dishes().is_empty());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod session;

pub use craverank_core::{
    Catalog, Context, Dish, DishError, MAX_SCORE, Mood, OpeningHours, PriceTier, RankedDish,
    RankedVenue, Score, Scorer, Venue, VenueError, VenueFilter, VenueScorer, WeatherCondition,
    WeatherReading,
};
pub use craverank_data::{
    CatalogError, SimulatedWeatherFeed, load_catalog, parse_catalog, sample_catalog,
};
pub use craverank_scorer::{
    BASE_SCORE, CraveScorer, DEFAULT_DISH_LIMIT, DEFAULT_VENUE_LIMIT, top_dishes, top_venues,
};
pub use session::{
    MoodEvent, RecommendationSession, RecommendedDish, RecommendedVenue, SessionLimits,
};
