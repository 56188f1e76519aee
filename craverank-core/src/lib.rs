//! Core domain types for the Craverank recommendation engine.
//!
//! The crate defines the immutable catalog model (venues and their dishes),
//! the two contextual signals (mood and weather), and the scoring seams the
//! rule engine plugs into. Validation happens at construction time so the
//! scoring path never has to handle malformed data.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod context;
pub mod dish;
pub mod mood;
pub mod ranking;
pub mod scorer;
pub mod venue;
pub mod weather;

pub use catalog::{Catalog, VenueFilter};
pub use context::Context;
pub use dish::{Dish, DishError};
pub use mood::Mood;
pub use ranking::{RankedDish, RankedVenue};
pub use scorer::{MAX_SCORE, Score, Scorer, VenueScorer};
pub use venue::{OpeningHours, PriceTier, Venue, VenueError};
pub use weather::{WeatherCondition, WeatherReading};
