//! Contextual scoring rules and ranking pipelines for Craverank.
//!
//! The crate provides two complementary capabilities:
//! - **Rule-based dish scoring**: [`CraveScorer`] starts every dish at a
//!   fixed base value and layers three additive passes on top — a
//!   mood-specific rule set, a weather-condition rule set, and a temperature
//!   adjustment — before saturating into `0..=100`. It implements the
//!   [`Scorer`](craverank_core::Scorer) trait so callers can plug it into the
//!   ranking pipelines or swap in their own rules.
//! - **Ranking aggregation**: [`top_dishes`] flattens the catalog into one
//!   scored sequence, and [`top_venues`] folds per-venue dish means together
//!   with the mood-specific venue affinity bonus. Both recompute wholesale on
//!   demand; nothing is cached here.
//!
//! # Examples
//!
//! ```
//! use craverank_core::{Catalog, Context, Dish, Mood, PriceTier, Venue};
//! use craverank_scorer::{CraveScorer, top_dishes};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let venue = Venue::new("rest1", "Sugar Rush", PriceTier::Casual, 4.4)?.with_dishes(vec![
//!     Dish::new("dish1", "Chocolate Lava Cake", "Dessert", 250)?
//!         .with_description("rich chocolate cake"),
//! ]);
//! let catalog = Catalog::new(vec![venue]);
//! let context = Context {
//!     mood: Mood::Sad,
//!     ..Context::default()
//! };
//! let ranked = top_dishes(&catalog, &CraveScorer, &context, 8);
//! assert_eq!(ranked.first().map(|entry| entry.dish.id.as_str()), Some("dish1"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod rank;
mod rules;

pub use rank::{DEFAULT_DISH_LIMIT, DEFAULT_VENUE_LIMIT, top_dishes, top_venues};
pub use rules::{BASE_SCORE, CraveScorer};

#[cfg(test)]
mod tests;
