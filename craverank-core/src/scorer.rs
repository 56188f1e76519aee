//! Scoring seams for dishes and venues.
//!
//! The `Scorer` trait assigns a contextual affinity score to a
//! [`Dish`](crate::Dish) given the active [`Context`](crate::Context);
//! `VenueScorer` adds the venue-level affinity bonus used by venue ranking.

use crate::{Context, Dish, Venue};

/// A contextual affinity score in `[0, 100]`.
pub type Score = u8;

/// Upper bound of the score range; raw values saturate here.
pub const MAX_SCORE: Score = 100;

/// Calculate a contextual affinity score for a dish.
///
/// Higher scores indicate a better fit between the dish and the caller's
/// context. Implementations must be thread-safe (`Send` + `Sync`) so scorers
/// can be shared across threads. The method is infallible and must be
/// deterministic: identical inputs yield identical output, with no hidden
/// state beyond the two arguments.
///
/// Use [`Scorer::saturate`] to clamp an accumulated raw value into range.
///
/// # Examples
///
/// ```rust
/// use craverank_core::{Context, Dish, Score, Scorer};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, _dish: &Dish, _context: &Context) -> Score {
///         50
///     }
/// }
///
/// # fn main() -> Result<(), craverank_core::DishError> {
/// let dish = Dish::new("d1", "Dal Makhani", "Main Course", 250)?;
/// assert_eq!(FlatScorer.score(&dish, &Context::default()), 50);
/// # Ok(())
/// # }
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `dish` under `context`.
    fn score(&self, dish: &Dish, context: &Context) -> Score;

    /// Saturate a raw accumulated value into `0..=MAX_SCORE`.
    ///
    /// Values below zero clamp to 0 and values above the maximum clamp to
    /// [`MAX_SCORE`]; nothing wraps and nothing is rejected.
    #[must_use]
    fn saturate(raw: i32) -> Score {
        Score::try_from(raw.clamp(0, i32::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
    }
}

/// Venue-level scoring used when ranking venues.
///
/// The bonus is independent of the venue's dish scores; ranking combines the
/// two. Raw bonuses are plain deltas and are not clamped.
pub trait VenueScorer: Scorer {
    /// Return the mood-specific affinity bonus for `venue` under `context`.
    fn venue_bonus(&self, venue: &Venue, context: &Context) -> i32;
}
