//! Ranked-list entry types produced by the aggregation pipelines.

use crate::{Dish, Score, Venue};

/// One entry of a dish ranking: the dish, its owning venue, and its score.
///
/// The venue reference exists for display purposes only; it plays no part in
/// the dish's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedDish<'a> {
    /// The venue offering the dish.
    pub venue: &'a Venue,
    /// The scored dish.
    pub dish: &'a Dish,
    /// Contextual affinity score.
    pub score: Score,
}

/// One entry of a venue ranking.
///
/// Venue scores average the venue affinity bonus with the mean dish score,
/// so unlike dish scores they are fractional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedVenue<'a> {
    /// The ranked venue.
    pub venue: &'a Venue,
    /// Combined venue score.
    pub score: f32,
}
