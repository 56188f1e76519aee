//! Selection and sort pipelines over a scored catalog.

use craverank_core::{Catalog, Context, RankedDish, RankedVenue, Scorer, Venue, VenueScorer};
use log::debug;

/// Default number of dishes returned by [`top_dishes`].
pub const DEFAULT_DISH_LIMIT: usize = 8;

/// Default number of venues returned by [`top_venues`].
pub const DEFAULT_VENUE_LIMIT: usize = 5;

/// Score every dish in the catalog and return the best `limit`, descending.
///
/// Ties are left to the unstable sort; callers needing a deterministic order
/// among equal scores should re-sort with a secondary key such as the dish
/// identifier. An empty catalog yields an empty list.
#[must_use]
pub fn top_dishes<'a, S: Scorer>(
    catalog: &'a Catalog,
    scorer: &S,
    context: &Context,
    limit: usize,
) -> Vec<RankedDish<'a>> {
    let mut ranked: Vec<RankedDish<'a>> = catalog
        .dishes()
        .map(|(venue, dish)| RankedDish {
            venue,
            dish,
            score: scorer.score(dish, context),
        })
        .collect();
    ranked.sort_unstable_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    debug!(
        "ranked {} of {} dishes for mood {} in {}",
        ranked.len(),
        catalog.dish_count(),
        context.mood,
        context.weather.condition,
    );
    ranked
}

/// Rank venues by the mean of their dish scores blended with the venue
/// affinity bonus, returning the best `limit` in descending order.
///
/// Venues without dishes are excluded: their mean dish score is undefined,
/// and skipping them keeps the pipeline total. An empty catalog yields an
/// empty list.
#[must_use]
pub fn top_venues<'a, S: VenueScorer>(
    catalog: &'a Catalog,
    scorer: &S,
    context: &Context,
    limit: usize,
) -> Vec<RankedVenue<'a>> {
    let mut ranked: Vec<RankedVenue<'a>> = catalog
        .venues()
        .iter()
        .filter_map(|venue| {
            venue_score(venue, scorer, context).map(|score| RankedVenue { venue, score })
        })
        .collect();
    ranked.sort_unstable_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit);
    debug!(
        "ranked {} of {} venues for mood {}",
        ranked.len(),
        catalog.venues().len(),
        context.mood,
    );
    ranked
}

/// Combined venue score, or `None` for a venue with no dishes.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "venue scores average bounded integer dish scores"
)]
fn venue_score<S: VenueScorer>(venue: &Venue, scorer: &S, context: &Context) -> Option<f32> {
    if venue.dishes.is_empty() {
        return None;
    }
    let total: u32 = venue
        .dishes
        .iter()
        .map(|dish| u32::from(scorer.score(dish, context)))
        .sum();
    let mean = total as f32 / venue.dishes.len() as f32;
    let bonus = scorer.venue_bonus(venue, context) as f32;
    Some((bonus + mean) / 2.0)
}
