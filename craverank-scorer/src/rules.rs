//! The multi-factor rule evaluator behind dish and venue scores.
//!
//! Every delta is additive and independent: several rules within the same
//! pass can fire for one dish. Category and description checks are
//! case-insensitive substring matches, kept as specified for behavioural
//! parity with the catalog's authoring conventions.

use craverank_core::{
    Context, Dish, Mood, PriceTier, Score, Scorer, Venue, VenueScorer, WeatherCondition,
};

/// Every dish starts here before any contextual rule fires.
pub const BASE_SCORE: i32 = 50;

/// Spicy dishes lose this much in heat and gain it back in cold.
const SPICY_TEMPERATURE_SWING: i32 = 15;

/// The standard rule-based contextual scorer.
///
/// Deterministic and pure: the score depends only on the dish and the
/// context. See the crate docs for the full rule tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CraveScorer;

impl Scorer for CraveScorer {
    fn score(&self, dish: &Dish, context: &Context) -> Score {
        let raw = BASE_SCORE
            + mood_delta(dish, context.mood)
            + weather_delta(dish, context.weather.condition)
            + temperature_delta(dish, context.weather.temperature);
        Self::saturate(raw)
    }
}

impl VenueScorer for CraveScorer {
    fn venue_bonus(&self, venue: &Venue, context: &Context) -> i32 {
        match context.mood {
            // Fancy venues and al-fresco seating suit a celebratory mood.
            Mood::Happy => {
                weighted(venue.price_tier >= PriceTier::Premium, 20)
                    + weighted(venue.has_feature("Outdoor Seating"), 15)
            }
            // Comfort-food cuisines.
            Mood::Sad => {
                weighted(venue.has_cuisine("Italian"), 20)
                    + weighted(venue.has_cuisine("American"), 15)
            }
            // Calming cuisine and reliable choices.
            Mood::Stressed => {
                weighted(venue.has_cuisine("Japanese"), 20) + weighted(venue.rating >= 4.5, 15)
            }
            Mood::Relaxed => {
                weighted(venue.has_cuisine("Mediterranean"), 20)
                    + weighted(venue.has_feature("Indoor Seating"), 15)
            }
            Mood::Hungry => {
                weighted(venue.has_cuisine("North Indian"), 20)
                    + weighted(venue.has_cuisine("Chinese"), 15)
            }
            // Well-rated and well-reviewed is the safe default.
            Mood::Neutral => {
                weighted(venue.rating >= 4.0, 20) + weighted(venue.review_count > 1000, 15)
            }
        }
    }
}

/// Mood pass: exactly one rule set applies per call, selected by an
/// exhaustive dispatch. There is no wildcard arm, so a new mood variant
/// fails to compile until its rule set exists.
fn mood_delta(dish: &Dish, mood: Mood) -> i32 {
    match mood {
        Mood::Happy => celebration_delta(dish),
        Mood::Sad => consolation_delta(dish),
        Mood::Stressed => relief_delta(dish),
        Mood::Relaxed => lightness_delta(dish),
        Mood::Hungry => substance_delta(dish),
        Mood::Neutral => balanced_delta(dish),
    }
}

/// Happy: celebratory, social foods, with room to splurge.
fn celebration_delta(dish: &Dish) -> i32 {
    weighted(dish.is_popular, 30)
        + weighted(category_is(dish, "dessert"), 20)
        + weighted(dish.price > 300, 15)
}

/// Sad: comfort food, nothing aggressive.
fn consolation_delta(dish: &Dish) -> i32 {
    weighted(category_is(dish, "dessert"), 25)
        + weighted(!dish.is_spicy, 20)
        + weighted(mentions(dish, "chocolate"), 20)
        + weighted(mentions(dish, "cheese"), 15)
}

/// Stressed: heat as a release valve, plus healthier picks.
fn relief_delta(dish: &Dish) -> i32 {
    weighted(dish.is_spicy, 25)
        + weighted(category_is(dish, "comfort"), 20)
        + weighted(dish.is_vegetarian, 15)
}

/// Relaxed: light, fresh options that maintain the vibe.
fn lightness_delta(dish: &Dish) -> i32 {
    weighted(dish.is_vegetarian, 25)
        + weighted(!dish.is_spicy, 15)
        + weighted(mentions(dish, "fresh"), 20)
        + weighted(mentions(dish, "salad"), 15)
}

/// Hungry: substantial, filling plates.
fn substance_delta(dish: &Dish) -> i32 {
    weighted(category_is(dish, "main"), 30)
        + weighted(dish.price > 200, 20)
        + weighted(dish.is_popular, 15)
}

/// Neutral: popularity and ratings carry the day.
fn balanced_delta(dish: &Dish) -> i32 {
    weighted(dish.is_popular, 20)
        + weighted(dish.rating >= 4.5, 15)
        + weighted(dish.is_vegetarian, 10)
}

/// Weather pass. Stormy and unknown conditions contribute nothing; the
/// explicit catch-all arm keeps that behaviour when the enum grows.
fn weather_delta(dish: &Dish, condition: WeatherCondition) -> i32 {
    match condition {
        WeatherCondition::Rainy => {
            weighted(dish.is_spicy, 15) + weighted(category_is(dish, "soup"), 20)
        }
        WeatherCondition::Sunny => {
            weighted(category_is(dish, "salad"), 15) + weighted(mentions(dish, "fresh"), 15)
        }
        WeatherCondition::Cloudy => weighted(category_is(dish, "comfort"), 15),
        WeatherCondition::Snowy => {
            weighted(dish.is_spicy, 20) + weighted(category_is(dish, "hot"), 15)
        }
        WeatherCondition::Stormy | WeatherCondition::Unknown => 0,
    }
}

/// Temperature adjustment. The comfortable band `15..=30` is a no-op.
fn temperature_delta(dish: &Dish, temperature: f32) -> i32 {
    if temperature > 30.0 {
        weighted(dish.is_spicy, -SPICY_TEMPERATURE_SWING) + weighted(mentions(dish, "cold"), 15)
    } else if temperature < 15.0 {
        weighted(dish.is_spicy, SPICY_TEMPERATURE_SWING) + weighted(mentions(dish, "hot"), 15)
    } else {
        0
    }
}

const fn weighted(fired: bool, delta: i32) -> i32 {
    if fired { delta } else { 0 }
}

fn category_is(dish: &Dish, term: &str) -> bool {
    dish.category.to_lowercase().contains(term)
}

fn mentions(dish: &Dish, term: &str) -> bool {
    dish.description.to_lowercase().contains(term)
}
