//! The context state machine and recommendation refresh pipeline.
//!
//! A [`RecommendationSession`] owns the catalog, the active context, and the
//! two published ranked lists. Every context mutation invalidates both lists
//! and recomputes them synchronously; there is no debouncing or coalescing,
//! which is acceptable while catalogs stay small and bounded.

use chrono::{DateTime, Utc};
use craverank_core::{Catalog, Context, Dish, Mood, Score, Scorer, WeatherReading};
use craverank_scorer::{
    CraveScorer, DEFAULT_DISH_LIMIT, DEFAULT_VENUE_LIMIT, top_dishes, top_venues,
};
use log::debug;

/// One entry of the append-only mood history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodEvent {
    /// The mood that became active.
    pub mood: Mood,
    /// When the transition happened.
    pub at: DateTime<Utc>,
}

/// A published dish recommendation.
///
/// Entries are owned snapshots so presentation collaborators need no borrow
/// into the catalog; the venue fields are the display back-reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendedDish {
    /// Identifier of the recommended dish.
    pub dish_id: String,
    /// Display name of the dish.
    pub dish_name: String,
    /// Identifier of the owning venue.
    pub venue_id: String,
    /// Display name of the owning venue.
    pub venue_name: String,
    /// Contextual affinity score.
    pub score: Score,
}

/// A published venue recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedVenue {
    /// Identifier of the recommended venue.
    pub venue_id: String,
    /// Display name of the venue.
    pub name: String,
    /// Combined venue score.
    pub score: f32,
}

/// How many entries each published list keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Dish list size.
    pub dishes: usize,
    /// Venue list size.
    pub venues: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            dishes: DEFAULT_DISH_LIMIT,
            venues: DEFAULT_VENUE_LIMIT,
        }
    }
}

/// Single-writer session tying context changes to recomputed rankings.
///
/// The session starts in a neutral mood under the default weather reading
/// and publishes its first rankings immediately. Mutations follow
/// last-write-wins semantics: whichever collaborator called
/// [`set_mood`](Self::set_mood) or [`set_weather`](Self::set_weather) last
/// determines the active context.
///
/// # Examples
///
/// ```
/// use craverank::{Mood, RecommendationSession, WeatherCondition, WeatherReading, sample_catalog};
///
/// # fn main() -> Result<(), craverank::CatalogError> {
/// let mut session = RecommendationSession::new(sample_catalog()?);
/// session.set_weather(WeatherReading::new(WeatherCondition::Rainy, 18.0));
/// session.set_mood(Mood::Sad);
/// let top = session.top_dishes().first().expect("sample catalog is non-empty");
/// assert!(top.score >= 50);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecommendationSession {
    catalog: Catalog,
    scorer: CraveScorer,
    context: Context,
    limits: SessionLimits,
    history: Vec<MoodEvent>,
    dishes: Vec<RecommendedDish>,
    venues: Vec<RecommendedVenue>,
}

impl RecommendationSession {
    /// Start a session over `catalog` with default list sizes.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_limits(catalog, SessionLimits::default())
    }

    /// Start a session with custom list sizes.
    #[must_use]
    pub fn with_limits(catalog: Catalog, limits: SessionLimits) -> Self {
        let context = Context::default();
        let mut session = Self {
            catalog,
            scorer: CraveScorer,
            history: vec![MoodEvent {
                mood: context.mood,
                at: Utc::now(),
            }],
            context,
            limits,
            dishes: Vec::new(),
            venues: Vec::new(),
        };
        session.refresh();
        session
    }

    /// The catalog this session ranks.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active context.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Overwrite the active mood, record the transition, and republish both
    /// ranked lists.
    pub fn set_mood(&mut self, mood: Mood) {
        self.context.mood = mood;
        self.history.push(MoodEvent {
            mood,
            at: Utc::now(),
        });
        self.refresh();
    }

    /// Overwrite the active weather reading and republish both ranked lists.
    ///
    /// Calling this twice with the same reading is safe and yields the same
    /// published lists.
    pub fn set_weather(&mut self, reading: WeatherReading) {
        self.context.weather = reading;
        self.refresh();
    }

    /// Infer a mood from free-form text and, on a match, make it active.
    ///
    /// Returns the inferred mood, or `None` when no keyword family matched,
    /// in which case the context is left untouched.
    pub fn apply_mood_hint(&mut self, text: &str) -> Option<Mood> {
        let mood = Mood::from_hint(text)?;
        self.set_mood(mood);
        Some(mood)
    }

    /// Score a dish under the current context.
    #[must_use]
    pub fn score(&self, dish: &Dish) -> Score {
        self.scorer.score(dish, &self.context)
    }

    /// The published dish recommendations, best first.
    #[must_use]
    pub fn top_dishes(&self) -> &[RecommendedDish] {
        &self.dishes
    }

    /// The published venue recommendations, best first.
    #[must_use]
    pub fn top_venues(&self) -> &[RecommendedVenue] {
        &self.venues
    }

    /// The append-only mood history, oldest first.
    ///
    /// Seeded with the initial mood; read by analytics collaborators, not by
    /// the engine.
    #[must_use]
    pub fn mood_history(&self) -> &[MoodEvent] {
        &self.history
    }

    /// Recompute and publish both ranked lists for the current context.
    fn refresh(&mut self) {
        self.dishes = top_dishes(&self.catalog, &self.scorer, &self.context, self.limits.dishes)
            .iter()
            .map(|entry| RecommendedDish {
                dish_id: entry.dish.id.clone(),
                dish_name: entry.dish.name.clone(),
                venue_id: entry.venue.id.clone(),
                venue_name: entry.venue.name.clone(),
                score: entry.score,
            })
            .collect();
        self.venues = top_venues(&self.catalog, &self.scorer, &self.context, self.limits.venues)
            .iter()
            .map(|entry| RecommendedVenue {
                venue_id: entry.venue.id.clone(),
                name: entry.venue.name.clone(),
                score: entry.score,
            })
            .collect();
        debug!(
            "published {} dish and {} venue recommendations for mood {}",
            self.dishes.len(),
            self.venues.len(),
            self.context.mood,
        );
    }
}
