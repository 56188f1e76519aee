//! The pair of contextual signals a score is computed under.

use crate::{Mood, WeatherReading};

/// The active mood and weather, passed explicitly to scoring and ranking.
///
/// Keeping the context an ordinary value rather than ambient state makes
/// every scoring call deterministic and testable in isolation.
///
/// # Examples
/// ```
/// use craverank_core::{Context, Mood, WeatherCondition, WeatherReading};
///
/// let context = Context::new(
///     Mood::Hungry,
///     WeatherReading::new(WeatherCondition::Rainy, 20.0),
/// );
/// assert_eq!(context.mood, Mood::Hungry);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    /// The declared emotional state.
    pub mood: Mood,
    /// The latest weather reading.
    pub weather: WeatherReading,
}

impl Context {
    /// Construct a context from its two signals.
    #[must_use]
    pub const fn new(mood: Mood, weather: WeatherReading) -> Self {
        Self { mood, weather }
    }
}

impl Default for Context {
    /// Neutral mood under the default weather reading.
    fn default() -> Self {
        Self::new(Mood::Neutral, WeatherReading::default())
    }
}
