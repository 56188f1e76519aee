//! A stand-in for the external weather feed.
//!
//! Real deployments resolve weather from a remote API; this simulation
//! produces plausible readings so the refresh pipeline can be exercised
//! end to end without network access.

use craverank_core::{WeatherCondition, WeatherReading};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// The conditions a feed can actually report; `Unknown` is reserved for
/// parse failures and never simulated.
const REPORTABLE: [WeatherCondition; 5] = [
    WeatherCondition::Sunny,
    WeatherCondition::Rainy,
    WeatherCondition::Cloudy,
    WeatherCondition::Snowy,
    WeatherCondition::Stormy,
];

/// Generates random plausible weather readings for a fixed location.
///
/// # Examples
/// ```
/// use craverank_data::SimulatedWeatherFeed;
///
/// let feed = SimulatedWeatherFeed::new("Mumbai");
/// let reading = feed.reading(&mut rand::thread_rng());
/// assert_eq!(reading.location, "Mumbai");
/// assert!((5.0..=40.0).contains(&reading.temperature));
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedWeatherFeed {
    location: String,
}

impl SimulatedWeatherFeed {
    /// Create a feed reporting for the named location.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Produce one simulated reading.
    ///
    /// Temperature lands in 5–40 °C and humidity in 30–90 %, matching the
    /// envelope of the feed this simulation replaces.
    pub fn reading<R: Rng>(&self, rng: &mut R) -> WeatherReading {
        let condition = REPORTABLE
            .choose(rng)
            .copied()
            .unwrap_or(WeatherCondition::Unknown);
        let reading = WeatherReading::new(condition, rng.gen_range(5.0..=40.0))
            .with_humidity(rng.gen_range(30.0..=90.0))
            .with_location(self.location.clone());
        debug!(
            "simulated weather for {}: {} at {:.1}C",
            reading.location, reading.condition, reading.temperature,
        );
        reading
    }
}
