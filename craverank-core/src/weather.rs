//! Ambient weather snapshots supplied by an external feed.
//!
//! The engine reads only the condition and the temperature; humidity and
//! location are carried for display collaborators.

/// Sky condition reported by the weather feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    /// Clear skies.
    Sunny,
    /// Active rainfall.
    Rainy,
    /// Overcast.
    Cloudy,
    /// Snowfall.
    Snowy,
    /// Thunderstorms; contributes no scoring bonus.
    Stormy,
    /// Feed could not determine the condition; contributes no bonus.
    Unknown,
}

impl WeatherCondition {
    /// Return the condition as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use craverank_core::WeatherCondition;
    ///
    /// assert_eq!(WeatherCondition::Rainy.as_str(), "rainy");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Rainy => "rainy",
            Self::Cloudy => "cloudy",
            Self::Snowy => "snowy",
            Self::Stormy => "stormy",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a condition string, mapping anything unrecognised to
    /// [`WeatherCondition::Unknown`].
    ///
    /// Feeds disagree on vocabulary, and an unrecognised condition must
    /// degrade to "no bonus" rather than fail, so this never errors.
    ///
    /// # Examples
    /// ```
    /// use craverank_core::WeatherCondition;
    ///
    /// assert_eq!(WeatherCondition::parse("Snowy"), WeatherCondition::Snowy);
    /// assert_eq!(WeatherCondition::parse("hail"), WeatherCondition::Unknown);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sunny" => Self::Sunny,
            "rainy" => Self::Rainy,
            "cloudy" => Self::Cloudy,
            "snowy" => Self::Snowy,
            "stormy" => Self::Stormy,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point-in-time weather observation.
///
/// # Examples
/// ```
/// use craverank_core::{WeatherCondition, WeatherReading};
///
/// let reading = WeatherReading::new(WeatherCondition::Rainy, 18.0);
/// assert_eq!(reading.condition, WeatherCondition::Rainy);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Sky condition.
    pub condition: WeatherCondition,
    /// Air temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity as a percentage.
    pub humidity: f32,
    /// Human-readable location the reading applies to.
    pub location: String,
}

impl WeatherReading {
    /// Construct a reading from the two fields the engine consumes.
    ///
    /// Humidity defaults to 60 % and the location is left empty.
    #[must_use]
    pub const fn new(condition: WeatherCondition, temperature: f32) -> Self {
        Self {
            condition,
            temperature,
            humidity: 60.0,
            location: String::new(),
        }
    }

    /// Attach a location while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Attach a humidity percentage while consuming `self`.
    #[must_use]
    pub const fn with_humidity(mut self, humidity: f32) -> Self {
        self.humidity = humidity;
        self
    }
}

impl Default for WeatherReading {
    /// A mild sunny day, used until the first feed update arrives.
    fn default() -> Self {
        Self::new(WeatherCondition::Sunny, 25.0)
    }
}
