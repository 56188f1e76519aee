//! The declared emotional state driving recommendation bias.
//!
//! The enum offers compile-time safety for the mood rule dispatch: adding a
//! variant forces every rule set to be revisited.
//!
//! # Examples
//! ```
//! use craverank_core::Mood;
//!
//! assert_eq!(Mood::Hungry.as_str(), "hungry");
//! assert_eq!(Mood::Sad.to_string(), "sad");
//! ```

/// A user-declared emotional state. Exactly one value is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    /// Celebratory, social frame of mind.
    Happy,
    /// Low mood; comfort food territory.
    Sad,
    /// Tense or anxious.
    Stressed,
    /// Calm and unhurried.
    Relaxed,
    /// Wants something substantial, now.
    Hungry,
    /// No particular bias.
    Neutral,
}

/// Keyword families for inferring a mood from free-form text.
///
/// Scan order is fixed; the first family with a matching keyword wins.
const HINT_FAMILIES: &[(&[&str], Mood)] = &[
    (&["sad", "depressed", "down"], Mood::Sad),
    (&["happy", "excited", "joy"], Mood::Happy),
    (&["stressed", "anxious", "worried"], Mood::Stressed),
    (&["relaxed", "calm", "peaceful"], Mood::Relaxed),
    (&["hungry", "starving"], Mood::Hungry),
];

impl Mood {
    /// Return the mood as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use craverank_core::Mood;
    ///
    /// assert_eq!(Mood::Relaxed.as_str(), "relaxed");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Stressed => "stressed",
            Self::Relaxed => "relaxed",
            Self::Hungry => "hungry",
            Self::Neutral => "neutral",
        }
    }

    /// Infer a mood from a free-text hint by scanning keyword families.
    ///
    /// Matching is a case-insensitive substring check. Families are scanned
    /// in a fixed order and the first match wins; `None` means no family
    /// matched and the caller should leave the current mood unchanged.
    ///
    /// # Examples
    /// ```
    /// use craverank_core::Mood;
    ///
    /// assert_eq!(Mood::from_hint("feeling a bit down today"), Some(Mood::Sad));
    /// assert_eq!(Mood::from_hint("what's on the menu?"), None);
    /// ```
    #[must_use]
    pub fn from_hint(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        HINT_FAMILIES.iter().find_map(|&(keywords, mood)| {
            keywords
                .iter()
                .any(|keyword| lowered.contains(keyword))
                .then_some(mood)
        })
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Self::Happy),
            "sad" => Ok(Self::Sad),
            "stressed" => Ok(Self::Stressed),
            "relaxed" => Ok(Self::Relaxed),
            "hungry" => Ok(Self::Hungry),
            "neutral" => Ok(Self::Neutral),
            _ => Err(format!("unknown mood '{s}'")),
        }
    }
}
