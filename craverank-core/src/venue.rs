//! Venues and their menu of dishes.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::Dish;

/// Price tier on the conventional one-to-four dollar-sign scale.
///
/// The ordering follows the tier level, so comparisons such as
/// `tier >= PriceTier::Premium` read naturally.
///
/// # Examples
/// ```
/// use craverank_core::PriceTier;
///
/// assert_eq!(PriceTier::try_from(3), Ok(PriceTier::Premium));
/// assert!(PriceTier::Luxury > PriceTier::Budget);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceTier {
    /// Tier 1: cheap eats.
    Budget,
    /// Tier 2: everyday dining.
    Casual,
    /// Tier 3: upmarket.
    Premium,
    /// Tier 4: special-occasion dining.
    Luxury,
}

impl PriceTier {
    /// Return the tier as its ordinal level, 1 through 4.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Budget => 1,
            Self::Casual => 2,
            Self::Premium => 3,
            Self::Luxury => 4,
        }
    }
}

impl TryFrom<u8> for PriceTier {
    type Error = VenueError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::Budget),
            2 => Ok(Self::Casual),
            3 => Ok(Self::Premium),
            4 => Ok(Self::Luxury),
            _ => Err(VenueError::InvalidPriceTier { level }),
        }
    }
}

/// Daily opening hours, as displayed to diners.
///
/// Carried in the model for presentation collaborators; the engine does not
/// consult them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpeningHours {
    /// Opening time, e.g. "11:00".
    pub open: String,
    /// Closing time, e.g. "23:00".
    pub close: String,
}

impl OpeningHours {
    /// Construct opening hours from display strings.
    #[must_use]
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Errors returned when constructing a [`Venue`].
#[derive(Debug, Error, PartialEq)]
pub enum VenueError {
    /// The rating fell outside `[0.0, 5.0]` or was not finite.
    #[error("venue rating must be a finite value between 0.0 and 5.0, got {rating}")]
    InvalidRating {
        /// The offending rating.
        rating: f32,
    },
    /// The price tier level was outside 1 through 4.
    #[error("price tier level must be between 1 and 4, got {level}")]
    InvalidPriceTier {
        /// The offending tier level.
        level: u8,
    },
}

/// A venue offering an ordered list of dishes.
///
/// The dish list may be empty; such venues are skipped by venue ranking
/// because their mean dish score is undefined.
///
/// # Examples
/// ```
/// use craverank_core::{PriceTier, Venue};
///
/// # fn main() -> Result<(), craverank_core::VenueError> {
/// let venue = Venue::new("rest1", "Punjabi Tadka", PriceTier::Casual, 4.5)?
///     .with_cuisines(["North Indian", "Punjabi"])
///     .with_reviews(1245);
/// assert!(venue.has_cuisine("north indian"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Cuisines served, e.g. "Italian".
    pub cuisines: Vec<String>,
    /// Price tier.
    pub price_tier: PriceTier,
    /// Average diner rating in `[0.0, 5.0]`.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Geographic area, e.g. a neighbourhood name.
    pub area: String,
    /// Daily opening hours.
    pub opening_hours: OpeningHours,
    /// Feature tags such as "Outdoor Seating".
    pub features: BTreeSet<String>,
    /// Menu, exclusively owned by this venue.
    pub dishes: Vec<Dish>,
}

impl Venue {
    /// Validate and construct a [`Venue`] with an empty menu.
    ///
    /// # Errors
    /// Returns [`VenueError::InvalidRating`] when `rating` is not a finite
    /// value in `[0.0, 5.0]`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price_tier: PriceTier,
        rating: f32,
    ) -> Result<Self, VenueError> {
        if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
            return Err(VenueError::InvalidRating { rating });
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            cuisines: Vec::new(),
            price_tier,
            rating,
            review_count: 0,
            area: String::new(),
            opening_hours: OpeningHours::default(),
            features: BTreeSet::new(),
            dishes: Vec::new(),
        })
    }

    /// Replace the cuisine list while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the feature tag set.
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the menu.
    #[must_use]
    pub fn with_dishes(mut self, dishes: Vec<Dish>) -> Self {
        self.dishes = dishes;
        self
    }

    /// Set the review count.
    #[must_use]
    pub const fn with_reviews(mut self, review_count: u32) -> Self {
        self.review_count = review_count;
        self
    }

    /// Set the geographic area.
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Set the opening hours.
    #[must_use]
    pub fn with_hours(mut self, hours: OpeningHours) -> Self {
        self.opening_hours = hours;
        self
    }

    /// Whether the venue serves the named cuisine (case-insensitive).
    #[must_use]
    pub fn has_cuisine(&self, cuisine: &str) -> bool {
        self.cuisines
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(cuisine))
    }

    /// Whether the venue advertises the named feature (case-insensitive).
    #[must_use]
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(feature))
    }
}
