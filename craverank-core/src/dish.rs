//! Menu entries owned by a venue.

use std::collections::BTreeSet;

use thiserror::Error;

/// A single menu entry.
///
/// Dishes are owned exclusively by their venue and never shared. The
/// `mood_tags` and `weather_tags` sets are carried for catalog authors and
/// display collaborators; the scoring rules derive mood and weather fit from
/// the category, flags, and description instead.
///
/// # Examples
/// ```
/// use craverank_core::Dish;
///
/// # fn main() -> Result<(), craverank_core::DishError> {
/// let dish = Dish::new("dish1", "Butter Chicken", "Main Course", 350)?
///     .popular()
///     .with_description("Tender chicken in a rich tomato and butter gravy");
/// assert!(dish.is_popular);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text description; empty means absent.
    pub description: String,
    /// Price in whole currency units. Always positive.
    pub price: u32,
    /// Free-text category, e.g. "Main Course" or "Dessert".
    pub category: String,
    /// Suitable for vegetarians.
    pub is_vegetarian: bool,
    /// Noticeably spicy.
    pub is_spicy: bool,
    /// A house favourite.
    pub is_popular: bool,
    /// Average diner rating in `[0.0, 5.0]`; `0.0` when unrated.
    pub rating: f32,
    /// Moods the catalog author associates with the dish. Unread by scoring.
    pub mood_tags: BTreeSet<String>,
    /// Weather conditions the author associates with the dish. Unread by
    /// scoring.
    pub weather_tags: BTreeSet<String>,
}

/// Errors returned by [`Dish::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DishError {
    /// The price was zero.
    #[error("dish price must be positive")]
    NonPositivePrice,
}

impl Dish {
    /// Validate and construct a [`Dish`] with all flags unset.
    ///
    /// # Errors
    /// Returns [`DishError::NonPositivePrice`] when `price` is zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: u32,
    ) -> Result<Self, DishError> {
        if price == 0 {
            return Err(DishError::NonPositivePrice);
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            category: category.into(),
            is_vegetarian: false,
            is_spicy: false,
            is_popular: false,
            rating: 0.0,
            mood_tags: BTreeSet::new(),
            weather_tags: BTreeSet::new(),
        })
    }

    /// Attach a description while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the diner rating, clamped into `[0.0, 5.0]`.
    #[must_use]
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = if rating.is_finite() {
            rating.clamp(0.0, 5.0)
        } else {
            0.0
        };
        self
    }

    /// Mark the dish vegetarian.
    #[must_use]
    pub const fn vegetarian(mut self) -> Self {
        self.is_vegetarian = true;
        self
    }

    /// Mark the dish spicy.
    #[must_use]
    pub const fn spicy(mut self) -> Self {
        self.is_spicy = true;
        self
    }

    /// Mark the dish popular.
    #[must_use]
    pub const fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    /// Replace the mood tag set.
    #[must_use]
    pub fn with_mood_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mood_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the weather tag set.
    #[must_use]
    pub fn with_weather_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weather_tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn zero_price_is_rejected() {
        let result = Dish::new("d1", "Water", "Drinks", 0);
        assert_eq!(result, Err(DishError::NonPositivePrice));
    }

    #[test]
    fn flags_default_to_false() {
        let dish = Dish::new("d1", "Plain Rice", "Sides", 90).unwrap();
        assert!(!dish.is_vegetarian && !dish.is_spicy && !dish.is_popular);
        assert!(dish.description.is_empty());
    }

    #[rstest]
    #[case(4.2, 4.2)]
    #[case(7.0, 5.0)]
    #[case(-1.0, 0.0)]
    #[case(f32::NAN, 0.0)]
    fn rating_is_clamped(#[case] input: f32, #[case] expected: f32) {
        let dish = Dish::new("d1", "Dal", "Main Course", 150)
            .unwrap()
            .with_rating(input);
        assert!(dish.rating.to_bits() == expected.to_bits());
    }

    #[test]
    fn tags_are_stored_but_distinct_from_flags() {
        let dish = Dish::new("d1", "Ramen", "Main Course", 320)
            .unwrap()
            .with_mood_tags(["sad", "stressed"])
            .with_weather_tags(["rainy"]);
        assert!(dish.mood_tags.contains("sad"));
        assert!(dish.weather_tags.contains("rainy"));
        assert!(!dish.is_spicy);
    }
}
