//! The immutable, pre-loaded set of venues and their dishes.

use crate::{Dish, PriceTier, Venue};

/// Read-only collection of venues, loaded once at process start.
///
/// # Examples
/// ```
/// use craverank_core::{Catalog, PriceTier, Venue};
///
/// # fn main() -> Result<(), craverank_core::VenueError> {
/// let catalog = Catalog::new(vec![Venue::new(
///     "rest1",
///     "Punjabi Tadka",
///     PriceTier::Casual,
///     4.5,
/// )?]);
/// assert!(catalog.venue("rest1").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    venues: Vec<Venue>,
}

impl Catalog {
    /// Construct a catalog from a list of venues.
    #[must_use]
    pub const fn new(venues: Vec<Venue>) -> Self {
        Self { venues }
    }

    /// All venues, in catalog order.
    #[must_use]
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// Look up a venue by identifier.
    #[must_use]
    pub fn venue(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id == id)
    }

    /// Iterate every dish across every venue, with its owning venue.
    pub fn dishes(&self) -> impl Iterator<Item = (&Venue, &Dish)> {
        self.venues
            .iter()
            .flat_map(|venue| venue.dishes.iter().map(move |dish| (venue, dish)))
    }

    /// Total number of dishes across all venues.
    #[must_use]
    pub fn dish_count(&self) -> usize {
        self.venues.iter().map(|venue| venue.dishes.len()).sum()
    }

    /// Whether the catalog holds no venues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Return venues matching every populated criterion of `filter`.
    #[must_use]
    pub fn filter(&self, filter: &VenueFilter) -> Vec<&Venue> {
        self.venues
            .iter()
            .filter(|venue| filter.matches(venue))
            .collect()
    }
}

/// Optional venue selection criteria; empty criteria match everything.
///
/// Filtering is a browsing aid and takes no part in contextual scoring.
///
/// # Examples
/// ```
/// use craverank_core::{PriceTier, Venue, VenueFilter};
///
/// # fn main() -> Result<(), craverank_core::VenueError> {
/// let venue = Venue::new("rest1", "Wok & Roll", PriceTier::Casual, 4.2)?
///     .with_cuisines(["Chinese", "Thai"]);
/// let filter = VenueFilter::default().with_cuisines(["Thai"]);
/// assert!(filter.matches(&venue));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VenueFilter {
    /// Match venues serving any of these cuisines.
    pub cuisines: Vec<String>,
    /// Match venues in any of these price tiers.
    pub price_tiers: Vec<PriceTier>,
    /// Match venues rated at least this highly.
    pub min_rating: Option<f32>,
    /// Match venues in this area (case-insensitive).
    pub area: Option<String>,
    /// Match venues whose name, cuisine, or dish names contain this text
    /// (case-insensitive).
    pub query: Option<String>,
}

impl VenueFilter {
    /// Restrict to venues serving any of the given cuisines.
    #[must_use]
    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to venues in any of the given price tiers.
    #[must_use]
    pub fn with_price_tiers<I>(mut self, tiers: I) -> Self
    where
        I: IntoIterator<Item = PriceTier>,
    {
        self.price_tiers = tiers.into_iter().collect();
        self
    }

    /// Restrict to venues rated at least `rating`.
    #[must_use]
    pub const fn with_min_rating(mut self, rating: f32) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Restrict to venues in the named area.
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// Restrict to venues matching a free-text search.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Whether `venue` satisfies every populated criterion.
    #[must_use]
    pub fn matches(&self, venue: &Venue) -> bool {
        self.matches_cuisine(venue)
            && self.matches_tier(venue)
            && self.matches_rating(venue)
            && self.matches_area(venue)
            && self.matches_query(venue)
    }

    fn matches_cuisine(&self, venue: &Venue) -> bool {
        self.cuisines.is_empty()
            || self
                .cuisines
                .iter()
                .any(|cuisine| venue.has_cuisine(cuisine))
    }

    fn matches_tier(&self, venue: &Venue) -> bool {
        self.price_tiers.is_empty() || self.price_tiers.contains(&venue.price_tier)
    }

    fn matches_rating(&self, venue: &Venue) -> bool {
        self.min_rating.is_none_or(|floor| venue.rating >= floor)
    }

    fn matches_area(&self, venue: &Venue) -> bool {
        self.area
            .as_deref()
            .is_none_or(|area| venue.area.eq_ignore_ascii_case(area))
    }

    fn matches_query(&self, venue: &Venue) -> bool {
        self.query.as_deref().is_none_or(|query| {
            let needle = query.to_lowercase();
            venue.name.to_lowercase().contains(&needle)
                || venue
                    .cuisines
                    .iter()
                    .any(|cuisine| cuisine.to_lowercase().contains(&needle))
                || venue
                    .dishes
                    .iter()
                    .any(|dish| dish.name.to_lowercase().contains(&needle))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dish;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalog() -> Catalog {
        let tadka = Venue::new("rest1", "Punjabi Tadka", PriceTier::Casual, 4.5)
            .unwrap()
            .with_cuisines(["North Indian", "Punjabi"])
            .with_area("Andheri")
            .with_dishes(vec![
                Dish::new("dish1", "Butter Chicken", "Main Course", 350).unwrap(),
                Dish::new("dish2", "Garlic Naan", "Bread", 60).unwrap(),
            ]);
        let wok = Venue::new("rest2", "Wok & Roll", PriceTier::Premium, 4.2)
            .unwrap()
            .with_cuisines(["Chinese", "Thai"])
            .with_area("Bandra")
            .with_dishes(vec![
                Dish::new("dish3", "Schezwan Noodles", "Main Course", 220).unwrap(),
            ]);
        Catalog::new(vec![tadka, wok])
    }

    #[rstest]
    fn dish_iteration_spans_all_venues(catalog: Catalog) {
        assert_eq!(catalog.dish_count(), 3);
        let owners: Vec<&str> = catalog.dishes().map(|(venue, _)| venue.id.as_str()).collect();
        assert_eq!(owners, ["rest1", "rest1", "rest2"]);
    }

    #[rstest]
    fn venue_lookup_by_id(catalog: Catalog) {
        assert_eq!(catalog.venue("rest2").map(|v| v.name.as_str()), Some("Wok & Roll"));
        assert!(catalog.venue("nope").is_none());
    }

    #[rstest]
    fn empty_filter_matches_everything(catalog: Catalog) {
        assert_eq!(catalog.filter(&VenueFilter::default()).len(), 2);
    }

    #[rstest]
    fn cuisine_filter_narrows(catalog: Catalog) {
        let filter = VenueFilter::default().with_cuisines(["Thai"]);
        let hits = catalog.filter(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|v| v.id.as_str()), Some("rest2"));
    }

    #[rstest]
    fn query_filter_reaches_dish_names(catalog: Catalog) {
        let filter = VenueFilter::default().with_query("naan");
        let hits = catalog.filter(&filter);
        assert_eq!(hits.first().map(|v| v.id.as_str()), Some("rest1"));
    }

    #[rstest]
    #[case("andheri", 1)]
    #[case("Bandra", 1)]
    #[case("Colaba", 0)]
    fn area_filter_ignores_case(catalog: Catalog, #[case] area: &str, #[case] expected: usize) {
        let filter = VenueFilter::default().with_area(area);
        assert_eq!(catalog.filter(&filter).len(), expected);
    }

    #[rstest]
    fn rating_floor_filters(catalog: Catalog) {
        let filter = VenueFilter::default().with_min_rating(4.4);
        let hits = catalog.filter(&filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|v| v.id.as_str()), Some("rest1"));
    }
}
