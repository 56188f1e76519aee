//! Serialized catalog records and their conversion into domain types.
//!
//! The record structs mirror the JSON document shape; domain validation
//! happens during conversion so a loaded [`Catalog`] always satisfies the
//! core invariants.

use camino::Utf8Path;
use craverank_core::{Catalog, Dish, OpeningHours, PriceTier, Venue};
use log::info;
use serde::Deserialize;

use crate::CatalogError;

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    venues: Vec<VenueRecord>,
}

#[derive(Debug, Deserialize)]
struct VenueRecord {
    id: String,
    name: String,
    #[serde(default)]
    cuisines: Vec<String>,
    price_tier: u8,
    rating: f32,
    #[serde(default)]
    review_count: u32,
    #[serde(default)]
    area: String,
    #[serde(default)]
    opening_hours: Option<HoursRecord>,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    dishes: Vec<DishRecord>,
}

#[derive(Debug, Deserialize)]
struct HoursRecord {
    open: String,
    close: String,
}

#[derive(Debug, Deserialize)]
struct DishRecord {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    price: u32,
    category: String,
    #[serde(default)]
    vegetarian: bool,
    #[serde(default)]
    spicy: bool,
    #[serde(default)]
    popular: bool,
    #[serde(default)]
    rating: f32,
    #[serde(default)]
    mood_tags: Vec<String>,
    #[serde(default)]
    weather_tags: Vec<String>,
}

/// Load and validate a catalog from a JSON file.
///
/// # Errors
/// Returns [`CatalogError`] when the file cannot be read, the JSON is
/// malformed, or a record violates a domain invariant.
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, CatalogError> {
    let text = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
        CatalogError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let catalog = parse_catalog(&text)?;
    info!(
        "loaded catalog from {path}: {} venues, {} dishes",
        catalog.venues().len(),
        catalog.dish_count(),
    );
    Ok(catalog)
}

/// Parse and validate a catalog from a JSON document held in memory.
///
/// # Errors
/// Returns [`CatalogError`] when the JSON is malformed or a record violates
/// a domain invariant.
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let record: CatalogRecord =
        serde_json::from_str(text).map_err(|source| CatalogError::Parse { source })?;
    let venues = record
        .venues
        .into_iter()
        .map(venue_from_record)
        .collect::<Result<Vec<Venue>, CatalogError>>()?;
    Ok(Catalog::new(venues))
}

fn venue_from_record(record: VenueRecord) -> Result<Venue, CatalogError> {
    let tier = PriceTier::try_from(record.price_tier).map_err(|source| {
        CatalogError::InvalidVenue {
            id: record.id.clone(),
            source,
        }
    })?;
    let mut venue = Venue::new(record.id.clone(), record.name, tier, record.rating)
        .map_err(|source| CatalogError::InvalidVenue {
            id: record.id,
            source,
        })?
        .with_cuisines(record.cuisines)
        .with_features(record.features)
        .with_reviews(record.review_count)
        .with_area(record.area);
    if let Some(hours) = record.opening_hours {
        venue = venue.with_hours(OpeningHours::new(hours.open, hours.close));
    }
    let dishes = record
        .dishes
        .into_iter()
        .map(dish_from_record)
        .collect::<Result<Vec<Dish>, CatalogError>>()?;
    Ok(venue.with_dishes(dishes))
}

fn dish_from_record(record: DishRecord) -> Result<Dish, CatalogError> {
    let dish = Dish::new(record.id.clone(), record.name, record.category, record.price)
        .map_err(|source| CatalogError::InvalidDish {
            id: record.id,
            source,
        })?
        .with_description(record.description)
        .with_rating(record.rating)
        .with_mood_tags(record.mood_tags)
        .with_weather_tags(record.weather_tags);
    let dish = if record.vegetarian { dish.vegetarian() } else { dish };
    let dish = if record.spicy { dish.spicy() } else { dish };
    let dish = if record.popular { dish.popular() } else { dish };
    Ok(dish)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use craverank_core::Mood;
    use rstest::rstest;
    use tempfile::TempDir;

    const MINIMAL_CATALOG: &str = r#"{
        "venues": [
            {
                "id": "rest1",
                "name": "Punjabi Tadka",
                "cuisines": ["North Indian"],
                "price_tier": 2,
                "rating": 4.5,
                "review_count": 1245,
                "area": "Andheri",
                "opening_hours": {"open": "11:00", "close": "23:00"},
                "features": ["Outdoor Seating"],
                "dishes": [
                    {
                        "id": "dish1",
                        "name": "Butter Chicken",
                        "description": "rich tomato and butter gravy",
                        "price": 350,
                        "category": "Main Course",
                        "popular": true,
                        "mood_tags": ["happy", "hungry"],
                        "weather_tags": ["rainy"]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn parses_a_complete_venue() {
        let catalog = parse_catalog(MINIMAL_CATALOG).expect("valid catalog");
        let venue = catalog.venue("rest1").expect("venue present");
        assert_eq!(venue.price_tier, PriceTier::Casual);
        assert_eq!(venue.opening_hours.close, "23:00");
        let dish = venue.dishes.first().expect("dish present");
        assert!(dish.is_popular && !dish.is_spicy);
        assert!(dish.mood_tags.contains(Mood::Hungry.as_str()));
    }

    #[test]
    fn optional_fields_default() {
        let catalog = parse_catalog(
            r#"{"venues": [{"id": "v", "name": "Bare", "price_tier": 1, "rating": 3.0}]}"#,
        )
        .expect("valid catalog");
        let venue = catalog.venue("v").expect("venue present");
        assert!(venue.dishes.is_empty());
        assert!(venue.area.is_empty());
    }

    #[rstest]
    #[case(r#"{"venues": [{"id": "v", "name": "Bad", "price_tier": 9, "rating": 3.0}]}"#)]
    #[case(r#"{"venues": [{"id": "v", "name": "Bad", "price_tier": 2, "rating": 9.0}]}"#)]
    fn invalid_venue_records_are_rejected(#[case] text: &str) {
        assert!(matches!(
            parse_catalog(text),
            Err(CatalogError::InvalidVenue { .. })
        ));
    }

    #[test]
    fn zero_priced_dish_is_rejected() {
        let text = r#"{"venues": [{"id": "v", "name": "Bad", "price_tier": 2, "rating": 3.0,
            "dishes": [{"id": "d", "name": "Free", "price": 0, "category": "Main"}]}]}"#;
        let err = parse_catalog(text).expect_err("zero price should fail");
        assert!(matches!(err, CatalogError::InvalidDish { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            parse_catalog("{"),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = TempDir::new().expect("tempdir");
        let path =
            Utf8PathBuf::from_path_buf(dir.path().join("catalog.json")).expect("utf8 path");
        std::fs::write(path.as_std_path(), MINIMAL_CATALOG).expect("write catalog");
        let catalog = load_catalog(&path).expect("load catalog");
        assert_eq!(catalog.dish_count(), 1);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_catalog(Utf8Path::new("/nonexistent/catalog.json"))
            .expect_err("missing file should fail");
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
