//! Unit coverage for the contextual scoring rules.

use craverank_core::{
    Context, Dish, Mood, PriceTier, Scorer, Venue, VenueScorer, WeatherCondition, WeatherReading,
};
use rstest::rstest;

use crate::CraveScorer;

fn context(mood: Mood, condition: WeatherCondition, temperature: f32) -> Context {
    Context::new(mood, WeatherReading::new(condition, temperature))
}

fn chocolate_cake() -> Dish {
    Dish::new("d1", "Chocolate Lava Cake", "Dessert", 250)
        .expect("valid dish")
        .with_description("rich chocolate cake")
}

fn spicy_main() -> Dish {
    Dish::new("d2", "Schezwan Noodles", "Main Course", 320)
        .expect("valid dish")
        .spicy()
        .popular()
        .with_description("house special noodles")
}

#[test]
fn sad_mood_saturates_on_comfort_dessert() {
    // base 50 + dessert 25 + not-spicy 20 + "chocolate" 20 = 115, clamped.
    let ctx = context(Mood::Sad, WeatherCondition::Cloudy, 22.0);
    assert_eq!(CraveScorer.score(&chocolate_cake(), &ctx), 100);
}

#[test]
fn hungry_mood_saturates_on_popular_main_in_rain() {
    // base 50 + main 30 + price 20 + popular 15 + rainy-spicy 15 = 130, clamped.
    let ctx = context(Mood::Hungry, WeatherCondition::Rainy, 20.0);
    assert_eq!(CraveScorer.score(&spicy_main(), &ctx), 100);
}

#[test]
fn neutral_mood_in_heat_penalises_spice() {
    // base 50 + popular 20 - heat penalty 15 = 55.
    let ctx = context(Mood::Neutral, WeatherCondition::Sunny, 35.0);
    assert_eq!(CraveScorer.score(&spicy_main(), &ctx), 55);
}

#[test]
fn scoring_is_deterministic() {
    let ctx = context(Mood::Stressed, WeatherCondition::Snowy, 2.0);
    let dish = spicy_main();
    assert_eq!(CraveScorer.score(&dish, &ctx), CraveScorer.score(&dish, &ctx));
}

#[rstest]
#[case(Mood::Happy)]
#[case(Mood::Sad)]
#[case(Mood::Stressed)]
#[case(Mood::Relaxed)]
#[case(Mood::Hungry)]
#[case(Mood::Neutral)]
fn scores_stay_in_range_for_every_context(#[case] mood: Mood) {
    let conditions = [
        WeatherCondition::Sunny,
        WeatherCondition::Rainy,
        WeatherCondition::Cloudy,
        WeatherCondition::Snowy,
        WeatherCondition::Stormy,
        WeatherCondition::Unknown,
    ];
    let everything = Dish::new("d3", "Everything Platter", "Comfort Hot Soup Salad Main Dessert", 400)
        .expect("valid dish")
        .vegetarian()
        .popular()
        .with_rating(5.0)
        .with_description("fresh hot cold chocolate cheese salad");
    let plain = Dish::new("d4", "Plain Bread", "Bread", 40).expect("valid dish");
    for condition in conditions {
        for temperature in [-10.0, 5.0, 14.9, 15.0, 22.0, 30.0, 30.1, 45.0] {
            let ctx = context(mood, condition, temperature);
            for dish in [&everything, &plain] {
                let score = CraveScorer.score(dish, &ctx);
                assert!(score <= 100, "score {score} out of range for {mood}/{condition}");
            }
        }
    }
}

#[test]
fn all_bonus_dish_clamps_to_exactly_100() {
    let dish = Dish::new("d5", "Everything Bowl", "Dessert Main Comfort Soup", 500)
        .expect("valid dish")
        .popular()
        .with_description("chocolate cheese");
    let ctx = context(Mood::Sad, WeatherCondition::Rainy, 22.0);
    assert_eq!(CraveScorer.score(&dish, &ctx), 100);
}

#[rstest]
#[case(WeatherCondition::Rainy, 15)]
#[case(WeatherCondition::Snowy, 20)]
#[case(WeatherCondition::Stormy, 0)]
#[case(WeatherCondition::Unknown, 0)]
fn weather_bonuses_apply_to_spicy_dishes(
    #[case] condition: WeatherCondition,
    #[case] expected_delta: u8,
) {
    let dish = Dish::new("d6", "Chilli Fry", "Starter", 180)
        .expect("valid dish")
        .spicy();
    // Stressed gives spicy +25, so the weather delta is the only variable.
    let baseline = CraveScorer.score(&dish, &context(Mood::Stressed, WeatherCondition::Unknown, 22.0));
    let scored = CraveScorer.score(&dish, &context(Mood::Stressed, condition, 22.0));
    assert_eq!(scored - baseline, expected_delta);
}

#[rstest]
#[case(14.9, 15)]
#[case(15.0, 0)]
#[case(22.0, 0)]
#[case(30.0, 0)]
fn comfortable_band_leaves_spice_alone(#[case] temperature: f32, #[case] expected_delta: u8) {
    let dish = Dish::new("d7", "Vindaloo", "Main Course", 260)
        .expect("valid dish")
        .spicy();
    let baseline = CraveScorer.score(&dish, &context(Mood::Sad, WeatherCondition::Unknown, 22.0));
    let scored = CraveScorer.score(&dish, &context(Mood::Sad, WeatherCondition::Unknown, temperature));
    assert_eq!(scored - baseline, expected_delta);
}

#[test]
fn hot_weather_subtracts_from_spicy_dishes() {
    let dish = Dish::new("d8", "Phall Curry", "Starter", 280)
        .expect("valid dish")
        .spicy();
    let mild = CraveScorer.score(&dish, &context(Mood::Neutral, WeatherCondition::Unknown, 22.0));
    let hot = CraveScorer.score(&dish, &context(Mood::Neutral, WeatherCondition::Unknown, 35.0));
    assert_eq!(mild - hot, 15);
}

#[test]
fn substring_matches_ignore_case() {
    let dish = Dish::new("d9", "Brownie", "DESSERT", 150)
        .expect("valid dish")
        .with_description("Warm CHOCOLATE brownie");
    let ctx = context(Mood::Sad, WeatherCondition::Unknown, 22.0);
    // base 50 + dessert 25 + not-spicy 20 + chocolate 20 = 115, clamped.
    assert_eq!(CraveScorer.score(&dish, &ctx), 100);
}

#[rstest]
#[case(Mood::Happy, 35)]
#[case(Mood::Sad, 0)]
#[case(Mood::Stressed, 15)]
#[case(Mood::Neutral, 35)]
fn venue_bonus_follows_mood_rules(#[case] mood: Mood, #[case] expected: i32) {
    // Premium, outdoor seating, rating 4.6, 1500 reviews; no comfort cuisines.
    let venue = Venue::new("rest1", "Skyline Terrace", PriceTier::Premium, 4.6)
        .expect("valid venue")
        .with_cuisines(["Modern European"])
        .with_features(["Outdoor Seating"])
        .with_reviews(1500);
    let ctx = context(mood, WeatherCondition::Sunny, 25.0);
    assert_eq!(CraveScorer.venue_bonus(&venue, &ctx), expected);
}

#[rstest]
#[case("Italian", Mood::Sad, 20)]
#[case("American", Mood::Sad, 15)]
#[case("Japanese", Mood::Stressed, 20)]
#[case("Mediterranean", Mood::Relaxed, 20)]
#[case("North Indian", Mood::Hungry, 20)]
#[case("Chinese", Mood::Hungry, 15)]
fn venue_bonus_rewards_mood_matched_cuisines(
    #[case] cuisine: &str,
    #[case] mood: Mood,
    #[case] expected: i32,
) {
    // Modest venue so only the cuisine rule can fire.
    let venue = Venue::new("rest2", "Corner Kitchen", PriceTier::Budget, 3.9)
        .expect("valid venue")
        .with_cuisines([cuisine]);
    let ctx = context(mood, WeatherCondition::Sunny, 25.0);
    assert_eq!(CraveScorer.venue_bonus(&venue, &ctx), expected);
}
