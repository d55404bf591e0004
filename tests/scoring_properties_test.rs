//! Property tests for the score generation invariants.

use emoscore::{generate_scores, Classification, ScoreGenerator, ScoreMap, ScoreRange};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn category_sets() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[A-Za-z][A-Za-z ]{0,15}", 0..16)
}

proptest! {
    #[test]
    fn violent_scores_always_in_high_range(categories in category_sets()) {
        let scores = generate_scores(categories, true);
        for score in scores.values() {
            prop_assert!(ScoreRange::VIOLENT.contains(*score));
        }
    }

    #[test]
    fn calm_scores_always_in_low_range(categories in category_sets()) {
        let scores = generate_scores(categories, false);
        for score in scores.values() {
            prop_assert!(ScoreRange::CALM.contains(*score));
        }
    }

    #[test]
    fn key_set_equals_input_category_set(categories in category_sets(), is_violent: bool) {
        let expected: BTreeSet<String> = categories.iter().cloned().collect();
        let scores = generate_scores(categories, is_violent);
        let keys: BTreeSet<String> = scores.keys().cloned().collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn json_round_trip_preserves_mapping(categories in category_sets(), is_violent: bool) {
        let scores = generate_scores(categories, is_violent);
        let json = serde_json::to_string(&scores).unwrap();
        let parsed: ScoreMap = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, scores);
    }

    #[test]
    fn seeded_generation_is_reproducible(
        categories in category_sets(),
        is_violent: bool,
        seed: u64,
    ) {
        let generator = ScoreGenerator::default();
        let classification = Classification::from_flag(is_violent);
        let a = generator.generate_seeded(categories.clone(), classification, seed);
        let b = generator.generate_seeded(categories, classification, seed);
        prop_assert_eq!(a, b);
    }
}

#[test]
fn attacker_categories_score_in_high_range() {
    let scores = generate_scores(["Aggression", "Hostility", "Frustration"], true);

    let keys: Vec<&str> = scores.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Aggression", "Frustration", "Hostility"]);
    for score in scores.values() {
        assert!((5.0..=10.0).contains(score));
    }
}
