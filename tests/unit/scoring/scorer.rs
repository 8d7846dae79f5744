//! Unit tests for the category scorer

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use seciboard::models::{ActivityTally, Category, CategoryWeights};
use seciboard::scoring::CategoryScorer;

fn weights(category: Category, pairs: &[(&str, Decimal)]) -> CategoryWeights {
    let map: HashMap<String, Decimal> = pairs.iter().map(|(f, w)| (f.to_string(), *w)).collect();
    CategoryWeights::new(category, &map).expect("valid weights")
}

#[test]
fn percentage_fields_renormalize_ai_scores() {
    // AI scores arrive on a 0-100 magnitude and are divided by 100 first
    let w = weights(
        Category::Socialization,
        &[("post_blog", dec!(0.5)), ("post_forum", dec!(0.25))],
    );
    let tally = ActivityTally::new()
        .with("post_blog", dec!(40))
        .with("post_forum", dec!(20));

    assert_eq!(CategoryScorer::score(&w, &tally), dec!(0.25));
}

#[test]
fn direct_fields_multiply_counts_as_is() {
    let w = weights(Category::Combination, &[("created_topic", dec!(0.025))]);
    let tally = ActivityTally::new().with("created_topic", dec!(10));

    assert_eq!(CategoryScorer::score(&w, &tally), dec!(0.25));
}

#[test]
fn mixed_kinds_sum_across_the_schema() {
    let w = weights(
        Category::Socialization,
        &[
            ("post_blog", dec!(0.5)),
            ("image_sharing", dec!(0.1)),
            ("created_topic", dec!(0.05)),
        ],
    );
    let tally = ActivityTally::new()
        .with("post_blog", dec!(80))
        .with("image_sharing", dec!(4))
        .with("created_topic", dec!(2));

    // 0.5 * 80/100 + 0.1 * 4 + 0.05 * 2
    assert_eq!(CategoryScorer::score(&w, &tally), dec!(0.9));
}

#[test]
fn absent_tally_fields_contribute_nothing() {
    let w = weights(
        Category::Internalization,
        &[("read_blog", dec!(0.02)), ("read_forum", dec!(0.03))],
    );
    let tally = ActivityTally::new().with("read_blog", dec!(5));

    assert_eq!(CategoryScorer::score(&w, &tally), dec!(0.1));
}

#[test]
fn empty_tally_scores_zero() {
    let w = weights(Category::Externalization, &[("comment", dec!(0.2))]);
    assert_eq!(
        CategoryScorer::score(&w, &ActivityTally::new()),
        Decimal::ZERO
    );
}

#[test]
fn scoring_is_deterministic() {
    let w = weights(
        Category::Externalization,
        &[("post_blog", dec!(0.4)), ("comment", dec!(0.2))],
    );
    let tally = ActivityTally::new()
        .with("post_blog", dec!(33))
        .with("comment", dec!(77));

    let first = CategoryScorer::score(&w, &tally);
    let second = CategoryScorer::score(&w, &tally);
    assert_eq!(first, second);
    assert!(first >= Decimal::ZERO);
}

#[test]
fn fractional_ai_scores_keep_precision() {
    let w = weights(Category::Externalization, &[("comment", dec!(0.2))]);
    let tally = ActivityTally::new().with("comment", dec!(12.345));

    // 0.2 * 12.345 / 100
    assert_eq!(CategoryScorer::score(&w, &tally), dec!(0.024690));
}
