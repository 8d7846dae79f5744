//! Unit tests for leaderboard ranking

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use seciboard::models::{Category, ScoredMember};
use seciboard::scoring::{LeaderboardRanker, DEFAULT_TOP_N};

fn member(user_id: &str, score: Decimal) -> ScoredMember {
    ScoredMember {
        user_id: user_id.to_string(),
        score,
        tes: None,
    }
}

#[test]
fn ranks_descending_by_percentage_share() {
    let board = LeaderboardRanker::rank(
        Category::Socialization,
        vec![member("a", dec!(0.25)), member("b", dec!(0.75))],
        DEFAULT_TOP_N,
    );

    assert_eq!(board.category, Category::Socialization);
    assert_eq!(board.entries.len(), 2);
    assert_eq!(board.entries[0].user_id, "b");
    assert_eq!(board.entries[0].percentage, dec!(75));
    assert_eq!(board.entries[1].user_id, "a");
    assert_eq!(board.entries[1].percentage, dec!(25));
}

#[test]
fn equal_percentages_order_by_ascending_user_id() {
    let board = LeaderboardRanker::rank(
        Category::Combination,
        vec![
            member("zoe", dec!(1)),
            member("amy", dec!(1)),
            member("mel", dec!(2)),
        ],
        DEFAULT_TOP_N,
    );

    let order: Vec<&str> = board.entries.iter().map(|e| e.user_id.as_str()).collect();
    assert_eq!(order, vec!["mel", "amy", "zoe"]);
}

#[test]
fn truncates_to_top_n() {
    let members = (0..8)
        .map(|i| member(&format!("user-{i}"), Decimal::from(i + 1)))
        .collect();
    let board = LeaderboardRanker::rank(Category::Internalization, members, 3);

    assert_eq!(board.entries.len(), 3);
    assert_eq!(board.entries[0].user_id, "user-7");
}

#[test]
fn empty_member_list_yields_empty_board() {
    let board = LeaderboardRanker::rank(Category::Externalization, Vec::new(), DEFAULT_TOP_N);
    assert!(board.entries.is_empty());
}

#[test]
fn zero_score_members_appear_at_zero_percent() {
    let board = LeaderboardRanker::rank(
        Category::Socialization,
        vec![member("idle", Decimal::ZERO), member("busy", dec!(4))],
        DEFAULT_TOP_N,
    );

    assert_eq!(board.entries.len(), 2);
    assert_eq!(board.entries[1].user_id, "idle");
    assert_eq!(board.entries[1].percentage, Decimal::ZERO);
}

#[test]
fn untruncated_percentages_sum_to_one_hundred() {
    let entries = LeaderboardRanker::percentages(vec![
        member("a", dec!(10)),
        member("b", dec!(30)),
        member("c", dec!(60)),
    ]);

    let sum: Decimal = entries.iter().map(|e| e.percentage).sum();
    assert_eq!(sum, dec!(100));
}

#[test]
fn zero_total_reports_zero_for_everyone() {
    let entries = LeaderboardRanker::percentages(vec![
        member("a", Decimal::ZERO),
        member("b", Decimal::ZERO),
    ]);

    for entry in &entries {
        assert_eq!(entry.percentage, Decimal::ZERO);
    }
}

#[test]
fn percentages_preserve_input_order_and_tes() {
    let mut busy = member("busy", dec!(1));
    busy.tes = Some(dec!(2.5));
    let entries = LeaderboardRanker::percentages(vec![busy, member("idle", dec!(3))]);

    assert_eq!(entries[0].user_id, "busy");
    assert_eq!(entries[0].tes, Some(dec!(2.5)));
    assert_eq!(entries[1].user_id, "idle");
    assert_eq!(entries[1].tes, None);
}
