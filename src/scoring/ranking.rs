//! Leaderboard ranking by percentage share.

use rust_decimal::Decimal;

use crate::models::leaderboard::{Leaderboard, LeaderboardEntry, ScoredMember};
use crate::models::weights::Category;
use crate::scoring::engagement::EngagementAggregator;

/// Leaderboard length used when callers do not override it.
pub const DEFAULT_TOP_N: usize = 5;

pub struct LeaderboardRanker;

impl LeaderboardRanker {
    /// Rank members by share of the category total, descending.
    ///
    /// Ties order by ascending user id, so repeated runs and reshuffled
    /// member lists produce identical boards. An empty member list yields an
    /// empty board, not an error.
    pub fn rank(category: Category, members: Vec<ScoredMember>, top_n: usize) -> Leaderboard {
        let mut entries = Self::percentages(members);
        entries.sort_by(|a, b| {
            b.percentage
                .cmp(&a.percentage)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        entries.truncate(top_n);
        Leaderboard { category, entries }
    }

    /// Percentage share for every member, untruncated and in input order.
    ///
    /// When the category total is positive the shares sum to 100; when it is
    /// zero every share is 0.
    pub fn percentages(members: Vec<ScoredMember>) -> Vec<LeaderboardEntry> {
        let total: Decimal = members.iter().map(|m| m.score).sum();
        members
            .into_iter()
            .map(|m| LeaderboardEntry {
                percentage: EngagementAggregator::percentage_of(m.score, total),
                user_id: m.user_id,
                score: m.score,
                tes: m.tes,
            })
            .collect()
    }
}
