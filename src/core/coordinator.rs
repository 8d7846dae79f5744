//! Group scoring orchestration.

use std::sync::Arc;

use futures_util::future::try_join_all;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::ScoringResult;
use crate::models::leaderboard::{GroupLeaderboards, Leaderboard, MemberEngagement, ScoredMember};
use crate::models::tally::TimeRange;
use crate::models::weights::{Category, CategoryWeights};
use crate::scoring::engagement::EngagementAggregator;
use crate::scoring::ranking::{LeaderboardRanker, DEFAULT_TOP_N};
use crate::scoring::scorer::CategoryScorer;
use crate::services::tally::TallyProvider;
use crate::services::weight_store::CategoryWeightStore;

/// All four weight records for one group, loaded before any tally I/O.
struct WeightSet {
    socialization: CategoryWeights,
    externalization: CategoryWeights,
    combination: CategoryWeights,
    internalization: CategoryWeights,
}

/// Runs a whole scoring pass for a group: weights preflight, one tally fetch
/// per member, all four category scores from that single tally, one ranking
/// per category.
///
/// The single-fetch-per-member property is the point of this type: a naive
/// per-category pipeline re-fetches each member's tally once per category,
/// quadrupling provider I/O for identical results.
pub struct ScoringCoordinator {
    tallies: Arc<dyn TallyProvider>,
    weights: Arc<dyn CategoryWeightStore>,
    top_n: usize,
}

impl ScoringCoordinator {
    pub fn new(tallies: Arc<dyn TallyProvider>, weights: Arc<dyn CategoryWeightStore>) -> Self {
        Self {
            tallies,
            weights,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Override the leaderboard length (default [`DEFAULT_TOP_N`]).
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Compute all four category leaderboards for a group in one pass.
    ///
    /// Missing weight configuration for any category aborts before any tally
    /// is fetched; provider errors abort the whole computation, since
    /// dropping a member would skew every other member's percentage share.
    /// An empty member list yields four empty boards, not an error.
    pub async fn compute_group_scores(
        &self,
        organization: &str,
        group: &str,
        member_ids: &[String],
        range: &TimeRange,
    ) -> ScoringResult<GroupLeaderboards> {
        info!(
            organization = %organization,
            group = %group,
            members = member_ids.len(),
            "computing group leaderboards"
        );

        let weight_set = self.load_weights(organization, group).await?;

        if member_ids.is_empty() {
            debug!(group = %group, "group has no members, returning empty leaderboards");
        }

        // Member fetches are independent; join them in input order so the
        // merge below stays deterministic.
        let fetches = member_ids
            .iter()
            .map(|user| self.tallies.fetch(organization, group, user, range));
        let tallies = try_join_all(fetches).await?;

        let mut sec_members = Vec::with_capacity(member_ids.len());
        let mut eec_members = Vec::with_capacity(member_ids.len());
        let mut cec_members = Vec::with_capacity(member_ids.len());
        let mut iec_members = Vec::with_capacity(member_ids.len());
        let mut engagement = Vec::with_capacity(member_ids.len());

        for (user_id, tally) in member_ids.iter().zip(tallies) {
            let sec = CategoryScorer::score(&weight_set.socialization, &tally);
            let eec = CategoryScorer::score(&weight_set.externalization, &tally);
            let cec = CategoryScorer::score(&weight_set.combination, &tally);
            let iec = CategoryScorer::score(&weight_set.internalization, &tally);
            let scores = EngagementAggregator::aggregate(sec, eec, cec, iec);

            sec_members.push(scored(user_id, sec, scores.total));
            eec_members.push(scored(user_id, eec, scores.total));
            cec_members.push(scored(user_id, cec, scores.total));
            iec_members.push(scored(user_id, iec, scores.total));
            engagement.push(MemberEngagement {
                user_id: user_id.clone(),
                scores,
            });
        }

        Ok(GroupLeaderboards {
            socialization: LeaderboardRanker::rank(
                Category::Socialization,
                sec_members,
                self.top_n,
            ),
            externalization: LeaderboardRanker::rank(
                Category::Externalization,
                eec_members,
                self.top_n,
            ),
            combination: LeaderboardRanker::rank(Category::Combination, cec_members, self.top_n),
            internalization: LeaderboardRanker::rank(
                Category::Internalization,
                iec_members,
                self.top_n,
            ),
            engagement,
        })
    }

    /// Serve a single-category leaderboard request from the unified pass.
    ///
    /// All four categories are computed regardless; the tally aggregation
    /// cost is identical and per-category shortcuts are not a supported
    /// code path.
    pub async fn category_leaderboard(
        &self,
        organization: &str,
        group: &str,
        member_ids: &[String],
        range: &TimeRange,
        category: Category,
    ) -> ScoringResult<Leaderboard> {
        let boards = self
            .compute_group_scores(organization, group, member_ids, range)
            .await?;
        Ok(boards.into_category(category))
    }

    async fn load_weights(&self, organization: &str, group: &str) -> ScoringResult<WeightSet> {
        Ok(WeightSet {
            socialization: self
                .weights
                .get(organization, group, Category::Socialization)
                .await?,
            externalization: self
                .weights
                .get(organization, group, Category::Externalization)
                .await?,
            combination: self
                .weights
                .get(organization, group, Category::Combination)
                .await?,
            internalization: self
                .weights
                .get(organization, group, Category::Internalization)
                .await?,
        })
    }
}

fn scored(user_id: &str, score: Decimal, tes: Decimal) -> ScoredMember {
    ScoredMember {
        user_id: user_id.to_string(),
        score,
        tes: Some(tes),
    }
}
