//! Engagement score and leaderboard output models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::weights::Category;

/// One member's four category scores plus their total engagement score.
///
/// All-zero is a valid, unweighted state; a member with no activity in the
/// window carries a TES of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementScore {
    pub socialization: Decimal,
    pub externalization: Decimal,
    pub combination: Decimal,
    pub internalization: Decimal,
    /// TES: sum of the four category scores.
    pub total: Decimal,
}

impl EngagementScore {
    pub fn get(&self, category: Category) -> Decimal {
        match category {
            Category::Socialization => self.socialization,
            Category::Externalization => self.externalization,
            Category::Combination => self.combination,
            Category::Internalization => self.internalization,
        }
    }
}

/// Ranker input: one member's score in a single category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMember {
    pub user_id: String,
    pub score: Decimal,
    pub tes: Option<Decimal>,
}

/// One ranked row of a category leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub score: Decimal,
    /// Share of the category's group-wide total, 0 when that total is 0.
    pub percentage: Decimal,
    pub tes: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub category: Category,
    pub entries: Vec<LeaderboardEntry>,
}

/// One member's engagement breakdown alongside the ranked boards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberEngagement {
    pub user_id: String,
    pub scores: EngagementScore,
}

/// Result of one scoring pass over a group: a leaderboard per category plus
/// each member's engagement breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupLeaderboards {
    pub socialization: Leaderboard,
    pub externalization: Leaderboard,
    pub combination: Leaderboard,
    pub internalization: Leaderboard,
    pub engagement: Vec<MemberEngagement>,
}

impl GroupLeaderboards {
    pub fn get(&self, category: Category) -> &Leaderboard {
        match category {
            Category::Socialization => &self.socialization,
            Category::Externalization => &self.externalization,
            Category::Combination => &self.combination,
            Category::Internalization => &self.internalization,
        }
    }

    pub fn into_category(self, category: Category) -> Leaderboard {
        match category {
            Category::Socialization => self.socialization,
            Category::Externalization => self.externalization,
            Category::Combination => self.combination,
            Category::Internalization => self.internalization,
        }
    }

    /// True when the group had no members to score. Distinct from a group
    /// whose members all scored zero, which still yields populated boards.
    pub fn is_empty(&self) -> bool {
        self.engagement.is_empty()
    }
}
