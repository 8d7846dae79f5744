//! Shared data models spanning the engine layers.

pub mod leaderboard;
pub mod tally;
pub mod weights;

pub use leaderboard::{
    EngagementScore, GroupLeaderboards, Leaderboard, LeaderboardEntry, MemberEngagement,
    ScoredMember,
};
pub use tally::{ActivityTally, TimeRange};
pub use weights::{Category, CategoryWeights, FieldWeight, WeightKind};
