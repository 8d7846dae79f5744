//! SECI engagement scoring and leaderboard engine.
//!
//! Computes weighted Socialization / Externalization / Combination /
//! Internalization scores from raw activity tallies and ranks group members
//! by percentage share of each category's group-wide total. Activity storage
//! and weight configuration live behind the [`services`] traits; everything
//! under [`scoring`] is pure arithmetic, and [`core::coordinator`] ties the
//! two together with a single tally fetch per member.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod scoring;
pub mod services;

pub use crate::core::coordinator::ScoringCoordinator;
pub use crate::error::{EntityKind, ScoringError, ScoringResult};
pub use crate::models::{
    ActivityTally, Category, CategoryWeights, EngagementScore, GroupLeaderboards, Leaderboard,
    LeaderboardEntry, MemberEngagement, ScoredMember, TimeRange, WeightKind,
};
pub use crate::scoring::{CategoryScorer, EngagementAggregator, LeaderboardRanker, DEFAULT_TOP_N};
pub use crate::services::{
    CategoryWeightStore, InMemoryTallyProvider, InMemoryWeightStore, TallyProvider,
};
