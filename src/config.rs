//! Environment-backed configuration helpers.

use std::env;

use crate::scoring::ranking::DEFAULT_TOP_N;

/// Deployment environment name, defaulting to `sandbox`.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Leaderboard length override, falling back to the engine default.
pub fn leaderboard_top_n() -> usize {
    env::var("LEADERBOARD_TOP_N")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TOP_N)
}
