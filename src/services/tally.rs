//! Activity tally access for the scoring engine.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::ScoringResult;
use crate::models::tally::{ActivityTally, TimeRange};

/// Source of raw activity counters for one member over one time window.
///
/// Implementations own all I/O (activity tables, browser history, chat
/// logs); the engine only ever calls `fetch`. A member with no matching
/// activity yields a zero-valued tally, not an error; `EntityNotFound` is
/// reserved for org/group/user combinations that do not resolve at all.
#[async_trait]
pub trait TallyProvider: Send + Sync {
    async fn fetch(
        &self,
        organization: &str,
        group: &str,
        user: &str,
        range: &TimeRange,
    ) -> ScoringResult<ActivityTally>;
}

type TallyKey = (String, String, String);

/// In-memory provider for tests and the demo binary.
///
/// Stores one pre-aggregated tally per (organization, group, user); the
/// time range is accepted for signature parity but ignored, since seeded
/// tallies already describe a single window.
#[derive(Default)]
pub struct InMemoryTallyProvider {
    tallies: RwLock<HashMap<TallyKey, ActivityTally>>,
}

impl InMemoryTallyProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, organization: &str, group: &str, user: &str, tally: ActivityTally) {
        let mut tallies = self.tallies.write().await;
        tallies.insert(key(organization, group, user), tally);
    }
}

#[async_trait]
impl TallyProvider for InMemoryTallyProvider {
    async fn fetch(
        &self,
        organization: &str,
        group: &str,
        user: &str,
        _range: &TimeRange,
    ) -> ScoringResult<ActivityTally> {
        let tallies = self.tallies.read().await;
        Ok(tallies
            .get(&key(organization, group, user))
            .cloned()
            .unwrap_or_default())
    }
}

fn key(organization: &str, group: &str, user: &str) -> TallyKey {
    (
        organization.to_string(),
        group.to_string(),
        user.to_string(),
    )
}
