//! Weight configuration access.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::error::{ScoringError, ScoringResult};
use crate::models::weights::{Category, CategoryWeights};

/// Storage boundary for per-(organization, group, category) weight records.
///
/// Absence of a record is a configuration error, never a silent default; the
/// scoring path must not invent zero weights.
#[async_trait]
pub trait CategoryWeightStore: Send + Sync {
    async fn get(
        &self,
        organization: &str,
        group: &str,
        category: Category,
    ) -> ScoringResult<CategoryWeights>;

    /// Overwrite `category` weights for every group under `organization` in
    /// one update. Returns the number of groups updated.
    async fn set_all(
        &self,
        organization: &str,
        category: Category,
        assignments: &HashMap<String, Decimal>,
    ) -> ScoringResult<usize>;
}

type GroupKey = (String, String);

/// In-memory store for tests and the demo binary.
#[derive(Default)]
pub struct InMemoryWeightStore {
    records: RwLock<HashMap<GroupKey, HashMap<Category, CategoryWeights>>>,
}

impl InMemoryWeightStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one group's weight record for a category.
    pub async fn insert(
        &self,
        organization: &str,
        group: &str,
        category: Category,
        assignments: &HashMap<String, Decimal>,
    ) -> ScoringResult<()> {
        let weights = CategoryWeights::new(category, assignments)?;
        let mut records = self.records.write().await;
        records
            .entry((organization.to_string(), group.to_string()))
            .or_default()
            .insert(category, weights);
        Ok(())
    }
}

#[async_trait]
impl CategoryWeightStore for InMemoryWeightStore {
    async fn get(
        &self,
        organization: &str,
        group: &str,
        category: Category,
    ) -> ScoringResult<CategoryWeights> {
        let records = self.records.read().await;
        records
            .get(&(organization.to_string(), group.to_string()))
            .and_then(|by_category| by_category.get(&category))
            .cloned()
            .ok_or_else(|| ScoringError::ConfigurationMissing {
                organization: organization.to_string(),
                group: group.to_string(),
                category,
            })
    }

    async fn set_all(
        &self,
        organization: &str,
        category: Category,
        assignments: &HashMap<String, Decimal>,
    ) -> ScoringResult<usize> {
        let weights = CategoryWeights::new(category, assignments)?;
        let mut records = self.records.write().await;
        let mut updated = 0;
        for ((org, _group), by_category) in records.iter_mut() {
            if org == organization {
                by_category.insert(category, weights.clone());
                updated += 1;
            }
        }
        Ok(updated)
    }
}
