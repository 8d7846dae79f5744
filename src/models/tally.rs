//! Raw activity tallies and the scoring time window.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ScoringError, ScoringResult};

/// Closed time window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> ScoringResult<Self> {
        if end < start {
            return Err(ScoringError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Per-user activity counters for one time window.
///
/// Values are either plain counts (forum posts, downloads) or AI scores
/// pre-aggregated upstream; both arrive as decimals. Fields absent from the
/// map read as zero, so a member with no activity scores as all-zero rather
/// than erroring. Constructed fresh per query and never persisted here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityTally {
    values: HashMap<String, Decimal>,
}

impl ActivityTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: Decimal) -> Self {
        self.values.insert(field.to_string(), value);
        self
    }

    pub fn get(&self, field: &str) -> Decimal {
        self.values.get(field).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
