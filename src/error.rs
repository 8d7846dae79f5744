//! Error taxonomy for the scoring engine.

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::weights::Category;

pub type ScoringResult<T> = Result<T, ScoringError>;

/// Which identity failed to resolve in an [`ScoringError::EntityNotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Organization,
    Group,
    User,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Organization => "organization",
            EntityKind::Group => "group",
            EntityKind::User => "user",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ScoringError {
    /// No weight record exists for the (organization, group, category)
    /// triple. Scoring must not proceed with implicit zero weights; that
    /// would corrupt every member's percentage share.
    #[error("no {category} weight configuration for organization {organization}, group {group}")]
    ConfigurationMissing {
        organization: String,
        group: String,
        category: Category,
    },

    #[error("{entity} not found: {id}")]
    EntityNotFound { entity: EntityKind, id: String },

    #[error("field {field} is not part of the {category} weight schema")]
    UnknownWeightField { category: Category, field: String },

    #[error("negative weight for {category} field {field}")]
    NegativeWeight { category: Category, field: String },

    #[error("invalid time range: end {end} precedes start {start}")]
    InvalidTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Opaque failure inside a provider implementation (storage, network).
    #[error("provider error: {message}")]
    Provider { message: String },
}

impl ScoringError {
    pub fn provider(message: impl Into<String>) -> Self {
        ScoringError::Provider {
            message: message.into(),
        }
    }
}
