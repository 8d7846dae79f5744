//! SECI category definitions and per-group weight configuration.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ScoringError, ScoringResult};

/// The four knowledge-conversion modes of the SECI framework, modeled as
/// scoring categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Socialization,
    Externalization,
    Combination,
    Internalization,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Socialization,
        Category::Externalization,
        Category::Combination,
        Category::Internalization,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Socialization => "socialization",
            Category::Externalization => "externalization",
            Category::Combination => "combination",
            Category::Internalization => "internalization",
        }
    }

    /// The fixed field schema for this category.
    ///
    /// Weight values are configurable per organization and group; the field
    /// set and each field's [`WeightKind`] are not.
    pub fn schema(self) -> &'static [(&'static str, WeightKind)] {
        match self {
            Category::Socialization => &[
                ("post_blog", WeightKind::Percentage),
                ("send_chat_message", WeightKind::Percentage),
                ("post_forum", WeightKind::Percentage),
                ("image_sharing", WeightKind::Direct),
                ("video_sharing", WeightKind::Direct),
                ("text_resource_sharing", WeightKind::Direct),
                ("created_topic", WeightKind::Direct),
            ],
            Category::Externalization => &[
                ("post_blog", WeightKind::Percentage),
                ("send_chat_message", WeightKind::Percentage),
                ("post_forum", WeightKind::Percentage),
                ("created_topic", WeightKind::Direct),
                ("comment", WeightKind::Percentage),
            ],
            Category::Combination => &[("created_topic", WeightKind::Direct)],
            Category::Internalization => &[
                ("used_in_app_browser", WeightKind::Direct),
                ("read_blog", WeightKind::Direct),
                ("read_forum", WeightKind::Direct),
                ("recieve_chat_message", WeightKind::Direct),
                ("download_resources", WeightKind::Direct),
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a field's tally value combines with its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightKind {
    /// AI-derived scores arrive on a 0-100 magnitude; the tally value is
    /// divided by 100 before the weight multiply.
    Percentage,
    /// Plain activity counts multiply the weight directly.
    Direct,
}

/// One field of a category's weight configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldWeight {
    pub field: String,
    pub kind: WeightKind,
    pub weight: Decimal,
}

/// Weight record for one (organization, group, category) triple.
///
/// Always carries the category's full schema in schema order; fields the
/// caller did not assign get weight zero. Exactly one record per triple is
/// expected to exist in the backing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub category: Category,
    pub fields: Vec<FieldWeight>,
}

impl CategoryWeights {
    /// Build a record from per-field weight assignments.
    ///
    /// Assignments naming a field outside the category schema are rejected,
    /// as are negative weights.
    pub fn new(
        category: Category,
        assignments: &HashMap<String, Decimal>,
    ) -> ScoringResult<Self> {
        let schema = category.schema();

        for field in assignments.keys() {
            if !schema.iter().any(|(name, _)| *name == field.as_str()) {
                return Err(ScoringError::UnknownWeightField {
                    category,
                    field: field.clone(),
                });
            }
        }

        let mut fields = Vec::with_capacity(schema.len());
        for (name, kind) in schema {
            let weight = assignments.get(*name).copied().unwrap_or(Decimal::ZERO);
            if weight < Decimal::ZERO {
                return Err(ScoringError::NegativeWeight {
                    category,
                    field: (*name).to_string(),
                });
            }
            fields.push(FieldWeight {
                field: (*name).to_string(),
                kind: *kind,
                weight,
            });
        }

        Ok(Self { category, fields })
    }

    /// A record with every weight at zero.
    pub fn zeroed(category: Category) -> Self {
        let fields = category
            .schema()
            .iter()
            .map(|(name, kind)| FieldWeight {
                field: (*name).to_string(),
                kind: *kind,
                weight: Decimal::ZERO,
            })
            .collect();
        Self { category, fields }
    }
}
